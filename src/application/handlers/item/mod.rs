//! Item handlers: registration, inventory listing, edits and soft delete.

mod list_items;
mod register_item;
mod update_item;

pub use list_items::{ListItemsHandler, ListItemsQuery};
pub use register_item::{RegisterItemCommand, RegisterItemHandler};
pub use update_item::{UpdateItemCommand, UpdateItemHandler};

use crate::domain::wardrobe::{ClothingItem, ItemError};
use crate::ports::ItemWrite;

/// Store outcome as a handler result; `missing` is reported for `NotFound`.
fn saved_or(outcome: ItemWrite, missing: ItemError) -> Result<ClothingItem, ItemError> {
    match outcome {
        ItemWrite::Saved(item) => Ok(item),
        ItemWrite::NotFound => Err(missing),
        ItemWrite::UnknownColor(name) => Err(ItemError::UnknownColor(name)),
        ItemWrite::UnknownSubcategory(name) => Err(ItemError::UnknownSubcategory(name)),
    }
}
