//! Item repository port - the write side of the inventory.

use crate::domain::foundation::{DomainError, ItemId, UserId};
use crate::domain::wardrobe::{ClothingItem, ItemFilter, ItemUpdate, NewClothingItem};
use async_trait::async_trait;

/// Outcome of an item write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemWrite {
    /// Written; carries the item re-read with catalogue names joined in.
    Saved(ClothingItem),
    /// Item missing or owned by someone else.
    NotFound,
    /// The named color is not in the palette.
    UnknownColor(String),
    /// The named subcategory does not belong to the item's category.
    UnknownSubcategory(String),
}

/// Repository port for registering and maintaining clothing items.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Register a new, active item.
    ///
    /// Catalogue names are resolved in the same transaction as the insert;
    /// an unknown name writes nothing.
    async fn register(&self, item: &NewClothingItem) -> Result<ItemWrite, DomainError>;

    /// Items of `owner` matching `filter`, newest first.
    async fn list(
        &self,
        owner: UserId,
        filter: &ItemFilter,
    ) -> Result<Vec<ClothingItem>, DomainError>;

    /// Find an item owned by `owner`, active or not.
    async fn find_by_id(
        &self,
        owner: UserId,
        id: ItemId,
    ) -> Result<Option<ClothingItem>, DomainError>;

    /// Apply a partial update. Deactivation is an update with `active = false`.
    async fn update(
        &self,
        owner: UserId,
        id: ItemId,
        update: &ItemUpdate,
    ) -> Result<ItemWrite, DomainError>;
}
