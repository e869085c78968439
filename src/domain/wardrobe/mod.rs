//! Wardrobe module - clothing items and their classification.
//!
//! The outfit engine reads category, style, colors and status; the item
//! lifecycle (registration, edits, soft delete) writes them. Image upload
//! happens elsewhere and only hands over a URL.

mod category;
mod color;
mod errors;
mod item;
mod registration;
mod style;

pub use category::Category;
pub use color::{compatible_colors, ColorRef, KNOWN_COLORS};
pub use errors::ItemError;
pub use item::ClothingItem;
pub use registration::{ItemFilter, ItemUpdate, NewClothingItem, MAX_NAME_LEN};
pub use style::Style;

#[cfg(test)]
pub(crate) use item::fixtures;
