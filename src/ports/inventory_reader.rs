//! Inventory accessor port (read side of the wardrobe).

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::wardrobe::{ClothingItem, Style};
use async_trait::async_trait;

/// Reads a user's clothing items.
///
/// An empty inventory is not an error: callers interpret an empty list as
/// the "no inventory" signal.
#[async_trait]
pub trait InventoryReader: Send + Sync {
    /// Fetch the user's active items, optionally restricted to one style.
    ///
    /// Inactive (soft-deleted) items are never returned. Items come back with
    /// category, subcategory and color names resolved.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on query failure
    async fn fetch_items(
        &self,
        owner: UserId,
        style: Option<Style>,
    ) -> Result<Vec<ClothingItem>, DomainError>;
}
