//! Outfit repository port.
//!
//! Every write that touches an outfit and its item links is atomic: either the
//! outfit row and all its `outfit_prenda` links exist afterwards, or none do.

use chrono::NaiveDate;

use crate::domain::foundation::{DomainError, ItemId, OutfitId, StackId, UserId};
use crate::domain::outfit::{NewOutfit, Outfit, OutfitFilter};
use crate::domain::wardrobe::Category;
use async_trait::async_trait;

/// Outcome of an item replacement attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemReplacement {
    /// The link was swapped; carries the re-read outfit.
    Replaced(Outfit),
    /// Outfit missing or owned by someone else.
    OutfitNotFound,
    /// New item missing or owned by someone else.
    ItemNotFound,
    /// New item is of a different category.
    CategoryMismatch { actual: Category },
    /// The outfit has no item in the category.
    NothingToReplace,
}

/// Repository port for outfits.
#[async_trait]
pub trait OutfitRepository: Send + Sync {
    /// Insert an outfit with its item links in one transaction.
    ///
    /// When `outfit.stack_id` is `None` the owner's previous stack-less
    /// outfit (and its links) is deleted in the same transaction, so a user
    /// never holds more than one unique outfit.
    ///
    /// Returns the persisted outfit re-read with joined item details.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure (nothing is written)
    async fn create(&self, outfit: &NewOutfit) -> Result<Outfit, DomainError>;

    /// Find an outfit owned by `owner`.
    async fn find_by_id(&self, owner: UserId, id: OutfitId)
        -> Result<Option<Outfit>, DomainError>;

    /// All outfits of a stack, ordered by assigned date.
    async fn find_by_stack(&self, stack_id: StackId) -> Result<Vec<Outfit>, DomainError>;

    /// The outfit of a stack assigned to `date`.
    async fn find_by_stack_and_date(
        &self,
        stack_id: StackId,
        date: NaiveDate,
    ) -> Result<Option<Outfit>, DomainError>;

    /// Set the favorite flag; `None` when the outfit isn't the owner's.
    async fn set_favorite(
        &self,
        owner: UserId,
        id: OutfitId,
        favorite: bool,
    ) -> Result<Option<Outfit>, DomainError>;

    /// Outfits of `owner` matching `filter`, in listing order: the unique
    /// outfit first, then latest assigned date, then newest id.
    async fn list_filtered(
        &self,
        owner: UserId,
        filter: &OutfitFilter,
    ) -> Result<Vec<Outfit>, DomainError>;

    /// Swap the outfit's item of `category` for `new_item`, transactionally.
    async fn replace_item(
        &self,
        owner: UserId,
        id: OutfitId,
        category: Category,
        new_item: ItemId,
    ) -> Result<ItemReplacement, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outfit_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn OutfitRepository) {}
    }
}
