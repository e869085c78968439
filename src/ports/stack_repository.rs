//! Stack repository port.

use chrono::NaiveDate;

use crate::domain::foundation::{DomainError, StackId, UserId};
use crate::domain::stack::{NewStack, Stack};
use async_trait::async_trait;

/// Repository port for stacks.
#[async_trait]
pub trait StackRepository: Send + Sync {
    /// Delete every stack of `owner`, with their outfits and item links,
    /// in one transaction. Returns the number of stacks deleted.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure (nothing is deleted)
    async fn delete_all_for_user(&self, owner: UserId) -> Result<u64, DomainError>;

    /// Insert a stack row.
    async fn create(&self, stack: &NewStack) -> Result<Stack, DomainError>;

    /// Delete a single stack and everything hanging off it.
    async fn delete(&self, id: StackId) -> Result<(), DomainError>;

    /// All stacks of `owner`, newest start date first.
    async fn list_by_user(&self, owner: UserId) -> Result<Vec<Stack>, DomainError>;

    /// The most recent stack of `owner` whose range covers `date`.
    async fn find_active_on(
        &self,
        owner: UserId,
        date: NaiveDate,
    ) -> Result<Option<Stack>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn StackRepository) {}
    }
}
