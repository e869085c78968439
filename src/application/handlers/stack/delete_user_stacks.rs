//! DeleteUserStacksHandler - explicit cascade delete of a user's stacks.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::stack::StackError;
use crate::ports::StackRepository;

/// Command to delete every stack of a user, with their outfits.
#[derive(Debug, Clone)]
pub struct DeleteUserStacksCommand {
    pub owner: UserId,
}

pub struct DeleteUserStacksHandler {
    stacks: Arc<dyn StackRepository>,
}

impl DeleteUserStacksHandler {
    pub fn new(stacks: Arc<dyn StackRepository>) -> Self {
        Self { stacks }
    }

    /// Returns the number of deleted stacks.
    pub async fn handle(&self, cmd: DeleteUserStacksCommand) -> Result<u64, StackError> {
        let deleted = self.stacks.delete_all_for_user(cmd.owner).await?;
        tracing::info!(user_id = %cmd.owner, deleted, "Stacks deleted");
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryWardrobe;
    use crate::domain::stack::NewStack;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn deletes_only_the_users_stacks() {
        let store = InMemoryWardrobe::new();
        let start = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let alice = UserId::new(1).unwrap();
        let bob = UserId::new(2).unwrap();
        for owner in [alice, alice, bob] {
            store
                .create(&NewStack::spanning(owner, start, 7, None).unwrap())
                .await
                .unwrap();
        }

        let handler = DeleteUserStacksHandler::new(Arc::new(store.clone()));
        let deleted = handler
            .handle(DeleteUserStacksCommand { owner: alice })
            .await
            .unwrap();

        assert_eq!(deleted, 2);
        assert_eq!(store.stack_count(alice).await, 0);
        assert_eq!(store.stack_count(bob).await, 1);
    }
}
