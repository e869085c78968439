//! CreateStackHandler - replace the user's stack with a freshly generated one.

use chrono::NaiveDate;
use std::sync::Arc;

use crate::application::handlers::outfit::{
    GenerateOutfitSetCommand, GenerateOutfitSetHandler, GenerateOutfitSetResult,
};
use crate::domain::foundation::{StackId, UserId};
use crate::domain::outfit::GenerationError;
use crate::domain::stack::{NewStack, Stack, StackRequest};
use crate::ports::StackRepository;

/// Command to create a stack starting today.
#[derive(Debug, Clone)]
pub struct CreateStackCommand {
    pub owner: UserId,
    pub request: StackRequest,
    /// First day of the stack.
    pub today: NaiveDate,
}

/// Result of successful stack creation.
#[derive(Debug, Clone)]
pub struct CreateStackResult {
    pub stack: Stack,
    pub generation: GenerateOutfitSetResult,
    /// Echo of the request flag.
    pub allow_repeats: bool,
    /// Stacks removed before this one was created.
    pub replaced_stacks: u64,
}

/// Handler for creating stacks.
pub struct CreateStackHandler {
    stacks: Arc<dyn StackRepository>,
    generator: Arc<GenerateOutfitSetHandler>,
}

impl CreateStackHandler {
    pub fn new(stacks: Arc<dyn StackRepository>, generator: Arc<GenerateOutfitSetHandler>) -> Self {
        Self { stacks, generator }
    }

    pub async fn handle(&self, cmd: CreateStackCommand) -> Result<CreateStackResult, GenerationError> {
        // 1. Fail fast, before anything is written
        cmd.request.validate()?;
        let new_stack = NewStack::spanning(cmd.owner, cmd.today, cmd.request.days, cmd.request.style)?;

        // 2. A user keeps at most one stack
        let replaced_stacks = self.stacks.delete_all_for_user(cmd.owner).await?;

        // 3. Create the stack record
        let stack = self.stacks.create(&new_stack).await?;

        // 4. Dress it
        let generated = self
            .generator
            .handle(GenerateOutfitSetCommand {
                owner: cmd.owner,
                stack_id: stack.id,
                requested_count: cmd.request.days,
                style: cmd.request.style,
                policy: cmd.request.policy,
                start_date: stack.start_date,
            })
            .await;

        let generation = match generated {
            Ok(generation) => generation,
            Err(err) => {
                // 5. An undressed stack is removed again
                self.discard(stack.id).await;
                tracing::warn!(
                    user_id = %cmd.owner,
                    days = cmd.request.days,
                    style = ?cmd.request.style,
                    code = %err.code(),
                    "Stack creation failed: {}",
                    err
                );
                return Err(err);
            }
        };

        tracing::info!(
            user_id = %cmd.owner,
            stack_id = %stack.id,
            outfits = generation.total,
            requested = cmd.request.days,
            replaced_stacks,
            "Stack created"
        );

        Ok(CreateStackResult {
            stack,
            generation,
            allow_repeats: cmd.request.allow_repeats,
            replaced_stacks,
        })
    }

    async fn discard(&self, stack_id: StackId) {
        if let Err(err) = self.stacks.delete(stack_id).await {
            tracing::error!(stack_id = %stack_id, "Failed to discard empty stack: {}", err);
        }
    }
}
