//! UpdateItemHandler - edit or deactivate a garment.
//!
//! Deactivation is the only delete: outfits keep pointing at the row, and
//! generation stops offering the garment.

use std::sync::Arc;

use super::saved_or;
use crate::domain::foundation::{ItemId, UserId};
use crate::domain::wardrobe::{ClothingItem, ItemError, ItemUpdate};
use crate::ports::ItemRepository;

#[derive(Debug, Clone)]
pub struct UpdateItemCommand {
    pub owner: UserId,
    pub item_id: ItemId,
    pub update: ItemUpdate,
}

pub struct UpdateItemHandler {
    items: Arc<dyn ItemRepository>,
}

impl UpdateItemHandler {
    pub fn new(items: Arc<dyn ItemRepository>) -> Self {
        Self { items }
    }

    pub async fn handle(&self, cmd: UpdateItemCommand) -> Result<ClothingItem, ItemError> {
        let update = cmd.update.validate()?;
        let outcome = self.items.update(cmd.owner, cmd.item_id, &update).await?;
        let updated = saved_or(outcome, ItemError::NotFound(cmd.item_id))?;

        if update.active == Some(false) {
            tracing::info!(user_id = %cmd.owner, item_id = %cmd.item_id, "Item deactivated");
        }
        Ok(updated)
    }
}
