//! RegisterItemHandler - add a garment to the user's inventory.

use std::sync::Arc;

use super::saved_or;
use crate::domain::wardrobe::{ClothingItem, ItemError, NewClothingItem};
use crate::ports::ItemRepository;

/// Command to register a garment whose image is already stored.
#[derive(Debug, Clone)]
pub struct RegisterItemCommand {
    pub item: NewClothingItem,
}

pub struct RegisterItemHandler {
    items: Arc<dyn ItemRepository>,
}

impl RegisterItemHandler {
    pub fn new(items: Arc<dyn ItemRepository>) -> Self {
        Self { items }
    }

    pub async fn handle(&self, cmd: RegisterItemCommand) -> Result<ClothingItem, ItemError> {
        let item = cmd.item.validate()?;
        let outcome = self.items.register(&item).await?;
        let registered = saved_or(
            outcome,
            ItemError::Infrastructure("registration reported a missing item".to_string()),
        )?;

        tracing::info!(
            user_id = %registered.owner,
            item_id = %registered.id,
            category = %registered.category,
            style = %registered.style,
            "Item registered"
        );
        Ok(registered)
    }
}
