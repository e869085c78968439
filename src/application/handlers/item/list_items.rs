//! ListItemsHandler - the user's inventory, filtered.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::wardrobe::{ClothingItem, ItemError, ItemFilter};
use crate::ports::ItemRepository;

#[derive(Debug, Clone)]
pub struct ListItemsQuery {
    pub owner: UserId,
    pub filter: ItemFilter,
}

pub struct ListItemsHandler {
    items: Arc<dyn ItemRepository>,
}

impl ListItemsHandler {
    pub fn new(items: Arc<dyn ItemRepository>) -> Self {
        Self { items }
    }

    pub async fn handle(&self, query: ListItemsQuery) -> Result<Vec<ClothingItem>, ItemError> {
        Ok(self.items.list(query.owner, &query.filter).await?)
    }
}
