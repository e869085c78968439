//! ReplaceOutfitItemHandler - swap the garment of one category in an outfit.

use std::sync::Arc;

use crate::domain::foundation::{ItemId, OutfitId, UserId};
use crate::domain::outfit::{Outfit, OutfitError};
use crate::domain::wardrobe::Category;
use crate::ports::{ItemReplacement, OutfitRepository};

/// Command to replace an outfit's item of `category` with `new_item`.
#[derive(Debug, Clone)]
pub struct ReplaceOutfitItemCommand {
    pub owner: UserId,
    pub outfit_id: OutfitId,
    pub category: Category,
    pub new_item: ItemId,
}

/// Handler for item replacement.
pub struct ReplaceOutfitItemHandler {
    outfits: Arc<dyn OutfitRepository>,
}

impl ReplaceOutfitItemHandler {
    pub fn new(outfits: Arc<dyn OutfitRepository>) -> Self {
        Self { outfits }
    }

    pub async fn handle(&self, cmd: ReplaceOutfitItemCommand) -> Result<Outfit, OutfitError> {
        let outcome = self
            .outfits
            .replace_item(cmd.owner, cmd.outfit_id, cmd.category, cmd.new_item)
            .await?;

        match outcome {
            ItemReplacement::Replaced(outfit) => {
                tracing::info!(
                    user_id = %cmd.owner,
                    outfit_id = %cmd.outfit_id,
                    item_id = %cmd.new_item,
                    category = %cmd.category,
                    "Outfit item replaced"
                );
                Ok(outfit)
            }
            ItemReplacement::OutfitNotFound => Err(OutfitError::not_found(cmd.outfit_id)),
            ItemReplacement::ItemNotFound => Err(OutfitError::ItemNotFound(cmd.new_item)),
            ItemReplacement::CategoryMismatch { actual } => Err(OutfitError::CategoryMismatch {
                expected: cmd.category,
                actual,
            }),
            ItemReplacement::NothingToReplace => Err(OutfitError::NothingToReplace(cmd.category)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryWardrobe;
    use crate::domain::outfit::NewOutfit;
    use crate::domain::wardrobe::{fixtures::item, Style};

    fn owner() -> UserId {
        UserId::new(1).unwrap()
    }

    async fn setup() -> (ReplaceOutfitItemHandler, Outfit) {
        let store = InMemoryWardrobe::new();
        let worn = vec![
            item(1, Category::Top, Style::Casual),
            item(2, Category::Bottom, Style::Casual),
            item(3, Category::Shoes, Style::Casual),
        ];
        store.add_items(worn.clone()).await;
        store
            .add_items([
                item(4, Category::Top, Style::Casual),
                item(5, Category::Outerwear, Style::Casual),
            ])
            .await;
        let outfit = store
            .create(&NewOutfit::from_items(owner(), None, None, &worn).unwrap())
            .await
            .unwrap();
        (ReplaceOutfitItemHandler::new(Arc::new(store)), outfit)
    }

    fn command(outfit_id: OutfitId, category: Category, new_item: i64) -> ReplaceOutfitItemCommand {
        ReplaceOutfitItemCommand {
            owner: owner(),
            outfit_id,
            category,
            new_item: ItemId::new(new_item),
        }
    }

    #[tokio::test]
    async fn swaps_item_of_same_category() {
        let (handler, outfit) = setup().await;

        let updated = handler.handle(command(outfit.id, Category::Top, 4)).await.unwrap();

        assert_eq!(
            updated.item_in(Category::Top).map(|i| i.id),
            Some(ItemId::new(4))
        );
        assert_eq!(updated.items.len(), 3);
    }

    #[tokio::test]
    async fn rejects_item_of_other_category() {
        let (handler, outfit) = setup().await;

        let result = handler.handle(command(outfit.id, Category::Bottom, 4)).await;

        assert_eq!(
            result,
            Err(OutfitError::CategoryMismatch {
                expected: Category::Bottom,
                actual: Category::Top,
            })
        );
    }

    #[tokio::test]
    async fn rejects_category_missing_from_outfit() {
        let (handler, outfit) = setup().await;

        let result = handler.handle(command(outfit.id, Category::Outerwear, 5)).await;

        assert_eq!(result, Err(OutfitError::NothingToReplace(Category::Outerwear)));
    }

    #[tokio::test]
    async fn unknown_item_and_outfit() {
        let (handler, outfit) = setup().await;

        assert_eq!(
            handler.handle(command(outfit.id, Category::Top, 99)).await,
            Err(OutfitError::ItemNotFound(ItemId::new(99)))
        );
        assert_eq!(
            handler.handle(command(OutfitId::new(42), Category::Top, 4)).await,
            Err(OutfitError::NotFound(OutfitId::new(42)))
        );
    }
}
