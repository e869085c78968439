//! ListUserStacksHandler - a user's stacks with their outfits.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::outfit::Outfit;
use crate::domain::stack::{Stack, StackError};
use crate::ports::{OutfitRepository, StackRepository};

/// Query for all stacks of a user.
#[derive(Debug, Clone)]
pub struct ListUserStacksQuery {
    pub owner: UserId,
}

/// A stack and its outfits ordered by assigned date.
#[derive(Debug, Clone)]
pub struct StackWithOutfits {
    pub stack: Stack,
    pub outfits: Vec<Outfit>,
}

pub struct ListUserStacksHandler {
    stacks: Arc<dyn StackRepository>,
    outfits: Arc<dyn OutfitRepository>,
}

impl ListUserStacksHandler {
    pub fn new(stacks: Arc<dyn StackRepository>, outfits: Arc<dyn OutfitRepository>) -> Self {
        Self { stacks, outfits }
    }

    /// Newest stack first.
    pub async fn handle(&self, query: ListUserStacksQuery) -> Result<Vec<StackWithOutfits>, StackError> {
        let stacks = self.stacks.list_by_user(query.owner).await?;

        let mut views = Vec::with_capacity(stacks.len());
        for stack in stacks {
            let outfits = self.outfits.find_by_stack(stack.id).await?;
            views.push(StackWithOutfits { stack, outfits });
        }
        Ok(views)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryWardrobe;
    use crate::domain::outfit::NewOutfit;
    use crate::domain::stack::NewStack;
    use crate::domain::wardrobe::{fixtures::item, Category, Style};
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, d).unwrap()
    }

    #[tokio::test]
    async fn lists_newest_first_with_dated_outfits() {
        let store = InMemoryWardrobe::new();
        let owner = UserId::new(1).unwrap();
        let items = vec![
            item(1, Category::Top, Style::Casual),
            item(2, Category::Bottom, Style::Casual),
            item(3, Category::Shoes, Style::Casual),
        ];
        store.add_items(items.clone()).await;

        let older = StackRepository::create(&store, &NewStack::spanning(owner, date(1), 3, None).unwrap())
            .await
            .unwrap();
        let newer = StackRepository::create(&store, &NewStack::spanning(owner, date(10), 3, None).unwrap())
            .await
            .unwrap();
        for day in [12, 10] {
            OutfitRepository::create(
                &store,
                &NewOutfit::from_items(owner, Some(newer.id), Some(date(day)), &items).unwrap(),
            )
            .await
            .unwrap();
        }

        let handler = ListUserStacksHandler::new(Arc::new(store.clone()), Arc::new(store));
        let views = handler.handle(ListUserStacksQuery { owner }).await.unwrap();

        assert_eq!(views.len(), 2);
        assert_eq!(views[0].stack.id, newer.id);
        assert_eq!(views[1].stack.id, older.id);
        let dates: Vec<_> = views[0].outfits.iter().filter_map(|o| o.assigned_date).collect();
        assert_eq!(dates, vec![date(10), date(12)]);
        assert!(views[1].outfits.is_empty());
    }
}
