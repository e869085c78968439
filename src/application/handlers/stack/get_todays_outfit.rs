//! GetTodaysOutfitHandler - the outfit assigned to today, creating a default
//! stack when none covers today.

use chrono::NaiveDate;
use std::sync::Arc;

use super::{CreateStackCommand, CreateStackHandler};
use crate::domain::foundation::UserId;
use crate::domain::outfit::{CategorySelectionPolicy, Outfit};
use crate::domain::stack::{Stack, StackError, StackRequest};
use crate::domain::wardrobe::Style;
use crate::ports::{OutfitRepository, StackRepository};

/// Days covered by the stack created on demand.
pub const DEFAULT_STACK_DAYS: u32 = 7;

#[derive(Debug, Clone)]
pub struct GetTodaysOutfitQuery {
    pub owner: UserId,
    pub today: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct TodaysOutfit {
    pub date: NaiveDate,
    pub stack: Stack,
    pub outfit: Outfit,
}

pub struct GetTodaysOutfitHandler {
    stacks: Arc<dyn StackRepository>,
    outfits: Arc<dyn OutfitRepository>,
    create_stack: Arc<CreateStackHandler>,
    default_days: u32,
}

impl GetTodaysOutfitHandler {
    pub fn new(
        stacks: Arc<dyn StackRepository>,
        outfits: Arc<dyn OutfitRepository>,
        create_stack: Arc<CreateStackHandler>,
    ) -> Self {
        Self {
            stacks,
            outfits,
            create_stack,
            default_days: DEFAULT_STACK_DAYS,
        }
    }

    pub fn with_default_days(mut self, days: u32) -> Self {
        self.default_days = days;
        self
    }

    pub async fn handle(&self, query: GetTodaysOutfitQuery) -> Result<TodaysOutfit, StackError> {
        // 1. Stack covering today, or a default one created once
        let stack = match self.stacks.find_active_on(query.owner, query.today).await? {
            Some(stack) => stack,
            None => self.create_default_stack(&query).await?,
        };

        // 2. Outfit assigned to today
        let outfit = self
            .outfits
            .find_by_stack_and_date(stack.id, query.today)
            .await?
            .ok_or(StackError::NoOutfitForDate(query.today))?;

        Ok(TodaysOutfit {
            date: query.today,
            stack,
            outfit,
        })
    }

    async fn create_default_stack(&self, query: &GetTodaysOutfitQuery) -> Result<Stack, StackError> {
        tracing::info!(user_id = %query.owner, "No active stack, creating a default one");

        let created = self
            .create_stack
            .handle(CreateStackCommand {
                owner: query.owner,
                request: StackRequest {
                    days: self.default_days,
                    allow_repeats: true,
                    style: Some(Style::Casual),
                    policy: CategorySelectionPolicy::standard(),
                },
                today: query.today,
            })
            .await?;

        Ok(created.stack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryWardrobe;
    use crate::adapters::random::FixedSeedSource;
    use crate::application::handlers::outfit::GenerateOutfitSetHandler;
    use crate::domain::outfit::GenerationError;
    use crate::domain::stack::NewStack;
    use crate::domain::wardrobe::{fixtures::item, Category};

    fn owner() -> UserId {
        UserId::new(1).unwrap()
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, d).unwrap()
    }

    fn handler(store: &InMemoryWardrobe) -> GetTodaysOutfitHandler {
        let shared = Arc::new(store.clone());
        let generator =
            GenerateOutfitSetHandler::new(shared.clone(), shared.clone(), Arc::new(FixedSeedSource(8)));
        let create = CreateStackHandler::new(shared.clone(), Arc::new(generator));
        GetTodaysOutfitHandler::new(shared.clone(), shared, Arc::new(create))
    }

    async fn seed_casual(store: &InMemoryWardrobe) {
        store
            .add_items([
                item(1, Category::Shoes, Style::Casual),
                item(2, Category::Top, Style::Casual),
                item(3, Category::Top, Style::Casual),
                item(4, Category::Bottom, Style::Casual),
                item(5, Category::Bottom, Style::Casual),
                item(6, Category::Bottom, Style::Casual),
            ])
            .await;
    }

    #[tokio::test]
    async fn creates_default_stack_when_none_is_active() {
        let store = InMemoryWardrobe::new();
        seed_casual(&store).await;

        let today = handler(&store)
            .handle(GetTodaysOutfitQuery { owner: owner(), today: date(2) })
            .await
            .unwrap();

        assert_eq!(today.stack.start_date, date(2));
        assert_eq!(today.stack.days(), DEFAULT_STACK_DAYS);
        assert_eq!(today.stack.style, Some(Style::Casual));
        assert_eq!(today.outfit.assigned_date, Some(date(2)));
        assert_eq!(store.stack_count(owner()).await, 1);
    }

    #[tokio::test]
    async fn reuses_active_stack() {
        let store = InMemoryWardrobe::new();
        seed_casual(&store).await;
        let handler = handler(&store);

        let first = handler
            .handle(GetTodaysOutfitQuery { owner: owner(), today: date(2) })
            .await
            .unwrap();
        let next_day = handler
            .handle(GetTodaysOutfitQuery { owner: owner(), today: date(3) })
            .await
            .unwrap();

        assert_eq!(first.stack.id, next_day.stack.id);
        assert_ne!(first.outfit.id, next_day.outfit.id);
        assert_eq!(next_day.outfit.weekday(), Some("Martes"));
    }

    #[tokio::test]
    async fn active_stack_without_outfit_for_today() {
        let store = InMemoryWardrobe::new();
        StackRepository::create(&store, &NewStack::spanning(owner(), date(1), 7, None).unwrap())
            .await
            .unwrap();

        let result = handler(&store)
            .handle(GetTodaysOutfitQuery { owner: owner(), today: date(4) })
            .await;

        assert!(matches!(result, Err(StackError::NoOutfitForDate(d)) if d == date(4)));
    }

    #[tokio::test]
    async fn default_stack_failure_is_reported() {
        let store = InMemoryWardrobe::new();

        let result = handler(&store)
            .handle(GetTodaysOutfitQuery { owner: owner(), today: date(2) })
            .await;

        assert!(matches!(
            result,
            Err(StackError::Generation(GenerationError::NoInventory { .. }))
        ));
        assert_eq!(store.stack_count(owner()).await, 0);
    }
}
