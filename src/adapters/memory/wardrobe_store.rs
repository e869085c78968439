//! In-Memory Wardrobe Store
//!
//! One shared state behind a lock implements the inventory, outfit and stack
//! ports, so cascades and the single-unique-outfit rule behave as they do in
//! PostgreSQL. Writes validate first and mutate last, which makes each one
//! all-or-nothing.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, ItemId, OutfitId, StackId, UserId};
use crate::domain::outfit::{listing_order, NewOutfit, Outfit, OutfitFilter};
use crate::domain::stack::{NewStack, Stack};
use crate::domain::wardrobe::{
    Category, ClothingItem, ColorRef, ItemFilter, ItemUpdate, NewClothingItem, Style,
    KNOWN_COLORS,
};
use crate::ports::{
    InventoryReader, ItemReplacement, ItemRepository, ItemWrite, OutfitRepository,
    StackRepository,
};

#[derive(Debug, Clone)]
struct StoredOutfit {
    owner: UserId,
    style: Option<Style>,
    stack_id: Option<StackId>,
    assigned_date: Option<NaiveDate>,
    favorite: bool,
    item_ids: Vec<ItemId>,
}

#[derive(Debug, Default)]
struct WardrobeState {
    items: BTreeMap<ItemId, ClothingItem>,
    stacks: BTreeMap<StackId, Stack>,
    outfits: BTreeMap<OutfitId, StoredOutfit>,
    next_stack_id: i64,
    next_outfit_id: i64,
    failing_outfit_writes: usize,
}

impl WardrobeState {
    fn materialize(&self, id: OutfitId, stored: &StoredOutfit) -> Outfit {
        let mut items: Vec<ClothingItem> = stored
            .item_ids
            .iter()
            .filter_map(|item_id| self.items.get(item_id).cloned())
            .collect();
        items.sort_by_key(|i| i.category);

        Outfit {
            id,
            owner: stored.owner,
            style: stored.style,
            stack_id: stored.stack_id,
            assigned_date: stored.assigned_date,
            favorite: stored.favorite,
            items,
        }
    }

    fn next_item_id(&self) -> ItemId {
        let last = self.items.keys().next_back().map_or(0, |id| id.as_i64());
        ItemId::new(last + 1)
    }

    fn remove_stack_cascade(&mut self, id: StackId) -> bool {
        self.outfits.retain(|_, o| o.stack_id != Some(id));
        self.stacks.remove(&id).is_some()
    }
}

/// In-memory implementation of every storage port.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWardrobe {
    state: Arc<RwLock<WardrobeState>>,
}

impl InMemoryWardrobe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the inventory.
    pub async fn add_items(&self, items: impl IntoIterator<Item = ClothingItem>) {
        let mut state = self.state.write().await;
        for item in items {
            state.items.insert(item.id, item);
        }
    }

    /// Make the next `count` outfit writes fail without touching state.
    pub async fn fail_next_outfit_writes(&self, count: usize) {
        self.state.write().await.failing_outfit_writes = count;
    }

    pub async fn stack_count(&self, owner: UserId) -> usize {
        let state = self.state.read().await;
        state.stacks.values().filter(|s| s.owner == owner).count()
    }

    pub async fn outfit_count(&self, owner: UserId) -> usize {
        let state = self.state.read().await;
        state.outfits.values().filter(|o| o.owner == owner).count()
    }

    /// Number of outfit-to-item links in the store.
    pub async fn link_count(&self) -> usize {
        let state = self.state.read().await;
        state.outfits.values().map(|o| o.item_ids.len()).sum()
    }
}

#[async_trait]
impl InventoryReader for InMemoryWardrobe {
    async fn fetch_items(
        &self,
        owner: UserId,
        style: Option<Style>,
    ) -> Result<Vec<ClothingItem>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .items
            .values()
            .filter(|i| i.owner == owner && i.active)
            .filter(|i| style.map_or(true, |s| i.style == s))
            .cloned()
            .collect())
    }
}

/// Palette entry for `name`; ids follow the seeded `color` table order.
fn resolve_color(name: &str) -> Option<ColorRef> {
    KNOWN_COLORS
        .iter()
        .position(|known| known.to_lowercase() == name.trim().to_lowercase())
        .map(|index| ColorRef::new(index as i32 + 1, KNOWN_COLORS[index]))
}

#[async_trait]
impl ItemRepository for InMemoryWardrobe {
    async fn register(&self, item: &NewClothingItem) -> Result<ItemWrite, DomainError> {
        let Some(primary_color) = resolve_color(&item.primary_color) else {
            return Ok(ItemWrite::UnknownColor(item.primary_color.clone()));
        };
        let secondary_color = match item.secondary_color.as_deref() {
            Some(name) => match resolve_color(name) {
                Some(color) => Some(color),
                None => return Ok(ItemWrite::UnknownColor(name.to_string())),
            },
            None => None,
        };

        let mut state = self.state.write().await;
        let created = ClothingItem {
            id: state.next_item_id(),
            owner: item.owner,
            name: item.name.clone(),
            category: item.category,
            subcategory: item.subcategory.clone(),
            style: item.style,
            primary_color,
            secondary_color,
            image_url: item.image_url.clone(),
            active: true,
            favorite: false,
        };
        state.items.insert(created.id, created.clone());
        Ok(ItemWrite::Saved(created))
    }

    async fn list(
        &self,
        owner: UserId,
        filter: &ItemFilter,
    ) -> Result<Vec<ClothingItem>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .items
            .values()
            .rev()
            .filter(|i| i.owner == owner && filter.matches(i))
            .cloned()
            .collect())
    }

    async fn find_by_id(
        &self,
        owner: UserId,
        id: ItemId,
    ) -> Result<Option<ClothingItem>, DomainError> {
        let state = self.state.read().await;
        Ok(state.items.get(&id).filter(|i| i.owner == owner).cloned())
    }

    async fn update(
        &self,
        owner: UserId,
        id: ItemId,
        update: &ItemUpdate,
    ) -> Result<ItemWrite, DomainError> {
        let secondary_color = match update.secondary_color.as_deref() {
            Some(name) => match resolve_color(name) {
                Some(color) => Some(color),
                None => return Ok(ItemWrite::UnknownColor(name.to_string())),
            },
            None => None,
        };

        let mut state = self.state.write().await;
        let Some(item) = state.items.get_mut(&id).filter(|i| i.owner == owner) else {
            return Ok(ItemWrite::NotFound);
        };
        if let Some(name) = &update.name {
            item.name = name.clone();
        }
        if let Some(style) = update.style {
            item.style = style;
        }
        if secondary_color.is_some() {
            item.secondary_color = secondary_color;
        }
        if let Some(active) = update.active {
            item.active = active;
        }
        Ok(ItemWrite::Saved(item.clone()))
    }
}

#[async_trait]
impl OutfitRepository for InMemoryWardrobe {
    async fn create(&self, outfit: &NewOutfit) -> Result<Outfit, DomainError> {
        let mut state = self.state.write().await;

        if state.failing_outfit_writes > 0 {
            state.failing_outfit_writes -= 1;
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Failed to insert outfit: injected failure",
            ));
        }
        for item_id in &outfit.item_ids {
            let owned = state
                .items
                .get(item_id)
                .is_some_and(|i| i.owner == outfit.owner);
            if !owned {
                return Err(DomainError::new(
                    ErrorCode::ItemNotFound,
                    format!("Item {} does not belong to user {}", item_id, outfit.owner),
                ));
            }
        }

        if outfit.stack_id.is_none() {
            state
                .outfits
                .retain(|_, o| !(o.owner == outfit.owner && o.stack_id.is_none()));
        }

        state.next_outfit_id += 1;
        let id = OutfitId::new(state.next_outfit_id);
        let stored = StoredOutfit {
            owner: outfit.owner,
            style: outfit.style,
            stack_id: outfit.stack_id,
            assigned_date: outfit.assigned_date,
            favorite: false,
            item_ids: outfit.item_ids.clone(),
        };
        let created = state.materialize(id, &stored);
        state.outfits.insert(id, stored);
        Ok(created)
    }

    async fn find_by_id(
        &self,
        owner: UserId,
        id: OutfitId,
    ) -> Result<Option<Outfit>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .outfits
            .get(&id)
            .filter(|o| o.owner == owner)
            .map(|o| state.materialize(id, o)))
    }

    async fn find_by_stack(&self, stack_id: StackId) -> Result<Vec<Outfit>, DomainError> {
        let state = self.state.read().await;
        let mut outfits: Vec<Outfit> = state
            .outfits
            .iter()
            .filter(|(_, o)| o.stack_id == Some(stack_id))
            .map(|(id, o)| state.materialize(*id, o))
            .collect();
        outfits.sort_by_key(|o| (o.assigned_date, o.id));
        Ok(outfits)
    }

    async fn find_by_stack_and_date(
        &self,
        stack_id: StackId,
        date: NaiveDate,
    ) -> Result<Option<Outfit>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .outfits
            .iter()
            .find(|(_, o)| o.stack_id == Some(stack_id) && o.assigned_date == Some(date))
            .map(|(id, o)| state.materialize(*id, o)))
    }

    async fn set_favorite(
        &self,
        owner: UserId,
        id: OutfitId,
        favorite: bool,
    ) -> Result<Option<Outfit>, DomainError> {
        let mut state = self.state.write().await;
        let Some(stored) = state.outfits.get_mut(&id).filter(|o| o.owner == owner) else {
            return Ok(None);
        };
        stored.favorite = favorite;
        let stored = stored.clone();
        Ok(Some(state.materialize(id, &stored)))
    }

    async fn list_filtered(
        &self,
        owner: UserId,
        filter: &OutfitFilter,
    ) -> Result<Vec<Outfit>, DomainError> {
        let state = self.state.read().await;
        let mut outfits: Vec<Outfit> = state
            .outfits
            .iter()
            .filter(|(_, o)| o.owner == owner)
            .map(|(id, o)| state.materialize(*id, o))
            .filter(|o| filter.matches(o))
            .collect();
        outfits.sort_by(listing_order);
        Ok(outfits)
    }

    async fn replace_item(
        &self,
        owner: UserId,
        id: OutfitId,
        category: Category,
        new_item: ItemId,
    ) -> Result<ItemReplacement, DomainError> {
        let mut state = self.state.write().await;

        let Some(stored) = state.outfits.get(&id).filter(|o| o.owner == owner).cloned() else {
            return Ok(ItemReplacement::OutfitNotFound);
        };
        let Some(replacement) = state.items.get(&new_item).filter(|i| i.owner == owner) else {
            return Ok(ItemReplacement::ItemNotFound);
        };
        if replacement.category != category {
            return Ok(ItemReplacement::CategoryMismatch {
                actual: replacement.category,
            });
        }
        let current = stored.item_ids.iter().position(|item_id| {
            state
                .items
                .get(item_id)
                .is_some_and(|i| i.category == category)
        });
        let Some(position) = current else {
            return Ok(ItemReplacement::NothingToReplace);
        };

        let mut updated = stored;
        updated.item_ids[position] = new_item;
        let outfit = state.materialize(id, &updated);
        state.outfits.insert(id, updated);
        Ok(ItemReplacement::Replaced(outfit))
    }
}

#[async_trait]
impl StackRepository for InMemoryWardrobe {
    async fn delete_all_for_user(&self, owner: UserId) -> Result<u64, DomainError> {
        let mut state = self.state.write().await;
        let ids: Vec<StackId> = state
            .stacks
            .values()
            .filter(|s| s.owner == owner)
            .map(|s| s.id)
            .collect();
        for id in &ids {
            state.remove_stack_cascade(*id);
        }
        Ok(ids.len() as u64)
    }

    async fn create(&self, stack: &NewStack) -> Result<Stack, DomainError> {
        let mut state = self.state.write().await;
        state.next_stack_id += 1;
        let created = Stack {
            id: StackId::new(state.next_stack_id),
            owner: stack.owner,
            start_date: stack.start_date,
            end_date: stack.end_date,
            style: stack.style,
        };
        state.stacks.insert(created.id, created.clone());
        Ok(created)
    }

    async fn delete(&self, id: StackId) -> Result<(), DomainError> {
        self.state.write().await.remove_stack_cascade(id);
        Ok(())
    }

    async fn list_by_user(&self, owner: UserId) -> Result<Vec<Stack>, DomainError> {
        let state = self.state.read().await;
        let mut stacks: Vec<Stack> = state
            .stacks
            .values()
            .filter(|s| s.owner == owner)
            .cloned()
            .collect();
        stacks.sort_by(|a, b| (b.start_date, b.id).cmp(&(a.start_date, a.id)));
        Ok(stacks)
    }

    async fn find_active_on(
        &self,
        owner: UserId,
        date: NaiveDate,
    ) -> Result<Option<Stack>, DomainError> {
        let stacks = self.list_by_user(owner).await?;
        Ok(stacks.into_iter().find(|s| s.covers(date)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::wardrobe::fixtures::item;

    fn owner() -> UserId {
        UserId::new(1).unwrap()
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    async fn seeded() -> InMemoryWardrobe {
        let store = InMemoryWardrobe::new();
        let mut inactive = item(4, Category::Top, Style::Casual);
        inactive.active = false;
        store
            .add_items([
                item(1, Category::Top, Style::Casual),
                item(2, Category::Bottom, Style::Casual),
                item(3, Category::Shoes, Style::Formal),
                inactive,
                item(5, Category::Top, Style::Casual),
            ])
            .await;
        store
    }

    fn new_outfit(stack_id: Option<StackId>, ids: &[i64]) -> NewOutfit {
        NewOutfit {
            owner: owner(),
            style: Some(Style::Casual),
            stack_id,
            assigned_date: stack_id.map(|_| date(1)),
            item_ids: ids.iter().map(|i| ItemId::new(*i)).collect(),
        }
    }

    #[tokio::test]
    async fn fetch_items_skips_inactive_and_filters_style() {
        let store = seeded().await;

        let all = store.fetch_items(owner(), None).await.unwrap();
        assert_eq!(all.len(), 4);

        let formal = store.fetch_items(owner(), Some(Style::Formal)).await.unwrap();
        assert_eq!(formal.len(), 1);
        assert_eq!(formal[0].id, ItemId::new(3));
    }

    #[tokio::test]
    async fn creating_unique_outfit_replaces_previous_one() {
        let store = seeded().await;

        let first = OutfitRepository::create(&store, &new_outfit(None, &[1, 2, 3]))
            .await
            .unwrap();
        let second = OutfitRepository::create(&store, &new_outfit(None, &[5, 2, 3]))
            .await
            .unwrap();

        assert_eq!(store.outfit_count(owner()).await, 1);
        let replaced = OutfitRepository::find_by_id(&store, owner(), first.id).await;
        let current = OutfitRepository::find_by_id(&store, owner(), second.id).await;
        assert!(replaced.unwrap().is_none());
        assert!(current.unwrap().is_some());
    }

    #[tokio::test]
    async fn failed_outfit_write_leaves_nothing_behind() {
        let store = seeded().await;
        store.fail_next_outfit_writes(1).await;

        let result = OutfitRepository::create(&store, &new_outfit(None, &[1, 2, 3])).await;

        assert!(result.is_err());
        assert_eq!(store.outfit_count(owner()).await, 0);
        assert_eq!(store.link_count().await, 0);
    }

    #[tokio::test]
    async fn outfit_with_foreign_item_is_rejected() {
        let store = seeded().await;
        let result = OutfitRepository::create(&store, &new_outfit(None, &[1, 99])).await;
        assert!(matches!(result, Err(e) if e.code == ErrorCode::ItemNotFound));
        assert_eq!(store.outfit_count(owner()).await, 0);
    }

    #[tokio::test]
    async fn deleting_stacks_cascades_to_outfits() {
        let store = seeded().await;
        let stack = StackRepository::create(
            &store,
            &NewStack::spanning(owner(), date(1), 3, None).unwrap(),
        )
        .await
        .unwrap();
        OutfitRepository::create(&store, &new_outfit(Some(stack.id), &[1, 2, 3]))
            .await
            .unwrap();

        let deleted = store.delete_all_for_user(owner()).await.unwrap();

        assert_eq!(deleted, 1);
        assert_eq!(store.outfit_count(owner()).await, 0);
        assert!(store.find_by_stack(stack.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn replace_item_checks_category() {
        let store = seeded().await;
        let outfit = OutfitRepository::create(&store, &new_outfit(None, &[1, 2, 3]))
            .await
            .unwrap();

        let mismatch = store
            .replace_item(owner(), outfit.id, Category::Top, ItemId::new(2))
            .await
            .unwrap();
        assert_eq!(
            mismatch,
            ItemReplacement::CategoryMismatch {
                actual: Category::Bottom
            }
        );

        let replaced = store
            .replace_item(owner(), outfit.id, Category::Top, ItemId::new(5))
            .await
            .unwrap();
        match replaced {
            ItemReplacement::Replaced(o) => {
                assert_eq!(o.item_in(Category::Top).map(|i| i.id), Some(ItemId::new(5)));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn registered_items_take_palette_ids_and_next_key() {
        let store = seeded().await;
        let written = store
            .register(&NewClothingItem {
                owner: owner(),
                name: "Chaqueta".to_string(),
                category: Category::Outerwear,
                subcategory: Some("Chaqueta".to_string()),
                style: Style::Casual,
                primary_color: "azul".to_string(),
                secondary_color: None,
                image_url: "https://img.example.com/6.jpg".to_string(),
            })
            .await
            .unwrap();

        let ItemWrite::Saved(item) = written else {
            panic!("unexpected outcome: {:?}", written);
        };
        assert_eq!(item.id, ItemId::new(6));
        assert_eq!(item.primary_color, ColorRef::new(8, "Azul"));
        assert!(item.active);
        assert_eq!(store.fetch_items(owner(), None).await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn unknown_color_registers_nothing() {
        let store = seeded().await;
        let written = store
            .register(&NewClothingItem {
                owner: owner(),
                name: "Camisa".to_string(),
                category: Category::Top,
                subcategory: None,
                style: Style::Casual,
                primary_color: "Turquesa".to_string(),
                secondary_color: None,
                image_url: "https://img.example.com/7.jpg".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(written, ItemWrite::UnknownColor("Turquesa".to_string()));
        let all = ItemFilter {
            include_inactive: true,
            ..ItemFilter::default()
        };
        assert_eq!(store.list(owner(), &all).await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn deactivated_items_leave_generation_but_stay_listed() {
        let store = seeded().await;

        let written = store
            .update(owner(), ItemId::new(1), &ItemUpdate::deactivate())
            .await
            .unwrap();
        assert!(matches!(written, ItemWrite::Saved(ref i) if !i.active));

        let active = store.fetch_items(owner(), None).await.unwrap();
        assert!(active.iter().all(|i| i.id != ItemId::new(1)));
        let everything = ItemFilter {
            include_inactive: true,
            ..ItemFilter::default()
        };
        let listed = store.list(owner(), &everything).await.unwrap();
        assert!(listed.iter().any(|i| i.id == ItemId::new(1)));
    }

    #[tokio::test]
    async fn updating_someone_elses_item_is_not_found() {
        let store = seeded().await;
        let stranger = UserId::new(2).unwrap();
        let written = store
            .update(stranger, ItemId::new(1), &ItemUpdate::deactivate())
            .await
            .unwrap();
        assert_eq!(written, ItemWrite::NotFound);
    }

    #[tokio::test]
    async fn filtered_listing_puts_unique_outfit_first() {
        let store = seeded().await;
        let stack = StackRepository::create(
            &store,
            &NewStack::spanning(owner(), date(1), 3, None).unwrap(),
        )
        .await
        .unwrap();
        let stacked = OutfitRepository::create(&store, &new_outfit(Some(stack.id), &[1, 2, 3]))
            .await
            .unwrap();
        let unique = OutfitRepository::create(&store, &new_outfit(None, &[5, 2, 3]))
            .await
            .unwrap();
        store.set_favorite(owner(), stacked.id, true).await.unwrap();

        let all = store
            .list_filtered(owner(), &OutfitFilter::default())
            .await
            .unwrap();
        let ids: Vec<OutfitId> = all.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![unique.id, stacked.id]);

        let favorites = store
            .list_filtered(owner(), &OutfitFilter::favorites(true))
            .await
            .unwrap();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].id, stacked.id);
    }

    #[tokio::test]
    async fn find_active_on_prefers_latest_start() {
        let store = seeded().await;
        StackRepository::create(&store, &NewStack::spanning(owner(), date(1), 10, None).unwrap())
            .await
            .unwrap();
        let newer =
            StackRepository::create(&store, &NewStack::spanning(owner(), date(3), 5, None).unwrap())
                .await
                .unwrap();

        let active = store.find_active_on(owner(), date(4)).await.unwrap();
        assert_eq!(active.map(|s| s.id), Some(newer.id));
        assert!(store.find_active_on(owner(), date(20)).await.unwrap().is_none());
    }
}
