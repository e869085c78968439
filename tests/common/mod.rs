//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::NaiveDate;
use lookmatch::adapters::auth::MockSessionValidator;
use lookmatch::adapters::http::{build_app_router, AppHandlers, WardrobePorts};
use lookmatch::adapters::memory::InMemoryWardrobe;
use lookmatch::adapters::random::FixedSeedSource;
use lookmatch::config::{GenerationConfig, ServerConfig};
use lookmatch::domain::foundation::{ItemId, UserId};
use lookmatch::domain::wardrobe::{Category, ClothingItem, ColorRef, Style};

pub const TOKEN: &str = "token-user-1";
pub const OTHER_TOKEN: &str = "token-user-2";

pub fn owner() -> UserId {
    UserId::new(1).unwrap()
}

pub fn other_owner() -> UserId {
    UserId::new(2).unwrap()
}

/// Monday 2024-03-04.
pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
}

pub fn item(id: i64, category: Category, style: Style, color: &str) -> ClothingItem {
    ClothingItem {
        id: ItemId::new(id),
        owner: owner(),
        name: format!("{} {}", category.display_name(), id),
        category,
        subcategory: None,
        style,
        primary_color: ColorRef::new(id as i32, color),
        secondary_color: None,
        image_url: format!("https://img.example.com/{}.jpg", id),
        active: true,
        favorite: false,
    }
}

/// Scenario A inventory: 2 shoes, 3 tops, 2 bottoms, all Casual.
pub fn casual_inventory() -> Vec<ClothingItem> {
    vec![
        item(1, Category::Shoes, Style::Casual, "Negro"),
        item(2, Category::Shoes, Style::Casual, "Blanco"),
        item(3, Category::Top, Style::Casual, "Azul"),
        item(4, Category::Top, Style::Casual, "Blanco"),
        item(5, Category::Top, Style::Casual, "Rojo"),
        item(6, Category::Bottom, Style::Casual, "Negro"),
        item(7, Category::Bottom, Style::Casual, "Beige"),
    ]
}

pub async fn store_with(items: Vec<ClothingItem>) -> InMemoryWardrobe {
    let store = InMemoryWardrobe::new();
    store.add_items(items).await;
    store
}

pub fn handlers(store: &InMemoryWardrobe, seed: u64) -> AppHandlers {
    let ports = WardrobePorts::in_memory(store.clone(), Arc::new(FixedSeedSource(seed)));
    let mut handlers = AppHandlers::wire(ports, &GenerationConfig::default());
    handlers.stacks = handlers.stacks.with_clock(Arc::new(monday));
    handlers
}

/// Full router with two known tokens and the clock pinned to [`monday`].
pub fn app(store: &InMemoryWardrobe) -> axum::Router {
    let validator = MockSessionValidator::new()
        .with_test_user(TOKEN, 1)
        .with_test_user(OTHER_TOKEN, 2);
    build_app_router(handlers(store, 42), Arc::new(validator), &ServerConfig::default())
}
