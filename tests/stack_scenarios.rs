//! End-to-end stack scenarios over the in-memory wardrobe.

mod common;

use std::collections::HashSet;
use std::sync::Arc;

use lookmatch::adapters::memory::InMemoryWardrobe;
use lookmatch::adapters::random::FixedSeedSource;
use lookmatch::application::{
    CreateStackCommand, CreateStackHandler, GenerateOutfitSetHandler, GetTodaysOutfitHandler,
    GetTodaysOutfitQuery, ListUserStacksHandler, ListUserStacksQuery,
};
use lookmatch::domain::foundation::ErrorCode;
use lookmatch::domain::outfit::{check_availability, CategorySelectionPolicy, GenerationError};
use lookmatch::domain::stack::StackRequest;
use lookmatch::domain::wardrobe::{Category, Style};

use common::{casual_inventory, item, monday, owner, store_with};

fn create_handler(store: &InMemoryWardrobe, seed: u64) -> Arc<CreateStackHandler> {
    let generator = Arc::new(GenerateOutfitSetHandler::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(FixedSeedSource(seed)),
    ));
    Arc::new(CreateStackHandler::new(Arc::new(store.clone()), generator))
}

fn create_command(days: u32, style: Option<Style>, policy: CategorySelectionPolicy) -> CreateStackCommand {
    CreateStackCommand {
        owner: owner(),
        request: StackRequest {
            days,
            allow_repeats: false,
            style,
            policy,
        },
        today: monday(),
    }
}

#[tokio::test]
async fn scenario_a_ten_unique_outfits_out_of_twelve() {
    let store = store_with(casual_inventory()).await;

    let result = create_handler(&store, 1)
        .handle(create_command(10, None, CategorySelectionPolicy::standard()))
        .await
        .unwrap();

    let generation = &result.generation;
    assert_eq!(generation.max_unique_possible, 12);
    assert_eq!(generation.total, 10);
    assert_eq!(generation.unique_count, 10);
    assert!(!generation.contains_repeats);

    let mut keys = HashSet::new();
    for outfit in &generation.outfits {
        let mut categories: Vec<Category> = outfit.items.iter().map(|i| i.category).collect();
        categories.sort();
        assert_eq!(categories, vec![Category::Top, Category::Bottom, Category::Shoes]);

        let mut ids: Vec<i64> = outfit.items.iter().map(|i| i.id.as_i64()).collect();
        ids.sort_unstable();
        assert!(keys.insert(ids), "duplicate outfit in one run");
    }
}

#[tokio::test]
async fn scenario_b_empty_inventory_is_a_client_error() {
    let store = InMemoryWardrobe::new();

    let err = create_handler(&store, 1)
        .handle(create_command(3, None, CategorySelectionPolicy::standard()))
        .await
        .unwrap_err();

    assert!(matches!(err, GenerationError::NoInventory { style: None, .. }));
    assert_eq!(err.code(), ErrorCode::NoInventory);
    assert!(err.is_client_error());
    assert_eq!(store.stack_count(owner()).await, 0);
}

#[tokio::test]
async fn scenario_c_one_piece_wardrobe() {
    let store = store_with(vec![
        item(1, Category::OnePiece, Style::Formal, "Negro"),
        item(2, Category::OnePiece, Style::Formal, "Rojo"),
        item(3, Category::Shoes, Style::Formal, "Negro"),
        item(4, Category::Shoes, Style::Formal, "Beige"),
    ])
    .await;
    let policy = CategorySelectionPolicy {
        top: false,
        bottom: false,
        shoes: true,
        outerwear: false,
        one_piece: true,
    };

    let result = create_handler(&store, 3)
        .handle(create_command(3, Some(Style::Formal), policy))
        .await
        .unwrap();

    assert_eq!(result.generation.total, 3);
    for outfit in &result.generation.outfits {
        assert_eq!(outfit.style, Some(Style::Formal));
        assert_eq!(outfit.items.len(), 2);
        assert!(outfit.item_in(Category::OnePiece).is_some());
        assert!(outfit.item_in(Category::Shoes).is_some());
    }
}

#[tokio::test]
async fn scenario_d_new_stack_cascades_the_old_one_away() {
    let store = store_with(casual_inventory()).await;
    let create = create_handler(&store, 5);

    let first = create
        .handle(create_command(4, None, CategorySelectionPolicy::standard()))
        .await
        .unwrap();
    let second = create
        .handle(create_command(2, None, CategorySelectionPolicy::standard()))
        .await
        .unwrap();
    assert_eq!(second.replaced_stacks, 1);

    let listed = ListUserStacksHandler::new(Arc::new(store.clone()), Arc::new(store.clone()))
        .handle(ListUserStacksQuery { owner: owner() })
        .await
        .unwrap();

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].stack.id, second.stack.id);
    assert_ne!(listed[0].stack.id, first.stack.id);
    assert_eq!(listed[0].outfits.len(), 2);
    assert_eq!(store.outfit_count(owner()).await, 2);
}

#[test]
fn scenario_e_only_fully_covered_styles_are_compatible() {
    let items = vec![
        item(1, Category::Top, Style::Casual, "Azul"),
        item(2, Category::Bottom, Style::Casual, "Negro"),
        item(3, Category::Shoes, Style::Casual, "Blanco"),
        item(4, Category::Top, Style::Formal, "Blanco"),
        item(5, Category::Shoes, Style::Formal, "Negro"),
    ];

    let availability = check_availability(&items);

    assert!(availability.can_generate);
    assert_eq!(
        availability.compatible_styles.into_iter().collect::<Vec<_>>(),
        vec![Style::Casual]
    );
}

#[tokio::test]
async fn todays_outfit_creates_a_default_week_once() {
    let store = store_with(casual_inventory()).await;
    let today = GetTodaysOutfitHandler::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        create_handler(&store, 9),
    );
    let query = GetTodaysOutfitQuery {
        owner: owner(),
        today: monday(),
    };

    let first = today.handle(query.clone()).await.unwrap();
    assert_eq!(first.stack.days(), 7);
    assert_eq!(first.stack.style, Some(Style::Casual));
    assert_eq!(first.outfit.assigned_date, Some(monday()));

    let second = today.handle(query).await.unwrap();
    assert_eq!(second.stack.id, first.stack.id);
    assert_eq!(second.outfit.id, first.outfit.id);
    assert_eq!(store.stack_count(owner()).await, 1);
}
