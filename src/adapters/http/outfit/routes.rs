//! HTTP routes for outfit endpoints.

use axum::{
    routing::{get, patch, post, put},
    Router,
};

use super::handlers::{
    generate_unique_outfit, get_outfit, list_favorites, list_outfits, replace_item, set_favorite,
    OutfitHandlers,
};

/// Creates the outfit router with all endpoints.
pub fn outfit_routes(handlers: OutfitHandlers) -> Router {
    Router::new()
        .route("/", get(list_outfits))
        .route("/unique", post(generate_unique_outfit))
        .route("/favorites", get(list_favorites))
        .route("/:id", get(get_outfit))
        .route("/:id/favorite", patch(set_favorite))
        .route("/:id/items", put(replace_item))
        .with_state(handlers)
}
