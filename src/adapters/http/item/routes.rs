//! HTTP routes for item endpoints.

use axum::{
    routing::{get, patch},
    Router,
};

use super::handlers::{deactivate_item, list_items, register_item, update_item, ItemHandlers};

/// Creates the item router with all endpoints.
pub fn item_routes(handlers: ItemHandlers) -> Router {
    Router::new()
        .route("/", get(list_items).post(register_item))
        .route("/:id", patch(update_item).delete(deactivate_item))
        .with_state(handlers)
}
