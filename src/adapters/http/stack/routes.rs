//! HTTP routes for stack endpoints.

use axum::{routing::get, Router};

use super::handlers::{create_stack, delete_stacks, list_stacks, todays_outfit, StackHandlers};

/// Creates the stack router with all endpoints.
pub fn stack_routes(handlers: StackHandlers) -> Router {
    Router::new()
        .route("/", get(list_stacks).post(create_stack).delete(delete_stacks))
        .route("/today", get(todays_outfit))
        .with_state(handlers)
}
