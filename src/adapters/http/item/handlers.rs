//! HTTP handlers for item endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{item_error_response, ErrorResponse};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::item::{
    ListItemsHandler, ListItemsQuery, RegisterItemCommand, RegisterItemHandler,
    UpdateItemCommand, UpdateItemHandler,
};
use crate::domain::foundation::{ItemId, UserId};
use crate::domain::wardrobe::ItemUpdate;

use super::dto::{
    ItemListQuery, ItemListResponse, ItemResponse, RegisterItemRequest, UpdateItemRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ItemHandlers {
    register_handler: Arc<RegisterItemHandler>,
    list_handler: Arc<ListItemsHandler>,
    update_handler: Arc<UpdateItemHandler>,
}

impl ItemHandlers {
    pub fn new(
        register_handler: Arc<RegisterItemHandler>,
        list_handler: Arc<ListItemsHandler>,
        update_handler: Arc<UpdateItemHandler>,
    ) -> Self {
        Self {
            register_handler,
            list_handler,
            update_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/items - Register a garment
pub async fn register_item(
    State(handlers): State<ItemHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<RegisterItemRequest>,
) -> Response {
    let item = match req.into_new_item(user.id) {
        Ok(item) => item,
        Err(e) => {
            return ErrorResponse::bad_request(e.to_string())
                .into_response_with(StatusCode::BAD_REQUEST)
        }
    };

    match handlers.register_handler.handle(RegisterItemCommand { item }).await {
        Ok(item) => {
            let response: ItemResponse = item.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => item_error_response(e),
    }
}

/// GET /api/items?style=&category=&color=&name=&subcategory=&includeInactive=
pub async fn list_items(
    State(handlers): State<ItemHandlers>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<ItemListQuery>,
) -> Response {
    let filter = match params.into_filter() {
        Ok(filter) => filter,
        Err(e) => {
            return ErrorResponse::bad_request(e.to_string())
                .into_response_with(StatusCode::BAD_REQUEST)
        }
    };

    let query = ListItemsQuery {
        owner: user.id,
        filter,
    };

    match handlers.list_handler.handle(query).await {
        Ok(items) => {
            let response: ItemListResponse = items.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => item_error_response(e),
    }
}

/// PATCH /api/items/:id - Edit name, style, secondary color or status
pub async fn update_item(
    State(handlers): State<ItemHandlers>,
    RequireAuth(user): RequireAuth,
    Path(item_id): Path<String>,
    Json(req): Json<UpdateItemRequest>,
) -> Response {
    let update = match req.into_update() {
        Ok(update) => update,
        Err(e) => {
            return ErrorResponse::bad_request(e.to_string())
                .into_response_with(StatusCode::BAD_REQUEST)
        }
    };
    apply_update(&handlers, user.id, &item_id, update).await
}

/// DELETE /api/items/:id - Deactivate a garment
pub async fn deactivate_item(
    State(handlers): State<ItemHandlers>,
    RequireAuth(user): RequireAuth,
    Path(item_id): Path<String>,
) -> Response {
    apply_update(&handlers, user.id, &item_id, ItemUpdate::deactivate()).await
}

async fn apply_update(
    handlers: &ItemHandlers,
    owner: UserId,
    raw_id: &str,
    update: ItemUpdate,
) -> Response {
    let item_id = match raw_id.parse::<ItemId>() {
        Ok(id) => id,
        Err(_) => {
            return ErrorResponse::bad_request("Invalid item ID")
                .into_response_with(StatusCode::BAD_REQUEST)
        }
    };

    let cmd = UpdateItemCommand {
        owner,
        item_id,
        update,
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(item) => {
            let response: ItemResponse = item.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => item_error_response(e),
    }
}
