//! HTTP handlers for outfit endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{
    generation_error_response, outfit_error_response, ErrorResponse,
};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::outfit::{
    GenerateUniqueOutfitCommand, GenerateUniqueOutfitHandler, GetOutfitHandler, GetOutfitQuery,
    ListOutfitsHandler, ListOutfitsQuery, ReplaceOutfitItemCommand, ReplaceOutfitItemHandler,
    SetFavoriteCommand, SetFavoriteHandler,
};
use crate::domain::foundation::{ItemId, OutfitId};
use crate::domain::outfit::OutfitFilter;
use crate::domain::wardrobe::Category;

use super::dto::{
    parse_style_filter, FavoritesQuery, OutfitListQuery, OutfitListResponse, OutfitResponse,
    ReplaceItemRequest, SetFavoriteRequest, UniqueOutfitRequest, UniqueOutfitResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct OutfitHandlers {
    unique_handler: Arc<GenerateUniqueOutfitHandler>,
    favorite_handler: Arc<SetFavoriteHandler>,
    list_handler: Arc<ListOutfitsHandler>,
    get_handler: Arc<GetOutfitHandler>,
    replace_item_handler: Arc<ReplaceOutfitItemHandler>,
}

impl OutfitHandlers {
    pub fn new(
        unique_handler: Arc<GenerateUniqueOutfitHandler>,
        favorite_handler: Arc<SetFavoriteHandler>,
        list_handler: Arc<ListOutfitsHandler>,
        get_handler: Arc<GetOutfitHandler>,
        replace_item_handler: Arc<ReplaceOutfitItemHandler>,
    ) -> Self {
        Self {
            unique_handler,
            favorite_handler,
            list_handler,
            get_handler,
            replace_item_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/outfits/unique - Generate a one-off outfit
pub async fn generate_unique_outfit(
    State(handlers): State<OutfitHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<UniqueOutfitRequest>,
) -> Response {
    let style = match parse_style_filter(req.style.as_deref()) {
        Ok(style) => style,
        Err(e) => {
            return ErrorResponse::bad_request(e.to_string())
                .into_response_with(StatusCode::BAD_REQUEST)
        }
    };

    let cmd = GenerateUniqueOutfitCommand {
        owner: user.id,
        style,
        preferred_color: req.color_principal.filter(|c| !c.trim().is_empty()),
    };

    match handlers.unique_handler.handle(cmd).await {
        Ok(result) => {
            let response: UniqueOutfitResponse = result.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => generation_error_response(e),
    }
}

/// PATCH /api/outfits/:id/favorite - Mark or unmark a favorite
pub async fn set_favorite(
    State(handlers): State<OutfitHandlers>,
    RequireAuth(user): RequireAuth,
    Path(outfit_id): Path<String>,
    Json(req): Json<SetFavoriteRequest>,
) -> Response {
    let outfit_id = match outfit_id.parse::<OutfitId>() {
        Ok(id) => id,
        Err(_) => {
            return ErrorResponse::bad_request("Invalid outfit ID")
                .into_response_with(StatusCode::BAD_REQUEST)
        }
    };

    let cmd = SetFavoriteCommand {
        owner: user.id,
        outfit_id,
        favorite: req.favorite,
    };

    match handlers.favorite_handler.handle(cmd).await {
        Ok(outfit) => {
            let response: OutfitResponse = outfit.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => outfit_error_response(e),
    }
}

/// GET /api/outfits?day=&favorite=&type= - List outfits, unique one first
pub async fn list_outfits(
    State(handlers): State<OutfitHandlers>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<OutfitListQuery>,
) -> Response {
    let filter = match params.into_filter() {
        Ok(filter) => filter,
        Err(e) => {
            return ErrorResponse::bad_request(e.to_string())
                .into_response_with(StatusCode::BAD_REQUEST)
        }
    };

    respond_with_list(&handlers, ListOutfitsQuery { owner: user.id, filter }).await
}

/// GET /api/outfits/favorites?favorite= - List favorite (or non-favorite) outfits
pub async fn list_favorites(
    State(handlers): State<OutfitHandlers>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<FavoritesQuery>,
) -> Response {
    let query = ListOutfitsQuery {
        owner: user.id,
        filter: OutfitFilter::favorites(params.favorite),
    };
    respond_with_list(&handlers, query).await
}

async fn respond_with_list(handlers: &OutfitHandlers, query: ListOutfitsQuery) -> Response {
    match handlers.list_handler.handle(query).await {
        Ok(outfits) => {
            let response: OutfitListResponse = outfits.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => outfit_error_response(e),
    }
}

/// GET /api/outfits/:id - One outfit with its garments
pub async fn get_outfit(
    State(handlers): State<OutfitHandlers>,
    RequireAuth(user): RequireAuth,
    Path(outfit_id): Path<String>,
) -> Response {
    let outfit_id = match outfit_id.parse::<OutfitId>() {
        Ok(id) => id,
        Err(_) => {
            return ErrorResponse::bad_request("Invalid outfit ID")
                .into_response_with(StatusCode::BAD_REQUEST)
        }
    };

    let query = GetOutfitQuery {
        owner: user.id,
        outfit_id,
    };

    match handlers.get_handler.handle(query).await {
        Ok(outfit) => {
            let response: OutfitResponse = outfit.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => outfit_error_response(e),
    }
}

/// PUT /api/outfits/:id/items - Swap the garment of one category
pub async fn replace_item(
    State(handlers): State<OutfitHandlers>,
    RequireAuth(user): RequireAuth,
    Path(outfit_id): Path<String>,
    Json(req): Json<ReplaceItemRequest>,
) -> Response {
    let outfit_id = match outfit_id.parse::<OutfitId>() {
        Ok(id) => id,
        Err(_) => {
            return ErrorResponse::bad_request("Invalid outfit ID")
                .into_response_with(StatusCode::BAD_REQUEST)
        }
    };
    let category = match req.category.parse::<Category>() {
        Ok(category) => category,
        Err(e) => {
            return ErrorResponse::bad_request(e.to_string())
                .into_response_with(StatusCode::BAD_REQUEST)
        }
    };

    let cmd = ReplaceOutfitItemCommand {
        owner: user.id,
        outfit_id,
        category,
        new_item: ItemId::new(req.item_id),
    };

    match handlers.replace_item_handler.handle(cmd).await {
        Ok(outfit) => {
            let response: OutfitResponse = outfit.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => outfit_error_response(e),
    }
}
