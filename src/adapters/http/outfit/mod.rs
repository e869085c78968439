//! HTTP adapter for outfit endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    parse_style_filter, ColorResponse, FavoritesQuery, OutfitItemResponse, OutfitListQuery,
    OutfitListResponse, OutfitResponse, ReplaceItemRequest, SetFavoriteRequest,
    UniqueOutfitRequest, UniqueOutfitResponse,
};
pub use handlers::OutfitHandlers;
pub use routes::outfit_routes;
