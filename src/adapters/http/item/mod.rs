//! HTTP adapter for item endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ItemListQuery, ItemListResponse, ItemResponse, RegisterItemRequest, UpdateItemRequest,
};
pub use handlers::ItemHandlers;
pub use routes::item_routes;
