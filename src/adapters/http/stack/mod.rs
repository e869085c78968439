//! HTTP adapter for stack endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CreateStackRequest, CreateStackResponse, DeleteStacksResponse, OutfitSetResponse,
    StackListResponse, StackResponse, StackViewResponse, TodaysOutfitResponse,
};
pub use handlers::{Clock, StackHandlers};
pub use routes::stack_routes;
