//! HTTP adapters - REST API over the wardrobe use cases.
//!
//! Each use-case module has its own DTOs, handlers and routes; `router`
//! assembles them under `/api` behind the auth middleware.

pub mod error;
pub mod item;
pub mod middleware;
pub mod outfit;
pub mod router;
pub mod stack;

pub use error::ErrorResponse;
pub use item::{item_routes, ItemHandlers};
pub use outfit::{outfit_routes, OutfitHandlers};
pub use router::{api_router, build_app_router, build_cors_layer, AppHandlers, WardrobePorts};
pub use stack::{stack_routes, StackHandlers};
