//! Application router and handler wiring.
//!
//! [`build_app_router`] is shared by the binary and the integration tests so
//! both run the same middleware stack.

use std::sync::Arc;
use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, HeaderValue, Method};
use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use super::item::{item_routes, ItemHandlers};
use super::middleware::{auth_middleware, AuthState};
use super::outfit::{outfit_routes, OutfitHandlers};
use super::stack::{stack_routes, StackHandlers};
use crate::adapters::memory::InMemoryWardrobe;
use crate::adapters::postgres::{
    PostgresInventoryReader, PostgresItemRepository, PostgresOutfitRepository,
    PostgresStackRepository,
};
use crate::application::{
    CreateStackHandler, DeleteUserStacksHandler, GenerateOutfitSetHandler,
    GenerateUniqueOutfitHandler, GetOutfitHandler, GetTodaysOutfitHandler, ListItemsHandler,
    ListOutfitsHandler, ListUserStacksHandler, RegisterItemHandler, ReplaceOutfitItemHandler,
    SetFavoriteHandler, UpdateItemHandler,
};
use crate::config::{GenerationConfig, ServerConfig};
use crate::ports::{InventoryReader, ItemRepository, OutfitRepository, SeedSource, StackRepository};

// ════════════════════════════════════════════════════════════════════════════
// Wiring
// ════════════════════════════════════════════════════════════════════════════

/// The port implementations every handler is built from.
#[derive(Clone)]
pub struct WardrobePorts {
    pub inventory: Arc<dyn InventoryReader>,
    pub items: Arc<dyn ItemRepository>,
    pub outfits: Arc<dyn OutfitRepository>,
    pub stacks: Arc<dyn StackRepository>,
    pub seeds: Arc<dyn SeedSource>,
}

impl WardrobePorts {
    pub fn postgres(pool: PgPool, seeds: Arc<dyn SeedSource>) -> Self {
        Self {
            inventory: Arc::new(PostgresInventoryReader::new(pool.clone())),
            items: Arc::new(PostgresItemRepository::new(pool.clone())),
            outfits: Arc::new(PostgresOutfitRepository::new(pool.clone())),
            stacks: Arc::new(PostgresStackRepository::new(pool)),
            seeds,
        }
    }

    /// One shared in-memory store behind every storage port.
    pub fn in_memory(store: InMemoryWardrobe, seeds: Arc<dyn SeedSource>) -> Self {
        Self {
            inventory: Arc::new(store.clone()),
            items: Arc::new(store.clone()),
            outfits: Arc::new(store.clone()),
            stacks: Arc::new(store),
            seeds,
        }
    }
}

/// Handler state of every API module.
#[derive(Clone)]
pub struct AppHandlers {
    pub items: ItemHandlers,
    pub stacks: StackHandlers,
    pub outfits: OutfitHandlers,
}

impl AppHandlers {
    pub fn wire(ports: WardrobePorts, generation: &GenerationConfig) -> Self {
        let generator = Arc::new(
            GenerateOutfitSetHandler::new(
                ports.inventory.clone(),
                ports.outfits.clone(),
                ports.seeds.clone(),
            )
            .with_composer(generation.composer())
            .with_settings(generation.settings()),
        );
        let create_stack = Arc::new(CreateStackHandler::new(ports.stacks.clone(), generator));
        let today = GetTodaysOutfitHandler::new(
            ports.stacks.clone(),
            ports.outfits.clone(),
            create_stack.clone(),
        )
        .with_default_days(generation.default_days);

        let stacks = StackHandlers::new(
            create_stack,
            Arc::new(ListUserStacksHandler::new(
                ports.stacks.clone(),
                ports.outfits.clone(),
            )),
            Arc::new(DeleteUserStacksHandler::new(ports.stacks.clone())),
            Arc::new(today),
        );

        let outfits = OutfitHandlers::new(
            Arc::new(GenerateUniqueOutfitHandler::new(
                ports.inventory,
                ports.outfits.clone(),
                ports.seeds,
            )),
            Arc::new(SetFavoriteHandler::new(ports.outfits.clone())),
            Arc::new(ListOutfitsHandler::new(ports.outfits.clone())),
            Arc::new(GetOutfitHandler::new(ports.outfits.clone())),
            Arc::new(ReplaceOutfitItemHandler::new(ports.outfits)),
        );

        let items = ItemHandlers::new(
            Arc::new(RegisterItemHandler::new(ports.items.clone())),
            Arc::new(ListItemsHandler::new(ports.items.clone())),
            Arc::new(UpdateItemHandler::new(ports.items)),
        );

        Self {
            items,
            stacks,
            outfits,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Routers
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `/items`, `/stacks` and `/outfits`, all behind bearer authentication.
pub fn api_router(handlers: AppHandlers, auth: AuthState) -> Router {
    Router::new()
        .nest("/items", item_routes(handlers.items))
        .nest("/stacks", stack_routes(handlers.stacks))
        .nest("/outfits", outfit_routes(handlers.outfits))
        .layer(middleware::from_fn_with_state(auth, auth_middleware))
}

/// Full application router: `/health`, `/api`, and the middleware stack.
///
/// Layers apply bottom-up: CORS, request id, tracing, request id
/// propagation, compression, timeout.
pub fn build_app_router(handlers: AppHandlers, auth: AuthState, config: &ServerConfig) -> Router {
    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .route("/health", get(health))
        .nest("/api", api_router(handlers, auth))
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(CompressionLayer::new())
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(build_cors_layer(config))
}

/// CORS layer from the configured origins; unparsable origins are skipped.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(%origin, error = %e, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}
