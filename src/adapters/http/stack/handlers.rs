//! HTTP handlers for stack endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{Local, NaiveDate};

use crate::adapters::http::error::{
    generation_error_response, stack_error_response, ErrorResponse,
};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::stack::{
    CreateStackCommand, CreateStackHandler, DeleteUserStacksCommand, DeleteUserStacksHandler,
    GetTodaysOutfitHandler, GetTodaysOutfitQuery, ListUserStacksHandler, ListUserStacksQuery,
};

use super::dto::{
    CreateStackRequest, CreateStackResponse, DeleteStacksResponse, StackListResponse,
    TodaysOutfitResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

/// Calendar source for "today"; tests pin it.
pub type Clock = Arc<dyn Fn() -> NaiveDate + Send + Sync>;

#[derive(Clone)]
pub struct StackHandlers {
    create_handler: Arc<CreateStackHandler>,
    list_handler: Arc<ListUserStacksHandler>,
    delete_handler: Arc<DeleteUserStacksHandler>,
    today_handler: Arc<GetTodaysOutfitHandler>,
    clock: Clock,
}

impl StackHandlers {
    pub fn new(
        create_handler: Arc<CreateStackHandler>,
        list_handler: Arc<ListUserStacksHandler>,
        delete_handler: Arc<DeleteUserStacksHandler>,
        today_handler: Arc<GetTodaysOutfitHandler>,
    ) -> Self {
        Self {
            create_handler,
            list_handler,
            delete_handler,
            today_handler,
            clock: Arc::new(|| Local::now().date_naive()),
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    fn today(&self) -> NaiveDate {
        (self.clock)()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/stacks - Replace the user's stacks with a freshly generated one
pub async fn create_stack(
    State(handlers): State<StackHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<CreateStackRequest>,
) -> Response {
    let request = match req.into_stack_request() {
        Ok(request) => request,
        Err(e) => {
            return ErrorResponse::bad_request(e.to_string())
                .into_response_with(StatusCode::BAD_REQUEST)
        }
    };

    let cmd = CreateStackCommand {
        owner: user.id,
        request,
        today: handlers.today(),
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(result) => {
            let response: CreateStackResponse = result.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => generation_error_response(e),
    }
}

/// GET /api/stacks - List the user's stacks with their outfits
pub async fn list_stacks(
    State(handlers): State<StackHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = ListUserStacksQuery { owner: user.id };

    match handlers.list_handler.handle(query).await {
        Ok(stacks) => {
            let response: StackListResponse = stacks.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => stack_error_response(e),
    }
}

/// DELETE /api/stacks - Delete every stack of the user
pub async fn delete_stacks(
    State(handlers): State<StackHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let cmd = DeleteUserStacksCommand { owner: user.id };

    match handlers.delete_handler.handle(cmd).await {
        Ok(deleted) => {
            let response = DeleteStacksResponse {
                deleted,
                message: format!("{} stack(s) deleted", deleted),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => stack_error_response(e),
    }
}

/// GET /api/stacks/today - Outfit assigned to today
pub async fn todays_outfit(
    State(handlers): State<StackHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = GetTodaysOutfitQuery {
        owner: user.id,
        today: handlers.today(),
    };

    match handlers.today_handler.handle(query).await {
        Ok(today) => {
            let response: TodaysOutfitResponse = today.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => stack_error_response(e),
    }
}
