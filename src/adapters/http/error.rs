//! Error bodies and the mapping from use-case errors to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::domain::outfit::{GenerationError, OutfitError};
use crate::domain::stack::StackError;
use crate::domain::wardrobe::ItemError;

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    /// What the user can do to fix it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorResponse {
    pub fn new(code: impl ToString, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            solution: None,
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self::new("NOT_FOUND", format!("{} not found: {}", resource_type, id))
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }

    pub fn with_solution(mut self, solution: Option<String>) -> Self {
        self.solution = solution;
        self
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// Maps a generation failure: client faults are 400, a blown deadline 504,
/// storage failures 500.
pub fn generation_error_response(error: GenerationError) -> Response {
    let status = match &error {
        GenerationError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
        GenerationError::Persistence(err) => {
            tracing::error!(code = %err.code, "outfit persistence failed: {}", err.message);
            return ErrorResponse::internal("Failed to store generated outfits")
                .into_response_with(StatusCode::INTERNAL_SERVER_ERROR);
        }
        _ => StatusCode::BAD_REQUEST,
    };

    let details = match &error {
        GenerationError::Validation(_) | GenerationError::Persistence(_) => None,
        GenerationError::NoInventory { style, categories } => {
            Some(json!({ "style": style, "categories": categories }))
        }
        GenerationError::NoMatchingCategory { categories } => {
            Some(json!({ "categories": categories }))
        }
        GenerationError::IncompatibleStyles { styles_present } => {
            Some(json!({ "stylesPresent": styles_present }))
        }
        GenerationError::MissingCategories { missing } => {
            Some(json!({ "missingCategories": missing }))
        }
        GenerationError::GenerationFailed {
            attempts,
            requested,
        } => Some(json!({ "attempts": attempts, "requested": requested })),
        GenerationError::Timeout { elapsed_ms } => Some(json!({ "elapsedMs": elapsed_ms })),
    };

    let mut body = ErrorResponse::new(error.code(), error.to_string())
        .with_solution(error.remediation());
    body.details = details;
    body.into_response_with(status)
}

pub fn outfit_error_response(error: OutfitError) -> Response {
    let status = match &error {
        OutfitError::NotFound(_) | OutfitError::ItemNotFound(_) => StatusCode::NOT_FOUND,
        OutfitError::CategoryMismatch { .. } | OutfitError::NothingToReplace(_) => {
            StatusCode::BAD_REQUEST
        }
        OutfitError::Infrastructure(msg) => {
            tracing::error!("outfit storage failed: {}", msg);
            return ErrorResponse::internal("Outfit storage unavailable")
                .into_response_with(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };
    ErrorResponse::new(error.code(), error.message()).into_response_with(status)
}

pub fn item_error_response(error: ItemError) -> Response {
    let status = match &error {
        ItemError::NotFound(_) => StatusCode::NOT_FOUND,
        ItemError::Validation(_)
        | ItemError::UnknownColor(_)
        | ItemError::UnknownSubcategory(_) => StatusCode::BAD_REQUEST,
        ItemError::Infrastructure(msg) => {
            tracing::error!("item storage failed: {}", msg);
            return ErrorResponse::internal("Item storage unavailable")
                .into_response_with(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };
    ErrorResponse::new(error.code(), error.message()).into_response_with(status)
}

pub fn stack_error_response(error: StackError) -> Response {
    match error {
        StackError::Generation(err) => generation_error_response(err),
        StackError::NoOutfitForDate(_) => ErrorResponse::new(error.code(), error.message())
            .into_response_with(StatusCode::NOT_FOUND),
        StackError::Infrastructure(msg) => {
            tracing::error!("stack storage failed: {}", msg);
            ErrorResponse::internal("Stack storage unavailable")
                .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainError, ErrorCode, ItemId, OutfitId};
    use crate::domain::wardrobe::Category;
    use axum::body::to_bytes;
    use chrono::NaiveDate;

    async fn body_of(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn missing_categories_is_400_with_solution_and_details() {
        let response = generation_error_response(GenerationError::MissingCategories {
            missing: vec![Category::Shoes],
        });
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_of(response).await;
        assert_eq!(body["code"], "MISSING_CATEGORIES");
        assert_eq!(body["details"]["missingCategories"], json!(["shoes"]));
        assert_eq!(body["solution"], "Add at least one item in: Zapatos");
    }

    #[tokio::test]
    async fn no_inventory_details_name_style_and_categories() {
        let response = generation_error_response(GenerationError::NoInventory {
            style: Some(crate::domain::wardrobe::Style::Formal),
            categories: vec![Category::Top, Category::Shoes],
        });
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_of(response).await;
        assert_eq!(body["code"], "NO_INVENTORY");
        assert_eq!(body["details"]["categories"], json!(["top", "shoes"]));
        assert_eq!(body["details"]["style"], "Formal");
        assert!(body["solution"].as_str().unwrap().contains("Superior, Zapatos"));
    }

    #[tokio::test]
    async fn timeout_is_504() {
        let response = generation_error_response(GenerationError::Timeout { elapsed_ms: 5000 });
        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(body_of(response).await["details"]["elapsedMs"], 5000);
    }

    #[tokio::test]
    async fn persistence_hides_the_driver_message() {
        let response = generation_error_response(GenerationError::Persistence(DomainError::new(
            ErrorCode::DatabaseError,
            "relation \"outfit\" does not exist",
        )));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_of(response).await;
        assert_eq!(body["code"], "INTERNAL_ERROR");
        assert!(!body["message"].as_str().unwrap().contains("relation"));
    }

    #[test]
    fn outfit_not_found_is_404() {
        let response = outfit_error_response(OutfitError::not_found(OutfitId::new(9)));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn category_mismatch_is_400() {
        let response = outfit_error_response(OutfitError::CategoryMismatch {
            expected: Category::Top,
            actual: Category::Shoes,
        });
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn item_errors_map_by_kind() {
        assert_eq!(
            item_error_response(ItemError::NotFound(ItemId::new(3))).status(),
            StatusCode::NOT_FOUND
        );

        let unknown = item_error_response(ItemError::UnknownColor("Turquesa".to_string()));
        assert_eq!(unknown.status(), StatusCode::BAD_REQUEST);
        let body = body_of(unknown).await;
        assert_eq!(body["code"], "VALIDATION_FAILED");
        assert_eq!(body["message"], "Unknown color: Turquesa");

        let down = item_error_response(ItemError::Infrastructure("pool closed".to_string()));
        assert_eq!(down.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body_of(down).await.to_string().contains("pool closed"));
    }

    #[test]
    fn stack_errors_map_by_kind() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        assert_eq!(
            stack_error_response(StackError::NoOutfitForDate(date)).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            stack_error_response(StackError::Generation(GenerationError::NoInventory {
                style: None,
                categories: vec![Category::Shoes],
            }))
            .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            stack_error_response(StackError::infrastructure("down")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
