//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors raised while validating request-level input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        actual: i64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("Invalid category selection: {reason}")]
    InvalidCategorySelection { reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i64, max: i64, actual: i64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a category selection error.
    pub fn invalid_selection(reason: impl Into<String>) -> Self {
        ValidationError::InvalidCategorySelection {
            reason: reason.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,

    // Not found errors
    ItemNotFound,
    OutfitNotFound,
    StackNotFound,

    // Inventory errors
    NoInventory,
    NoMatchingCategory,
    IncompatibleStyles,
    MissingCategories,

    // Generation errors
    GenerationFailed,
    GenerationTimeout,

    // Authorization errors
    Unauthorized,
    Forbidden,

    // Infrastructure errors
    DatabaseError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::ItemNotFound => "ITEM_NOT_FOUND",
            ErrorCode::OutfitNotFound => "OUTFIT_NOT_FOUND",
            ErrorCode::StackNotFound => "STACK_NOT_FOUND",
            ErrorCode::NoInventory => "NO_INVENTORY",
            ErrorCode::NoMatchingCategory => "NO_MATCHING_CATEGORY",
            ErrorCode::IncompatibleStyles => "INCOMPATIBLE_STYLES",
            ErrorCode::MissingCategories => "MISSING_CATEGORIES",
            ErrorCode::GenerationFailed => "GENERATION_FAILED",
            ErrorCode::GenerationTimeout => "GENERATION_TIMEOUT",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
///
/// This is the error type carried across ports; adapters translate driver
/// failures into it.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a database error, prefixing the driver message with context.
    pub fn database(context: &str, err: impl fmt::Display) -> Self {
        Self::new(ErrorCode::DatabaseError, format!("{}: {}", context, err))
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        DomainError::new(ErrorCode::ValidationFailed, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("days", 1, 30, 31);
        assert_eq!(
            format!("{}", err),
            "Field 'days' must be between 1 and 30, got 31"
        );
    }

    #[test]
    fn validation_error_invalid_selection_displays_reason() {
        let err = ValidationError::invalid_selection("shoes are mandatory");
        assert_eq!(
            format!("{}", err),
            "Invalid category selection: shoes are mandatory"
        );
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::OutfitNotFound, "Outfit not found");
        assert_eq!(format!("{}", err), "[OUTFIT_NOT_FOUND] Outfit not found");
    }

    #[test]
    fn database_error_carries_context() {
        let err = DomainError::database("Failed to insert outfit", "connection reset");
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.message, "Failed to insert outfit: connection reset");
    }

    #[test]
    fn domain_error_with_detail_adds_detail() {
        let err = DomainError::new(ErrorCode::ValidationFailed, "Validation failed")
            .with_detail("field", "days");
        assert_eq!(err.details.get("field"), Some(&"days".to_string()));
    }

    #[test]
    fn validation_error_converts_into_domain_error() {
        let err: DomainError = ValidationError::empty_field("style").into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }
}
