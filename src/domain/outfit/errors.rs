//! Outfit generation and outfit maintenance errors.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ItemId, OutfitId, ValidationError};
use crate::domain::wardrobe::{Category, Style};

/// Closed set of failures of the generation engine.
///
/// Every variant carries the structured fields a client needs to act on it,
/// and most provide a remediation hint.
#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{}", no_inventory_message(*style, categories))]
    NoInventory {
        style: Option<Style>,
        categories: Vec<Category>,
    },

    #[error("No garments in the selected categories: {}", join(categories))]
    NoMatchingCategory { categories: Vec<Category> },

    #[error("No style has a complete outfit (shoes plus top and bottom, or a one-piece)")]
    IncompatibleStyles { styles_present: Vec<Style> },

    #[error("Not enough garments to build an outfit, missing: {}", join(missing))]
    MissingCategories { missing: Vec<Category> },

    #[error("Could not generate any valid outfit after {attempts} attempts")]
    GenerationFailed { attempts: u32, requested: u32 },

    #[error("Outfit generation timed out after {elapsed_ms} ms")]
    Timeout { elapsed_ms: u64 },

    #[error("{0}")]
    Persistence(DomainError),
}

impl GenerationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            GenerationError::Validation(_) => ErrorCode::ValidationFailed,
            GenerationError::NoInventory { .. } => ErrorCode::NoInventory,
            GenerationError::NoMatchingCategory { .. } => ErrorCode::NoMatchingCategory,
            GenerationError::IncompatibleStyles { .. } => ErrorCode::IncompatibleStyles,
            GenerationError::MissingCategories { .. } => ErrorCode::MissingCategories,
            GenerationError::GenerationFailed { .. } => ErrorCode::GenerationFailed,
            GenerationError::Timeout { .. } => ErrorCode::GenerationTimeout,
            GenerationError::Persistence(err) => err.code,
        }
    }

    /// What the user can do about it, when there is something to do.
    pub fn remediation(&self) -> Option<String> {
        match self {
            GenerationError::Validation(_) | GenerationError::Persistence(_) => None,
            GenerationError::NoInventory { style, categories } => Some(match style {
                Some(style) => format!(
                    "Add {} garments in categories: {}",
                    style,
                    join(categories)
                ),
                None => format!("Add garments in categories: {}", join(categories)),
            }),
            GenerationError::NoMatchingCategory { categories } => Some(format!(
                "Add at least one item in categories: {}",
                join(categories)
            )),
            GenerationError::IncompatibleStyles { .. } => Some(
                "Make sure one style has shoes plus a top and bottom, or a one-piece".to_string(),
            ),
            GenerationError::MissingCategories { missing } => Some(format!(
                "Add at least one item in: {}",
                join(missing)
            )),
            GenerationError::GenerationFailed { .. } => Some(
                "Try different category or style combinations".to_string(),
            ),
            GenerationError::Timeout { .. } => Some("Try again with fewer days".to_string()),
        }
    }

    /// True when the caller's input or inventory is at fault.
    pub fn is_client_error(&self) -> bool {
        !matches!(
            self,
            GenerationError::Timeout { .. } | GenerationError::Persistence(_)
        )
    }
}

impl From<DomainError> for GenerationError {
    fn from(err: DomainError) -> Self {
        GenerationError::Persistence(err)
    }
}

fn no_inventory_message(style: Option<Style>, categories: &[Category]) -> String {
    match style {
        Some(style) => format!(
            "No {} garments found in the selected categories ({})",
            style,
            join(categories)
        ),
        None => format!(
            "No garments found in the selected categories ({})",
            join(categories)
        ),
    }
}

fn join(categories: &[Category]) -> String {
    categories
        .iter()
        .map(|c| c.display_name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors of outfit maintenance (favorites, item replacement).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutfitError {
    /// Outfit missing or owned by someone else.
    NotFound(OutfitId),
    /// Replacement item missing, inactive, or owned by someone else.
    ItemNotFound(ItemId),
    /// Replacement item is not of the requested category.
    CategoryMismatch { expected: Category, actual: Category },
    /// The outfit has nothing in the category being replaced.
    NothingToReplace(Category),
    /// Infrastructure error.
    Infrastructure(String),
}

impl OutfitError {
    pub fn not_found(id: OutfitId) -> Self {
        OutfitError::NotFound(id)
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        OutfitError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            OutfitError::NotFound(_) => ErrorCode::OutfitNotFound,
            OutfitError::ItemNotFound(_) => ErrorCode::ItemNotFound,
            OutfitError::CategoryMismatch { .. } | OutfitError::NothingToReplace(_) => {
                ErrorCode::ValidationFailed
            }
            OutfitError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            OutfitError::NotFound(id) => format!("Outfit not found: {}", id),
            OutfitError::ItemNotFound(id) => format!("Item not found: {}", id),
            OutfitError::CategoryMismatch { expected, actual } => format!(
                "Item belongs to category {}, expected {}",
                actual, expected
            ),
            OutfitError::NothingToReplace(category) => {
                format!("Outfit has no item in category {}", category)
            }
            OutfitError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for OutfitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for OutfitError {}

impl From<DomainError> for OutfitError {
    fn from(err: DomainError) -> Self {
        OutfitError::Infrastructure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_categories_hint_lists_catalogue_names() {
        let err = GenerationError::MissingCategories {
            missing: vec![Category::Bottom, Category::Shoes],
        };
        assert_eq!(err.code(), ErrorCode::MissingCategories);
        assert_eq!(
            err.remediation().as_deref(),
            Some("Add at least one item in: Inferior, Zapatos")
        );
        assert!(err.is_client_error());
    }

    #[test]
    fn no_inventory_names_style_and_categories() {
        let err = GenerationError::NoInventory {
            style: Some(Style::Formal),
            categories: vec![Category::Top, Category::Bottom, Category::Shoes],
        };
        assert_eq!(
            err.to_string(),
            "No Formal garments found in the selected categories (Superior, Inferior, Zapatos)"
        );
        assert_eq!(
            err.remediation().as_deref(),
            Some("Add Formal garments in categories: Superior, Inferior, Zapatos")
        );
    }

    #[test]
    fn persistence_errors_keep_the_infrastructure_code() {
        let err: GenerationError =
            DomainError::new(ErrorCode::DatabaseError, "connection lost").into();
        assert_eq!(err.code(), ErrorCode::DatabaseError);
        assert!(!err.is_client_error());
        assert!(err.remediation().is_none());
    }

    #[test]
    fn timeout_is_a_server_error() {
        let err = GenerationError::Timeout { elapsed_ms: 5000 };
        assert_eq!(err.code(), ErrorCode::GenerationTimeout);
        assert!(!err.is_client_error());
    }

    #[test]
    fn outfit_error_category_mismatch_message() {
        let err = OutfitError::CategoryMismatch {
            expected: Category::Top,
            actual: Category::Shoes,
        };
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert_eq!(
            err.message(),
            "Item belongs to category Zapatos, expected Superior"
        );
    }
}
