//! Item lifecycle errors.

use crate::domain::foundation::{DomainError, ErrorCode, ItemId, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemError {
    /// Item missing or owned by someone else.
    NotFound(ItemId),
    Validation(ValidationError),
    /// Color name absent from the palette.
    UnknownColor(String),
    /// Subcategory name absent from the category's catalogue.
    UnknownSubcategory(String),
    Infrastructure(String),
}

impl ItemError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ItemError::NotFound(_) => ErrorCode::ItemNotFound,
            ItemError::Validation(_)
            | ItemError::UnknownColor(_)
            | ItemError::UnknownSubcategory(_) => ErrorCode::ValidationFailed,
            ItemError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ItemError::NotFound(id) => format!("Item not found: {}", id),
            ItemError::Validation(err) => err.to_string(),
            ItemError::UnknownColor(name) => format!("Unknown color: {}", name),
            ItemError::UnknownSubcategory(name) => format!("Unknown subcategory: {}", name),
            ItemError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for ItemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ItemError {}

impl From<ValidationError> for ItemError {
    fn from(err: ValidationError) -> Self {
        ItemError::Validation(err)
    }
}

impl From<DomainError> for ItemError {
    fn from(err: DomainError) -> Self {
        ItemError::Infrastructure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_misses_are_client_errors() {
        let err = ItemError::UnknownColor("Turquesa".to_string());
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert_eq!(err.message(), "Unknown color: Turquesa");
    }

    #[test]
    fn not_found_names_the_item() {
        let err = ItemError::NotFound(ItemId::new(12));
        assert_eq!(err.code(), ErrorCode::ItemNotFound);
        assert_eq!(err.to_string(), "Item not found: 12");
    }
}
