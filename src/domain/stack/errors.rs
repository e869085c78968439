//! Stack query errors.

use chrono::NaiveDate;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::outfit::GenerationError;

/// Errors of the stack read side (listing, today's outfit).
#[derive(Debug, Clone)]
pub enum StackError {
    /// A stack covers today, but no outfit is assigned to it.
    NoOutfitForDate(NaiveDate),
    /// Creating the fallback stack failed.
    Generation(GenerationError),
    /// Infrastructure error.
    Infrastructure(String),
}

impl StackError {
    pub fn infrastructure(message: impl Into<String>) -> Self {
        StackError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            StackError::NoOutfitForDate(_) => ErrorCode::OutfitNotFound,
            StackError::Generation(err) => err.code(),
            StackError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            StackError::NoOutfitForDate(date) => format!("No outfit generated for {}", date),
            StackError::Generation(err) => err.to_string(),
            StackError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for StackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for StackError {}

impl From<DomainError> for StackError {
    fn from(err: DomainError) -> Self {
        StackError::Infrastructure(err.to_string())
    }
}

impl From<GenerationError> for StackError {
    fn from(err: GenerationError) -> Self {
        StackError::Generation(err)
    }
}
