//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, error types and the authenticated-user value
//! that form the vocabulary of the Lookmatch domain.

mod auth;
mod errors;
mod ids;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ItemId, OutfitId, StackId, UserId};
