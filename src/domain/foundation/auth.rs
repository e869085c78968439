//! Authentication types for the domain layer.
//!
//! The wardrobe core never authenticates anyone itself: an adapter behind the
//! `SessionValidator` port validates the bearer token and produces an
//! [`AuthenticatedUser`] that every use case receives as its owner identity.

use super::UserId;
use thiserror::Error;

/// Authenticated user extracted from a validated token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The owner id every wardrobe query is scoped to.
    pub id: UserId,

    /// Email claim, when the token carries one.
    pub email: Option<String>,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    pub fn new(id: UserId, email: Option<String>) -> Self {
        Self { id, email }
    }
}

/// Authentication errors that can occur during token validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token has expired.
    #[error("Token expired")]
    TokenExpired,

    /// The token is valid but carries no usable user id.
    #[error("Token does not identify a user")]
    MissingSubject,
}
