//! Mock session validator for testing.
//!
//! Maps opaque test tokens to users, so HTTP tests don't need to sign JWTs.
//!
//! # Example
//!
//! ```ignore
//! use lookmatch::adapters::auth::MockSessionValidator;
//!
//! let validator = MockSessionValidator::new().with_test_user("valid-token", 1);
//! let result = validator.validate("valid-token").await;
//! assert!(result.is_ok());
//! ```

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// Token-to-user lookup table. Unknown tokens return `InvalidToken`.
#[derive(Debug, Default)]
pub struct MockSessionValidator {
    tokens: HashMap<String, AuthenticatedUser>,
    /// Returned for every validation when set.
    force_error: Option<AuthError>,
}

impl MockSessionValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a valid token that maps to a user.
    pub fn with_user(mut self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.tokens.insert(token.into(), user);
        self
    }

    /// Adds a valid token for user `user_id` with a generated email.
    ///
    /// Ids that are not positive are skipped, so the token stays invalid.
    pub fn with_test_user(self, token: impl Into<String>, user_id: i64) -> Self {
        match UserId::new(user_id) {
            Ok(id) => {
                let email = format!("user{}@test.example.com", user_id);
                self.with_user(token, AuthenticatedUser::new(id, Some(email)))
            }
            Err(_) => self,
        }
    }

    /// Forces all validations to return the specified error.
    pub fn with_error(mut self, error: AuthError) -> Self {
        self.force_error = Some(error);
        self
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        if let Some(error) = &self.force_error {
            return Err(error.clone());
        }

        self.tokens
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}
