//! HS256 JWT adapter for session validation.
//!
//! Tokens are issued by the login endpoint of the user service and signed
//! with a shared secret. The payload carries the numeric user id as
//! `id_usuario` (or `sub`), an optional `email`, and `exp`.
//!
//! # Example
//!
//! ```ignore
//! use lookmatch::adapters::auth::{JwtConfig, JwtSessionValidator};
//!
//! let validator = JwtSessionValidator::new(JwtConfig::new(secret));
//! let user = validator.validate("eyJ...").await?;
//! ```

use async_trait::async_trait;
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// Configuration for the JWT adapter.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Shared HMAC secret.
    pub secret: SecretString,

    /// Clock skew tolerated on `exp`, in seconds.
    pub leeway_secs: u64,
}

impl JwtConfig {
    pub fn new(secret: SecretString) -> Self {
        Self {
            secret,
            leeway_secs: 30,
        }
    }

    pub fn with_leeway(mut self, leeway_secs: u64) -> Self {
        self.leeway_secs = leeway_secs;
        self
    }
}

/// Claims written by the login endpoint.
#[derive(Debug, Deserialize)]
struct SessionClaims {
    #[serde(default)]
    id_usuario: Option<i64>,

    /// Some issuers put the id in `sub` as a string.
    #[serde(default)]
    sub: Option<String>,

    #[serde(default)]
    email: Option<String>,

    #[allow(dead_code)]
    exp: i64,
}

impl SessionClaims {
    fn user_id(&self) -> Option<UserId> {
        let raw = match (self.id_usuario, self.sub.as_deref()) {
            (Some(id), _) => id,
            (None, Some(sub)) => sub.parse().ok()?,
            (None, None) => return None,
        };
        UserId::new(raw).ok()
    }
}

/// Validates HS256 tokens against the shared secret.
pub struct JwtSessionValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtSessionValidator {
    pub fn new(config: JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = config.leeway_secs;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            decoding_key: DecodingKey::from_secret(config.secret.expose_secret().as_bytes()),
            validation,
        }
    }
}

#[async_trait]
impl SessionValidator for JwtSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let data = decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token expired");
                    AuthError::TokenExpired
                }
                ErrorKind::InvalidSignature => {
                    tracing::warn!("Token signature mismatch");
                    AuthError::InvalidToken
                }
                _ => {
                    tracing::warn!("Token validation failed: {}", e);
                    AuthError::InvalidToken
                }
            })?;

        let claims = data.claims;
        let user_id = claims.user_id().ok_or_else(|| {
            tracing::warn!("Token carries no usable user id");
            AuthError::MissingSubject
        })?;

        Ok(AuthenticatedUser::new(user_id, claims.email))
    }
}
