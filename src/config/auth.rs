//! Authentication configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Minimum secret length accepted in production.
pub const MIN_PRODUCTION_SECRET_LEN: usize = 32;

/// Session token settings (HS256 shared secret)
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Secret the login service signs tokens with
    pub jwt_secret: SecretString,

    /// Clock skew tolerated on expiry, in seconds
    #[serde(default = "default_leeway")]
    pub leeway_secs: u64,
}

impl AuthConfig {
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: SecretString::new(jwt_secret.into()),
            leeway_secs: default_leeway(),
        }
    }

    /// Any non-empty secret in development; a long one in production.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let secret = self.jwt_secret.expose_secret();
        if secret.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__JWT_SECRET"));
        }
        if *environment == Environment::Production && secret.len() < MIN_PRODUCTION_SECRET_LEN {
            return Err(ValidationError::JwtSecretTooShort(MIN_PRODUCTION_SECRET_LEN));
        }
        Ok(())
    }
}

fn default_leeway() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_secret_is_missing() {
        let config = AuthConfig::new("");
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::MissingRequired("AUTH__JWT_SECRET"))
        );
    }

    #[test]
    fn short_secret_only_passes_outside_production() {
        let config = AuthConfig::new("dev-secret");
        assert!(config.validate(&Environment::Development).is_ok());
        assert_eq!(
            config.validate(&Environment::Production),
            Err(ValidationError::JwtSecretTooShort(MIN_PRODUCTION_SECRET_LEN))
        );
    }

    #[test]
    fn long_secret_passes_in_production() {
        let config = AuthConfig::new("x".repeat(MIN_PRODUCTION_SECRET_LEN));
        assert!(config.validate(&Environment::Production).is_ok());
        assert_eq!(config.leeway_secs, 30);
    }

    #[test]
    fn debug_output_hides_the_secret() {
        let config = AuthConfig::new("super-secret-value");
        assert!(!format!("{:?}", config).contains("super-secret-value"));
    }
}
