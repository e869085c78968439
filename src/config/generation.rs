//! Outfit generation tuning

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::application::GenerationSettings;
use crate::domain::outfit::{OutfitComposer, DEFAULT_OUTERWEAR_PROBABILITY};
use crate::domain::stack::{MAX_STACK_DAYS, MIN_STACK_DAYS};

/// Limits and probabilities of the generation engine
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationConfig {
    /// Composer attempts budgeted per requested outfit
    #[serde(default = "default_attempts_per_outfit")]
    pub attempts_per_outfit: u32,

    /// Wall-clock bound on one generation call, in milliseconds
    #[serde(default = "default_deadline_ms")]
    pub deadline_ms: u64,

    #[serde(default = "default_outerwear_probability")]
    pub outerwear_probability: f64,

    /// Length of the stack created when today's outfit is requested
    /// without an active stack
    #[serde(default = "default_days")]
    pub default_days: u32,
}

impl GenerationConfig {
    pub fn deadline(&self) -> Duration {
        Duration::from_millis(self.deadline_ms)
    }

    pub fn settings(&self) -> GenerationSettings {
        GenerationSettings {
            attempts_per_outfit: self.attempts_per_outfit,
            deadline: self.deadline(),
        }
    }

    pub fn composer(&self) -> OutfitComposer {
        OutfitComposer::new(self.outerwear_probability)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=1000).contains(&self.attempts_per_outfit) {
            return Err(ValidationError::InvalidAttemptBudget);
        }
        if !(1..=60_000).contains(&self.deadline_ms) {
            return Err(ValidationError::InvalidDeadline);
        }
        if !(0.0..=1.0).contains(&self.outerwear_probability) {
            return Err(ValidationError::InvalidProbability);
        }
        if !(MIN_STACK_DAYS..=MAX_STACK_DAYS).contains(&self.default_days) {
            return Err(ValidationError::InvalidDefaultDays);
        }
        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            attempts_per_outfit: default_attempts_per_outfit(),
            deadline_ms: default_deadline_ms(),
            outerwear_probability: default_outerwear_probability(),
            default_days: default_days(),
        }
    }
}

fn default_attempts_per_outfit() -> u32 {
    50
}

fn default_deadline_ms() -> u64 {
    5000
}

fn default_outerwear_probability() -> f64 {
    DEFAULT_OUTERWEAR_PROBABILITY
}

fn default_days() -> u32 {
    7
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GenerationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.settings().attempts_per_outfit, 50);
        assert_eq!(config.deadline(), Duration::from_secs(5));
    }

    #[test]
    fn rejects_out_of_range_values() {
        let cases = [
            (
                GenerationConfig {
                    attempts_per_outfit: 0,
                    ..Default::default()
                },
                ValidationError::InvalidAttemptBudget,
            ),
            (
                GenerationConfig {
                    deadline_ms: 0,
                    ..Default::default()
                },
                ValidationError::InvalidDeadline,
            ),
            (
                GenerationConfig {
                    outerwear_probability: 1.5,
                    ..Default::default()
                },
                ValidationError::InvalidProbability,
            ),
            (
                GenerationConfig {
                    default_days: 31,
                    ..Default::default()
                },
                ValidationError::InvalidDefaultDays,
            ),
        ];
        for (config, expected) in cases {
            assert_eq!(config.validate(), Err(expected));
        }
    }
}
