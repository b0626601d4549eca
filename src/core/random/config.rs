/*!
 * Random Source Configuration
 *
 * Seed selection for `SeededRandomSource`
 */

use crate::core::errors::ConfigError;
use crate::core::limits::RANDOM_SEED_ENV;
use std::env::VarError;

/// Random source configuration
///
/// `seed: None` means "draw one from OS entropy at construction".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomConfig {
    /// Explicit seed to replay a previous run
    pub seed: Option<i32>,
}

impl RandomConfig {
    /// Configuration pinned to a known seed
    pub const fn with_seed(seed: i32) -> Self {
        Self { seed: Some(seed) }
    }

    /// Read the seed override from `TEST_RANDOM_SEED`
    ///
    /// An unset or blank variable yields the default (entropy) configuration.
    /// A value that is not valid UTF-8 is rejected like any other bad seed.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(RANDOM_SEED_ENV) {
            Ok(value) => Self::parse(&value),
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(VarError::NotUnicode(raw)) => Err(ConfigError::InvalidSeed {
                var: RANDOM_SEED_ENV,
                value: raw.to_string_lossy().into_owned(),
            }),
        }
    }

    /// Parse a seed override as printed in a failing run's log
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        trimmed
            .parse::<i32>()
            .map(Self::with_seed)
            .map_err(|_| ConfigError::InvalidSeed {
                var: RANDOM_SEED_ENV,
                value: value.to_string(),
            })
    }
}
