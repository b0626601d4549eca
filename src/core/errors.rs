/*!
 * Error Types
 * Centralized error handling with thiserror and miette
 */

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias for the fallible helpers
pub type UtilityResult<T> = Result<T, UtilityError>;

/// Errors raised by the filesystem and address helpers
#[derive(Error, Debug, Diagnostic)]
pub enum UtilityError {
    #[error("I/O error on {path}: {source}")]
    #[diagnostic(
        code(utility::io),
        help("Check that the path exists and is readable by the test process.")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid IP address literal: {0}")]
    #[diagnostic(
        code(utility::invalid_address),
        help("DNS responses take bare IPv4 or IPv6 literals without a port.")
    )]
    InvalidAddress(String),
}

impl UtilityError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors raised while reading configuration from the environment
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {var}: expected a signed 32-bit integer")]
    #[diagnostic(
        code(config::invalid_seed),
        help("Pass the seed exactly as printed by the failing run.")
    )]
    InvalidSeed { var: &'static str, value: String },
}
