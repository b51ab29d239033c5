//! Error types for command-guard

use thiserror::Error;

/// Errors raised while building or running the guard
#[derive(Debug, Error)]
pub enum GuardError {
    /// The embedded policy could not be decoded
    #[error("invalid guard configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// A rule pattern failed to compile
    #[error("rule {id} has an invalid pattern: {source}")]
    Pattern {
        id: String,
        #[source]
        source: regex::Error,
    },

    /// The hook payload was not a JSON object of the expected shape
    #[error("malformed hook input: {0}")]
    Input(#[from] serde_json::Error),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, GuardError>;
