// ABOUTME: Error types for configuration loading.
// ABOUTME: Provides ConfigError enum with Parse and Invalid variants.

use std::fmt;
use thiserror::Error;

/// Errors that can occur while loading settings or a rule policy.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse the configuration data (malformed JSON).
    #[error("failed to parse configuration: {0}")]
    Parse(String),

    /// The data was parsed but holds an unusable value.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Creates a Parse error from an underlying serde error.
    pub fn parse(err: impl fmt::Display) -> Self {
        ConfigError::Parse(err.to_string())
    }

    /// Creates an Invalid error with a custom message.
    pub fn invalid(msg: impl Into<String>) -> Self {
        ConfigError::Invalid(msg.into())
    }
}
