// ABOUTME: Error types for the sweep engine.
// ABOUTME: Covers layout profile loading, selector compilation, and page URL parsing.

use std::fmt;

use thiserror::Error;

/// Errors raised while building the engine or attaching it to a page.
/// Classification itself never errors; a rule that cannot evaluate simply
/// does not match.
#[derive(Debug, Error)]
pub enum SweepError {
    /// The layout profile failed to parse or failed validation.
    #[error("invalid layout profile: {0}")]
    Profile(String),

    /// A selector in the layout profile did not compile.
    #[error("invalid selector `{selector}` in layout profile")]
    Selector { selector: String },

    /// The page URL could not be parsed.
    #[error("invalid page URL: {0}")]
    Url(String),
}

impl SweepError {
    /// Creates a Profile error from any displayable source.
    pub fn profile(err: impl fmt::Display) -> Self {
        SweepError::Profile(err.to_string())
    }

    /// Creates a Selector error for the selector that failed to compile.
    pub fn selector(selector: impl Into<String>) -> Self {
        SweepError::Selector {
            selector: selector.into(),
        }
    }

    /// Creates a Url error from any displayable source.
    pub fn url(err: impl fmt::Display) -> Self {
        SweepError::Url(err.to_string())
    }
}
