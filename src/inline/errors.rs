//! Error types for tag inlining
//!
//! Only resolution failures are expected at runtime. A tag or attribute that
//! does not match is not an error and never surfaces here.

use thiserror::Error;

/// Result type alias for inlining operations
pub type InlineResult<T> = Result<T, InlineError>;

/// Error types for inlining operations
#[derive(Debug, Error)]
pub enum InlineError {
    /// Referenced path is missing from the file index, or present without content
    #[error("inline file: {path} not found")]
    ResolutionFailure { path: String },

    /// A tag, attribute, or file glob could not be compiled into a pattern
    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Settings could not be parsed
    #[error("Invalid inline settings: {0}")]
    Settings(String),
}

impl From<serde_json::Error> for InlineError {
    fn from(error: serde_json::Error) -> Self {
        InlineError::Settings(error.to_string())
    }
}

impl InlineError {
    /// Path that failed to resolve, if this is a resolution failure
    #[must_use]
    pub fn missing_path(&self) -> Option<&str> {
        match self {
            InlineError::ResolutionFailure { path } => Some(path),
            _ => None,
        }
    }
}
