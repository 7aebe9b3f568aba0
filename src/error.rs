//! Error types for buffer edits, fold operations and configuration.
//!
//! The scanner itself has no error channel: malformed source is classified,
//! never rejected.

use thiserror::Error;

/// Errors from editing the line buffer or the fold tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// A line index past the end of the buffer.
    #[error("line {index} out of range (buffer has {len} lines)")]
    LineOutOfRange { index: usize, len: usize },

    /// A fold id that does not name a range of the current tree.
    #[error("unknown fold range: {0}")]
    UnknownFold(usize),
}

impl EditError {
    /// Create a line out of range error.
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::LineOutOfRange { index, len }
    }
}

/// Errors from building or loading an editor configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A fold region with an empty open or close symbol.
    #[error("fold region has an empty {which} symbol")]
    EmptySymbol { which: &'static str },

    /// An attribute name that is not in the registry.
    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),

    /// JSON parsing error.
    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConfigError {
    /// Create an unknown attribute error.
    pub fn unknown_attribute(name: impl Into<String>) -> Self {
        Self::UnknownAttribute(name.into())
    }
}
