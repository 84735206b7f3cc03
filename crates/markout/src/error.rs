//! Error types for table configuration.
//!
//! This module provides [`MarkupError`], the error type for every fallible
//! configuration operation: selector parsing, rule-sheet parsing, and options
//! loading. Rendering itself never fails; malformed optional inputs degrade
//! gracefully instead of erroring.

use std::fmt;

/// Error type for configuration operations.
///
/// Rendering functions return plain strings. Errors exist only where the
/// caller hands over configuration that cannot be honored at all — an unknown
/// selector token, an unparsable rule sheet, a broken options file.
#[derive(Debug)]
pub enum MarkupError {
    /// Invalid row or column selector token.
    SelectorError(String),

    /// CSS rule-sheet parse failure.
    StylesheetError(String),

    /// Options deserialization failure.
    ConfigError(String),

    /// Record conversion failure (non-map serialized value).
    RecordError(String),

    /// I/O error (e.g., reading options from disk).
    IoError(std::io::Error),
}

impl fmt::Display for MarkupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkupError::SelectorError(msg) => write!(f, "selector error: {}", msg),
            MarkupError::StylesheetError(msg) => write!(f, "stylesheet error: {}", msg),
            MarkupError::ConfigError(msg) => write!(f, "config error: {}", msg),
            MarkupError::RecordError(msg) => write!(f, "record error: {}", msg),
            MarkupError::IoError(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for MarkupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MarkupError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MarkupError {
    fn from(err: std::io::Error) -> Self {
        MarkupError::IoError(err)
    }
}

impl From<serde_yaml::Error> for MarkupError {
    fn from(err: serde_yaml::Error) -> Self {
        MarkupError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for MarkupError {
    fn from(err: serde_json::Error) -> Self {
        MarkupError::RecordError(err.to_string())
    }
}
