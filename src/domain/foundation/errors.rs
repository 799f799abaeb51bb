//! Error types for the domain layer.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i32,
        max: i32,
        actual: i32,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i32, max: i32, actual: i32) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Recoverable error categories surfaced by the engine.
///
/// None of these is fatal: the worst outcome is an empty or partial view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// A dataset slice failed to load (network, HTTP status, parse).
    ResourceUnavailable,
    /// The selection has no entry in an otherwise loaded dataset.
    MissingKey,
    /// A question label could not be resolved to a page.
    QuestionNotFound,
    /// A load resolved after a newer selection superseded it.
    StaleResult,
}

impl ErrorKind {
    /// Whether this kind should be shown to the user at all.
    pub fn is_user_visible(&self) -> bool {
        !matches!(self, ErrorKind::StaleResult)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::ResourceUnavailable => "RESOURCE_UNAVAILABLE",
            ErrorKind::MissingKey => "MISSING_KEY",
            ErrorKind::QuestionNotFound => "QUESTION_NOT_FOUND",
            ErrorKind::StaleResult => "STALE_RESULT",
        };
        write!(f, "{}", s)
    }
}
