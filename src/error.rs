//! Custom error types for the income list
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for income list operations
#[derive(Error, Debug)]
pub enum IncomeError {
    /// A drop gesture could not be turned into a move
    ///
    /// Raised when the rendered list and the gesture source disagree, so it
    /// must reach the caller instead of being swallowed.
    #[error("Invalid move: {0}")]
    InvalidMove(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl IncomeError {
    /// The moved category is absent from the snapshot
    pub fn moved_category_not_found() -> Self {
        Self::InvalidMove("category not found".into())
    }

    /// The moved category is ungrouped
    pub fn category_has_no_group() -> Self {
        Self::InvalidMove("category has no group".into())
    }

    /// The drop target is absent from the snapshot
    pub fn target_not_found() -> Self {
        Self::InvalidMove("target category not found".into())
    }

    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Check if this is an invalid move
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, Self::InvalidMove(_))
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<std::io::Error> for IncomeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for IncomeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for income list operations
pub type IncomeResult<T> = Result<T, IncomeError>;
