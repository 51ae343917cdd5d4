//! Error types for vocab-core.

use thiserror::Error;

/// Result type alias using DrillError.
pub type Result<T> = std::result::Result<T, DrillError>;

/// Errors raised at the boundary of the drill engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrillError {
    #[error("unknown mode: {0}")]
    UnknownMode(String),

    #[error("unknown question format: {0}")]
    UnknownFormat(String),

    #[error("unknown review order: {0}")]
    UnknownReviewOrder(String),

    #[error("duplicate entry {key} at position {position}")]
    DuplicateKey { key: String, position: usize },

    #[error("empty {field} at position {position}")]
    EmptyField {
        field: &'static str,
        position: usize,
    },

    #[error("mastery level {level} out of range for {key}")]
    InvalidMastery { key: String, level: u8 },

    #[error("no active session")]
    NoActiveSession,

    #[error("session finished")]
    SessionFinished,
}
