//! Core error types.

use thiserror::Error;

/// Errors raised by the catalog, order model, and session store.
#[derive(Debug, Error)]
pub enum Error {
    /// A caller passed a value outside a closed set (ingredient type, ingredient id).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No live session with this id.
    #[error("session not found: {0}")]
    SessionNotFound(String),

    /// The store refused to open another session.
    #[error("too many sessions (max: {0})")]
    TooManySessions(usize),

    /// A session attribute exists but holds a different type.
    #[error("session attribute `{key}` has an unexpected type")]
    AttributeType {
        /// Attribute key.
        key: String,
    },

    /// A submitted taco failed validation.
    #[error("invalid taco: {}", .0.join("; "))]
    InvalidTaco(Vec<String>),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, Error>;
