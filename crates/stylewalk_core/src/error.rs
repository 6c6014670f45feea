//! Walk error types.
//!
//! Traversal itself never fails; these cover configuration and the guards
//! applied before a walk starts.

use thiserror::Error;

/// Errors that can occur around a walk.
#[derive(Debug, Error)]
pub enum WalkError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The tree is nested deeper than the configured limit for the
    /// recursive engine.
    #[error("Tree depth {depth} exceeds the recursive engine limit of {limit}")]
    DepthLimit { limit: usize, depth: usize },
}

impl WalkError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
