//! Tree loading error types.

use thiserror::Error;

/// Errors that can occur while loading or storing a tree.
#[derive(Debug, Error)]
pub enum AstError {
    /// The JSON document is not a valid node list.
    #[error("Invalid tree JSON: {0}")]
    Json(#[from] serde_json::Error),
}
