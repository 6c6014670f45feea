//! Walk configuration.
//!
//! Read from a JSON file such as:
//!
//! ```json
//! { "engine": "recursive", "max_depth": 512 }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Engine, WalkError};

/// Settings for [`walk_with_config`](crate::walk_with_config).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WalkConfig {
    /// Engine to walk with.
    pub engine: Engine,

    /// Deepest tree the recursive engine accepts. Ignored by the
    /// iterative engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

impl WalkConfig {
    /// Loads configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, WalkError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_json(&content)?;
        debug!(path = %path.display(), engine = %config.engine, "loaded walk config");
        Ok(config)
    }

    /// Parses configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, WalkError> {
        let config: Self = serde_json::from_str(json)?;
        if config.max_depth == Some(0) {
            return Err(WalkError::config("max_depth must be at least 1"));
        }
        Ok(config)
    }

    pub fn with_engine(mut self, engine: Engine) -> Self {
        self.engine = engine;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}
