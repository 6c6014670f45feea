//! Key/value overlays carried by context nodes.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The overlay a [`Context`](crate::Context) node exposes to its descendants.
///
/// Ordered so that printing and comparing ambient contexts is deterministic.
pub type ContextMap = BTreeMap<String, ContextValue>;

/// A single context value: either a string or a flag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContextValue {
    Bool(bool),
    Str(String),
}

impl From<&str> for ContextValue {
    fn from(value: &str) -> Self {
        ContextValue::Str(value.to_string())
    }
}

impl From<String> for ContextValue {
    fn from(value: String) -> Self {
        ContextValue::Str(value)
    }
}

impl From<bool> for ContextValue {
    fn from(flag: bool) -> Self {
        ContextValue::Bool(flag)
    }
}

impl fmt::Display for ContextValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextValue::Bool(flag) => write!(f, "{flag}"),
            ContextValue::Str(value) => f.write_str(value),
        }
    }
}
