//! JSON form of a tree.
//!
//! Each node is an object tagged by `"kind"`:
//!
//! ```json
//! [{ "kind": "rule", "selector": ".a", "nodes": [
//!   { "kind": "declaration", "property": "color", "value": "red" }
//! ]}]
//! ```
//!
//! `serde_json` limits nesting to 128 levels; deeper trees have to be built
//! in memory.

use crate::{AstError, Node};

/// Parses a JSON array of root nodes.
pub fn parse_json(source: &str) -> Result<Vec<Node>, AstError> {
    Ok(serde_json::from_str(source)?)
}

/// Serializes root nodes as pretty-printed JSON.
pub fn to_json(nodes: &[Node]) -> Result<String, AstError> {
    Ok(serde_json::to_string_pretty(nodes)?)
}
