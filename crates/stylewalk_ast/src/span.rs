//! Source ranges attached to nodes by the parser.

use serde::{Deserialize, Serialize};

/// A byte range in the source stylesheet.
///
/// Walks never read or rewrite spans. They travel with the node they were
/// attached to and are dropped with it when that node is replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (0-indexed, inclusive).
    pub start: u32,
    /// End byte offset (0-indexed, exclusive).
    pub end: u32,
}

impl Span {
    /// Creates a new span.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }
}
