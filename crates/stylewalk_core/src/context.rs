//! The capability bundle handed to visitors.

use stylewalk_ast::{ContextMap, ContextValue, Node};
use tracing::trace;

use crate::Path;

/// What a visitor can see and do while visiting one node.
///
/// Read-only views of the parent, the path and the ambient context, plus
/// the single replacement request a visit is allowed to make.
#[derive(Debug)]
pub struct VisitContext<'a> {
    path: Path<'a>,
    context: &'a ContextMap,
    replacement: Option<Vec<Node>>,
}

impl<'a> VisitContext<'a> {
    pub(crate) fn new(path: Path<'a>, context: &'a ContextMap) -> Self {
        Self {
            path,
            context,
            replacement: None,
        }
    }

    /// Returns the closest non-context ancestor, `None` at the top level.
    #[inline]
    pub fn parent(&self) -> Option<&'a Node> {
        self.path.parent()
    }

    /// Returns the ancestor chain, root first, excluding context wrappers.
    #[inline]
    pub fn path(&self) -> &Path<'a> {
        &self.path
    }

    /// Returns the number of non-context ancestors.
    #[inline]
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Returns the ambient context merged from all enclosing context nodes.
    #[inline]
    pub fn context(&self) -> &'a ContextMap {
        self.context
    }

    /// Looks up a single ambient context key.
    #[inline]
    pub fn context_value(&self, key: &str) -> Option<&'a ContextValue> {
        self.context.get(key)
    }

    /// Requests that the visited node be replaced by `nodes`.
    ///
    /// An empty list deletes the node. Only the first request of a visit
    /// is honored; later ones are ignored.
    pub fn replace_with(&mut self, nodes: impl IntoIterator<Item = Node>) {
        if self.replacement.is_some() {
            trace!("replacement already requested, ignoring");
            return;
        }
        self.replacement = Some(nodes.into_iter().collect());
    }

    /// Requests that the visited node be replaced by a single node.
    pub fn replace_with_node(&mut self, node: Node) {
        self.replace_with([node]);
    }

    /// Returns true once a replacement has been requested during this visit.
    #[inline]
    pub fn is_replaced(&self) -> bool {
        self.replacement.is_some()
    }

    pub(crate) fn take_replacement(&mut self) -> Option<Vec<Node>> {
        self.replacement.take()
    }
}

/// Shallow-merges `overlay` over `base`; keys in `overlay` win.
pub fn merge_context(base: &ContextMap, overlay: &ContextMap) -> ContextMap {
    let mut merged = base.clone();
    merged.extend(
        overlay
            .iter()
            .map(|(key, value)| (key.clone(), value.clone())),
    );
    merged
}
