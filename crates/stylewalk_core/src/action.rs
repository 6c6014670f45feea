//! Walk control flow.

use std::ops::ControlFlow;

use stylewalk_ast::Node;
use tracing::trace;

/// Result type for exit hooks.
///
/// - `ControlFlow::Continue(())` - keep walking
/// - `ControlFlow::Break(())` - stop the walk
pub type VisitResult = ControlFlow<()>;

/// What the engine should do after a visitor has entered a node.
///
/// # Replacement and control flow
///
/// A visit may ask for replacement once, either through
/// [`VisitContext::replace_with`](crate::VisitContext::replace_with) or by
/// returning [`WalkAction::Replace`]. The first request wins. After a
/// replacement the returned action decides what happens to the inserted
/// nodes:
///
/// - `Continue` (or `Replace`): the engine looks at the same index again, so
///   the first inserted node is entered as if freshly encountered. This is
///   what lets an expansion be expanded further.
/// - `Skip` or `Stop`: the engine jumps past all inserted nodes and carries
///   on with the next sibling. `Stop` does **not** abort the walk in this
///   combination. This mirrors long-standing behavior of the tree passes
///   built on this engine and is kept for compatibility.
///
/// Without a replacement, `Stop` aborts the whole walk.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum WalkAction {
    /// Enter the node's children (if any), then move to the next sibling.
    #[default]
    Continue,
    /// Do not enter the node's children.
    Skip,
    /// Abort the walk; [`WalkOutcome::Stopped`] reaches the caller.
    Stop,
    /// Splice these nodes in place of the visited one, then continue at the
    /// same index.
    Replace(Vec<Node>),
}

/// How a walk ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkOutcome {
    /// Every reachable node was visited.
    Completed,
    /// A visitor asked to stop.
    Stopped,
}

impl WalkOutcome {
    #[inline]
    pub const fn is_stopped(&self) -> bool {
        matches!(self, WalkOutcome::Stopped)
    }
}

/// The step an engine takes after `enter`, shared by both engines.
#[derive(Debug)]
pub(crate) enum Step {
    Descend,
    Skip,
    Stop,
    Splice { nodes: Vec<Node>, revisit: bool },
}

impl Step {
    /// Combines the returned action with a replacement requested through the
    /// visit context.
    pub(crate) fn resolve(action: WalkAction, requested: Option<Vec<Node>>) -> Self {
        match (action, requested) {
            (WalkAction::Replace(ignored), Some(nodes)) => {
                trace!(
                    ignored = ignored.len(),
                    "replacement already requested, ignoring returned nodes"
                );
                Step::Splice {
                    nodes,
                    revisit: true,
                }
            }
            (WalkAction::Replace(nodes), None) | (WalkAction::Continue, Some(nodes)) => {
                Step::Splice {
                    nodes,
                    revisit: true,
                }
            }
            (WalkAction::Skip | WalkAction::Stop, Some(nodes)) => Step::Splice {
                nodes,
                revisit: false,
            },
            (WalkAction::Continue, None) => Step::Descend,
            (WalkAction::Skip, None) => Step::Skip,
            (WalkAction::Stop, None) => Step::Stop,
        }
    }
}

/// Replaces `nodes[index]` with `replacement` and returns how many nodes
/// were inserted.
pub(crate) fn splice(nodes: &mut Vec<Node>, index: usize, replacement: Vec<Node>) -> usize {
    let inserted = replacement.len();
    match inserted {
        // Later siblings shift left by one
        0 => {
            nodes.remove(index);
        }
        // Overwrite in place, nothing shifts
        1 => {
            if let Some(node) = replacement.into_iter().next() {
                nodes[index] = node;
            }
        }
        // Later siblings shift right by `inserted - 1`
        _ => {
            nodes.splice(index..=index, replacement);
        }
    }
    trace!(index, inserted, "spliced replacement");
    inserted
}
