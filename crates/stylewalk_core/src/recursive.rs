//! Walk engine backed by native recursion.
//!
//! Each nesting level costs one call frame, so this engine is bounded by the
//! thread's stack. Use [`walk_iterative`](crate::walk_iterative) for inputs
//! of unbounded depth, or cap the depth through
//! [`WalkConfig::max_depth`](crate::WalkConfig).

use std::mem;

use stylewalk_ast::{ContextMap, Node};
use tracing::debug;

use crate::action::{Step, splice};
use crate::path::PathLink;
use crate::{FnVisitor, Path, VisitContext, Visitor, WalkAction, WalkOutcome, merge_context};

/// Walks `nodes` depth-first, pre-order, rewriting them in place.
///
/// Returns [`WalkOutcome::Stopped`] if the visitor aborted the walk.
pub fn walk_recursive<V>(nodes: &mut Vec<Node>, visitor: &mut V) -> WalkOutcome
where
    V: Visitor + ?Sized,
{
    debug!(engine = "recursive", roots = nodes.len(), "walk started");
    let outcome = walk_siblings(nodes, visitor, None, &ContextMap::new());
    debug!(engine = "recursive", ?outcome, "walk finished");
    outcome
}

/// Closure form of [`walk_recursive`].
pub fn walk_recursive_fn<F>(nodes: &mut Vec<Node>, enter: F) -> WalkOutcome
where
    F: FnMut(&mut Node, &mut VisitContext<'_>) -> WalkAction,
{
    walk_recursive(nodes, &mut FnVisitor(enter))
}

fn walk_siblings<V>(
    nodes: &mut Vec<Node>,
    visitor: &mut V,
    ancestors: Option<&PathLink<'_>>,
    context: &ContextMap,
) -> WalkOutcome
where
    V: Visitor + ?Sized,
{
    // Index-based: the sequence may grow or shrink under us
    let mut index = 0;

    while index < nodes.len() {
        // Context wrappers are transparent: same parent, same path, merged context
        if let Node::Context(wrapper) = &mut nodes[index] {
            let merged = merge_context(context, &wrapper.context);
            if walk_siblings(&mut wrapper.nodes, visitor, ancestors, &merged).is_stopped() {
                return WalkOutcome::Stopped;
            }
            index += 1;
            continue;
        }

        let mut cx = VisitContext::new(Path::linked(ancestors), context);
        let action = visitor.enter(&mut nodes[index], &mut cx);
        let requested = cx.take_replacement();

        match Step::resolve(action, requested) {
            Step::Stop => {
                debug!(engine = "recursive", index, "walk stopped by visitor");
                return WalkOutcome::Stopped;
            }
            Step::Splice {
                nodes: replacement,
                revisit,
            } => {
                let inserted = splice(nodes, index, replacement);
                if !revisit {
                    index += inserted;
                }
                continue;
            }
            Step::Skip => {}
            Step::Descend => {
                if let Some(children) = nodes[index].nodes_mut() {
                    // Detach the children so the container can be lent out as an ancestor
                    let mut children = mem::take(children);
                    let outcome = {
                        let link = PathLink::new(&nodes[index], ancestors);
                        walk_siblings(&mut children, visitor, Some(&link), context)
                    };
                    if let Some(slot) = nodes[index].nodes_mut() {
                        *slot = children;
                    }
                    if outcome.is_stopped() {
                        return WalkOutcome::Stopped;
                    }
                }
            }
        }

        let cx = VisitContext::new(Path::linked(ancestors), context);
        if visitor.exit(&mut nodes[index], &cx).is_break() {
            debug!(engine = "recursive", index, "walk stopped on exit");
            return WalkOutcome::Stopped;
        }
        index += 1;
    }

    WalkOutcome::Completed
}
