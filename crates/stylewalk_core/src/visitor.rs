//! Visitor trait shared by both engines.
//!
//! # Example
//!
//! ```rust
//! use std::ops::ControlFlow;
//!
//! use stylewalk_ast::{Node, at_rule, decl, rule};
//! use stylewalk_core::{VisitContext, VisitResult, Visitor, WalkAction, walk_recursive};
//!
//! /// Records the selector chain of every declaration.
//! #[derive(Default)]
//! struct Selectors {
//!     seen: Vec<String>,
//!     exits: usize,
//! }
//!
//! impl Visitor for Selectors {
//!     fn enter(&mut self, node: &mut Node, cx: &mut VisitContext<'_>) -> WalkAction {
//!         if node.as_declaration().is_some() {
//!             let chain: Vec<_> = cx
//!                 .path()
//!                 .iter()
//!                 .filter_map(|ancestor| ancestor.as_rule().map(|r| r.selector.as_str()))
//!                 .collect();
//!             self.seen.push(chain.join(" "));
//!         }
//!         WalkAction::Continue
//!     }
//!
//!     fn exit(&mut self, _node: &mut Node, _cx: &VisitContext<'_>) -> VisitResult {
//!         self.exits += 1;
//!         ControlFlow::Continue(())
//!     }
//! }
//!
//! let mut ast = vec![rule(".a", vec![at_rule("@media", "print", vec![
//!     rule(".b", vec![decl("color", "red")]),
//! ])])];
//!
//! let mut visitor = Selectors::default();
//! walk_recursive(&mut ast, &mut visitor);
//!
//! assert_eq!(visitor.seen, vec![".a .b"]);
//! assert_eq!(visitor.exits, 4);
//! ```

use std::ops::ControlFlow;

use stylewalk_ast::Node;

use crate::{VisitContext, VisitResult, WalkAction};

/// A tree pass driven by one of the walk engines.
///
/// `enter` runs before a node's children, `exit` after them. Context
/// wrappers are never entered or exited; their children are visited in
/// their place.
pub trait Visitor {
    /// Called when the engine reaches a node.
    fn enter(&mut self, node: &mut Node, cx: &mut VisitContext<'_>) -> WalkAction;

    /// Called once the node's subtree is done.
    ///
    /// Runs for every entered node that was not replaced, including skipped
    /// ones. It does not run after the walk has been stopped. Returning
    /// `ControlFlow::Break(())` stops the walk.
    #[inline]
    fn exit(&mut self, _node: &mut Node, _cx: &VisitContext<'_>) -> VisitResult {
        ControlFlow::Continue(())
    }
}

impl<V: Visitor + ?Sized> Visitor for &mut V {
    #[inline]
    fn enter(&mut self, node: &mut Node, cx: &mut VisitContext<'_>) -> WalkAction {
        (**self).enter(node, cx)
    }

    #[inline]
    fn exit(&mut self, node: &mut Node, cx: &VisitContext<'_>) -> VisitResult {
        (**self).exit(node, cx)
    }
}

/// Adapts an enter-only closure to [`Visitor`].
pub struct FnVisitor<F>(pub F);

impl<F> Visitor for FnVisitor<F>
where
    F: FnMut(&mut Node, &mut VisitContext<'_>) -> WalkAction,
{
    #[inline]
    fn enter(&mut self, node: &mut Node, cx: &mut VisitContext<'_>) -> WalkAction {
        (self.0)(node, cx)
    }
}
