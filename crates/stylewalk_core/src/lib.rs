//! # stylewalk_core
//!
//! Traversal and in-place transformation of stylewalk syntax trees.
//!
//! This crate provides:
//! - The [`Visitor`] contract: enter/exit hooks, [`WalkAction`] control flow,
//!   and a [`VisitContext`] exposing parent, path and ambient context
//! - A native-recursion engine ([`walk_recursive`])
//! - An explicit-stack engine ([`walk_iterative`]) for arbitrarily deep trees
//! - Engine selection and configuration ([`Engine`], [`WalkConfig`])
//!
//! Both engines produce the same tree and the same visit order for any
//! input; they differ only in how pending work is stored.
//!
//! ## Example
//!
//! ```rust
//! use stylewalk_ast::{decl, rule, to_css};
//! use stylewalk_core::{WalkAction, WalkOutcome, walk_iterative_fn};
//!
//! let mut ast = vec![rule(".a", vec![decl("margin", "4px")])];
//!
//! let outcome = walk_iterative_fn(&mut ast, |node, cx| {
//!     if let Some(margin) = node.as_declaration().filter(|d| d.property == "margin") {
//!         let value = margin.value.clone().unwrap_or_default();
//!         cx.replace_with([decl("margin-top", value.clone()), decl("margin-bottom", value)]);
//!     }
//!     WalkAction::Continue
//! });
//!
//! assert_eq!(outcome, WalkOutcome::Completed);
//! assert_eq!(to_css(&ast), ".a {\n  margin-top: 4px;\n  margin-bottom: 4px;\n}\n");
//! ```

mod action;
pub mod config;
mod context;
mod engine;
mod error;
mod iterative;
pub mod passes;
mod path;
mod recursive;
mod visitor;

pub use action::{VisitResult, WalkAction, WalkOutcome};
pub use config::WalkConfig;
pub use context::{VisitContext, merge_context};
pub use engine::{Engine, walk, walk_fn, walk_with_config};
pub use error::WalkError;
pub use iterative::{walk_iterative, walk_iterative_fn};
pub use path::Path;
pub use recursive::{walk_recursive, walk_recursive_fn};
pub use visitor::{FnVisitor, Visitor};

pub use stylewalk_ast::{ContextMap, ContextValue, Node, NodeKind};
