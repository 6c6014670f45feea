//! # stylewalk_ast
//!
//! Syntax tree definitions for stylewalk.
//!
//! This crate provides the node model that the walk engines in
//! `stylewalk_core` traverse and rewrite. Trees are produced by an external
//! parser (or loaded from JSON) and handed back to a printer once a pass is
//! done with them.
//!
//! ## Architecture
//!
//! - A [`Node`] is a tagged variant: rule, declaration, at-rule, comment,
//!   context, at-root
//! - Containers own their children in a plain `Vec<Node>`, so a walk can
//!   splice siblings in place
//! - [`Node::Context`] is a transparent wrapper carrying a key/value overlay
//!   for its descendants
//!
//! ## Example
//!
//! ```rust
//! use stylewalk_ast::{decl, rule, to_css};
//!
//! let ast = vec![rule(".card", vec![decl("margin", "4px")])];
//!
//! assert_eq!(to_css(&ast), ".card {\n  margin: 4px;\n}\n");
//! ```

mod context;
mod deep;
mod error;
mod json;
mod node;
mod printer;
mod span;

pub use context::{ContextMap, ContextValue};
pub use deep::{dismantle, max_depth, nest};
pub use error::AstError;
pub use json::{parse_json, to_json};
pub use node::{
    AtRoot, AtRule, Comment, Context, Declaration, Node, NodeKind, Rule, at_root, at_rule,
    comment, context, decl, rule,
};
pub use printer::to_css;
pub use span::Span;
