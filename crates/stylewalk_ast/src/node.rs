//! Node definitions.
//!
//! The core tree type shared by the parser, the walk engines and the printer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{ContextMap, Span};

/// A node in the stylesheet tree.
///
/// Container kinds ([`Rule`], [`AtRule`], [`Context`], [`AtRoot`]) own their
/// children exclusively. A node lives in exactly one sibling sequence at a
/// time; splicing it out of that sequence drops it.
///
/// # Example
///
/// ```rust
/// use stylewalk_ast::{Node, NodeKind, at_rule, decl};
///
/// let media = at_rule("@media", "(width >= 40rem)", vec![decl("color", "red")]);
///
/// assert_eq!(media.kind(), NodeKind::AtRule);
/// assert_eq!(media.nodes().map(<[Node]>::len), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Node {
    Rule(Rule),
    Declaration(Declaration),
    AtRule(AtRule),
    Comment(Comment),
    Context(Context),
    AtRoot(AtRoot),
}

/// A qualified rule: `selector { ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub selector: String,
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<Span>,
}

/// A `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub property: String,
    /// `None` for declarations that only exist to be replaced; they print as nothing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default)]
    pub important: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<Span>,
}

/// An at-rule. `name` keeps its leading `@`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtRule {
    pub name: String,
    #[serde(default)]
    pub params: String,
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<Span>,
}

/// A `/* ... */` comment; `value` excludes the delimiters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<Span>,
}

/// A transparent wrapper.
///
/// Walks never visit a context node itself. Its children are visited as if
/// they sat directly in the enclosing sequence, with `context` merged over
/// the ambient context of the wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Context {
    #[serde(default)]
    pub context: ContextMap,
    #[serde(default)]
    pub nodes: Vec<Node>,
}

/// Children hoisted to the stylesheet root when printed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtRoot {
    #[serde(default)]
    pub nodes: Vec<Node>,
}

/// The kind tag of a [`Node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Rule,
    Declaration,
    AtRule,
    Comment,
    Context,
    AtRoot,
}

impl NodeKind {
    /// Returns true if nodes of this kind own a child sequence.
    #[inline]
    pub const fn is_container(&self) -> bool {
        !matches!(self, NodeKind::Declaration | NodeKind::Comment)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Same casing as the serialized `kind` tag
        let name = match self {
            NodeKind::Rule => "rule",
            NodeKind::Declaration => "declaration",
            NodeKind::AtRule => "at-rule",
            NodeKind::Comment => "comment",
            NodeKind::Context => "context",
            NodeKind::AtRoot => "at-root",
        };
        f.write_str(name)
    }
}

impl Node {
    /// Returns the kind tag of this node.
    #[inline]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Node::Rule(_) => NodeKind::Rule,
            Node::Declaration(_) => NodeKind::Declaration,
            Node::AtRule(_) => NodeKind::AtRule,
            Node::Comment(_) => NodeKind::Comment,
            Node::Context(_) => NodeKind::Context,
            Node::AtRoot(_) => NodeKind::AtRoot,
        }
    }

    /// Returns the children of a container node, `None` for leaves.
    #[inline]
    pub fn nodes(&self) -> Option<&[Node]> {
        match self {
            Node::Rule(rule) => Some(&rule.nodes),
            Node::AtRule(at_rule) => Some(&at_rule.nodes),
            Node::Context(context) => Some(&context.nodes),
            Node::AtRoot(at_root) => Some(&at_root.nodes),
            Node::Declaration(_) | Node::Comment(_) => None,
        }
    }

    /// Returns the mutable child sequence of a container node, `None` for leaves.
    ///
    /// This is the only check the walk engines use before descending.
    #[inline]
    pub fn nodes_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Rule(rule) => Some(&mut rule.nodes),
            Node::AtRule(at_rule) => Some(&mut at_rule.nodes),
            Node::Context(context) => Some(&mut context.nodes),
            Node::AtRoot(at_root) => Some(&mut at_root.nodes),
            Node::Declaration(_) | Node::Comment(_) => None,
        }
    }

    pub fn as_rule(&self) -> Option<&Rule> {
        match self {
            Node::Rule(rule) => Some(rule),
            _ => None,
        }
    }

    pub fn as_declaration(&self) -> Option<&Declaration> {
        match self {
            Node::Declaration(decl) => Some(decl),
            _ => None,
        }
    }

    pub fn as_declaration_mut(&mut self) -> Option<&mut Declaration> {
        match self {
            Node::Declaration(decl) => Some(decl),
            _ => None,
        }
    }

    pub fn as_at_rule(&self) -> Option<&AtRule> {
        match self {
            Node::AtRule(at_rule) => Some(at_rule),
            _ => None,
        }
    }
}

impl Declaration {
    /// Creates a declaration with a value and no `!important` flag.
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: Some(value.into()),
            important: false,
            src: None,
        }
    }

    /// Sets the `!important` flag.
    pub fn with_important(mut self, important: bool) -> Self {
        self.important = important;
        self
    }
}

impl From<Rule> for Node {
    fn from(rule: Rule) -> Self {
        Node::Rule(rule)
    }
}

impl From<Declaration> for Node {
    fn from(decl: Declaration) -> Self {
        Node::Declaration(decl)
    }
}

impl From<AtRule> for Node {
    fn from(at_rule: AtRule) -> Self {
        Node::AtRule(at_rule)
    }
}

impl From<Comment> for Node {
    fn from(comment: Comment) -> Self {
        Node::Comment(comment)
    }
}

impl From<Context> for Node {
    fn from(context: Context) -> Self {
        Node::Context(context)
    }
}

impl From<AtRoot> for Node {
    fn from(at_root: AtRoot) -> Self {
        Node::AtRoot(at_root)
    }
}

/// Creates a rule node.
pub fn rule(selector: impl Into<String>, nodes: Vec<Node>) -> Node {
    Node::Rule(Rule {
        selector: selector.into(),
        nodes,
        src: None,
    })
}

/// Creates a declaration node.
pub fn decl(property: impl Into<String>, value: impl Into<String>) -> Node {
    Node::Declaration(Declaration::new(property, value))
}

/// Creates an at-rule node. Pass an empty `nodes` for statement at-rules
/// such as `@import`.
pub fn at_rule(name: impl Into<String>, params: impl Into<String>, nodes: Vec<Node>) -> Node {
    Node::AtRule(AtRule {
        name: name.into(),
        params: params.into(),
        nodes,
        src: None,
    })
}

/// Creates a comment node.
pub fn comment(value: impl Into<String>) -> Node {
    Node::Comment(Comment {
        value: value.into(),
        src: None,
    })
}

/// Creates a context node wrapping `nodes`.
pub fn context(context: ContextMap, nodes: Vec<Node>) -> Node {
    Node::Context(Context { context, nodes })
}

/// Creates an at-root node.
pub fn at_root(nodes: Vec<Node>) -> Node {
    Node::AtRoot(AtRoot { nodes })
}
