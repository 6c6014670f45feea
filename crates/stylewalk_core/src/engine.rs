//! Engine selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use stylewalk_ast::{Node, max_depth};
use tracing::warn;

use crate::{
    FnVisitor, VisitContext, Visitor, WalkAction, WalkConfig, WalkError, WalkOutcome,
    walk_iterative, walk_recursive,
};

/// The two interchangeable walk backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    /// Native recursion; depth bounded by the thread stack.
    Recursive,
    /// Explicit heap stack; any depth.
    #[default]
    Iterative,
}

impl Engine {
    pub const ALL: [Engine; 2] = [Engine::Recursive, Engine::Iterative];

    /// Walks `nodes` with this engine.
    pub fn walk<V>(self, nodes: &mut Vec<Node>, visitor: &mut V) -> WalkOutcome
    where
        V: Visitor + ?Sized,
    {
        match self {
            Engine::Recursive => walk_recursive(nodes, visitor),
            Engine::Iterative => walk_iterative(nodes, visitor),
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Engine::Recursive => "recursive",
            Engine::Iterative => "iterative",
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Engine {
    type Err = WalkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recursive" => Ok(Engine::Recursive),
            "iterative" => Ok(Engine::Iterative),
            other => Err(WalkError::config(format!(
                "unknown engine '{other}' (expected 'recursive' or 'iterative')"
            ))),
        }
    }
}

/// Walks `nodes` with the given engine.
pub fn walk<V>(engine: Engine, nodes: &mut Vec<Node>, visitor: &mut V) -> WalkOutcome
where
    V: Visitor + ?Sized,
{
    engine.walk(nodes, visitor)
}

/// Closure form of [`walk`].
pub fn walk_fn<F>(engine: Engine, nodes: &mut Vec<Node>, enter: F) -> WalkOutcome
where
    F: FnMut(&mut Node, &mut VisitContext<'_>) -> WalkAction,
{
    engine.walk(nodes, &mut FnVisitor(enter))
}

/// Walks `nodes` as described by `config`.
///
/// With the recursive engine and a `max_depth` set, a tree nested deeper
/// than the limit is rejected before anything is visited.
pub fn walk_with_config<V>(
    config: &WalkConfig,
    nodes: &mut Vec<Node>,
    visitor: &mut V,
) -> Result<WalkOutcome, WalkError>
where
    V: Visitor + ?Sized,
{
    if let (Engine::Recursive, Some(limit)) = (config.engine, config.max_depth) {
        let depth = max_depth(nodes);
        if depth > limit {
            warn!(depth, limit, "tree too deep for the recursive engine");
            return Err(WalkError::DepthLimit { limit, depth });
        }
    }

    Ok(config.engine.walk(nodes, visitor))
}
