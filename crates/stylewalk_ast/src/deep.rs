//! Helpers for trees nested deeper than a thread stack allows.
//!
//! The derived `Drop`, `Clone` and `PartialEq` impls recurse once per
//! nesting level. These functions use an explicit work list instead.

use crate::{Node, rule};

/// Returns the number of non-context nodes on the longest root-to-leaf chain.
///
/// Context wrappers are transparent and do not add a level.
pub fn max_depth(nodes: &[Node]) -> usize {
    let mut deepest = 0;
    let mut pending: Vec<(&[Node], usize)> = vec![(nodes, 0)];

    while let Some((siblings, depth)) = pending.pop() {
        for node in siblings {
            if let Node::Context(wrapper) = node {
                pending.push((&wrapper.nodes, depth));
                continue;
            }

            let level = depth + 1;
            deepest = deepest.max(level);
            if let Some(children) = node.nodes() {
                if !children.is_empty() {
                    pending.push((children, level));
                }
            }
        }
    }

    deepest
}

/// Wraps `leaf` in `levels` nested rules (`.l0 { .l1 { ... } }`).
pub fn nest(levels: usize, leaf: Node) -> Node {
    let mut node = leaf;
    for level in (0..levels).rev() {
        node = rule(format!(".l{level}"), vec![node]);
    }
    node
}

/// Releases a tree of any depth without recursing.
pub fn dismantle(nodes: Vec<Node>) {
    let mut pending = nodes;
    while let Some(mut node) = pending.pop() {
        if let Some(children) = node.nodes_mut() {
            pending.append(children);
        }
    }
}
