//! Ancestor chains exposed to visitors.

use std::fmt;

use stylewalk_ast::Node;

use crate::iterative::Frame;

/// The ancestors of the node being visited, root first.
///
/// Context wrappers never appear in a path. The visited node itself is not
/// part of it either; it is handed to the visitor separately. A chain that
/// ends with the visited node is therefore one longer than [`Path::len`],
/// which always equals [`VisitContext::depth`](crate::VisitContext::depth).
///
/// While a container's children are walked they are detached from it, so an
/// ancestor reached through a path shows its own fields and an empty child
/// list.
#[derive(Clone, Copy)]
pub struct Path<'a> {
    repr: Repr<'a>,
}

#[derive(Clone, Copy)]
enum Repr<'a> {
    /// Links living on the call stack of the recursive engine.
    Linked(Option<&'a PathLink<'a>>),
    /// Frames of the iterative engine. `owners` lists the frames whose
    /// sequence was taken from a real node; that node is the current node of
    /// the frame below.
    Frames {
        frames: &'a [Frame],
        owners: &'a [usize],
    },
}

/// One ancestor on the recursive engine's call stack.
pub(crate) struct PathLink<'a> {
    node: &'a Node,
    parent: Option<&'a PathLink<'a>>,
    len: usize,
}

impl<'a> PathLink<'a> {
    pub(crate) fn new(node: &'a Node, parent: Option<&'a PathLink<'a>>) -> Self {
        Self {
            node,
            parent,
            len: parent.map_or(0, |link| link.len) + 1,
        }
    }
}

impl<'a> Path<'a> {
    pub(crate) fn linked(tail: Option<&'a PathLink<'a>>) -> Self {
        Self {
            repr: Repr::Linked(tail),
        }
    }

    pub(crate) fn frames(frames: &'a [Frame], owners: &'a [usize]) -> Self {
        Self {
            repr: Repr::Frames { frames, owners },
        }
    }

    /// Returns the number of ancestors.
    pub fn len(&self) -> usize {
        match self.repr {
            Repr::Linked(tail) => tail.map_or(0, |link| link.len),
            Repr::Frames { owners, .. } => owners.len(),
        }
    }

    /// Returns true at the top level of the walk.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the closest non-context ancestor.
    pub fn parent(&self) -> Option<&'a Node> {
        match self.repr {
            Repr::Linked(tail) => tail.map(|link| link.node),
            Repr::Frames { frames, owners } => owners.last().map(|&frame| frames[frame - 1].current()),
        }
    }

    /// Collects the ancestors, root first.
    pub fn to_vec(&self) -> Vec<&'a Node> {
        match self.repr {
            Repr::Linked(tail) => {
                let mut nodes = Vec::with_capacity(self.len());
                let mut link = tail;
                while let Some(current) = link {
                    nodes.push(current.node);
                    link = current.parent;
                }
                nodes.reverse();
                nodes
            }
            Repr::Frames { frames, owners } => owners
                .iter()
                .map(|&frame| frames[frame - 1].current())
                .collect(),
        }
    }

    /// Iterates over the ancestors, root first.
    pub fn iter(&self) -> std::vec::IntoIter<&'a Node> {
        self.to_vec().into_iter()
    }
}

impl fmt::Debug for Path<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|node| node.kind()))
            .finish()
    }
}
