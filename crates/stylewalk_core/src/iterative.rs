//! Walk engine backed by an explicit, heap-allocated work stack.
//!
//! Pending work lives in a `Vec<Frame>` instead of on the call stack, so the
//! walk survives trees nested far deeper than any thread stack. A frame owns
//! the sibling sequence it is walking: the sequence is taken out of its
//! container when the frame is pushed and put back when the frame is popped,
//! whether the walk completed or was stopped.

use std::mem;
use std::rc::Rc;

use stylewalk_ast::{ContextMap, Node};
use tracing::debug;

use crate::action::{Step, splice};
use crate::{
    FnVisitor, Path, VisitContext, VisitResult, Visitor, WalkAction, WalkOutcome, merge_context,
};

/// Walks `nodes` depth-first, pre-order, rewriting them in place.
///
/// Observably identical to [`walk_recursive`](crate::walk_recursive):
/// same visit order, same hooks, same resulting tree, same outcome.
pub fn walk_iterative<V>(nodes: &mut Vec<Node>, visitor: &mut V) -> WalkOutcome
where
    V: Visitor + ?Sized,
{
    debug!(engine = "iterative", roots = nodes.len(), "walk started");

    let root = Frame::new(mem::take(nodes), Rc::new(ContextMap::new()), Owner::Root);
    let mut walk = IterativeWalk {
        frames: vec![root],
        owners: Vec::new(),
    };
    let outcome = walk.run(visitor);
    *nodes = walk.unwind();

    debug!(engine = "iterative", ?outcome, "walk finished");
    outcome
}

/// Closure form of [`walk_iterative`].
pub fn walk_iterative_fn<F>(nodes: &mut Vec<Node>, enter: F) -> WalkOutcome
where
    F: FnMut(&mut Node, &mut VisitContext<'_>) -> WalkAction,
{
    walk_iterative(nodes, &mut FnVisitor(enter))
}

/// Where a frame's sequence was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Owner {
    /// The caller's root sequence.
    Root,
    /// A container node; it gets its exit hook when the frame is done.
    Node,
    /// A transparent context wrapper.
    Context,
}

/// One level of pending work.
pub(crate) struct Frame {
    nodes: Vec<Node>,
    /// Next node to enter. While a child frame is active this stays on the
    /// node that owns the child frame's sequence.
    index: usize,
    context: Rc<ContextMap>,
    owner: Owner,
}

impl Frame {
    fn new(nodes: Vec<Node>, context: Rc<ContextMap>, owner: Owner) -> Self {
        Self {
            nodes,
            index: 0,
            context,
            owner,
        }
    }

    /// The node this frame is positioned on.
    pub(crate) fn current(&self) -> &Node {
        &self.nodes[self.index]
    }

    fn is_done(&self) -> bool {
        self.index >= self.nodes.len()
    }
}

struct IterativeWalk {
    frames: Vec<Frame>,
    /// Indices of frames whose sequence came from a real node, in stack
    /// order. This is the path, minus context wrappers.
    owners: Vec<usize>,
}

impl IterativeWalk {
    fn run<V>(&mut self, visitor: &mut V) -> WalkOutcome
    where
        V: Visitor + ?Sized,
    {
        loop {
            let top = self.frames.len() - 1;

            if self.frames[top].is_done() {
                if top == 0 {
                    return WalkOutcome::Completed;
                }
                if self.finish_frame(visitor).is_break() {
                    debug!(engine = "iterative", "walk stopped on exit");
                    return WalkOutcome::Stopped;
                }
                continue;
            }

            let (ancestors, rest) = self.frames.split_at_mut(top);
            let frame = &mut rest[0];
            let index = frame.index;

            // Context wrappers are transparent: push their children with the
            // merged context but do not record them as an owner
            if let Node::Context(wrapper) = &mut frame.nodes[index] {
                let merged = Rc::new(merge_context(&frame.context, &wrapper.context));
                let children = mem::take(&mut wrapper.nodes);
                self.frames.push(Frame::new(children, merged, Owner::Context));
                continue;
            }

            let mut cx = VisitContext::new(Path::frames(ancestors, &self.owners), &frame.context);
            let action = visitor.enter(&mut frame.nodes[index], &mut cx);
            let requested = cx.take_replacement();

            match Step::resolve(action, requested) {
                Step::Stop => {
                    debug!(engine = "iterative", index, "walk stopped by visitor");
                    return WalkOutcome::Stopped;
                }
                Step::Splice {
                    nodes: replacement,
                    revisit,
                } => {
                    let inserted = splice(&mut frame.nodes, index, replacement);
                    if !revisit {
                        frame.index = index + inserted;
                    }
                }
                Step::Skip => {
                    if exit_current(visitor, ancestors, &self.owners, frame).is_break() {
                        debug!(engine = "iterative", index, "walk stopped on exit");
                        return WalkOutcome::Stopped;
                    }
                    frame.index += 1;
                }
                Step::Descend => {
                    let children = match frame.nodes[index].nodes_mut() {
                        Some(children) if !children.is_empty() => Some(mem::take(children)),
                        _ => None,
                    };

                    match children {
                        Some(children) => {
                            let context = Rc::clone(&frame.context);
                            self.frames.push(Frame::new(children, context, Owner::Node));
                            self.owners.push(top + 1);
                        }
                        None => {
                            if exit_current(visitor, ancestors, &self.owners, frame).is_break() {
                                debug!(engine = "iterative", index, "walk stopped on exit");
                                return WalkOutcome::Stopped;
                            }
                            frame.index += 1;
                        }
                    }
                }
            }
        }
    }

    /// Pops the finished top frame, gives its sequence back to its owner and
    /// runs the owner's exit hook.
    fn finish_frame<V>(&mut self, visitor: &mut V) -> VisitResult
    where
        V: Visitor + ?Sized,
    {
        let Some(finished) = self.frames.pop() else {
            return VisitResult::Continue(());
        };
        if finished.owner == Owner::Node {
            self.owners.pop();
        }

        let top = self.frames.len() - 1;
        let (ancestors, rest) = self.frames.split_at_mut(top);
        let parent = &mut rest[0];
        let index = parent.index;
        if let Some(slot) = parent.nodes[index].nodes_mut() {
            *slot = finished.nodes;
        }

        if finished.owner == Owner::Node {
            exit_current(visitor, ancestors, &self.owners, parent)?;
        }
        parent.index += 1;
        VisitResult::Continue(())
    }

    /// Gives every detached sequence back to its owner and returns the root
    /// sequence. Safe to call at any point of the walk.
    fn unwind(mut self) -> Vec<Node> {
        while self.frames.len() > 1 {
            let Some(child) = self.frames.pop() else {
                break;
            };
            if let Some(parent) = self.frames.last_mut() {
                let index = parent.index;
                if let Some(slot) = parent.nodes[index].nodes_mut() {
                    *slot = child.nodes;
                }
            }
        }
        self.frames
            .pop()
            .map(|root| root.nodes)
            .unwrap_or_default()
    }
}

fn exit_current<V>(
    visitor: &mut V,
    ancestors: &[Frame],
    owners: &[usize],
    frame: &mut Frame,
) -> VisitResult
where
    V: Visitor + ?Sized,
{
    let index = frame.index;
    let cx = VisitContext::new(Path::frames(ancestors, owners), &frame.context);
    visitor.exit(&mut frame.nodes[index], &cx)
}
