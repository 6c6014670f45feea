//! Built-in passes.

use std::ops::ControlFlow;

use stylewalk_ast::{Declaration, Node};
use tracing::trace;

use crate::{VisitContext, VisitResult, Visitor, WalkAction};

/// Longhands `margin` expands into, in output order.
const MARGIN_SIDES: [&str; 4] = ["margin-top", "margin-right", "margin-bottom", "margin-left"];

/// A pass exercising every walk action at once.
///
/// - `margin` declarations expand into their four longhands
/// - other declarations get their property uppercased
/// - comments are deleted
/// - `@supports` blocks are skipped
/// - `@stop-the-walk` stops the walk
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReferencePass {
    pub entered: usize,
    pub exited: usize,
    pub replaced: usize,
}

impl ReferencePass {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Visitor for ReferencePass {
    fn enter(&mut self, node: &mut Node, cx: &mut VisitContext<'_>) -> WalkAction {
        self.entered += 1;

        match node {
            Node::Declaration(declaration) if declaration.property == "margin" => {
                self.replaced += 1;
                WalkAction::Replace(expand_margin(declaration))
            }
            Node::Declaration(declaration) => {
                declaration.property = declaration.property.to_uppercase();
                WalkAction::Continue
            }
            Node::Comment(_) => {
                self.replaced += 1;
                cx.replace_with(Vec::new());
                WalkAction::Continue
            }
            Node::AtRule(at_rule) if at_rule.name == "@supports" => {
                trace!(params = %at_rule.params, "skipping @supports block");
                WalkAction::Skip
            }
            Node::AtRule(at_rule) if at_rule.name == "@stop-the-walk" => WalkAction::Stop,
            _ => WalkAction::Continue,
        }
    }

    fn exit(&mut self, _node: &mut Node, _cx: &VisitContext<'_>) -> VisitResult {
        self.exited += 1;
        ControlFlow::Continue(())
    }
}

/// Longhands carry the shorthand's value as is, missing or not. Flags and
/// source spans stay behind on the replaced node.
fn expand_margin(margin: &Declaration) -> Vec<Node> {
    MARGIN_SIDES
        .iter()
        .map(|side| {
            Declaration {
                property: (*side).to_string(),
                value: margin.value.clone(),
                important: false,
                src: None,
            }
            .into()
        })
        .collect()
}
