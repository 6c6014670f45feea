//! Reference printer.
//!
//! Renders a tree back to stylesheet text. The output format is stable so
//! that two trees can be compared by their printed form.

use crate::Node;

const INDENT: &str = "  ";

/// Prints `nodes` as CSS, two spaces of indentation per nesting level.
///
/// Context and at-root wrappers print their children in place.
/// Declarations without a value print nothing.
pub fn to_css(nodes: &[Node]) -> String {
    let mut css = String::new();
    for node in nodes {
        print_node(&mut css, node, 0);
    }
    css
}

fn print_node(css: &mut String, node: &Node, depth: usize) {
    let indent = INDENT.repeat(depth);

    match node {
        Node::Rule(rule) => {
            css.push_str(&format!("{indent}{} {{\n", rule.selector));
            print_children(css, &rule.nodes, depth + 1);
            css.push_str(&format!("{indent}}}\n"));
        }
        Node::Declaration(decl) => {
            if let Some(value) = &decl.value {
                let important = if decl.important { " !important" } else { "" };
                css.push_str(&format!(
                    "{indent}{}: {value}{important};\n",
                    decl.property
                ));
            }
        }
        Node::AtRule(at_rule) => {
            let head = if at_rule.params.is_empty() {
                at_rule.name.clone()
            } else {
                format!("{} {}", at_rule.name, at_rule.params)
            };

            // Statement at-rules (`@import`, `@charset`) have no block
            if at_rule.nodes.is_empty() {
                css.push_str(&format!("{indent}{head};\n"));
            } else {
                css.push_str(&format!("{indent}{head} {{\n"));
                print_children(css, &at_rule.nodes, depth + 1);
                css.push_str(&format!("{indent}}}\n"));
            }
        }
        Node::Comment(comment) => {
            css.push_str(&format!("{indent}/*{}*/\n", comment.value));
        }
        Node::Context(context) => print_children(css, &context.nodes, depth),
        Node::AtRoot(at_root) => print_children(css, &at_root.nodes, depth),
    }
}

fn print_children(css: &mut String, nodes: &[Node], depth: usize) {
    for node in nodes {
        print_node(css, node, depth);
    }
}
