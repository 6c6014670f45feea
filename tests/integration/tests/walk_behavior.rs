//! Walk behavior, checked against both engines.


use rstest::rstest;
use stylewalk_ast::{Node, at_root, at_rule, comment, context, decl, rule, to_css};
use stylewalk_core::{Engine, WalkAction, WalkOutcome, walk, walk_fn};

use common::{Scripted, Step, label, overlay, stop_tail, stylesheet};

/// Walks with a visitor that only records labels.
fn visited_labels(engine: Engine, ast: &mut Vec<Node>) -> Vec<String> {
    let mut seen = Vec::new();
    walk_fn(engine, ast, |node, _| {
        seen.push(label(node).to_string());
        WalkAction::Continue
    });
    seen
}

mod splicing {
    use super::*;
    use pretty_assertions::assert_eq;

    #[rstest]
    fn deletion_removes_exactly_one_node(
        #[values(Engine::Recursive, Engine::Iterative)] engine: Engine,
    ) {
        let mut ast = vec![decl("a", "1"), comment("gone"), decl("b", "2")];
        let mut seen = Vec::new();

        walk_fn(engine, &mut ast, |node, cx| {
            seen.push(label(node).to_string());
            if matches!(node, Node::Comment(_)) {
                cx.replace_with(Vec::new());
            }
            WalkAction::Continue
        });

        assert_eq!(seen, vec!["a", "gone", "b"]);
        assert_eq!(to_css(&ast), "a: 1;\nb: 2;\n");
    }

    #[rstest]
    fn deleting_every_node_empties_the_sequence(
        #[values(Engine::Recursive, Engine::Iterative)] engine: Engine,
    ) {
        let mut ast = vec![rule(".a", vec![decl("a", "1"), decl("b", "2"), decl("c", "3")])];

        let outcome = walk_fn(engine, &mut ast, |node, _| match node {
            Node::Declaration(_) => WalkAction::Replace(Vec::new()),
            _ => WalkAction::Continue,
        });

        assert_eq!(outcome, WalkOutcome::Completed);
        assert_eq!(ast[0].nodes().map(<[Node]>::len), Some(0));
    }

    #[rstest]
    fn single_overwrite_keeps_length_and_position(
        #[values(Engine::Recursive, Engine::Iterative)] engine: Engine,
    ) {
        let mut ast = vec![decl("a", "1"), decl("b", "2"), decl("c", "3")];

        walk_fn(engine, &mut ast, |node, _| match node.as_declaration() {
            Some(d) if d.property == "b" => WalkAction::Replace(vec![decl("z", "26")]),
            _ => WalkAction::Continue,
        });

        assert_eq!(ast.len(), 3);
        assert_eq!(to_css(&ast), "a: 1;\nz: 26;\nc: 3;\n");
    }

    #[rstest]
    fn margin_expands_in_order(#[values(Engine::Recursive, Engine::Iterative)] engine: Engine) {
        let mut ast = vec![rule(
            ".a",
            vec![decl("color", "red"), decl("margin", "4px"), decl("padding", "0")],
        )];

        walk_fn(engine, &mut ast, |node, cx| {
            if let Some(margin) = node.as_declaration().filter(|d| d.property == "margin") {
                let value = margin.value.clone().unwrap_or_default();
                cx.replace_with(
                    ["margin-top", "margin-right", "margin-bottom", "margin-left"]
                        .map(|side| decl(side, value.clone())),
                );
            }
            WalkAction::Continue
        });

        assert_eq!(ast[0].nodes().map(<[Node]>::len), Some(6));
        assert_eq!(
            to_css(&ast),
            ".a {\n  color: red;\n  margin-top: 4px;\n  margin-right: 4px;\n  \
             margin-bottom: 4px;\n  margin-left: 4px;\n  padding: 0;\n}\n"
        );
    }

    #[rstest]
    fn continue_after_replace_revisits_inserted_nodes(
        #[values(Engine::Recursive, Engine::Iterative)] engine: Engine,
    ) {
        let mut ast = vec![decl("margin", "4px"), decl("color", "red")];
        let mut seen = Vec::new();

        walk_fn(engine, &mut ast, |node, cx| {
            seen.push(label(node).to_string());
            if label(node) == "margin" {
                cx.replace_with([decl("margin-block", "4px"), decl("margin-inline", "4px")]);
            } else if label(node) == "margin-block" {
                cx.replace_with([decl("margin-top", "4px"), decl("margin-bottom", "4px")]);
            }
            WalkAction::Continue
        });

        assert_eq!(
            seen,
            vec![
                "margin",
                "margin-block",
                "margin-top",
                "margin-bottom",
                "margin-inline",
                "color",
            ]
        );
        assert_eq!(
            to_css(&ast),
            "margin-top: 4px;\nmargin-bottom: 4px;\nmargin-inline: 4px;\ncolor: red;\n"
        );
    }

    #[rstest]
    fn replacing_a_container_drops_its_subtree(
        #[values(Engine::Recursive, Engine::Iterative)] engine: Engine,
    ) {
        let mut ast = vec![
            rule(".old", vec![decl("never", "visited")]),
            decl("after", "1"),
        ];
        let mut seen = Vec::new();

        walk_fn(engine, &mut ast, |node, _| {
            seen.push(label(node).to_string());
            match node {
                Node::Rule(rule) if rule.selector == ".old" => {
                    WalkAction::Replace(vec![rule_with(".new", "fresh")])
                }
                _ => WalkAction::Continue,
            }
        });

        assert_eq!(seen, vec![".old", ".new", "fresh", "after"]);
        assert_eq!(to_css(&ast), ".new {\n  fresh: 1;\n}\nafter: 1;\n");
    }

    fn rule_with(selector: &str, property: &str) -> Node {
        rule(selector, vec![decl(property, "1")])
    }
}

mod replace_requests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[rstest]
    fn first_request_wins(#[values(Engine::Recursive, Engine::Iterative)] engine: Engine) {
        let script = [Step::ReplaceTwice];
        let mut ast = vec![decl("a", "1")];
        let mut visitor = Scripted::new(&script);

        walk(engine, &mut ast, &mut visitor);

        assert_eq!(to_css(&ast), "done: first;\n");
    }

    #[rstest]
    fn request_wins_over_returned_replace(
        #[values(Engine::Recursive, Engine::Iterative)] engine: Engine,
    ) {
        let mut ast = vec![decl("a", "1")];

        walk_fn(engine, &mut ast, |node, cx| {
            if label(node) == "a" {
                cx.replace_with([decl("from-request", "1")]);
                return WalkAction::Replace(vec![decl("from-action", "1")]);
            }
            WalkAction::Continue
        });

        assert_eq!(to_css(&ast), "from-request: 1;\n");
    }

    #[rstest]
    #[case::skip(Step::ExpandThenSkip)]
    #[case::stop(Step::ExpandThenStop)]
    fn replace_with_skip_or_stop_jumps_past_inserted_nodes(
        #[values(Engine::Recursive, Engine::Iterative)] engine: Engine,
        #[case] step: Step,
    ) {
        let script = [step];
        let mut ast = vec![decl("a", "1"), decl("later", "2")];
        let mut visitor = Scripted::new(&script);

        let outcome = walk(engine, &mut ast, &mut visitor);

        // The stop request is not honored when a replacement was made
        assert_eq!(outcome, WalkOutcome::Completed);
        assert_eq!(
            visitor.events,
            vec![
                "enter declaration a depth=0 parent=- k=",
                "enter declaration later depth=0 parent=- k=",
                "exit declaration later depth=0",
            ]
        );
        assert_eq!(to_css(&ast), "done: a;\ndone {\n}\nlater: 2;\n");
    }

    #[rstest]
    fn replaced_node_gets_no_exit(#[values(Engine::Recursive, Engine::Iterative)] engine: Engine) {
        let script = [Step::Overwrite];
        let mut ast = vec![decl("a", "1")];
        let mut visitor = Scripted::new(&script);

        walk(engine, &mut ast, &mut visitor);

        assert_eq!(
            visitor.events,
            vec![
                "enter declaration a depth=0 parent=- k=",
                "enter declaration done depth=0 parent=- k=",
                "exit declaration done depth=0",
            ]
        );
    }
}

mod control_flow {
    use super::*;
    use pretty_assertions::assert_eq;

    #[rstest]
    fn skip_supports_visits_later_siblings(
        #[values(Engine::Recursive, Engine::Iterative)] engine: Engine,
    ) {
        let mut ast = vec![
            at_rule("@supports", "(display: grid)", vec![decl("display", "grid")]),
            decl("color", "red"),
        ];
        let mut seen = Vec::new();

        let outcome = walk_fn(engine, &mut ast, |node, _| {
            seen.push(label(node).to_string());
            match node.as_at_rule() {
                Some(at_rule) if at_rule.name == "@supports" => WalkAction::Skip,
                _ => WalkAction::Continue,
            }
        });

        assert_eq!(outcome, WalkOutcome::Completed);
        assert_eq!(seen, vec!["@supports", "color"]);
    }

    #[rstest]
    fn stop_deep_inside_aborts_everything_after(
        #[values(Engine::Recursive, Engine::Iterative)] engine: Engine,
    ) {
        let mut ast = stylesheet();
        ast.push(stop_tail());
        ast.push(rule(".after", vec![decl("color", "red")]));
        let expected_tail = to_css(&ast[5..]);
        let mut seen = Vec::new();

        let outcome = walk_fn(engine, &mut ast, |node, _| {
            seen.push(label(node).to_string());
            match node.as_at_rule() {
                Some(at_rule) if at_rule.name == "@stop-the-walk" => WalkAction::Stop,
                _ => WalkAction::Continue,
            }
        });

        assert_eq!(outcome, WalkOutcome::Stopped);
        assert_eq!(
            seen[seen.len() - 8..].to_vec(),
            vec!["a", "b", "c", "d", "e", "f", "g", "@stop-the-walk"]
        );
        assert!(!seen.iter().any(|label| label == ".after"));
        assert_eq!(to_css(&ast[5..]), expected_tail);
    }

    #[rstest]
    fn exit_break_stops_the_walk(#[values(Engine::Recursive, Engine::Iterative)] engine: Engine) {
        let script = [Step::StopOnExit];
        let mut ast = vec![rule("a", vec![decl("x", "1")]), decl("later", "2")];
        let mut visitor = Scripted::new(&script);

        let outcome = walk(engine, &mut ast, &mut visitor);

        assert_eq!(outcome, WalkOutcome::Stopped);
        assert_eq!(
            visitor.events,
            vec![
                "enter rule a depth=0 parent=- k=",
                "enter declaration x depth=1 parent=a k=",
                "exit declaration x depth=1",
                "exit rule a depth=0",
            ]
        );
    }

    #[rstest]
    fn empty_tree_completes(#[values(Engine::Recursive, Engine::Iterative)] engine: Engine) {
        let mut ast = Vec::new();
        assert!(visited_labels(engine, &mut ast).is_empty());
        assert_eq!(walk_fn(engine, &mut ast, |_, _| WalkAction::Stop), WalkOutcome::Completed);
    }
}

mod hooks {
    use super::*;
    use pretty_assertions::assert_eq;

    #[rstest]
    fn exit_runs_once_per_node_after_its_subtree(
        #[values(Engine::Recursive, Engine::Iterative)] engine: Engine,
    ) {
        let script = [Step::Continue, Step::Skip];
        let mut ast = vec![
            rule("a", vec![at_rule("b", "", vec![decl("c", "1")]), decl("d", "2")]),
            context(overlay("k", "v"), vec![comment("e")]),
        ];
        let mut visitor = Scripted::new(&script);

        walk(engine, &mut ast, &mut visitor);

        assert_eq!(
            visitor.events,
            vec![
                "enter rule a depth=0 parent=- k=",
                "enter at-rule b depth=1 parent=a k=",
                "exit at-rule b depth=1",
                "enter declaration d depth=1 parent=a k=",
                "exit declaration d depth=1",
                "exit rule a depth=0",
                "enter comment e depth=0 parent=- k=v",
                "exit comment e depth=0",
            ]
        );
    }

    #[rstest]
    fn path_lists_ancestors_root_first(
        #[values(Engine::Recursive, Engine::Iterative)] engine: Engine,
    ) {
        let mut ast = vec![rule(
            ".a",
            vec![context(
                overlay("k", "v"),
                vec![at_rule("@media", "print", vec![decl("color", "red")])],
            )],
        )];
        let mut paths = Vec::new();

        walk_fn(engine, &mut ast, |node, cx| {
            let path: Vec<String> = cx.path().iter().map(|n| label(n).to_string()).collect();
            paths.push(format!("{} <- {}", label(node), path.join(" > ")));
            WalkAction::Continue
        });

        assert_eq!(
            paths,
            vec![".a <- ", "@media <- .a", "color <- .a > @media"]
        );
    }

    #[rstest]
    fn path_stops_at_the_parent_and_ancestors_look_empty(
        #[values(Engine::Recursive, Engine::Iterative)] engine: Engine,
    ) {
        let mut ast = vec![rule(".a", vec![rule(".b", vec![decl("color", "red")])])];
        let mut seen = Vec::new();

        walk_fn(engine, &mut ast, |node, cx| {
            let children: Vec<usize> = cx
                .path()
                .iter()
                .map(|n| n.nodes().map_or(0, <[Node]>::len))
                .collect();
            seen.push((label(node).to_string(), cx.path().len(), cx.depth(), children));
            WalkAction::Continue
        });

        assert_eq!(
            seen,
            vec![
                (".a".to_string(), 0, 0, vec![]),
                (".b".to_string(), 1, 1, vec![0]),
                ("color".to_string(), 2, 2, vec![0, 0]),
            ]
        );
        assert_eq!(to_css(&ast), ".a {\n  .b {\n    color: red;\n  }\n}\n");
    }
}

mod at_root_container {
    use super::*;
    use pretty_assertions::assert_eq;

    #[rstest]
    fn at_root_is_entered_and_walked_like_a_rule(
        #[values(Engine::Recursive, Engine::Iterative)] engine: Engine,
    ) {
        let mut ast = vec![rule(
            ".a",
            vec![at_root(vec![rule(".b", vec![decl("color", "red")])])],
        )];
        let mut seen = Vec::new();

        walk_fn(engine, &mut ast, |node, cx| {
            let parent = cx.parent().map(|p| p.kind().to_string()).unwrap_or_default();
            seen.push(format!("{}<{parent}", node.kind()));
            if label(node) == "color" {
                cx.replace_with_node(decl("background", "red"));
            }
            WalkAction::Continue
        });

        assert_eq!(
            seen,
            vec![
                "rule<",
                "at-root<rule",
                "rule<at-root",
                "declaration<rule",
                "declaration<rule",
            ]
        );
        assert_eq!(to_css(&ast), ".a {\n  .b {\n    background: red;\n  }\n}\n");
    }
}

mod contexts {
    use super::*;
    use pretty_assertions::assert_eq;

    #[rstest]
    fn context_is_transparent(#[values(Engine::Recursive, Engine::Iterative)] engine: Engine) {
        let mut ast = vec![rule(
            ".a",
            vec![context(
                overlay("inside", "true"),
                vec![decl("color", "red"), rule(".b", vec![decl("margin", "0")])],
            )],
        )];
        let mut seen = Vec::new();

        walk_fn(engine, &mut ast, |node, cx| {
            let parent = cx.parent().map(|p| p.kind().to_string());
            let inside = cx.context_value("inside").map(ToString::to_string);
            seen.push((node.kind().to_string(), parent, inside));
            WalkAction::Continue
        });

        let some = |s: &str| Some(s.to_string());
        assert_eq!(
            seen,
            vec![
                ("rule".to_string(), None, None),
                ("declaration".to_string(), some("rule"), some("true")),
                ("rule".to_string(), some("rule"), some("true")),
                ("declaration".to_string(), some("rule"), some("true")),
            ]
        );
    }

    #[rstest]
    fn context_does_not_leak_to_later_siblings(
        #[values(Engine::Recursive, Engine::Iterative)] engine: Engine,
    ) {
        let mut ast = vec![
            context(overlay("inside", "true"), vec![decl("a", "1")]),
            decl("b", "2"),
        ];
        let mut seen = Vec::new();

        walk_fn(engine, &mut ast, |node, cx| {
            seen.push(format!("{}={}", label(node), cx.context_value("inside").is_some()));
            WalkAction::Continue
        });

        assert_eq!(seen, vec!["a=true", "b=false"]);
    }

    #[rstest]
    fn nodes_inside_context_can_be_replaced(
        #[values(Engine::Recursive, Engine::Iterative)] engine: Engine,
    ) {
        let mut ast = vec![context(
            overlay("inside", "true"),
            vec![comment("x"), decl("color", "red")],
        )];

        walk_fn(engine, &mut ast, |node, _| match node {
            Node::Comment(_) => WalkAction::Replace(Vec::new()),
            _ => WalkAction::Continue,
        });

        assert_eq!(ast[0].nodes().map(<[Node]>::len), Some(1));
        assert_eq!(to_css(&ast), "color: red;\n");
    }
}
