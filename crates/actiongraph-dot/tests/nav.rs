//! Navigation lists read back from graph text.

use actiongraph_analysis::EffectRecord;
use actiongraph_dot::{
    NavListItem, create_dot_src, filter_nav_items, nav_items_from_actions, nav_items_from_dot_src,
};
use proptest::prelude::*;

#[test]
fn test_nav_items_include_edge_subgraphs() {
    let dot_src = concat!(
        "digraph {",
        r#""[Effects] Create dot src" [label="[Effects]\nCreate dot src"]; "#,
        r#""[Effects] Create dot src succeeded" [label="[Effects]\nCreate dot src succeeded"]; "#,
        r#""[Effects] Create dot src" -> subgraph {"#,
        r#"    "[Effects] Open snackbar" [label="[Effects]\nOpen snackbar"];"#,
        "  }",
        "}"
    );

    let items = nav_items_from_dot_src(dot_src).expect("valid dot");

    assert_eq!(
        items,
        vec![
            NavListItem::new("[Effects] Create dot src", "[Effects]<br/>Create dot src"),
            NavListItem::new(
                "[Effects] Create dot src succeeded",
                "[Effects]<br/>Create dot src succeeded"
            ),
            NavListItem::new("[Effects] Open snackbar", "[Effects]<br/>Open snackbar"),
        ]
    );
}

#[test]
fn test_nav_items_from_actions() {
    let items = nav_items_from_actions(&[
        "[Effects] Create dot src",
        "[Effects] Create dot src succeeded",
    ]);

    assert_eq!(
        items,
        vec![
            NavListItem::new("[Effects] Create dot src", "[Effects]<br/>Create dot src"),
            NavListItem::new(
                "[Effects] Create dot src succeeded",
                "[Effects]<br/>Create dot src succeeded"
            ),
        ]
    );
}

#[test]
fn test_generated_graph_hides_synthetic_nodes() {
    let effects = [
        EffectRecord::new("log$").causes(["[A] a"]).dispatch(false),
        EffectRecord::new("load$")
            .causes(["[A] a"])
            .effects(["[B] b"])
            .errors(["[E] failed"]),
    ];
    let dot = create_dot_src(&["[A] a", "[B] b"], &effects, &[]);

    let items = nav_items_from_dot_src(&dot).expect("generated text parses");
    let ids: Vec<_> = items.iter().map(|item| item.id.as_str()).collect();

    // Dispatching nodes come first, then the cause repeated by the silent effect.
    assert_eq!(ids, vec!["[A] a", "[B] b", "[A] a"]);
}

#[test]
fn test_backslashes_survive_the_round_trip() {
    let actions = [r"[Paths] C:\", r#"[Paths] say \"hi\""#];
    let dot = create_dot_src(&actions, &[], &[]);

    let items = nav_items_from_dot_src(&dot).expect("generated text parses");
    assert_eq!(
        items,
        vec![
            NavListItem::new(r"[Paths] C:\", r"[Paths]<br/>C:\"),
            NavListItem::new(r#"[Paths] say \"hi\""#, r#"[Paths]<br/>say \"hi\""#),
        ]
    );
}

#[test]
fn test_filter_generated_items() {
    let items = nav_items_from_actions(&["[Books] Load all", "[Authors] Load all", "[Books] Clear"]);
    let found = filter_nav_items(&items, "books");
    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|item| item.id.starts_with("[Books]")));
}

proptest! {
    // No `n`: a literal `\n` in an action reads back as a line break.
    #[test]
    fn prop_unconnected_actions_round_trip(
        actions in prop::collection::vec("[A-Za-mo-z0-9 \\[\\]\"\\\\]{1,16}", 0..8)
    ) {
        let dot = create_dot_src(&actions, &[], &[]);
        let from_text = nav_items_from_dot_src(&dot).expect("generated text parses");
        prop_assert_eq!(from_text, nav_items_from_actions(&actions));
    }

    #[test]
    fn prop_generated_text_always_parses(
        causes in prop::collection::vec("\\[[A-Z]\\] [a-z]{1,6}", 1..4),
        effects in prop::collection::vec("\\[[A-Z]\\] [a-z]{1,6}", 0..4),
        dispatch in any::<bool>(),
    ) {
        let record = EffectRecord::new("effect$")
            .causes(causes.clone())
            .effects(if dispatch { effects } else { Vec::new() })
            .dispatch(dispatch);
        let dot = create_dot_src(&causes, &[record], &[]);

        let items = nav_items_from_dot_src(&dot).expect("generated text parses");
        prop_assert!(items.iter().all(|item| !item.id.contains('-')));
        prop_assert!(items.iter().all(|item| item.label.contains("<br/>")));
    }
}
