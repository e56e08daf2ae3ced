//! Rendering a relational model as DOT.

use actiongraph_analysis::{EffectRecord, ReducerRecord};
use rustc_hash::FxHashSet;

use crate::document::{DotDocument, DotStatement, Section};
use crate::label::graph_label;

const ACTION_FILL: &str = "#ff4081";
const ERROR_FILL: &str = "#f44336";
const FONT_COLOR: &str = "#ffffff";

/// Graph-wide defaults every generated document starts with.
pub fn default_header() -> Vec<String> {
    vec![
        r##"bgcolor="#fafafa""##.to_string(),
        r#"node [shape="polygon" style="filled" fontname="Helvetica"]"#.to_string(),
        r##"edge [color="#412945", penwidth="2"]"##.to_string(),
    ]
}

/// Render `actions`, `effects` and `reducers` as DOT source.
///
/// Sections appear in a fixed order: dispatching effects, non dispatching
/// effects, caught errors, actions that take part in no effect, reducers.
/// Only the dispatching section drops repeated lines.
pub fn create_dot_src<S: AsRef<str>>(
    actions: &[S],
    effects: &[EffectRecord],
    reducers: &[ReducerRecord],
) -> String {
    build_document(actions, effects, reducers).render()
}

pub fn build_document<S: AsRef<str>>(
    actions: &[S],
    effects: &[EffectRecord],
    reducers: &[ReducerRecord],
) -> DotDocument {
    let mut doc = DotDocument::new(default_header());

    let mut dispatching = Section::new("dispatching effects").dedup();
    for record in effects.iter().filter(|r| r.dispatch) {
        for cause in &record.causes {
            for effect in &record.effects {
                dispatching.push(action_node(cause));
                dispatching.push(action_node(effect));
                dispatching.push(
                    DotStatement::edge(cause, effect).attr("tooltip", format!("Dispatches\n{effect}")),
                );
            }
        }
    }
    doc.section(dispatching);

    let mut silent = Section::new("non dispatching effects");
    for record in effects.iter().filter(|r| !r.dispatch) {
        for cause in &record.causes {
            let sink = format!("{cause}-{}", record.effect);
            silent.push(action_node(cause));
            silent.push(
                DotStatement::node(sink.as_str())
                    .attr("color", "invis")
                    .attr("label", ""),
            );
            silent.push(
                DotStatement::edge(cause, sink)
                    .attr("arrowhead", "tee")
                    .attr("tooltip", format!("Non dispatching effect\n{}", record.effect)),
            );
        }
    }
    doc.section(silent);

    let mut errors = Section::new("catch errors");
    for record in effects {
        for cause in &record.causes {
            for error in &record.errors {
                let node = format!("{cause}-{error}");
                errors.push(
                    DotStatement::node(node.as_str())
                        .attr("id", node.as_str())
                        .attr("label", graph_label(error))
                        .attr("fillcolor", ERROR_FILL)
                        .attr("fontcolor", FONT_COLOR)
                        .attr("tooltip", error.as_str()),
                );
                errors.push(
                    DotStatement::edge(cause, node)
                        .attr("color", ERROR_FILL)
                        .attr("style", "dashed")
                        .attr("tooltip", format!("Error caught\n{}", record.effect)),
                );
            }
        }
    }
    doc.section(errors);

    let connected: FxHashSet<&str> = effects
        .iter()
        .flat_map(|r| r.causes.iter().chain(&r.effects))
        .map(String::as_str)
        .collect();
    let mut others = Section::new("other actions");
    for action in actions.iter().map(AsRef::as_ref) {
        if !connected.contains(action) {
            others.push(action_node(action));
        }
    }
    doc.section(others);

    let mut stores = Section::new("reducers");
    for ReducerRecord { action, reducer } in reducers {
        let store = format!("{reducer}-{action}");
        stores.push(
            DotStatement::node(store.as_str())
                .attr("label", "store")
                .attr("style", "")
                .attr("tooltip", "store"),
        );
        stores.push(DotStatement::edge(action, store).attr("tooltip", reducer.as_str()));
    }
    doc.section(stores);

    tracing::debug!(
        actions = actions.len(),
        effects = effects.len(),
        reducers = reducers.len(),
        "built graph document"
    );
    doc
}

/// The styled node every action is drawn as.
fn action_node(action: &str) -> DotStatement {
    DotStatement::node(action)
        .attr("id", action)
        .attr("label", graph_label(action))
        .attr("fillcolor", ACTION_FILL)
        .attr("fontcolor", FONT_COLOR)
        .attr("tooltip", "")
}
