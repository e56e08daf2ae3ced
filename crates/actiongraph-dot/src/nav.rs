//! Navigation list derived from graph text or from an action list.

use serde::{Deserialize, Serialize};

use crate::ast::{EdgeOperand, NodeStatement, Statement, Subgraph};
use crate::error::DotParseError;
use crate::label::list_label;
use crate::parser::parse_dot;

/// A navigable graph node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavListItem {
    pub id: String,
    pub label: String,
}

impl NavListItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Parse `text` and list its labelled, user-facing nodes.
///
/// Node statements of a statement list come first, followed by those of the
/// subgraphs it contains, in statement order and at any depth. The top-level
/// statements of every graph in `text` form one list. Nodes without
/// a label and synthetic ids (containing `-`) are left out.
pub fn nav_items_from_dot_src(text: &str) -> Result<Vec<NavListItem>, DotParseError> {
    let graphs = parse_dot(text)?;
    let mut nodes = Vec::new();
    collect_nodes(graphs.iter().flat_map(|graph| &graph.statements), &mut nodes);

    let items: Vec<NavListItem> = nodes
        .into_iter()
        .filter_map(nav_item)
        .filter(|item| !item.id.contains('-'))
        .collect();
    tracing::debug!(graphs = graphs.len(), items = items.len(), "read navigation items");
    Ok(items)
}

/// One item per action, in order, without filtering.
pub fn nav_items_from_actions<S: AsRef<str>>(actions: &[S]) -> Vec<NavListItem> {
    actions
        .iter()
        .map(AsRef::as_ref)
        .map(|action| NavListItem::new(action, list_label(action)))
        .collect()
}

/// Items whose label contains `query`, ignoring case. `<br/>` counts as a
/// space.
pub fn filter_nav_items(items: &[NavListItem], query: &str) -> Vec<NavListItem> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| {
            item.label
                .replace("<br/>", " ")
                .to_lowercase()
                .contains(&query)
        })
        .cloned()
        .collect()
}

fn collect_nodes<'g, I>(statements: I, out: &mut Vec<&'g NodeStatement>)
where
    I: IntoIterator<Item = &'g Statement>,
    I::IntoIter: Clone,
{
    let statements = statements.into_iter();
    out.extend(statements.clone().filter_map(|statement| match statement {
        Statement::Node(node) => Some(node),
        _ => None,
    }));

    for statement in statements {
        match statement {
            Statement::Subgraph(subgraph) => collect_nodes(&subgraph.statements, out),
            Statement::Edge(edge) => {
                for operand in &edge.operands {
                    if let EdgeOperand::Subgraph(Subgraph { statements, .. }) = operand {
                        collect_nodes(statements, out);
                    }
                }
            }
            _ => {}
        }
    }
}

fn nav_item(node: &NodeStatement) -> Option<NavListItem> {
    let label = node.attribute("label")?;
    if label.is_empty() {
        return None;
    }
    Some(NavListItem::new(node.node.id.as_str(), label.replacen(r"\n", "<br/>", 1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_nested_subgraph_nodes_after_own_nodes() {
        let items = nav_items_from_dot_src(
            r#"digraph {
                { "[A] nested" [label="[A]\nnested"] }
                "[A] top" [label="[A]\ntop"]
                "[A] top" -> { "[A] edge" [label="[A]\nedge"]; { "[A] deep" [label="deep"] } }
            }"#,
        )
        .expect("valid dot");

        let ids: Vec<_> = items.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec!["[A] top", "[A] nested", "[A] edge", "[A] deep"]);
        assert_eq!(items[0].label, "[A]<br/>top");
        assert_eq!(items[3].label, "deep");
    }

    #[test]
    fn skips_unlabelled_and_synthetic_nodes() {
        let items = nav_items_from_dot_src(
            r#"digraph { a; b [label=""]; "a-x" [label="x"]; c [label="C"] }"#,
        )
        .expect("valid dot");
        assert_eq!(items, vec![NavListItem::new("c", "C")]);
    }

    #[test]
    fn replaces_only_the_first_break() {
        let items = nav_items_from_dot_src(r#"digraph { n [label="a\nb\nc"] }"#).expect("valid dot");
        assert_eq!(items[0].label, r"a<br/>b\nc");
    }

    #[test]
    fn uses_the_first_label_attribute() {
        let items = nav_items_from_dot_src(r#"digraph { n [label="one"] [label="two"] }"#)
            .expect("valid dot");
        assert_eq!(items[0].label, "one");
    }

    #[test]
    fn top_level_nodes_of_all_graphs_come_first() {
        let items = nav_items_from_dot_src(
            r#"digraph { { a [label="A"] } b [label="B"] }
               digraph { c [label="C"] }"#,
        )
        .expect("valid dot");

        let ids: Vec<_> = items.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn propagates_syntax_errors() {
        assert!(nav_items_from_dot_src("digraph {").is_err());
    }

    #[test]
    fn filters_by_label() {
        let items = nav_items_from_actions(&["[Books] Load all", "[Books] Delete", "[Auth] Login"]);

        let found = filter_nav_items(&items, "books load");
        assert_eq!(found, vec![NavListItem::new("[Books] Load all", "[Books]<br/>Load all")]);
        assert_eq!(filter_nav_items(&items, "LOGIN").len(), 1);
        assert_eq!(filter_nav_items(&items, "  ").len(), 3);
        assert!(filter_nav_items(&items, "missing").is_empty());
    }
}
