//! # actiongraph-dot
//!
//! Graphviz DOT text for action graphs.
//!
//! - [`create_dot_src`] renders a relational model with a fixed visual
//!   vocabulary: action nodes, dispatch edges, non dispatching sinks, caught
//!   errors and reducer stores.
//! - [`parse_dot`] reads arbitrary DOT text into a syntax tree.
//! - [`nav_items_from_dot_src`] and [`nav_items_from_actions`] produce the
//!   navigation list shown next to a graph.
//!
//! ```
//! use actiongraph_analysis::EffectRecord;
//! use actiongraph_dot::{create_dot_src, nav_items_from_dot_src};
//!
//! let effects = [EffectRecord::new("load$")
//!     .causes(["[Books] Load"])
//!     .effects(["[Books] Loaded"])];
//! let dot = create_dot_src(&["[Books] Load", "[Books] Loaded"], &effects, &[]);
//!
//! let items = nav_items_from_dot_src(&dot).unwrap();
//! assert_eq!(items[0].label, "[Books]<br/>Load");
//! ```

pub mod ast;
pub mod document;
pub mod error;
pub mod generator;
pub mod label;
pub mod nav;
pub mod parser;

pub use ast::{Graph, GraphKind, Statement};
pub use document::{DotDocument, DotStatement, Section};
pub use error::DotParseError;
pub use generator::{build_document, create_dot_src, default_header};
pub use nav::{NavListItem, filter_nav_items, nav_items_from_actions, nav_items_from_dot_src};
pub use parser::parse_dot;
