//! Command implementations.
//!
//! - [`analyze`] - write the graph of a project
//! - [`nav`] - navigation list of a graph file
//! - [`actions`] - navigation list of a project's actions
//!
//! Each command provides an `execute` function taking its parsed arguments.

pub mod actions;
pub mod analyze;
pub mod nav;
pub(crate) mod utils;

pub use actions::execute as actions_execute;
pub use analyze::execute as analyze_execute;
pub use nav::execute as nav_execute;
