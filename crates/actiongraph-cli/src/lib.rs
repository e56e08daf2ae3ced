//! Command-line interface for actiongraph.
//!
//! - [`cli`] - argument parsing with clap
//! - [`commands`] - `analyze`, `nav` and `actions`
//! - [`project`] - reading a project directory into an analyzer
//! - [`error`] - error types and their miette rendering
//! - [`logger`] - tracing setup
//! - [`ui`] - status lines on stderr
//!
//! # Example
//!
//! ```rust,no_run
//! use actiongraph_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod project;
pub mod ui;

pub use error::{CliError, Result};
