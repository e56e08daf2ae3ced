//! Command-line interface definition.
//!
//! - `actiongraph analyze <DIR>` - write the graph of a project
//! - `actiongraph nav <FILE>` - list the navigable nodes of a graph file
//! - `actiongraph actions <DIR>` - list the actions of a project

mod commands;
#[cfg(test)]
mod tests;

use std::path::PathBuf;

use clap::Parser;

pub use commands::{ActionsArgs, AnalyzeArgs, Command, NavArgs};

/// Draw the action graph of an NgRx project
#[derive(Parser, Debug)]
#[command(
    name = "actiongraph",
    version,
    about = "Draw the action graph of an NgRx project",
    long_about = "actiongraph reads the TypeScript sources of an NgRx project and draws\n\
                  which actions trigger which effects, what those effects dispatch, which\n\
                  actions they produce on errors and which reducers handle each action."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file to use instead of `<DIR>/actiongraph.toml`
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
