use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze a project and write its graph
    ///
    /// Reads every TypeScript file of the project directory, recovers actions,
    /// effects and reducers, and writes the graph as `<project>.dot`.
    Analyze(AnalyzeArgs),

    /// List the navigable nodes of a graph file
    ///
    /// Accepts any DOT file, including ones edited by hand or produced by
    /// other tools. Prints a JSON array of `{id, label}` items.
    Nav(NavArgs),

    /// List the actions of a project as navigation items
    Actions(ActionsArgs),
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Project directory
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Compiler configuration, relative to the project directory
    ///
    /// Overrides `analysis.tsconfig` from the configuration file.
    #[arg(long, value_name = "REL")]
    pub tsconfig: Option<String>,

    /// Graph file to write (defaults to `<project>.dot`)
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Also print the analysis result as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct NavArgs {
    /// Graph file in DOT format
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Keep only items whose label contains this text
    #[arg(short, long, value_name = "QUERY")]
    pub filter: Option<String>,
}

#[derive(Args, Debug)]
pub struct ActionsArgs {
    /// Project directory
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Compiler configuration, relative to the project directory
    #[arg(long, value_name = "REL")]
    pub tsconfig: Option<String>,

    /// Keep only items whose label contains this text
    #[arg(short, long, value_name = "QUERY")]
    pub filter: Option<String>,
}
