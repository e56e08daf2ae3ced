//! actiongraph: draw the action graph of an NgRx project.

use actiongraph_cli::{cli, commands, error, logger, ui};
use clap::Parser;
use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let config = args.config.as_deref();
    let result = match args.command {
        cli::Command::Analyze(analyze_args) => commands::analyze_execute(analyze_args, config).await,
        cli::Command::Nav(nav_args) => commands::nav_execute(nav_args).await,
        cli::Command::Actions(actions_args) => commands::actions_execute(actions_args, config).await,
    };

    result.map_err(error::cli_error_to_miette)
}
