use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use crate::cli::{Cli, Command};

#[test]
fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn test_parse_analyze() {
    let cli = Cli::try_parse_from([
        "actiongraph",
        "analyze",
        "./shop",
        "--tsconfig",
        "tsconfig.app.json",
        "--out",
        "graphs/shop.dot",
        "--json",
    ])
    .unwrap();

    match cli.command {
        Command::Analyze(args) => {
            assert_eq!(args.dir, PathBuf::from("./shop"));
            assert_eq!(args.tsconfig.as_deref(), Some("tsconfig.app.json"));
            assert_eq!(args.out, Some(PathBuf::from("graphs/shop.dot")));
            assert!(args.json);
        }
        other => panic!("expected analyze, got {other:?}"),
    }
}

#[test]
fn test_parse_nav_with_filter() {
    let cli = Cli::try_parse_from(["actiongraph", "nav", "shop.dot", "-f", "books"]).unwrap();
    match cli.command {
        Command::Nav(args) => {
            assert_eq!(args.file, PathBuf::from("shop.dot"));
            assert_eq!(args.filter.as_deref(), Some("books"));
        }
        other => panic!("expected nav, got {other:?}"),
    }
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "actiongraph",
        "actions",
        "shop",
        "--verbose",
        "--no-color",
        "--config",
        "ci.toml",
    ])
    .unwrap();
    assert!(cli.verbose);
    assert!(cli.no_color);
    assert_eq!(cli.config, Some(PathBuf::from("ci.toml")));
}

#[test]
fn test_verbose_conflicts_with_quiet() {
    assert!(Cli::try_parse_from(["actiongraph", "-v", "-q", "nav", "a.dot"]).is_err());
}

#[test]
fn test_missing_directory_is_rejected() {
    assert!(Cli::try_parse_from(["actiongraph", "analyze"]).is_err());
}
