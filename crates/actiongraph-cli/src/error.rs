//! Error handling for the CLI.
//!
//! Library errors convert into [`CliError`] via `From`; `main` renders the
//! final error with miette (see [`cli_error_to_miette`]).

mod report;

use std::path::{Path, PathBuf};

use actiongraph_analysis::AnalyzeError;
use actiongraph_config::ConfigError;
use actiongraph_dot::DotParseError;
use thiserror::Error;

pub use report::cli_error_to_miette;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Analysis failed: {0}")]
    Analyze(#[from] AnalyzeError),

    /// A graph file that is not valid DOT.
    #[error("Invalid graph file {}: {source}", .path.display())]
    Dot {
        path: PathBuf,
        text: String,
        #[source]
        source: DotParseError,
    },

    #[error("Not a project directory: {}\n\nHint: Pass the directory that contains tsconfig.json", .0.display())]
    NotADirectory(PathBuf),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to read project files: {0}")]
    Walk(#[from] ignore::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Attach context to fallible file operations.
pub trait ResultExt<T> {
    /// Report a missing file as [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<Path>) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|e| match e.into() {
            CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            other => other,
        })
    }
}
