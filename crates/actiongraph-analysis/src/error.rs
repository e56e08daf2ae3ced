//! Error types for project analysis.
//!
//! Only structural failures surface here. Source constructs that do not match a
//! recognized pattern are left out of the model and never become errors.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalyzeError>;

#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// The compiler configuration is not among the registered files.
    #[error("compiler configuration not found: {0}")]
    ConfigNotFound(String),

    /// The compiler configuration exists but cannot be read as JSON.
    #[error("invalid compiler configuration {path}: {message}")]
    InvalidConfig { path: String, message: String },

    /// A configuration glob could not be compiled.
    #[error("invalid pattern '{pattern}' in {path}: {message}")]
    InvalidPattern {
        path: String,
        pattern: String,
        message: String,
    },

    /// A root file could not be parsed at all.
    #[error("syntax error in {path}: {message}")]
    Syntax { path: String, message: String },

    /// A root file exceeds the configured size limit.
    #[error("file {path} is {size} bytes, over the {limit} byte limit")]
    FileTooLarge { path: String, size: usize, limit: usize },
}
