//! DOT parse errors.

use thiserror::Error;

/// Syntax error in DOT text, located by byte offset and 1-based line/column.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at line {line}, column {column}")]
pub struct DotParseError {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl DotParseError {
    pub fn new(text: &str, offset: usize, message: impl Into<String>) -> Self {
        let offset = offset.min(text.len());
        let before = text.get(..offset).unwrap_or(text);
        let line = before.matches('\n').count() + 1;
        let column = before
            .rsplit('\n')
            .next()
            .map_or(1, |current| current.chars().count() + 1);
        let message = message.into();
        Self {
            offset,
            line,
            column,
            message: if message.is_empty() {
                "unexpected input".to_string()
            } else {
                message
            },
        }
    }
}
