//! Limits applied while analyzing a project.

use serde::{Deserialize, Serialize};

/// Default maximum size of a single source file (DoS protection).
pub const DEFAULT_MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

/// Default maximum length of a symbol resolution chain.
///
/// Import/re-export/alias chains and nested helper calls longer than this are
/// treated as unrecognized, which also breaks import cycles.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Analyzer limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct AnalyzerConfig {
    /// Root files larger than this fail the analysis.
    pub max_file_size: usize,
    /// Longest symbol resolution chain that is followed.
    pub max_depth: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl AnalyzerConfig {
    pub fn max_file_size(mut self, bytes: usize) -> Self {
        self.max_file_size = bytes;
        self
    }

    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}
