//! Configuration structure.

use std::path::{Path, PathBuf};

use actiongraph_analysis::{AnalyzerConfig, DEFAULT_MAX_DEPTH, DEFAULT_MAX_FILE_SIZE, RuleSet};
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ActionGraphConfig {
    pub analysis: AnalysisSettings,
    /// Framework recognition rules; NgRx unless overridden.
    pub rules: RuleSet,
    pub output: OutputSettings,
}

impl ActionGraphConfig {
    /// Check values serde cannot.
    pub fn validate(&self) -> Result<()> {
        self.analysis.validate()?;
        self.output.validate()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct AnalysisSettings {
    /// Compiler configuration, relative to the project directory.
    pub tsconfig: String,
    /// Extra glob patterns, relative to the project directory, that are never read.
    pub ignore: Vec<String>,
    pub max_file_size: usize,
    pub max_depth: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            tsconfig: "tsconfig.json".to_string(),
            ignore: Vec::new(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl AnalysisSettings {
    pub fn analyzer_config(&self) -> AnalyzerConfig {
        AnalyzerConfig::default()
            .max_file_size(self.max_file_size)
            .max_depth(self.max_depth)
    }

    /// Compile the `ignore` patterns.
    pub fn ignore_set(&self) -> Result<GlobSet> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.ignore {
            let glob = Glob::new(pattern)
                .map_err(|e| ConfigError::invalid("analysis.ignore", format!("{pattern}: {e}")))?;
            builder.add(glob);
        }
        builder
            .build()
            .map_err(|e| ConfigError::invalid("analysis.ignore", e.to_string()))
    }

    fn validate(&self) -> Result<()> {
        if self.tsconfig.trim().is_empty() {
            return Err(ConfigError::invalid(
                "analysis.tsconfig",
                "must name a file, e.g. \"tsconfig.json\"",
            ));
        }
        if self.max_depth == 0 {
            return Err(ConfigError::invalid("analysis.max-depth", "must be at least 1"));
        }
        if self.max_file_size == 0 {
            return Err(ConfigError::invalid("analysis.max-file-size", "must be at least 1"));
        }
        self.ignore_set().map(|_| ())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct OutputSettings {
    /// Directory the graph file is written to; the working directory if unset.
    pub dir: Option<PathBuf>,
    /// Graph file name; `<project>.dot` if unset.
    pub file_name: Option<String>,
}

impl OutputSettings {
    /// Where the graph of project `project` is written.
    pub fn dot_path(&self, project: &str) -> PathBuf {
        let file_name = self
            .file_name
            .clone()
            .unwrap_or_else(|| format!("{project}.dot"));
        match &self.dir {
            Some(dir) => dir.join(file_name),
            None => Path::new(&file_name).to_path_buf(),
        }
    }

    fn validate(&self) -> Result<()> {
        match self.file_name.as_deref() {
            Some("") => Err(ConfigError::invalid("output.file-name", "must not be empty")),
            Some(name) if name.contains(['/', '\\']) => Err(ConfigError::invalid(
                "output.file-name",
                "must be a plain file name; use output.dir for the directory",
            )),
            _ => Ok(()),
        }
    }
}
