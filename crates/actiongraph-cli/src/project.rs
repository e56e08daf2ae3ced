//! Reading a project directory into an analyzer.
//!
//! Files are registered as `<project>/<relative path>`; the analyzer strips
//! the leading segment, so module specifiers and `tsconfig.json` globs resolve
//! against the project directory.

use std::path::{Path, PathBuf};

use actiongraph_analysis::{AnalyzerConfig, ProjectAnalyzer, RuleSet};
use actiongraph_config::AnalysisSettings;
use globset::GlobSet;
use ignore::WalkBuilder;
use tokio::fs;

use crate::error::{CliError, Result, ResultExt};

/// Extensions read from disk.
const EXTENSIONS: [&str; 3] = ["ts", "tsx", "json"];

/// Directories never descended into.
const SKIPPED_DIRS: [&str; 2] = ["node_modules", "dist"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFile {
    /// Path relative to the project directory, `/`-separated.
    pub relative: String,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct Project {
    /// Directory name; also the name of the generated graph.
    pub name: String,
    pub root: PathBuf,
    pub files: Vec<ProjectFile>,
}

impl Project {
    /// Read every source and JSON file under `dir`.
    ///
    /// `.gitignore` rules, hidden entries, `node_modules`, `dist` and the
    /// configured ignore globs are skipped. Files are returned sorted by path.
    pub async fn load(dir: &Path, settings: &AnalysisSettings) -> Result<Self> {
        if !fs::metadata(dir).await.with_path(dir)?.is_dir() {
            return Err(CliError::NotADirectory(dir.to_path_buf()));
        }
        let root = fs::canonicalize(dir).await.with_path(dir)?;
        let name = root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "project".to_string());

        let ignore = settings.ignore_set()?;
        let mut files = Vec::new();
        for (path, relative) in discover(&root, &ignore)? {
            match fs::read_to_string(&path).await {
                Ok(text) => files.push(ProjectFile { relative, text }),
                Err(err) if err.kind() == std::io::ErrorKind::InvalidData => {
                    tracing::warn!(path = %path.display(), "skipping file that is not UTF-8");
                }
                Err(err) => return Err(err.into()),
            }
        }

        tracing::info!(project = %name, files = files.len(), "read project");
        Ok(Self { name, root, files })
    }

    /// A fresh analyzer with every file registered.
    pub fn analyzer(&self, rules: RuleSet, config: AnalyzerConfig) -> ProjectAnalyzer {
        let mut analyzer = ProjectAnalyzer::new().rules(rules).config(config);
        for file in &self.files {
            analyzer.create_source_file(&self.store_path(&file.relative), &file.text);
        }
        analyzer
    }

    /// `relative` as registered with the analyzer.
    pub fn store_path(&self, relative: &str) -> String {
        format!("{}/{}", self.name, relative)
    }
}

/// `(absolute, relative)` paths of the files to read, sorted.
fn discover(root: &Path, ignore: &GlobSet) -> Result<Vec<(PathBuf, String)>> {
    let walker = WalkBuilder::new(root)
        .hidden(true)
        .git_ignore(true)
        .git_exclude(true)
        .require_git(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(|entry| {
            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            !(is_dir && SKIPPED_DIRS.iter().any(|skipped| entry.file_name() == *skipped))
        })
        .build();

    let mut found = Vec::new();
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let path = entry.path();
        let has_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| EXTENSIONS.contains(&ext));
        if !has_extension {
            continue;
        }
        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };
        let relative = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        if ignore.is_match(&relative) {
            tracing::debug!(path = %relative, "ignored by configuration");
            continue;
        }
        found.push((path.to_path_buf(), relative));
    }
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, text: &str) {
        let path = root.join(relative);
        std_fs::create_dir_all(path.parent().unwrap()).unwrap();
        std_fs::write(path, text).unwrap();
    }

    #[tokio::test]
    async fn test_reads_sources_and_skips_build_output() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("shop");
        write(&root, "tsconfig.json", "{}");
        write(&root, "src/app/books.actions.ts", "export {}");
        write(&root, "src/app/books.component.html", "<p></p>");
        write(&root, "node_modules/@ngrx/store/index.d.ts", "export {}");
        write(&root, "dist/main.js", "");
        write(&root, ".angular/cache.json", "{}");

        let project = Project::load(&root, &AnalysisSettings::default()).await.unwrap();

        assert_eq!(project.name, "shop");
        let paths: Vec<_> = project.files.iter().map(|f| f.relative.as_str()).collect();
        assert_eq!(paths, vec!["src/app/books.actions.ts", "tsconfig.json"]);
        assert_eq!(project.store_path("tsconfig.json"), "shop/tsconfig.json");
    }

    #[tokio::test]
    async fn test_respects_configured_ignore_globs() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("shop");
        write(&root, "src/a.ts", "");
        write(&root, "src/a.spec.ts", "");

        let settings = AnalysisSettings {
            ignore: vec!["**/*.spec.ts".to_string()],
            ..AnalysisSettings::default()
        };
        let project = Project::load(&root, &settings).await.unwrap();

        let paths: Vec<_> = project.files.iter().map(|f| f.relative.as_str()).collect();
        assert_eq!(paths, vec!["src/a.ts"]);
    }

    #[tokio::test]
    async fn test_rejects_files_and_missing_directories() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "a.ts", "");

        let err = Project::load(&temp.path().join("a.ts"), &AnalysisSettings::default())
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::NotADirectory(_)));

        let err = Project::load(&temp.path().join("missing"), &AnalysisSettings::default())
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }
}
