//! Compiler configuration (`tsconfig.json`) loading.
//!
//! Reads the subset of the configuration that decides which files form the
//! program and how bare specifiers map onto project files: `files`,
//! `include`, `exclude`, `extends`, `compilerOptions.baseUrl` and
//! `compilerOptions.paths`.

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use serde::Deserialize;

use crate::error::{AnalyzeError, Result};
use crate::resolver::{directory_of, join_path};
use crate::store::SourceStore;

/// Extensions of files that take part in a program.
pub const SCRIPT_EXTENSIONS: &[&str] = &[".ts", ".tsx", ".mts", ".cts", ".js", ".jsx", ".mjs", ".cjs"];

const DEFAULT_EXCLUDE: &[&str] = &["node_modules", "bower_components", "jspm_packages"];

/// Longest `extends` chain that is followed.
const MAX_EXTENDS_DEPTH: usize = 16;

pub fn is_script(path: &str) -> bool {
    SCRIPT_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Extends {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConfig {
    extends: Option<Extends>,
    files: Option<Vec<String>>,
    include: Option<Vec<String>>,
    exclude: Option<Vec<String>>,
    #[serde(default)]
    compiler_options: RawCompilerOptions,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCompilerOptions {
    base_url: Option<String>,
    paths: Option<IndexMap<String, Vec<String>>>,
    out_dir: Option<String>,
}

/// A `compilerOptions.paths` entry with targets resolved to store paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMapping {
    pub pattern: String,
    pub targets: Vec<String>,
}

/// A loaded configuration with every pattern and directory resolved against
/// the configuration file that declared it.
#[derive(Debug, Clone, Default)]
pub struct CompilerConfig {
    pub path: String,
    pub files: Option<Vec<String>>,
    pub include: Option<Vec<String>>,
    pub exclude: Option<Vec<String>>,
    pub base_url: Option<String>,
    pub paths: Vec<PathMapping>,
    pub out_dir: Option<String>,
}

impl CompilerConfig {
    /// Load the configuration at `path` (a normalized store path), following
    /// relative `extends` entries.
    pub fn load(store: &SourceStore, path: &str) -> Result<Self> {
        let mut seen = FxHashSet::default();
        Self::load_chain(store, path, &mut seen)
    }

    fn load_chain(store: &SourceStore, path: &str, seen: &mut FxHashSet<String>) -> Result<Self> {
        let text = store
            .get(path)
            .ok_or_else(|| AnalyzeError::ConfigNotFound(path.to_string()))?;
        if !seen.insert(path.to_string()) || seen.len() > MAX_EXTENDS_DEPTH {
            return Err(AnalyzeError::InvalidConfig {
                path: path.to_string(),
                message: "circular or too deep `extends` chain".to_string(),
            });
        }

        let raw: RawConfig =
            serde_json::from_str(&strip_jsonc(text)).map_err(|e| AnalyzeError::InvalidConfig {
                path: path.to_string(),
                message: e.to_string(),
            })?;
        let dir = directory_of(path);

        let bases = match &raw.extends {
            Some(Extends::One(base)) => vec![base.clone()],
            Some(Extends::Many(bases)) => bases.clone(),
            None => Vec::new(),
        };
        let mut config = CompilerConfig::default();
        for base in bases {
            if !(base.starts_with("./") || base.starts_with("../")) {
                tracing::debug!(config = %path, extends = %base, "skipping package configuration");
                continue;
            }
            let mut base_path = join_path(dir, &base);
            if !base_path.ends_with(".json") && !store.contains(&base_path) {
                base_path.push_str(".json");
            }
            let parent = Self::load_chain(store, &base_path, seen)?;
            config.merge(parent);
        }

        let resolve_all =
            |patterns: Vec<String>| patterns.iter().map(|p| join_path(dir, p)).collect::<Vec<_>>();
        let own = CompilerConfig {
            path: path.to_string(),
            files: raw.files.map(resolve_all),
            include: raw.include.map(resolve_all),
            exclude: raw.exclude.map(resolve_all),
            base_url: raw.compiler_options.base_url.as_deref().map(|b| join_path(dir, b)),
            paths: Vec::new(),
            out_dir: raw.compiler_options.out_dir.as_deref().map(|o| join_path(dir, o)),
        };
        config.merge(own);

        // Path targets resolve against baseUrl, or against the declaring file without one.
        if let Some(paths) = raw.compiler_options.paths {
            let target_dir = config.base_url.clone().unwrap_or_else(|| dir.to_string());
            config.paths = paths
                .into_iter()
                .map(|(pattern, targets)| PathMapping {
                    pattern,
                    targets: targets.iter().map(|t| join_path(&target_dir, t)).collect(),
                })
                .collect();
        }

        config.path = path.to_string();
        Ok(config)
    }

    fn merge(&mut self, other: CompilerConfig) {
        self.path = other.path;
        if other.files.is_some() {
            self.files = other.files;
        }
        if other.include.is_some() {
            self.include = other.include;
        }
        if other.exclude.is_some() {
            self.exclude = other.exclude;
        }
        if other.base_url.is_some() {
            self.base_url = other.base_url;
        }
        if !other.paths.is_empty() {
            self.paths = other.paths;
        }
        if other.out_dir.is_some() {
            self.out_dir = other.out_dir;
        }
    }

    /// The files that form the program, in store order.
    pub fn root_files<'s>(&self, store: &'s SourceStore) -> Result<Vec<&'s str>> {
        let dir = directory_of(&self.path);

        let include: Vec<String> = match (&self.files, &self.include) {
            (Some(_), None) => Vec::new(),
            (_, Some(include)) => include.iter().map(|p| expand_directory(p)).collect(),
            (None, None) => vec![join_path(dir, "**/*")],
        };
        let exclude: Vec<String> = match &self.exclude {
            Some(exclude) => exclude.clone(),
            None => DEFAULT_EXCLUDE
                .iter()
                .map(|d| join_path(dir, d))
                .chain(self.out_dir.clone())
                .collect(),
        };

        let exclude: Vec<String> = exclude
            .iter()
            .flat_map(|p| [p.clone(), format!("{}/**", p.trim_end_matches('/'))])
            .collect();

        let include_set = self.glob_set(include.iter().map(String::as_str))?;
        let exclude_set = self.glob_set(exclude.iter().map(String::as_str))?;
        let explicit: FxHashSet<&str> = self
            .files
            .iter()
            .flatten()
            .map(String::as_str)
            .collect();

        Ok(store
            .paths()
            .filter(|path| is_script(path))
            .filter(|path| {
                explicit.contains(path) || (include_set.is_match(path) && !exclude_set.is_match(path))
            })
            .collect())
    }

    fn glob_set<'p>(&self, patterns: impl Iterator<Item = &'p str>) -> Result<GlobSet> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = GlobBuilder::new(pattern)
                .literal_separator(true)
                .build()
                .map_err(|e| AnalyzeError::InvalidPattern {
                    path: self.path.clone(),
                    pattern: pattern.to_string(),
                    message: e.to_string(),
                })?;
            builder.add(glob);
        }
        builder.build().map_err(|e| AnalyzeError::InvalidPattern {
            path: self.path.clone(),
            pattern: String::new(),
            message: e.to_string(),
        })
    }
}

/// `src` means every file below `src`.
fn expand_directory(pattern: &str) -> String {
    let last = pattern.rsplit('/').next().unwrap_or(pattern);
    if last.contains(['*', '?', '.']) {
        pattern.to_string()
    } else {
        format!("{}/**/*", pattern.trim_end_matches('/'))
    }
}

/// Remove comments and trailing commas so the text parses as strict JSON.
pub fn strip_jsonc(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            match c {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            '/' if chars.peek() == Some(&'/') => {
                for next in chars.by_ref() {
                    if next == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut previous = '\0';
                for next in chars.by_ref() {
                    if previous == '*' && next == '/' {
                        break;
                    }
                    previous = next;
                }
            }
            '}' | ']' => {
                let trimmed = out.trim_end().len();
                if out[..trimmed].ends_with(',') {
                    out.truncate(trimmed - 1);
                }
                out.push(c);
            }
            _ => out.push(c),
        }
    }

    out
}
