//! In-memory source store.
//!
//! Files are registered one at a time before an analysis run. Callers pass
//! paths that carry a leading project segment (`my-app/src/app.ts`); the store
//! keys files by the path with that segment removed (`src/app.ts`).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A registered source file as seen by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    pub path: String,
    pub text: String,
}

/// Strip the leading path segment.
///
/// Everything up to and including the first `/` that has at least one
/// character before it is removed. Paths without such a slash are returned
/// unchanged.
pub fn normalize_path(path: &str) -> String {
    let path = path.replace('\\', "/");
    let second = match path.char_indices().nth(1) {
        Some((index, _)) => index,
        None => return path,
    };
    match path[second..].find('/') {
        Some(slash) => path[second + slash + 1..].to_string(),
        None => path,
    }
}

/// Path-keyed file mapping for one analysis batch.
#[derive(Debug, Default)]
pub struct SourceStore {
    files: IndexMap<String, String>,
}

impl SourceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or overwrite a file and echo it back with the caller's path.
    pub fn create_source_file(&mut self, path: &str, text: &str) -> SourceFile {
        let key = normalize_path(path);
        tracing::debug!(path = %path, key = %key, "registering source file");
        self.files.insert(key, text.to_string());
        SourceFile {
            path: path.to_string(),
            text: text.to_string(),
        }
    }

    /// Look up a file by its normalized path.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    /// Look up a file and return the stored key alongside its text.
    pub fn get_entry(&self, path: &str) -> Option<(&str, &str)> {
        self.files
            .get_key_value(path)
            .map(|(key, text)| (key.as_str(), text.as_str()))
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    /// Normalized paths in registration order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    /// `(path, text)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files.iter().map(|(path, text)| (path.as_str(), text.as_str()))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
