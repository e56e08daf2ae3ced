//! Module resolution over the in-memory store.
//!
//! Implements the subset of TypeScript's resolution that matters for a
//! project held entirely in memory:
//! 1. Relative and absolute specifiers
//! 2. `compilerOptions.paths` aliases
//! 3. `compilerOptions.baseUrl`
//! 4. Extension probing and `index` files
//!
//! Anything else is an external package, identified by its specifier.

mod aliases;
mod extensions;

pub use aliases::match_path_alias;
pub use extensions::{resolve_with_extensions, EXTENSIONS};

use std::path::Path;

use path_clean::PathClean;

use crate::store::SourceStore;
use crate::tsconfig::{CompilerConfig, PathMapping};

/// Outcome of resolving one import specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'s> {
    /// A file in the store, by its stored path.
    Local(&'s str),
    /// A package outside the project.
    External,
    /// A relative or aliased specifier with no matching file.
    Unresolved,
}

/// Directory part of a store path (`""` for top-level files).
pub fn directory_of(path: &str) -> &str {
    path.rfind('/').map_or("", |slash| &path[..slash])
}

/// Join `rel` onto `dir` and normalize `.`/`..` segments.
pub fn join_path(dir: &str, rel: &str) -> String {
    let rel = rel.trim_start_matches('/');
    let joined = Path::new(dir).join(rel).clean();
    let joined = joined.to_string_lossy().replace('\\', "/");
    if joined == "." { String::new() } else { joined }
}

fn is_relative(specifier: &str) -> bool {
    specifier == "." || specifier == ".." || specifier.starts_with("./") || specifier.starts_with("../")
}

/// Resolver for one program.
pub struct ModuleResolver<'s> {
    store: &'s SourceStore,
    base_url: Option<String>,
    paths: Vec<PathMapping>,
}

impl<'s> ModuleResolver<'s> {
    pub fn new(store: &'s SourceStore, config: &CompilerConfig) -> Self {
        Self {
            store,
            base_url: config.base_url.clone(),
            paths: config.paths.clone(),
        }
    }

    /// Resolve `specifier` as imported from the file at `from`.
    pub fn resolve(&self, specifier: &str, from: &str) -> Resolution<'s> {
        if is_relative(specifier) {
            let candidate = join_path(directory_of(from), specifier);
            return self.probe(&candidate);
        }
        if specifier.starts_with('/') {
            return self.probe(&join_path("", specifier));
        }

        if let Some(targets) = match_path_alias(specifier, &self.paths) {
            for target in targets {
                if let Resolution::Local(path) = self.probe(&target) {
                    return Resolution::Local(path);
                }
            }
            return Resolution::Unresolved;
        }

        if let Some(base_url) = &self.base_url {
            if let Resolution::Local(path) = self.probe(&join_path(base_url, specifier)) {
                return Resolution::Local(path);
            }
        }

        Resolution::External
    }

    fn probe(&self, candidate: &str) -> Resolution<'s> {
        match resolve_with_extensions(self.store, candidate) {
            Some(path) => Resolution::Local(path),
            None => Resolution::Unresolved,
        }
    }
}
