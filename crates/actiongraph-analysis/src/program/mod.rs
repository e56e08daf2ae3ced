//! The typed program: every project file parsed into one arena, with semantic
//! information and a binding index per module.

mod index;
mod utils;

pub use index::{
    binding_name, Declaration, ExportTarget, ImportBinding, ImportedName, ModuleIndex,
};
pub use utils::{export_name, property_key_name, source_type_for, string_value, unwrap_expression};

use std::collections::VecDeque;

use oxc_allocator::Allocator;
use oxc_ast::ast;
use oxc_parser::Parser;
use oxc_semantic::{Semantic, SemanticBuilder};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::config::AnalyzerConfig;
use crate::error::{AnalyzeError, Result};
use crate::resolver::{ModuleResolver, Resolution};
use crate::store::SourceStore;
use crate::tsconfig::{is_script, CompilerConfig};

/// Index of a module inside a [`Program`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModuleId(usize);

/// One parsed project file.
pub struct SourceModule<'a> {
    pub path: &'a str,
    pub program: &'a ast::Program<'a>,
    pub semantic: Semantic<'a>,
    pub index: ModuleIndex<'a>,
    /// Selected by the compiler configuration.
    pub is_root: bool,
    /// A root, or a project file reachable from one through imports.
    pub in_program: bool,
}

/// Where an import specifier leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleRef<'a> {
    Project(ModuleId),
    /// A package (or an unparsed file), identified by its specifier.
    Package(&'a str),
    Missing,
}

pub struct Program<'a> {
    modules: Vec<SourceModule<'a>>,
    by_path: FxHashMap<&'a str, ModuleId>,
    resolver: ModuleResolver<'a>,
}

impl<'a> Program<'a> {
    /// Parse the program described by the configuration at `config_path`.
    ///
    /// Root files that cannot be parsed at all fail the build. Other project
    /// files are parsed so that imports into them resolve, but a failure there
    /// only drops the file.
    pub fn build(
        allocator: &'a Allocator,
        store: &'a SourceStore,
        config_path: &str,
        limits: &AnalyzerConfig,
    ) -> Result<Self> {
        let config = CompilerConfig::load(store, config_path)?;
        let roots: FxHashSet<&str> = config.root_files(store)?.into_iter().collect();
        tracing::debug!(config = %config_path, roots = roots.len(), "loaded compiler configuration");

        let mut modules = Vec::new();
        let mut by_path = FxHashMap::default();

        for (path, text) in store.iter() {
            let is_root = roots.contains(path);
            if !is_script(path) || (!is_root && in_node_modules(path)) {
                continue;
            }

            if text.len() > limits.max_file_size {
                if is_root {
                    return Err(AnalyzeError::FileTooLarge {
                        path: path.to_string(),
                        size: text.len(),
                        limit: limits.max_file_size,
                    });
                }
                tracing::warn!(path = %path, size = text.len(), "skipping oversized file");
                continue;
            }

            match parse_module(allocator, path, text, is_root) {
                Ok(module) => {
                    by_path.insert(path, ModuleId(modules.len()));
                    modules.push(module);
                }
                Err(message) if is_root => {
                    return Err(AnalyzeError::Syntax {
                        path: path.to_string(),
                        message,
                    });
                }
                Err(message) => {
                    tracing::warn!(path = %path, error = %message, "skipping unparsable file");
                }
            }
        }

        let mut program = Self {
            modules,
            by_path,
            resolver: ModuleResolver::new(store, &config),
        };
        program.mark_reachable();
        Ok(program)
    }

    /// Mark every project module reachable from a root, skipping packages
    /// under `node_modules`.
    fn mark_reachable(&mut self) {
        let mut visited = FxHashSet::default();
        let mut queue = VecDeque::new();
        for (index, module) in self.modules.iter().enumerate() {
            if module.is_root {
                visited.insert(ModuleId(index));
                queue.push_back(ModuleId(index));
            }
        }

        while let Some(id) = queue.pop_front() {
            for specifier in self.module(id).index.sources.iter().copied() {
                let ModuleRef::Project(target) = self.resolve_import(id, specifier) else {
                    continue;
                };
                if in_node_modules(self.module(target).path) || !visited.insert(target) {
                    continue;
                }
                tracing::debug!(from = %self.module(id).path, to = %self.module(target).path, "following import");
                queue.push_back(target);
            }
        }

        for id in visited {
            self.modules[id.0].in_program = true;
        }
    }

    pub fn module(&self, id: ModuleId) -> &SourceModule<'a> {
        &self.modules[id.0]
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Roots and the project modules they import, in store order.
    pub fn program_modules(&self) -> impl Iterator<Item = (ModuleId, &SourceModule<'a>)> {
        self.modules
            .iter()
            .enumerate()
            .filter(|(_, module)| module.in_program)
            .map(|(index, module)| (ModuleId(index), module))
    }

    /// Resolve an import specifier written in module `from`.
    pub fn resolve_import(&self, from: ModuleId, specifier: &'a str) -> ModuleRef<'a> {
        match self.resolver.resolve(specifier, self.module(from).path) {
            Resolution::Local(path) => match self.by_path.get(path) {
                Some(id) => ModuleRef::Project(*id),
                None => ModuleRef::Package(specifier),
            },
            Resolution::External => ModuleRef::Package(specifier),
            Resolution::Unresolved => ModuleRef::Missing,
        }
    }
}

fn parse_module<'a>(
    allocator: &'a Allocator,
    path: &'a str,
    text: &'a str,
    is_root: bool,
) -> std::result::Result<SourceModule<'a>, String> {
    let ret = Parser::new(allocator, text, source_type_for(path)).parse();
    if ret.panicked {
        return Err(ret
            .errors
            .first()
            .map(|error| error.to_string())
            .unwrap_or_else(|| "unrecoverable syntax error".to_string()));
    }
    for error in &ret.errors {
        tracing::warn!(path = %path, error = %error, "recoverable syntax error");
    }

    let program: &'a ast::Program<'a> = allocator.alloc(ret.program);
    let semantic = SemanticBuilder::new().build(program).semantic;
    let index = ModuleIndex::build(program);
    tracing::debug!(
        path = %path,
        declarations = index.declarations.len(),
        imports = index.imports.len(),
        "parsed module"
    );

    Ok(SourceModule {
        path,
        program,
        semantic,
        index,
        is_root,
        in_program: false,
    })
}

fn in_node_modules(path: &str) -> bool {
    path.split('/').any(|segment| segment == "node_modules")
}
