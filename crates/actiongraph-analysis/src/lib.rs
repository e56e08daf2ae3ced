//! # actiongraph-analysis
//!
//! Static analysis of NgRx-style TypeScript projects.
//!
//! Source files are registered in memory, parsed with OXC and matched against
//! the public surface of a state-management framework to recover its action
//! graph:
//!
//! - **actions**: the action types declared by action creators
//! - **effects**: which actions trigger each effect, which actions it
//!   dispatches and which it produces while recovering from errors
//! - **reducers**: which actions each reducer handles
//!
//! ## Architecture
//!
//! ```text
//! SourceStore ──► CompilerConfig ──► Program (OXC AST + Semantic + ModuleIndex)
//!                                        │
//!                         RuleSet ──► RuleClassifier ──► extract ──► RelationalModel
//! ```
//!
//! Framework recognition is data: a [`RuleSet`] names the exported symbols
//! that play each role, and the extractors only ask a [`SymbolClassifier`].

pub mod analyzer;
pub mod classifier;
pub mod config;
pub mod error;
pub mod extract;
pub mod model;
pub mod program;
pub mod resolver;
pub mod rules;
pub mod store;
pub mod tsconfig;

#[cfg(test)]
mod tests;

pub use analyzer::ProjectAnalyzer;
pub use classifier::{RuleClassifier, Site, SymbolClass, SymbolClassifier};
pub use config::{AnalyzerConfig, DEFAULT_MAX_DEPTH, DEFAULT_MAX_FILE_SIZE};
pub use error::{AnalyzeError, Result};
pub use model::{EffectRecord, ReducerRecord, RelationalModel};
pub use rules::{RuleSet, SymbolRole, SymbolRule};
pub use store::{normalize_path, SourceFile, SourceStore};

/// Re-exports of the OXC crates the public API is expressed in.
pub mod oxc {
    /// Arena allocator backing a [`Program`](crate::program::Program).
    pub use oxc_allocator::Allocator;

    /// AST node types
    pub use oxc_ast::ast;

    /// AST visitor trait
    pub use oxc_ast_visit::Visit;

    /// Semantic analysis (scopes, symbols, references)
    pub use oxc_semantic::Semantic;

    pub use oxc_span::SourceType;
}
