//! The project analyzer: register files, then parse them into a
//! [`RelationalModel`].

use oxc_allocator::Allocator;

use crate::classifier::RuleClassifier;
use crate::config::AnalyzerConfig;
use crate::error::Result;
use crate::extract::extract;
use crate::model::RelationalModel;
use crate::program::Program;
use crate::rules::RuleSet;
use crate::store::{normalize_path, SourceFile, SourceStore};

/// One-shot batch analyzer.
///
/// Files registered with [`create_source_file`](Self::create_source_file)
/// form the working set of the next [`parse`](Self::parse) call. `parse`
/// consumes that set whatever its outcome, so every cycle starts empty.
///
/// # Example
///
/// ```rust
/// use actiongraph_analysis::ProjectAnalyzer;
///
/// let mut analyzer = ProjectAnalyzer::new();
/// analyzer.create_source_file("/app/tsconfig.json", "{}");
/// analyzer.create_source_file(
///     "/app/actions.ts",
///     r#"import { createAction } from "@ngrx/store";
///        export const load = createAction("[Books] Load");"#,
/// );
///
/// let model = analyzer.parse("/app/tsconfig.json")?;
/// assert_eq!(model.actions, vec!["[Books] Load"]);
/// # Ok::<(), actiongraph_analysis::AnalyzeError>(())
/// ```
#[derive(Debug, Default)]
pub struct ProjectAnalyzer {
    store: SourceStore,
    rules: RuleSet,
    config: AnalyzerConfig,
}

impl ProjectAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different framework rule set.
    pub fn rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    pub fn config(mut self, config: AnalyzerConfig) -> Self {
        self.config = config;
        self
    }

    /// Register or overwrite a file of the next batch.
    pub fn create_source_file(&mut self, path: &str, text: &str) -> SourceFile {
        self.store.create_source_file(path, text)
    }

    /// Number of files registered for the next batch.
    pub fn file_count(&self) -> usize {
        self.store.len()
    }

    /// Analyze the registered files as the program described by the compiler
    /// configuration at `config_path`.
    pub fn parse(&mut self, config_path: &str) -> Result<RelationalModel> {
        let store = std::mem::take(&mut self.store);
        let config_path = normalize_path(config_path);
        tracing::debug!(config = %config_path, files = store.len(), "analyzing project");

        let allocator = Allocator::default();
        let program = Program::build(&allocator, &store, &config_path, &self.config)?;
        let classifier = RuleClassifier::new(&program, &self.rules, self.config.max_depth);
        let model = extract(&program, &classifier);

        tracing::info!(
            modules = program.len(),
            actions = model.actions.len(),
            effects = model.effects.len(),
            reducers = model.reducers.len(),
            "analysis complete"
        );
        Ok(model)
    }
}
