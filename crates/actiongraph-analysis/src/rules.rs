//! Recognition rules for a state-management framework.
//!
//! A [`RuleSet`] names the exported symbols of a framework that play a role in
//! the action graph. Rules are data, so a different framework (or a fork of
//! NgRx published under another package) is supported by swapping the set.
//!
//! # Example
//!
//! ```toml
//! [rules]
//! catch-error = ["catchError", "catchAndReport"]
//! action-creator-factory = [{ module = "@acme/flux", export = "defineEvent" }]
//! ```

use serde::{Deserialize, Serialize};

/// One exported symbol of an external module.
///
/// `module` matches the import specifier exactly or as a path prefix, so
/// `@ngrx/store` also covers `@ngrx/store/src/models`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolRule {
    pub module: String,
    pub export: String,
}

impl SymbolRule {
    pub fn new(module: impl Into<String>, export: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            export: export.into(),
        }
    }

    pub fn matches(&self, module: &str, export: &str) -> bool {
        if self.export != export {
            return false;
        }
        match module.strip_prefix(self.module.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}

/// The role a framework symbol plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolRole {
    /// Function returning an action creator (`createAction`).
    ActionCreatorFactory,
    /// Action creator type (`ActionCreator<"type", ...>`).
    ActionCreatorType,
    /// Function returning a reducer (`createReducer`).
    ReducerFactory,
    /// Reducer type (`ActionReducer<State>`).
    ReducerType,
    /// Function declaring an effect (`createEffect`).
    EffectFactory,
    /// Operator filtering the action stream by type (`ofType`).
    OfType,
    /// Discriminated action type whose argument is a union of type literals
    /// (`TypedAction<"a" | "b">`).
    ActionUnion,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct RuleSet {
    pub action_creator_factory: Vec<SymbolRule>,
    pub action_creator_type: Vec<SymbolRule>,
    pub reducer_factory: Vec<SymbolRule>,
    pub reducer_type: Vec<SymbolRule>,
    pub effect_factory: Vec<SymbolRule>,
    pub of_type: Vec<SymbolRule>,
    pub action_union: Vec<SymbolRule>,
    /// Error-recovery operators, matched by the callee's name alone.
    pub catch_error: Vec<String>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::ngrx()
    }
}

impl RuleSet {
    /// An empty rule set that recognizes nothing.
    pub fn empty() -> Self {
        Self {
            action_creator_factory: Vec::new(),
            action_creator_type: Vec::new(),
            reducer_factory: Vec::new(),
            reducer_type: Vec::new(),
            effect_factory: Vec::new(),
            of_type: Vec::new(),
            action_union: Vec::new(),
            catch_error: Vec::new(),
        }
    }

    /// The NgRx public API.
    pub fn ngrx() -> Self {
        const STORE: &str = "@ngrx/store";
        const EFFECTS: &str = "@ngrx/effects";
        Self {
            action_creator_factory: vec![SymbolRule::new(STORE, "createAction")],
            action_creator_type: vec![SymbolRule::new(STORE, "ActionCreator")],
            reducer_factory: vec![SymbolRule::new(STORE, "createReducer")],
            reducer_type: vec![SymbolRule::new(STORE, "ActionReducer")],
            effect_factory: vec![SymbolRule::new(EFFECTS, "createEffect")],
            of_type: vec![SymbolRule::new(EFFECTS, "ofType")],
            action_union: vec![
                SymbolRule::new(STORE, "TypedAction"),
                SymbolRule::new(STORE, "Action"),
            ],
            catch_error: vec!["catchError".to_string()],
        }
    }

    /// Role of the export `export` of module `module`, if any.
    pub fn role_of(&self, module: &str, export: &str) -> Option<SymbolRole> {
        let tables = [
            (&self.action_creator_factory, SymbolRole::ActionCreatorFactory),
            (&self.action_creator_type, SymbolRole::ActionCreatorType),
            (&self.reducer_factory, SymbolRole::ReducerFactory),
            (&self.reducer_type, SymbolRole::ReducerType),
            (&self.effect_factory, SymbolRole::EffectFactory),
            (&self.of_type, SymbolRole::OfType),
            (&self.action_union, SymbolRole::ActionUnion),
        ];
        tables
            .into_iter()
            .find(|(rules, _)| rules.iter().any(|rule| rule.matches(module, export)))
            .map(|(_, role)| role)
    }

    pub fn is_catch_error(&self, name: &str) -> bool {
        self.catch_error.iter().any(|candidate| candidate == name)
    }
}
