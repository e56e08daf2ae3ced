//! Tests for default values and partial configuration files.

use actiongraph_analysis::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_FILE_SIZE, RuleSet, SymbolRole};
use actiongraph_config::{ActionGraphConfig, AnalysisSettings, OutputSettings};
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};

fn from_toml(text: &str) -> ActionGraphConfig {
    Figment::new()
        .merge(Serialized::defaults(ActionGraphConfig::default()))
        .merge(Toml::string(text))
        .extract()
        .unwrap()
}

#[test]
fn analysis_settings_defaults() {
    let settings = AnalysisSettings::default();
    assert_eq!(settings.tsconfig, "tsconfig.json");
    assert!(settings.ignore.is_empty());
    assert_eq!(settings.max_file_size, DEFAULT_MAX_FILE_SIZE);
    assert_eq!(settings.max_depth, DEFAULT_MAX_DEPTH);
}

#[test]
fn output_settings_defaults() {
    let output = OutputSettings::default();
    assert!(output.dir.is_none());
    assert!(output.file_name.is_none());
}

#[test]
fn empty_file_keeps_defaults() {
    assert_eq!(from_toml(""), ActionGraphConfig::default());
}

#[test]
fn partial_sections_keep_remaining_defaults() {
    let config = from_toml("[analysis]\nmax-file-size = 1024\n");
    assert_eq!(config.analysis.max_file_size, 1024);
    assert_eq!(config.analysis.tsconfig, "tsconfig.json");
    assert_eq!(config.rules, RuleSet::ngrx());
}

#[test]
fn custom_framework_rules() {
    let config = from_toml(
        r#"
[rules]
action-creator-factory = [{ module = "@acme/flux", export = "defineEvent" }]
"#,
    );
    assert_eq!(
        config.rules.role_of("@acme/flux", "defineEvent"),
        Some(SymbolRole::ActionCreatorFactory)
    );
    assert_eq!(config.rules.role_of("@ngrx/store", "createAction"), None);
    assert!(config.rules.is_catch_error("catchError"));
}
