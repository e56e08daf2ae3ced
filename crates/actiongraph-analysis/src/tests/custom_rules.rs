//! Recognition is driven by the rule set, not by NgRx names.

use crate::rules::{RuleSet, SymbolRule};
use crate::{EffectRecord, ProjectAnalyzer, ReducerRecord};

const FLUX: &str = "@acme/flux";

fn flux_rules() -> RuleSet {
    RuleSet {
        action_creator_factory: vec![SymbolRule::new(FLUX, "defineEvent")],
        action_creator_type: vec![SymbolRule::new(FLUX, "Event")],
        reducer_factory: vec![SymbolRule::new(FLUX, "defineStore")],
        reducer_type: vec![SymbolRule::new(FLUX, "Store")],
        effect_factory: vec![SymbolRule::new(FLUX, "saga")],
        of_type: vec![SymbolRule::new(FLUX, "when")],
        action_union: vec![SymbolRule::new(FLUX, "Emits")],
        catch_error: vec!["recover".to_string()],
    }
}

const FLUX_PROJECT: &str = r#"
import { defineEvent, defineStore, saga, when, Emits } from "@acme/flux";

export const started = defineEvent("started");
export const finished = defineEvent("finished");
export const failed = defineEvent("failed");

export const jobs = defineStore({}, started, finished);

export class Sagas {
  run = saga(() => events.pipe(when(started), map(() => finished()), recover(() => this.fail())));

  fail(): Emits<"failed"> {
    return failed();
  }
}
"#;

#[test]
fn test_fake_framework_rules() {
    let mut analyzer = ProjectAnalyzer::new().rules(flux_rules());
    analyzer.create_source_file("app/tsconfig.json", "{}");
    analyzer.create_source_file("app/jobs.ts", FLUX_PROJECT);
    let model = analyzer.parse("app/tsconfig.json").expect("analysis succeeds");

    assert_eq!(model.actions, vec!["started", "finished", "failed"]);
    assert_eq!(
        model.effects,
        vec![EffectRecord::new("run")
            .causes(["started"])
            .effects(["finished"])
            .errors(["failed"])]
    );
    assert_eq!(
        model.reducers,
        vec![
            ReducerRecord::new("started", "jobs"),
            ReducerRecord::new("finished", "jobs"),
        ]
    );
}

#[test]
fn test_ngrx_rules_do_not_match_fake_framework() {
    let mut analyzer = ProjectAnalyzer::new();
    analyzer.create_source_file("app/tsconfig.json", "{}");
    analyzer.create_source_file("app/jobs.ts", FLUX_PROJECT);
    let model = analyzer.parse("app/tsconfig.json").expect("analysis succeeds");

    assert!(model.is_empty());
}

#[test]
fn test_empty_rules_recognize_nothing() {
    let mut analyzer = ProjectAnalyzer::new().rules(RuleSet::empty());
    analyzer.create_source_file("app/tsconfig.json", "{}");
    analyzer.create_source_file(
        "app/actions.ts",
        r#"import { createAction } from "@ngrx/store"; export const a = createAction("a");"#,
    );

    assert!(analyzer.parse("app/tsconfig.json").expect("analysis succeeds").is_empty());
}
