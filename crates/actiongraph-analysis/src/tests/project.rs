//! Whole-project behavior: configuration, cross-file resolution and the
//! lifecycle of the working set.

use super::test_helpers::*;
use crate::{AnalyzeError, AnalyzerConfig, EffectRecord, ProjectAnalyzer, ReducerRecord};

const ACTIONS: &str = r#"
import { createAction } from "@ngrx/store";
export const load = createAction("[Books] Load");
export const loaded = createAction("[Books] Loaded");
"#;

#[test]
fn test_actions_resolved_across_files() {
    let model = analyze(&[
        ("src/books/actions.ts", ACTIONS),
        ("src/books/index.ts", "export * from './actions';"),
        (
            "src/books/effects.ts",
            r#"
            import { Actions, createEffect, ofType } from "@ngrx/effects";
            import { load, loaded as done } from "./index";

            export default class BookEffects {
              constructor(private actions$: Actions) {}
              load$ = createEffect(() => this.actions$.pipe(ofType(load), map(() => done())));
            }
            "#,
        ),
    ]);

    assert_eq!(model.actions, vec!["[Books] Load", "[Books] Loaded"]);
    assert_eq!(
        model.effects,
        vec![EffectRecord::new("load$")
            .causes(["[Books] Load"])
            .effects(["[Books] Loaded"])]
    );
}

#[test]
fn test_path_aliases_and_reexported_framework_symbols() {
    let model = analyze_with_config(
        r#"{ "compilerOptions": { "baseUrl": ".", "paths": { "@books/*": ["src/books/*"] } } }"#,
        &[
            ("src/books/actions.ts", ACTIONS),
            ("src/ngrx.ts", r#"export { createReducer as makeReducer, on } from "@ngrx/store";"#),
            (
                "src/reducer.ts",
                r#"
                import { makeReducer, on } from "src/ngrx";
                import { loaded } from "@books/actions";
                export const books = makeReducer([], on(loaded, (state) => state));
                "#,
            ),
        ],
    );

    assert_eq!(model.reducers, vec![ReducerRecord::new("[Books] Loaded", "books")]);
}

#[test]
fn test_files_outside_the_program_are_ignored() {
    let mut analyzer = ProjectAnalyzer::new();
    analyzer.create_source_file(
        "/base/tsconfig.json",
        r#"{
            // only the app sources
            "include": ["src"],
        }"#,
    );
    analyzer.create_source_file("/base/src/actions.ts", ACTIONS);
    analyzer.create_source_file(
        "/base/scripts/actions.ts",
        r#"import { createAction } from "@ngrx/store"; export const x = createAction("x");"#,
    );
    let model = analyzer.parse("/base/tsconfig.json").expect("analysis succeeds");

    assert_eq!(model.actions, vec!["[Books] Load", "[Books] Loaded"]);
}

#[test]
fn test_files_imported_by_roots_are_analyzed() {
    let model = analyze_with_config(
        r#"{ "files": ["src/main.ts"] }"#,
        &[
            ("src/main.ts", "import { AppModule } from './app/app.module';\nbootstrap(AppModule);"),
            ("src/app/app.module.ts", "import './state';\nexport class AppModule {}"),
            ("src/app/state/index.ts", "export * from '../actions';"),
            ("src/app/actions.ts", ACTIONS),
            (
                "src/app/unused.ts",
                r#"import { createAction } from "@ngrx/store"; export const x = createAction("x");"#,
            ),
        ],
    );

    assert_eq!(model.actions, vec!["[Books] Load", "[Books] Loaded"]);
}

#[test]
fn test_imported_packages_are_not_analyzed() {
    let model = analyze_with_config(
        r#"{ "files": ["src/main.ts"] }"#,
        &[
            ("src/main.ts", "import { x } from '../node_modules/lib/actions';"),
            (
                "node_modules/lib/actions.ts",
                r#"import { createAction } from "@ngrx/store"; export const x = createAction("x");"#,
            ),
        ],
    );

    assert!(model.actions.is_empty());
}

#[test]
fn test_working_set_is_discarded_after_parse() {
    let mut analyzer = ProjectAnalyzer::new();
    analyzer.create_source_file("/base/tsconfig.json", "{}");
    analyzer.create_source_file("/base/src/actions.ts", ACTIONS);
    let first = analyzer.parse("/base/tsconfig.json").expect("analysis succeeds");
    assert_eq!(first.actions.len(), 2);
    assert_eq!(analyzer.file_count(), 0);

    let second = analyzer.parse("/base/tsconfig.json");
    assert!(matches!(second, Err(AnalyzeError::ConfigNotFound(_))));
}

#[test]
fn test_repeated_cycles_are_identical() {
    let mut analyzer = ProjectAnalyzer::new();
    let mut run = || {
        analyzer.create_source_file("/base/tsconfig.json", "{}");
        analyzer.create_source_file("/base/src/actions.ts", ACTIONS);
        analyzer.parse("/base/tsconfig.json").expect("analysis succeeds")
    };

    assert_eq!(run(), run());
}

#[test]
fn test_missing_config_fails() {
    let mut analyzer = ProjectAnalyzer::new();
    analyzer.create_source_file("/base/src/actions.ts", ACTIONS);

    let err = analyzer.parse("/base/tsconfig.json").unwrap_err();
    assert!(matches!(err, AnalyzeError::ConfigNotFound(path) if path == "tsconfig.json"));
    assert_eq!(analyzer.file_count(), 0, "working set is discarded on failure too");
}

#[test]
fn test_unrecoverable_syntax_error_fails() {
    let mut analyzer = ProjectAnalyzer::new();
    analyzer.create_source_file("/base/tsconfig.json", "{}");
    analyzer.create_source_file("/base/src/broken.ts", "export const = = (;");

    let err = analyzer.parse("/base/tsconfig.json").unwrap_err();
    assert!(matches!(err, AnalyzeError::Syntax { path, .. } if path == "src/broken.ts"));
}

#[test]
fn test_oversized_root_file_fails() {
    let mut analyzer = ProjectAnalyzer::new().config(AnalyzerConfig::default().max_file_size(16));
    analyzer.create_source_file("/base/tsconfig.json", "{}");
    analyzer.create_source_file("/base/src/actions.ts", ACTIONS);

    let err = analyzer.parse("/base/tsconfig.json").unwrap_err();
    assert!(matches!(err, AnalyzeError::FileTooLarge { limit: 16, .. }));
}

#[test]
fn test_import_cycles_terminate() {
    let model = analyze(&[
        ("src/a.ts", "export { x } from './b';"),
        ("src/b.ts", "export { x } from './a';"),
        (
            "src/use.ts",
            r#"
            import { createAction } from "@ngrx/store";
            import { x } from "./a";
            export const y = createAction(x);
            "#,
        ),
    ]);

    assert!(model.actions.is_empty());
}
