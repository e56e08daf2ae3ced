//! Action declarations.

use super::test_helpers::*;

#[test]
fn test_actions_with_and_without_props() {
    let model = analyze(&[(
        "src/actions.ts",
        r#"
        import { createAction, props } from "@ngrx/store";
        export const actionWithoutProps = createAction("[Test] Action without props");
        export const actionWithProps = createAction("[Test] Action with props", props<{ prop: string }>());
        "#,
    )]);

    assert_eq!(
        model.actions,
        vec!["[Test] Action without props", "[Test] Action with props"]
    );
}

#[test]
fn test_annotated_action_creator() {
    let model = analyze(&[(
        "src/actions.ts",
        r#"
        import { ActionCreator } from "@ngrx/store";
        declare const declared: ActionCreator<"[Test] Declared", () => any>;
        "#,
    )]);

    assert_eq!(model.actions, vec!["[Test] Declared"]);
}

#[test]
fn test_template_literal_and_constant_types() {
    let model = analyze(&[(
        "src/actions.ts",
        r#"
        import { createAction } from "@ngrx/store";
        const LOAD = "[Books] Load";
        export const load = createAction(LOAD);
        export const save = createAction(`[Books] Save`);
        "#,
    )]);

    assert_eq!(model.actions, vec!["[Books] Load", "[Books] Save"]);
}

#[test]
fn test_non_literal_types_are_skipped() {
    let model = analyze(&[(
        "src/actions.ts",
        r#"
        import { createAction } from "@ngrx/store";
        const prefix = "[Books]";
        export const load = createAction(`${prefix} Load`);
        export const other = someFactory("x");
        "#,
    )]);

    assert!(model.actions.is_empty());
}

#[test]
fn test_nested_declarations_are_not_actions() {
    let model = analyze(&[(
        "src/actions.ts",
        r#"
        import { createAction } from "@ngrx/store";
        export function make() {
            const inner = createAction("inner");
            return inner;
        }
        "#,
    )]);

    assert!(model.actions.is_empty());
}

#[test]
fn test_look_alike_factory_is_ignored() {
    let model = analyze(&[(
        "src/actions.ts",
        r#"
        import { createAction } from "./factory";
        export const a = createAction("a");
        "#,
    ), (
        "src/factory.ts",
        "export function createAction(type: string) { return { type }; }",
    )]);

    assert!(model.actions.is_empty());
}
