use oxc_ast::ast::{CallExpression, ClassElement, Expression, ObjectPropertyKind};
use oxc_ast_visit::Visit;

use super::visitor::{CatchErrors, OfTypeArgs, ProducedActions};
use crate::classifier::{Site, SymbolClassifier};
use crate::model::EffectRecord;
use crate::program::{property_key_name, unwrap_expression, ModuleId, SourceModule};
use crate::rules::SymbolRole;

/// Effect properties of top-level classes.
pub(super) fn collect<'a, C: SymbolClassifier<'a>>(
    id: ModuleId,
    module: &SourceModule<'a>,
    classifier: &C,
    out: &mut Vec<EffectRecord>,
) {
    for class in module.index.classes.iter().copied() {
        let site = Site::class(id, class);
        for element in &class.body.body {
            let ClassElement::PropertyDefinition(property) = element else {
                continue;
            };
            let (Some(name), Some(init)) = (property_key_name(&property.key), &property.value)
            else {
                continue;
            };
            let Expression::CallExpression(call) = unwrap_expression(init) else {
                continue;
            };
            if !classifier
                .classify_expression(site, &call.callee)
                .is_role(SymbolRole::EffectFactory)
            {
                continue;
            }

            let record = effect_record(classifier, site, name, init, call);
            tracing::debug!(
                module = %module.path,
                effect = %record.effect,
                causes = record.causes.len(),
                dispatch = record.dispatch,
                "found effect"
            );
            out.push(record);
        }
    }
}

fn effect_record<'a, C: SymbolClassifier<'a>>(
    classifier: &C,
    site: Site<'a>,
    name: &str,
    init: &Expression<'a>,
    call: &CallExpression<'a>,
) -> EffectRecord {
    let mut causes = OfTypeArgs::new(classifier, site);
    causes.visit_expression(init);

    let mut catches = CatchErrors::new(classifier, site);
    catches.visit_expression(init);
    let errors = catches.into_errors();

    let dispatch = dispatch_flag(call);
    let effects = if dispatch {
        let mut produced = ProducedActions::new(classifier, site);
        produced.visit_expression(init);
        produced
            .creators
            .into_iter()
            .chain(produced.helpers)
            .filter(|action| !errors.contains(action))
            .collect()
    } else {
        Vec::new()
    };

    EffectRecord::new(name)
        .causes(causes.causes)
        .dispatch(dispatch)
        .effects(effects)
        .errors(errors)
}

/// `false` only for a literal `{ dispatch: false }` second argument.
fn dispatch_flag(call: &CallExpression<'_>) -> bool {
    let Some(Expression::ObjectExpression(options)) = call
        .arguments
        .get(1)
        .and_then(|arg| arg.as_expression())
        .map(unwrap_expression)
    else {
        return true;
    };
    options
        .properties
        .iter()
        .find_map(|property| match property {
            ObjectPropertyKind::ObjectProperty(prop)
                if property_key_name(&prop.key) == Some("dispatch") =>
            {
                match unwrap_expression(&prop.value) {
                    Expression::BooleanLiteral(value) => Some(value.value),
                    _ => Some(true),
                }
            }
            _ => None,
        })
        .unwrap_or(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxc_allocator::Allocator;
    use oxc_parser::Parser;
    use oxc_span::SourceType;

    fn flag(source: &str) -> bool {
        let allocator = Allocator::default();
        let ret = Parser::new(&allocator, source, SourceType::ts()).parse();
        let program = allocator.alloc(ret.program);
        let Some(oxc_ast::ast::Statement::ExpressionStatement(stmt)) = program.body.first() else {
            panic!("expected an expression statement");
        };
        let Expression::CallExpression(call) = &stmt.expression else {
            panic!("expected a call");
        };
        dispatch_flag(call)
    }

    #[test]
    fn dispatch_defaults_to_true() {
        assert!(flag("createEffect(() => x)"));
        assert!(flag("createEffect(() => x, {})"));
        assert!(flag("createEffect(() => x, { useEffectsErrorHandler: false })"));
    }

    #[test]
    fn only_a_literal_false_disables_dispatch() {
        assert!(!flag("createEffect(() => x, { dispatch: false })"));
        assert!(flag("createEffect(() => x, { dispatch: true })"));
        assert!(flag("createEffect(() => x, { dispatch: !1 })"));
        assert!(flag("createEffect(() => x, options)"));
    }

    #[test]
    fn options_are_read_through_assertions_and_parentheses() {
        assert!(!flag("createEffect(() => x, { dispatch: false } as const)"));
        assert!(!flag("createEffect(() => x, ({ dispatch: false }))"));
        assert!(!flag("createEffect(() => x, { dispatch: false } satisfies EffectConfig)"));
    }
}
