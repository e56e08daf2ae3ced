use oxc_ast_visit::Visit;

use super::visitor::CreatorRefs;
use crate::classifier::{Site, SymbolClass, SymbolClassifier};
use crate::model::ReducerRecord;
use crate::program::{binding_name, ModuleId, SourceModule};

/// One record per action-creator reference inside each top-level reducer.
pub(super) fn collect<'a, C: SymbolClassifier<'a>>(
    id: ModuleId,
    module: &SourceModule<'a>,
    classifier: &C,
    out: &mut Vec<ReducerRecord>,
) {
    let site = Site::module(id);
    for declarator in module.index.variables.iter().copied() {
        if !matches!(
            classifier.classify_declarator(site, declarator),
            SymbolClass::ActionReducer
        ) {
            continue;
        }
        let Some(reducer) = binding_name(declarator) else {
            continue;
        };

        let mut refs = CreatorRefs::new(classifier, site);
        if let Some(init) = &declarator.init {
            refs.visit_expression(init);
        }
        tracing::debug!(module = %module.path, reducer, actions = refs.actions.len(), "found reducer");
        out.extend(
            refs.actions
                .into_iter()
                .map(|action| ReducerRecord::new(action, reducer)),
        );
    }
}
