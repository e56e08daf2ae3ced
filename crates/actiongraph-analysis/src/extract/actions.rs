use crate::classifier::{Site, SymbolClass, SymbolClassifier};
use crate::program::{ModuleId, SourceModule};

/// Top-level action creators with a literal action type.
pub(super) fn collect<'a, C: SymbolClassifier<'a>>(
    id: ModuleId,
    module: &SourceModule<'a>,
    classifier: &C,
    out: &mut Vec<String>,
) {
    for declarator in module.index.variables.iter().copied() {
        if let SymbolClass::ActionCreator(Some(action)) =
            classifier.classify_declarator(Site::module(id), declarator)
        {
            tracing::debug!(module = %module.path, action, "found action");
            out.push(action.to_string());
        }
    }
}
