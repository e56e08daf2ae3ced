//! Extraction of the relational model from a typed program.
//!
//! Root modules and the project modules they import contribute records, in
//! store order. Each extractor is
//! generic over [`SymbolClassifier`] and never fails: shapes it does not
//! recognize are left out.

mod actions;
mod effects;
mod reducers;
mod visitor;

use crate::classifier::SymbolClassifier;
use crate::model::RelationalModel;
use crate::program::Program;

pub fn extract<'a, C: SymbolClassifier<'a>>(program: &Program<'a>, classifier: &C) -> RelationalModel {
    let mut model = RelationalModel::default();
    for (id, module) in program.program_modules() {
        actions::collect(id, module, classifier, &mut model.actions);
        effects::collect(id, module, classifier, &mut model.effects);
        reducers::collect(id, module, classifier, &mut model.reducers);
    }
    tracing::debug!(
        actions = model.actions.len(),
        effects = model.effects.len(),
        reducers = model.reducers.len(),
        "extracted relational model"
    );
    model
}
