//! AST visitors shared by the extractors.
//!
//! Visit callbacks only see short borrows of the tree, so everything is
//! classified on the spot and only the resulting `&'a str` literals are kept.

use oxc_ast::ast::{CallExpression, Expression, IdentifierReference};
use oxc_ast_visit::{walk, Visit};

use crate::classifier::{Site, SymbolClass, SymbolClassifier};
use crate::rules::SymbolRole;

/// Action types of every action-creator reference in a subtree.
pub(super) struct CreatorRefs<'c, 'a, C> {
    classifier: &'c C,
    site: Site<'a>,
    pub actions: Vec<&'a str>,
}

impl<'c, 'a, C: SymbolClassifier<'a>> CreatorRefs<'c, 'a, C> {
    pub fn new(classifier: &'c C, site: Site<'a>) -> Self {
        Self {
            classifier,
            site,
            actions: Vec::new(),
        }
    }
}

impl<'a, C: SymbolClassifier<'a>> Visit<'a> for CreatorRefs<'_, 'a, C> {
    fn visit_expression(&mut self, expr: &Expression<'a>) {
        // `ns.creator` names a creator as a whole.
        if let Expression::StaticMemberExpression(_) = expr {
            if let SymbolClass::ActionCreator(Some(action)) =
                self.classifier.classify_expression(self.site, expr)
            {
                self.actions.push(action);
                return;
            }
        }
        walk::walk_expression(self, expr);
    }

    fn visit_identifier_reference(&mut self, ident: &IdentifierReference<'a>) {
        if let SymbolClass::ActionCreator(Some(action)) =
            self.classifier.classify_reference(self.site, ident)
        {
            self.actions.push(action);
        }
    }
}

/// Actions produced by calls in a subtree: direct action-creator calls and
/// calls to helpers, kept apart.
pub(super) struct ProducedActions<'c, 'a, C> {
    classifier: &'c C,
    site: Site<'a>,
    pub creators: Vec<&'a str>,
    pub helpers: Vec<&'a str>,
}

impl<'c, 'a, C: SymbolClassifier<'a>> ProducedActions<'c, 'a, C> {
    pub fn new(classifier: &'c C, site: Site<'a>) -> Self {
        Self {
            classifier,
            site,
            creators: Vec::new(),
            helpers: Vec::new(),
        }
    }
}

impl<'a, C: SymbolClassifier<'a>> Visit<'a> for ProducedActions<'_, 'a, C> {
    fn visit_call_expression(&mut self, call: &CallExpression<'a>) {
        match self.classifier.classify_expression(self.site, &call.callee) {
            SymbolClass::ActionCreator(Some(action)) => self.creators.push(action),
            SymbolClass::Helper(helper) => {
                let actions = self.classifier.helper_actions(helper);
                self.helpers.extend(actions);
            }
            _ => {}
        }
        walk::walk_call_expression(self, call);
    }
}

/// Action types filtered on by `ofType` calls, in call and argument order.
pub(super) struct OfTypeArgs<'c, 'a, C> {
    classifier: &'c C,
    site: Site<'a>,
    pub causes: Vec<&'a str>,
}

impl<'c, 'a, C: SymbolClassifier<'a>> OfTypeArgs<'c, 'a, C> {
    pub fn new(classifier: &'c C, site: Site<'a>) -> Self {
        Self {
            classifier,
            site,
            causes: Vec::new(),
        }
    }
}

impl<'a, C: SymbolClassifier<'a>> Visit<'a> for OfTypeArgs<'_, 'a, C> {
    fn visit_call_expression(&mut self, call: &CallExpression<'a>) {
        let callee = self.classifier.classify_expression(self.site, &call.callee);
        if callee.is_role(SymbolRole::OfType) {
            for argument in call.arguments.iter().filter_map(|arg| arg.as_expression()) {
                match self.classifier.classify_expression(self.site, argument) {
                    SymbolClass::ActionCreator(Some(action)) | SymbolClass::StringConst(action) => {
                        self.causes.push(action);
                    }
                    _ => {}
                }
            }
        }
        walk::walk_call_expression(self, call);
    }
}

/// Actions produced on error-recovery paths.
///
/// Every call to a catch-error operator is scanned as a whole: creator
/// references first, then helper results, each in discovery order.
pub(super) struct CatchErrors<'c, 'a, C> {
    classifier: &'c C,
    site: Site<'a>,
    refs: Vec<&'a str>,
    helpers: Vec<&'a str>,
}

impl<'c, 'a, C: SymbolClassifier<'a>> CatchErrors<'c, 'a, C> {
    pub fn new(classifier: &'c C, site: Site<'a>) -> Self {
        Self {
            classifier,
            site,
            refs: Vec::new(),
            helpers: Vec::new(),
        }
    }

    pub fn into_errors(self) -> Vec<&'a str> {
        let mut errors = self.refs;
        errors.extend(self.helpers);
        errors
    }
}

impl<'a, C: SymbolClassifier<'a>> Visit<'a> for CatchErrors<'_, 'a, C> {
    fn visit_call_expression(&mut self, call: &CallExpression<'a>) {
        let is_catch = match &call.callee {
            Expression::Identifier(ident) => self.classifier.is_catch_error(ident.name.as_str()),
            _ => false,
        };
        if !is_catch {
            walk::walk_call_expression(self, call);
            return;
        }

        let mut refs = CreatorRefs::new(self.classifier, self.site);
        refs.visit_call_expression(call);
        self.refs.extend(refs.actions);

        let mut produced = ProducedActions::new(self.classifier, self.site);
        produced.visit_call_expression(call);
        self.helpers.extend(produced.helpers);
    }
}
