//! Symbol classification.
//!
//! Answers "what is this?" for identifiers, expressions and type annotations:
//! an action creator of some literal type, a reducer, one of the framework's
//! operators, a helper function, a string constant. Names are followed to
//! their declaration through imports, re-exports, `export *`, namespace
//! imports and aliases until they reach either a project declaration or an
//! export of an external package, which the [`RuleSet`] then recognizes.
//!
//! Extraction only talks to the [`SymbolClassifier`] trait, so the matching
//! logic can be tested and swapped independently of the framework's surface.

use indexmap::IndexSet;
use oxc_ast::ast::{
    ArrowFunctionExpression, Class, ClassElement, Expression, Function,
    IdentifierReference, ReturnStatement, Statement, TSEnumDeclaration, TSEnumMemberName,
    TSLiteral, TSType, TSTypeName, VariableDeclarator,
};
use oxc_ast_visit::Visit;
use oxc_semantic::ScopeFlags;

use crate::program::{
    property_key_name, string_value, unwrap_expression, Declaration, ExportTarget, ImportBinding,
    ImportedName, ModuleId, ModuleRef, Program,
};
use crate::rules::{RuleSet, SymbolRole};

/// Where an expression is evaluated: its module and, inside class members,
/// the class `this` refers to.
#[derive(Debug, Clone, Copy)]
pub struct Site<'a> {
    pub module: ModuleId,
    pub class: Option<&'a Class<'a>>,
}

impl<'a> Site<'a> {
    pub fn module(module: ModuleId) -> Self {
        Self { module, class: None }
    }

    pub fn class(module: ModuleId, class: &'a Class<'a>) -> Self {
        Self {
            module,
            class: Some(class),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum HelperFn<'a> {
    Function(&'a Function<'a>),
    Arrow(&'a ArrowFunctionExpression<'a>),
}

/// A function whose calls may produce actions.
#[derive(Debug, Clone, Copy)]
pub struct Helper<'a> {
    pub site: Site<'a>,
    pub function: HelperFn<'a>,
}

#[derive(Debug, Clone, Copy)]
pub enum SymbolClass<'a> {
    /// An action creator, with its literal action type when one is known.
    ActionCreator(Option<&'a str>),
    ActionReducer,
    /// A framework export playing a recognized role.
    Framework(SymbolRole),
    Helper(Helper<'a>),
    Enum(&'a TSEnumDeclaration<'a>),
    Namespace(ModuleRef<'a>),
    StringConst(&'a str),
    Unknown,
}

impl SymbolClass<'_> {
    pub fn is_role(&self, role: SymbolRole) -> bool {
        matches!(self, SymbolClass::Framework(r) if *r == role)
    }
}

/// Classification of a type annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
enum TypeClass<'a> {
    ActionCreator(Option<&'a str>),
    ActionReducer,
    /// The discriminated action type, with the members of its literal union.
    ActionUnion(Vec<&'a str>),
    Unknown,
}

pub trait SymbolClassifier<'a> {
    fn classify_reference(&self, site: Site<'a>, ident: &IdentifierReference<'a>) -> SymbolClass<'a>;

    fn classify_expression(&self, site: Site<'a>, expr: &Expression<'a>) -> SymbolClass<'a>;

    /// Classify a variable by its annotation, falling back to its initializer.
    fn classify_declarator(
        &self,
        site: Site<'a>,
        declarator: &'a VariableDeclarator<'a>,
    ) -> SymbolClass<'a>;

    /// Action types a call to `helper` may return.
    fn helper_actions(&self, helper: Helper<'a>) -> Vec<&'a str>;

    /// Whether a callee with this name is an error-recovery operator.
    fn is_catch_error(&self, name: &str) -> bool;
}

/// [`SymbolClassifier`] driven by a [`RuleSet`] over a parsed [`Program`].
pub struct RuleClassifier<'p, 'a> {
    program: &'p Program<'a>,
    rules: &'p RuleSet,
    max_depth: usize,
}

impl<'p, 'a> RuleClassifier<'p, 'a> {
    pub fn new(program: &'p Program<'a>, rules: &'p RuleSet, max_depth: usize) -> Self {
        Self {
            program,
            rules,
            max_depth,
        }
    }

    fn external(&self, specifier: &str, export: &str) -> SymbolClass<'a> {
        self.rules
            .role_of(specifier, export)
            .map_or(SymbolClass::Unknown, SymbolClass::Framework)
    }

    /// Resolve a top-level name of `module`.
    fn resolve_name(&self, module: ModuleId, name: &str, depth: usize) -> SymbolClass<'a> {
        if depth > self.max_depth {
            return SymbolClass::Unknown;
        }
        let index = &self.program.module(module).index;
        if let Some(decl) = index.declarations.get(name) {
            return self.classify_declaration(Site::module(module), *decl, depth + 1);
        }
        if let Some(binding) = index.imports.get(name) {
            return self.classify_import(module, *binding, depth + 1);
        }
        SymbolClass::Unknown
    }

    fn classify_import(&self, from: ModuleId, binding: ImportBinding<'a>, depth: usize) -> SymbolClass<'a> {
        match self.program.resolve_import(from, binding.source) {
            ModuleRef::Project(target) => match binding.imported.export_key() {
                Some(key) => self.resolve_export(target, key, depth),
                None => SymbolClass::Namespace(ModuleRef::Project(target)),
            },
            ModuleRef::Package(specifier) => match binding.imported {
                ImportedName::Named(name) => self.external(specifier, name),
                ImportedName::Default => self.external(specifier, "default"),
                ImportedName::Namespace => SymbolClass::Namespace(ModuleRef::Package(specifier)),
            },
            ModuleRef::Missing => SymbolClass::Unknown,
        }
    }

    /// Resolve the export `key` of `module`.
    fn resolve_export(&self, module: ModuleId, key: &str, depth: usize) -> SymbolClass<'a> {
        if depth > self.max_depth {
            return SymbolClass::Unknown;
        }
        let index = &self.program.module(module).index;
        match index.exports.get(key) {
            Some(ExportTarget::Local(name)) => return self.resolve_name(module, name, depth + 1),
            Some(ExportTarget::Anonymous(decl)) => {
                return self.classify_declaration(Site::module(module), *decl, depth + 1);
            }
            Some(ExportTarget::ReExport(binding)) => {
                return self.classify_import(module, *binding, depth + 1);
            }
            None => {}
        }

        for source in index.star_exports.iter().copied() {
            let class = match self.program.resolve_import(module, source) {
                ModuleRef::Project(target) => self.resolve_export(target, key, depth + 1),
                ModuleRef::Package(specifier) => self.external(specifier, key),
                ModuleRef::Missing => SymbolClass::Unknown,
            };
            if !matches!(class, SymbolClass::Unknown) {
                return class;
            }
        }
        SymbolClass::Unknown
    }

    fn classify_declaration(&self, site: Site<'a>, decl: Declaration<'a>, depth: usize) -> SymbolClass<'a> {
        match decl {
            Declaration::Variable(declarator) => self.classify_declarator_at(site, declarator, depth),
            Declaration::Function(function) => SymbolClass::Helper(Helper {
                site,
                function: HelperFn::Function(function),
            }),
            Declaration::Enum(decl) => SymbolClass::Enum(decl),
            Declaration::Class(_) => SymbolClass::Unknown,
        }
    }

    fn classify_declarator_at(
        &self,
        site: Site<'a>,
        declarator: &'a VariableDeclarator<'a>,
        depth: usize,
    ) -> SymbolClass<'a> {
        if let Some(annotation) = &declarator.id.type_annotation {
            match self.classify_type(site, &annotation.type_annotation, depth + 1) {
                TypeClass::ActionCreator(action) => return SymbolClass::ActionCreator(action),
                TypeClass::ActionReducer => return SymbolClass::ActionReducer,
                _ => {}
            }
        }

        let Some(init) = &declarator.init else {
            return SymbolClass::Unknown;
        };
        match unwrap_expression(init) {
            Expression::ArrowFunctionExpression(arrow) => SymbolClass::Helper(Helper {
                site,
                function: HelperFn::Arrow(arrow),
            }),
            Expression::FunctionExpression(function) => SymbolClass::Helper(Helper {
                site,
                function: HelperFn::Function(function),
            }),
            init => self.classify_expr(site, init, depth + 1),
        }
    }

    fn classify_ident(&self, site: Site<'a>, ident: &IdentifierReference<'a>, depth: usize) -> SymbolClass<'a> {
        let scoping = self.program.module(site.module).semantic.scoping();
        if let Some(reference_id) = ident.reference_id.get() {
            match scoping.get_reference(reference_id).symbol_id() {
                Some(symbol_id) if scoping.symbol_scope_id(symbol_id) == scoping.root_scope_id() => {}
                // Locals and unresolved globals carry no framework meaning.
                _ => return SymbolClass::Unknown,
            }
        }
        self.resolve_name(site.module, ident.name.as_str(), depth)
    }

    fn classify_expr(&self, site: Site<'a>, expr: &Expression<'a>, depth: usize) -> SymbolClass<'a> {
        if depth > self.max_depth {
            return SymbolClass::Unknown;
        }
        let expr = unwrap_expression(expr);
        if let Some(value) = string_value(expr) {
            return SymbolClass::StringConst(value);
        }

        match expr {
            Expression::Identifier(ident) => self.classify_ident(site, ident, depth),
            Expression::StaticMemberExpression(member) => {
                self.classify_member(site, &member.object, member.property.name.as_str(), depth)
            }
            Expression::CallExpression(call) => {
                match self.classify_expr(site, &call.callee, depth + 1) {
                    SymbolClass::Framework(SymbolRole::ActionCreatorFactory) => {
                        let action = call
                            .arguments
                            .first()
                            .and_then(|arg| arg.as_expression())
                            .and_then(|arg| match self.classify_expr(site, arg, depth + 1) {
                                SymbolClass::StringConst(value) => Some(value),
                                _ => None,
                            });
                        SymbolClass::ActionCreator(action)
                    }
                    SymbolClass::Framework(SymbolRole::ReducerFactory) => SymbolClass::ActionReducer,
                    _ => SymbolClass::Unknown,
                }
            }
            _ => SymbolClass::Unknown,
        }
    }

    fn classify_member(
        &self,
        site: Site<'a>,
        object: &Expression<'a>,
        property: &'a str,
        depth: usize,
    ) -> SymbolClass<'a> {
        if let Expression::ThisExpression(_) = unwrap_expression(object) {
            return site
                .class
                .map_or(SymbolClass::Unknown, |class| class_member(site, class, property));
        }

        match self.classify_expr(site, object, depth + 1) {
            SymbolClass::ActionCreator(Some(action)) if property == "type" => {
                SymbolClass::StringConst(action)
            }
            SymbolClass::Namespace(ModuleRef::Project(module)) => {
                self.resolve_export(module, property, depth + 1)
            }
            SymbolClass::Namespace(ModuleRef::Package(specifier)) => self.external(specifier, property),
            SymbolClass::Enum(decl) => enum_member(decl, property),
            _ => SymbolClass::Unknown,
        }
    }

    fn classify_type(&self, site: Site<'a>, ty: &TSType<'a>, depth: usize) -> TypeClass<'a> {
        if depth > self.max_depth {
            return TypeClass::Unknown;
        }
        let TSType::TSTypeReference(reference) = ty else {
            return TypeClass::Unknown;
        };

        let class = match &reference.type_name {
            TSTypeName::IdentifierReference(ident) => self.classify_ident(site, ident, depth + 1),
            TSTypeName::QualifiedName(name) => match &name.left {
                TSTypeName::IdentifierReference(namespace) => {
                    match self.classify_ident(site, namespace, depth + 1) {
                        SymbolClass::Namespace(ModuleRef::Project(module)) => {
                            self.resolve_export(module, name.right.name.as_str(), depth + 1)
                        }
                        SymbolClass::Namespace(ModuleRef::Package(specifier)) => {
                            self.external(specifier, name.right.name.as_str())
                        }
                        _ => SymbolClass::Unknown,
                    }
                }
                _ => SymbolClass::Unknown,
            },
            _ => SymbolClass::Unknown,
        };

        let first_argument = reference
            .type_arguments
            .as_ref()
            .and_then(|arguments| arguments.params.first());
        match class {
            SymbolClass::Framework(SymbolRole::ActionCreatorType) => {
                let mut literals = Vec::new();
                if let Some(argument) = first_argument {
                    type_literals(argument, &mut literals);
                }
                TypeClass::ActionCreator(literals.first().copied())
            }
            SymbolClass::Framework(SymbolRole::ReducerType) => TypeClass::ActionReducer,
            SymbolClass::Framework(SymbolRole::ActionUnion) => {
                let mut literals = Vec::new();
                if let Some(argument) = first_argument {
                    type_literals(argument, &mut literals);
                }
                TypeClass::ActionUnion(literals)
            }
            _ => TypeClass::Unknown,
        }
    }

    fn helper_actions_at(&self, helper: Helper<'a>, depth: usize) -> Vec<&'a str> {
        if depth > self.max_depth {
            return Vec::new();
        }
        let (return_type, body) = match helper.function {
            HelperFn::Function(function) => (&function.return_type, function.body.as_deref()),
            HelperFn::Arrow(arrow) => (&arrow.return_type, Some(&*arrow.body)),
        };

        // A declared return type is authoritative.
        if let Some(annotation) = return_type {
            return match self.classify_type(helper.site, &annotation.type_annotation, depth + 1) {
                TypeClass::ActionUnion(actions) => actions,
                _ => Vec::new(),
            };
        }

        let Some(body) = body else {
            return Vec::new();
        };
        let mut returns = ReturnedActions {
            classifier: self,
            site: helper.site,
            depth: depth + 1,
            actions: IndexSet::new(),
        };
        let expression_body = match helper.function {
            HelperFn::Arrow(arrow) if arrow.expression => match body.statements.first() {
                Some(Statement::ExpressionStatement(stmt)) => Some(&stmt.expression),
                _ => None,
            },
            _ => None,
        };
        match expression_body {
            Some(expr) => returns.add(expr),
            None => returns.visit_function_body(body),
        }
        returns.actions.into_iter().collect()
    }
}

impl<'a> SymbolClassifier<'a> for RuleClassifier<'_, 'a> {
    fn classify_reference(&self, site: Site<'a>, ident: &IdentifierReference<'a>) -> SymbolClass<'a> {
        self.classify_ident(site, ident, 0)
    }

    fn classify_expression(&self, site: Site<'a>, expr: &Expression<'a>) -> SymbolClass<'a> {
        self.classify_expr(site, expr, 0)
    }

    fn classify_declarator(
        &self,
        site: Site<'a>,
        declarator: &'a VariableDeclarator<'a>,
    ) -> SymbolClass<'a> {
        self.classify_declarator_at(site, declarator, 0)
    }

    fn helper_actions(&self, helper: Helper<'a>) -> Vec<&'a str> {
        self.helper_actions_at(helper, 0)
    }

    fn is_catch_error(&self, name: &str) -> bool {
        self.rules.is_catch_error(name)
    }
}

/// Method or function-valued property `name` of `class`.
fn class_member<'a>(site: Site<'a>, class: &'a Class<'a>, name: &str) -> SymbolClass<'a> {
    for element in &class.body.body {
        match element {
            ClassElement::MethodDefinition(method) if property_key_name(&method.key) == Some(name) => {
                return SymbolClass::Helper(Helper {
                    site,
                    function: HelperFn::Function(&method.value),
                });
            }
            ClassElement::PropertyDefinition(property)
                if property_key_name(&property.key) == Some(name) =>
            {
                return match property.value.as_ref().map(unwrap_expression) {
                    Some(Expression::ArrowFunctionExpression(arrow)) => SymbolClass::Helper(Helper {
                        site,
                        function: HelperFn::Arrow(arrow),
                    }),
                    Some(Expression::FunctionExpression(function)) => SymbolClass::Helper(Helper {
                        site,
                        function: HelperFn::Function(function),
                    }),
                    _ => SymbolClass::Unknown,
                };
            }
            _ => {}
        }
    }
    SymbolClass::Unknown
}

/// String value of the enum member `name`.
fn enum_member<'a>(decl: &'a TSEnumDeclaration<'a>, name: &str) -> SymbolClass<'a> {
    decl.body
        .members
        .iter()
        .find(|member| match &member.id {
            TSEnumMemberName::Identifier(ident) => ident.name.as_str() == name,
            TSEnumMemberName::String(lit) => lit.value.as_str() == name,
            _ => false,
        })
        .and_then(|member| member.initializer.as_ref())
        .and_then(string_value)
        .map_or(SymbolClass::Unknown, SymbolClass::StringConst)
}

/// Collect the string literal members of a (possibly union) type.
fn type_literals<'a>(ty: &TSType<'a>, out: &mut Vec<&'a str>) {
    match ty {
        TSType::TSLiteralType(literal) => {
            if let TSLiteral::StringLiteral(value) = &literal.literal {
                out.push(value.value.as_str());
            }
        }
        TSType::TSUnionType(union) => {
            for member in &union.types {
                type_literals(member, out);
            }
        }
        TSType::TSParenthesizedType(inner) => type_literals(&inner.type_annotation, out),
        _ => {}
    }
}

/// Infers a helper's action union from the expressions it returns.
struct ReturnedActions<'c, 'p, 'a> {
    classifier: &'c RuleClassifier<'p, 'a>,
    site: Site<'a>,
    depth: usize,
    actions: IndexSet<&'a str>,
}

impl<'a> ReturnedActions<'_, '_, 'a> {
    fn add(&mut self, expr: &Expression<'a>) {
        match unwrap_expression(expr) {
            Expression::CallExpression(call) => {
                match self.classifier.classify_expr(self.site, &call.callee, self.depth) {
                    SymbolClass::ActionCreator(Some(action)) => {
                        self.actions.insert(action);
                    }
                    SymbolClass::Helper(helper) => {
                        let nested = self.classifier.helper_actions_at(helper, self.depth + 1);
                        self.actions.extend(nested);
                    }
                    _ => {}
                }
            }
            Expression::ConditionalExpression(conditional) => {
                self.add(&conditional.consequent);
                self.add(&conditional.alternate);
            }
            _ => {}
        }
    }
}

impl<'a> Visit<'a> for ReturnedActions<'_, '_, 'a> {
    fn visit_return_statement(&mut self, stmt: &ReturnStatement<'a>) {
        if let Some(argument) = &stmt.argument {
            self.add(argument);
        }
    }

    // Returns of nested functions belong to those functions.
    fn visit_function(&mut self, _function: &Function<'a>, _flags: ScopeFlags) {}

    fn visit_arrow_function_expression(&mut self, _arrow: &ArrowFunctionExpression<'a>) {}
}
