//! Per-module index of top-level bindings.
//!
//! Records what each top-level name refers to, where imported names come
//! from, and which names the module exports. The classifier walks these
//! tables to follow a name across files.

use oxc_ast::ast::{
    BindingPatternKind, Class, Declaration as AstDeclaration, ExportDefaultDeclarationKind,
    Function, ImportDeclarationSpecifier, Program, Statement, TSEnumDeclaration,
    VariableDeclaration, VariableDeclarator,
};
use rustc_hash::FxHashMap;

use super::utils::export_name;

/// A top-level declaration.
#[derive(Debug, Clone, Copy)]
pub enum Declaration<'a> {
    Variable(&'a VariableDeclarator<'a>),
    Function(&'a Function<'a>),
    Class(&'a Class<'a>),
    Enum(&'a TSEnumDeclaration<'a>),
}

/// What an import or re-export pulls out of its source module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportedName<'a> {
    Named(&'a str),
    Default,
    Namespace,
}

impl<'a> ImportedName<'a> {
    fn from_export(name: &'a str) -> Self {
        if name == "default" {
            ImportedName::Default
        } else {
            ImportedName::Named(name)
        }
    }

    /// The export name looked up in the source module.
    pub fn export_key(&self) -> Option<&'a str> {
        match self {
            ImportedName::Named(name) => Some(name),
            ImportedName::Default => Some("default"),
            ImportedName::Namespace => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ImportBinding<'a> {
    pub source: &'a str,
    pub imported: ImportedName<'a>,
}

#[derive(Debug, Clone, Copy)]
pub enum ExportTarget<'a> {
    /// A top-level name of this module.
    Local(&'a str),
    /// An anonymous default export.
    Anonymous(Declaration<'a>),
    /// `export { x } from "..."` and `export * as ns from "..."`.
    ReExport(ImportBinding<'a>),
}

#[derive(Debug, Default)]
pub struct ModuleIndex<'a> {
    pub declarations: FxHashMap<&'a str, Declaration<'a>>,
    pub imports: FxHashMap<&'a str, ImportBinding<'a>>,
    pub exports: FxHashMap<&'a str, ExportTarget<'a>>,
    pub star_exports: Vec<&'a str>,
    /// Every module specifier this module imports or re-exports from.
    pub sources: Vec<&'a str>,
    /// Top-level variable declarators in source order.
    pub variables: Vec<&'a VariableDeclarator<'a>>,
    /// Top-level classes in source order.
    pub classes: Vec<&'a Class<'a>>,
}

impl<'a> ModuleIndex<'a> {
    pub fn build(program: &'a Program<'a>) -> Self {
        let mut index = Self::default();

        for stmt in &program.body {
            match stmt {
                Statement::VariableDeclaration(decl) => index.add_variables(decl),
                Statement::FunctionDeclaration(func) => index.add_function(func),
                Statement::ClassDeclaration(class) => index.add_class(class),
                Statement::TSEnumDeclaration(decl) => index.add_enum(decl),
                Statement::ImportDeclaration(import) => {
                    let source = import.source.value.as_str();
                    index.sources.push(source);
                    for specifier in import.specifiers.iter().flatten() {
                        let (local, imported) = match specifier {
                            ImportDeclarationSpecifier::ImportSpecifier(spec) => (
                                spec.local.name.as_str(),
                                ImportedName::from_export(export_name(&spec.imported)),
                            ),
                            ImportDeclarationSpecifier::ImportDefaultSpecifier(spec) => {
                                (spec.local.name.as_str(), ImportedName::Default)
                            }
                            ImportDeclarationSpecifier::ImportNamespaceSpecifier(spec) => {
                                (spec.local.name.as_str(), ImportedName::Namespace)
                            }
                        };
                        index.imports.insert(local, ImportBinding { source, imported });
                    }
                }
                Statement::ExportNamedDeclaration(export) => {
                    if let Some(decl) = &export.declaration {
                        for name in index.add_declaration(decl) {
                            index.exports.insert(name, ExportTarget::Local(name));
                        }
                    }
                    if let Some(source) = &export.source {
                        index.sources.push(source.value.as_str());
                    }
                    for spec in &export.specifiers {
                        let local = export_name(&spec.local);
                        let exported = export_name(&spec.exported);
                        let target = match &export.source {
                            Some(source) => ExportTarget::ReExport(ImportBinding {
                                source: source.value.as_str(),
                                imported: ImportedName::from_export(local),
                            }),
                            None => ExportTarget::Local(local),
                        };
                        index.exports.insert(exported, target);
                    }
                }
                Statement::ExportDefaultDeclaration(export) => {
                    let target = match &export.declaration {
                        ExportDefaultDeclarationKind::FunctionDeclaration(func) => {
                            match func.id.as_ref() {
                                Some(id) => {
                                    index.add_function(func);
                                    ExportTarget::Local(id.name.as_str())
                                }
                                None => ExportTarget::Anonymous(Declaration::Function(func)),
                            }
                        }
                        ExportDefaultDeclarationKind::ClassDeclaration(class) => {
                            index.classes.push(class);
                            match class.id.as_ref() {
                                Some(id) => {
                                    index
                                        .declarations
                                        .insert(id.name.as_str(), Declaration::Class(class));
                                    ExportTarget::Local(id.name.as_str())
                                }
                                None => ExportTarget::Anonymous(Declaration::Class(class)),
                            }
                        }
                        ExportDefaultDeclarationKind::Identifier(ident) => {
                            ExportTarget::Local(ident.name.as_str())
                        }
                        _ => continue,
                    };
                    index.exports.insert("default", target);
                }
                Statement::ExportAllDeclaration(export) => {
                    let source = export.source.value.as_str();
                    index.sources.push(source);
                    match &export.exported {
                        Some(name) => {
                            index.exports.insert(
                                export_name(name),
                                ExportTarget::ReExport(ImportBinding {
                                    source,
                                    imported: ImportedName::Namespace,
                                }),
                            );
                        }
                        None => index.star_exports.push(source),
                    }
                }
                _ => {}
            }
        }

        index
    }

    /// Index an exported declaration, returning the names it binds.
    fn add_declaration(&mut self, decl: &'a AstDeclaration<'a>) -> Vec<&'a str> {
        match decl {
            AstDeclaration::VariableDeclaration(vars) => {
                self.add_variables(vars);
                vars.declarations.iter().filter_map(binding_name).collect()
            }
            AstDeclaration::FunctionDeclaration(func) => {
                self.add_function(func);
                func.id.iter().map(|id| id.name.as_str()).collect()
            }
            AstDeclaration::ClassDeclaration(class) => {
                self.add_class(class);
                class.id.iter().map(|id| id.name.as_str()).collect()
            }
            AstDeclaration::TSEnumDeclaration(decl) => {
                self.add_enum(decl);
                vec![decl.id.name.as_str()]
            }
            _ => Vec::new(),
        }
    }

    fn add_variables(&mut self, decl: &'a VariableDeclaration<'a>) {
        for declarator in &decl.declarations {
            if let Some(name) = binding_name(declarator) {
                self.declarations.insert(name, Declaration::Variable(declarator));
            }
            self.variables.push(declarator);
        }
    }

    fn add_function(&mut self, func: &'a Function<'a>) {
        if let Some(id) = &func.id {
            self.declarations.insert(id.name.as_str(), Declaration::Function(func));
        }
    }

    fn add_class(&mut self, class: &'a Class<'a>) {
        if let Some(id) = &class.id {
            self.declarations.insert(id.name.as_str(), Declaration::Class(class));
        }
        self.classes.push(class);
    }

    fn add_enum(&mut self, decl: &'a TSEnumDeclaration<'a>) {
        self.declarations.insert(decl.id.name.as_str(), Declaration::Enum(decl));
    }
}

/// Name bound by a simple `const name = ...` declarator.
pub fn binding_name<'a>(declarator: &VariableDeclarator<'a>) -> Option<&'a str> {
    match &declarator.id.kind {
        BindingPatternKind::BindingIdentifier(ident) => Some(ident.name.as_str()),
        _ => None,
    }
}
