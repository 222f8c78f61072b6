//! Identifier to declaration lookup table, built once per file.
//!
//! Element-kind resolution and identifier initializers both look names up
//! here instead of rescanning the file.

use std::collections::HashMap;

use crate::ast::{Decl, Expr, FieldNode, GoFile, TypeExpr, TypeSpec, ValueSpec};

/// A value name bound to its spec and its position in the name list.
#[derive(Debug, Clone, Copy)]
pub struct ValueBinding<'a> {
    pub spec: &'a ValueSpec,
    pub position: usize,
}

impl<'a> ValueBinding<'a> {
    /// The initializer paired with this name, if any.
    #[must_use]
    pub fn initializer(&self) -> Option<&'a Expr> {
        self.spec.values.get(self.position)
    }
}

#[derive(Debug, Default)]
pub struct DeclIndex<'a> {
    types: HashMap<&'a str, &'a TypeSpec>,
    values: HashMap<&'a str, ValueBinding<'a>>,
    imports: HashMap<&'a str, &'a str>,
}

impl<'a> DeclIndex<'a> {
    /// Index every top-level declaration and import of `file`.
    ///
    /// The first declaration of a name wins; `_` is never indexed.
    #[must_use]
    pub fn build(file: &'a GoFile) -> Self {
        let mut index = Self::default();
        for decl in &file.decls {
            match decl {
                Decl::Type(spec) => {
                    if spec.name != "_" {
                        index.types.entry(spec.name.as_str()).or_insert(spec);
                    }
                }
                Decl::Value(spec) => {
                    for (position, name) in spec.names.iter().enumerate() {
                        if name != "_" {
                            index
                                .values
                                .entry(name.as_str())
                                .or_insert(ValueBinding { spec, position });
                        }
                    }
                }
            }
        }
        for import in &file.imports {
            index
                .imports
                .entry(import.qualifier())
                .or_insert(import.path.as_str());
        }
        tracing::debug!(
            types = index.types.len(),
            values = index.values.len(),
            imports = index.imports.len(),
            "built declaration index"
        );
        index
    }

    #[must_use]
    pub fn type_spec(&self, name: &str) -> Option<&'a TypeSpec> {
        self.types.get(name).copied()
    }

    /// Names of every indexed type declaration, in no particular order.
    pub fn type_names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.types.keys().copied()
    }

    #[must_use]
    pub fn value(&self, name: &str) -> Option<ValueBinding<'a>> {
        self.values.get(name).copied()
    }

    #[must_use]
    pub fn import_path(&self, qualifier: &str) -> Option<&'a str> {
        self.imports.get(qualifier).copied()
    }

    /// Fields of the struct declared as `name`, following named aliases
    /// (`type A B`, `type A = B`) to the struct they denote.
    #[must_use]
    pub fn struct_fields(&self, name: &str) -> Option<&'a [FieldNode]> {
        let mut current = self.type_spec(name)?;
        for _ in 0..=self.types.len() {
            match &current.ty {
                TypeExpr::Struct(fields) => return Some(fields),
                TypeExpr::Named(next) => current = self.type_spec(next)?,
                _ => return None,
            }
        }
        None
    }
}
