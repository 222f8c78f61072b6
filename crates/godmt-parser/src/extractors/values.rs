//! Literal/value extractor for `const` and `var` specs.

use std::collections::HashSet;

use crate::ast::{Element, Expr, TypeExpr, ValueSpec};
use crate::types::{InternalType, MapEntry, OmissionReason, ScannedType, ScannedValue};

use super::Extractor;

/// An initializer reduced to model terms, before naming.
struct Initializer {
    kind: String,
    value: ScannedValue,
    is_pointer: bool,
    internal_type: InternalType,
}

impl<'a> Extractor<'a> {
    /// Extract one value spec.
    ///
    /// Initializers pair with names by position; surplus initializers reuse
    /// the first name. A typed spec without initializers yields one entry
    /// per name with no value. The blank identifier declares nothing and
    /// yields no entry.
    pub(super) fn extract_values(&mut self, spec: &ValueSpec) -> Vec<ScannedType> {
        if spec.values.is_empty() {
            return spec
                .ty
                .as_ref()
                .map(|ty| self.extract_declared(spec, ty))
                .unwrap_or_default();
        }

        let mut scanned = Vec::with_capacity(spec.values.len());
        for (position, expr) in spec.values.iter().enumerate() {
            let name = spec
                .names
                .get(position)
                .or_else(|| spec.names.first())
                .cloned()
                .unwrap_or_default();
            if name == "_" {
                continue;
            }

            let mut seen = HashSet::new();
            match self.resolve_initializer(expr, &mut seen) {
                Ok(mut init) => {
                    if init.internal_type == InternalType::Var
                        && let Some(ty) = &spec.ty
                    {
                        init.kind = ty.written_name();
                    }
                    scanned.push(ScannedType {
                        name,
                        kind: init.kind,
                        value: init.value,
                        doc: spec.doc.clone(),
                        is_pointer: init.is_pointer,
                        internal_type: init.internal_type,
                    });
                }
                Err(reason) => self.omit(&name, reason),
            }
        }
        scanned
    }

    fn extract_declared(&mut self, spec: &ValueSpec, ty: &TypeExpr) -> Vec<ScannedType> {
        let resolved = match self.resolve_type(ty, None) {
            Ok(resolved) => resolved,
            Err(reason) => {
                self.omit(&spec.names.join(", "), reason);
                return Vec::new();
            }
        };

        spec.names
            .iter()
            .filter(|name| *name != "_")
            .map(|name| ScannedType {
                name: name.clone(),
                kind: resolved.kind.clone(),
                value: ScannedValue::None,
                doc: spec.doc.clone(),
                is_pointer: resolved.is_pointer,
                internal_type: resolved.internal_type,
            })
            .collect()
    }

    fn resolve_initializer(
        &mut self,
        expr: &Expr,
        seen: &mut HashSet<String>,
    ) -> Result<Initializer, OmissionReason> {
        match expr {
            Expr::Literal { kind, text } => Ok(Initializer {
                kind: kind.default_type().to_string(),
                value: ScannedValue::Literal(text.clone()),
                is_pointer: false,
                internal_type: InternalType::Var,
            }),
            Expr::Ident(name) => {
                if !seen.insert(name.clone()) {
                    return Err(OmissionReason::IdentifierCycle { name: name.clone() });
                }
                let unresolved = || OmissionReason::UnresolvedIdentifier { name: name.clone() };
                let binding = self.index.value(name).ok_or_else(unresolved)?;
                let Some(target) = binding.initializer() else {
                    // Declared with a type only: the entry takes that type.
                    let ty = binding.spec.ty.as_ref().ok_or_else(unresolved)?;
                    let resolved = self.resolve_type(ty, None)?;
                    return Ok(Initializer {
                        kind: resolved.kind,
                        value: ScannedValue::None,
                        is_pointer: resolved.is_pointer,
                        internal_type: resolved.internal_type,
                    });
                };

                let mut init = self.resolve_initializer(target, seen)?;
                if init.internal_type == InternalType::Var
                    && let Some(ty) = &binding.spec.ty
                {
                    init.kind = ty.written_name();
                }
                Ok(init)
            }
            Expr::Composite {
                ty: Some(ty),
                elements,
            } => self.resolve_composite(ty, elements),
            Expr::Composite { ty: None, .. } | Expr::Other { .. } => {
                Err(OmissionReason::UnsupportedInitializer {
                    shape: expr.shape().to_string(),
                })
            }
        }
    }

    fn resolve_composite(
        &mut self,
        ty: &TypeExpr,
        elements: &[Element],
    ) -> Result<Initializer, OmissionReason> {
        match self.underlying(ty)? {
            TypeExpr::Map { value, .. } => Ok(Initializer {
                kind: value.written_name(),
                value: self.map_value(elements),
                is_pointer: false,
                internal_type: InternalType::Map,
            }),
            TypeExpr::Array { elem, .. } => {
                let kind = self.element_kind(elem)?;
                let items = elements
                    .iter()
                    .map(|element| self.element_value(&element.value))
                    .collect();
                Ok(Initializer {
                    kind,
                    value: ScannedValue::List(items),
                    is_pointer: false,
                    internal_type: InternalType::Slice,
                })
            }
            other => Err(OmissionReason::UnsupportedInitializer {
                shape: format!("{} composite", other.shape()),
            }),
        }
    }

    /// Follow named types declared in this file to the type they denote.
    fn underlying<'t>(&self, ty: &'t TypeExpr) -> Result<&'t TypeExpr, OmissionReason>
    where
        'a: 't,
    {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut current = ty;
        while let TypeExpr::Named(name) = current {
            let Some(spec) = self.index.type_spec(name) else {
                break;
            };
            if !seen.insert(name.as_str()) {
                return Err(OmissionReason::AliasCycle { name: name.clone() });
            }
            current = &spec.ty;
        }
        Ok(current)
    }

    /// Keyed entries in source order. The first occurrence of a key wins.
    fn map_value(&mut self, elements: &[Element]) -> ScannedValue {
        let mut keys: HashSet<String> = HashSet::new();
        let mut entries = Vec::with_capacity(elements.len());
        for element in elements {
            let Some(key) = &element.key else {
                self.omit("map element", OmissionReason::UnkeyedMapElement);
                continue;
            };
            let key = self.element_value(key).summary();
            if !keys.insert(key.clone()) {
                self.omit(&key, OmissionReason::DuplicateKey { key: key.clone() });
                continue;
            }
            entries.push(MapEntry {
                key,
                value: self.element_value(&element.value),
            });
        }
        ScannedValue::Map(entries)
    }

    /// The value of one composite element. Nested literals become maps
    /// when keyed and lists otherwise.
    fn element_value(&mut self, expr: &Expr) -> ScannedValue {
        match expr {
            Expr::Literal { text, .. } | Expr::Other { text, .. } | Expr::Ident(text) => {
                ScannedValue::Literal(text.clone())
            }
            Expr::Composite { elements, .. } => {
                if elements.iter().any(|element| element.key.is_some()) {
                    self.map_value(elements)
                } else {
                    ScannedValue::List(
                        elements
                            .iter()
                            .map(|element| self.element_value(&element.value))
                            .collect(),
                    )
                }
            }
        }
    }
}
