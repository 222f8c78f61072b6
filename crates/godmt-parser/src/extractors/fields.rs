//! Field classifier: one field node in, zero or more field models out.

use crate::ast::{FieldNode, TypeExpr};
use crate::types::{ImportDetails, InternalType, OmissionReason, ScannedStructField};

use super::Extractor;

/// A declared type resolved to model terms, shared by struct fields and
/// typed `var`/`const` declarations without initializer.
pub(super) struct ResolvedType {
    pub kind: String,
    pub internal_type: InternalType,
    pub is_pointer: bool,
    pub import_details: Option<ImportDetails>,
    pub sub_fields: Option<Vec<ScannedStructField>>,
}

impl ResolvedType {
    const fn simple(kind: String, internal_type: InternalType) -> Self {
        Self {
            kind,
            internal_type,
            is_pointer: false,
            import_details: None,
            sub_fields: None,
        }
    }
}

impl Extractor<'_> {
    /// Classify one field node. A node declaring several names yields one
    /// model per name, blank names excepted; an unsupported shape yields
    /// none.
    pub(super) fn classify_field(
        &mut self,
        field: &FieldNode,
        owner: Option<&str>,
    ) -> Vec<ScannedStructField> {
        let names = field_names(field);
        if names.is_empty() {
            return Vec::new();
        }
        let resolved = match self.resolve_type(&field.ty, owner) {
            Ok(resolved) => resolved,
            Err(reason) => {
                self.omit(&names.join(", "), reason);
                return Vec::new();
            }
        };

        names
            .into_iter()
            .map(|name| ScannedStructField {
                name,
                kind: resolved.kind.clone(),
                tag: field.tag.clone().unwrap_or_default(),
                doc: field.doc.clone(),
                is_pointer: resolved.is_pointer,
                import_details: resolved.import_details.clone(),
                sub_fields: resolved.sub_fields.clone(),
                internal_type: resolved.internal_type,
            })
            .collect()
    }

    /// Resolve a declared type. `owner` is the struct being extracted, if
    /// any, and arms the by-value recursion guard.
    pub(super) fn resolve_type(
        &mut self,
        ty: &TypeExpr,
        owner: Option<&str>,
    ) -> Result<ResolvedType, OmissionReason> {
        if let Some(owner) = owner
            && let Some(name) = self.recursive_member(ty, owner)
        {
            return Err(OmissionReason::RecursiveStruct {
                name: name.to_string(),
            });
        }

        match ty {
            TypeExpr::Named(name) => Ok(ResolvedType::simple(name.clone(), InternalType::Var)),
            TypeExpr::Map { value, .. } => {
                Ok(ResolvedType::simple(value.written_name(), InternalType::Map))
            }
            TypeExpr::Struct(fields) => Ok(ResolvedType {
                sub_fields: Some(self.extract_fields(fields, owner)),
                ..ResolvedType::simple("struct".to_string(), InternalType::Struct)
            }),
            TypeExpr::Qualified { package, name } => Ok(ResolvedType {
                import_details: Some(ImportDetails {
                    package: package.clone(),
                    name: name.clone(),
                    path: self.index.import_path(package).map(ToString::to_string),
                }),
                ..ResolvedType::simple(name.clone(), InternalType::Var)
            }),
            TypeExpr::Array { elem, .. } => {
                let kind = self.element_kind(elem)?;
                Ok(ResolvedType::simple(kind, InternalType::Slice))
            }
            TypeExpr::Pointer(inner) => match &**inner {
                TypeExpr::Named(name) => Ok(ResolvedType {
                    is_pointer: true,
                    ..ResolvedType::simple(name.clone(), InternalType::Var)
                }),
                TypeExpr::Map { .. } => Err(OmissionReason::PointerToMap),
                TypeExpr::Array { .. } => Err(OmissionReason::PointerToArray),
                other => Err(OmissionReason::UnsupportedPointer {
                    pointee: other.shape().to_string(),
                }),
            },
            TypeExpr::Other { .. } => Err(OmissionReason::UnsupportedType {
                shape: ty.shape().to_string(),
            }),
        }
    }
}

/// Declared names, or for an embedded field the embedded type's name.
fn field_names(field: &FieldNode) -> Vec<String> {
    if !field.is_embedded() {
        return field
            .names
            .iter()
            .filter(|name| *name != "_")
            .cloned()
            .collect();
    }
    vec![field.ty.written_name()]
}
