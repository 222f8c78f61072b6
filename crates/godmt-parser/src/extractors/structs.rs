use crate::ast::{FieldNode, TypeExpr, TypeSpec};
use crate::types::{InternalType, ScannedStruct, ScannedStructField};

use super::Extractor;

impl Extractor<'_> {
    /// Extract a struct type spec; `None` when the spec is not a struct.
    pub(super) fn extract_struct(&mut self, spec: &TypeSpec) -> Option<ScannedStruct> {
        let TypeExpr::Struct(fields) = &spec.ty else {
            return None;
        };

        Some(ScannedStruct {
            name: spec.name.clone(),
            doc: spec.doc.clone(),
            fields: self.extract_fields(fields, Some(&spec.name)),
            internal_type: InternalType::Struct,
        })
    }

    /// Classify a field list in declaration order, dropping unsupported
    /// fields without disturbing their siblings.
    pub(super) fn extract_fields(
        &mut self,
        fields: &[FieldNode],
        owner: Option<&str>,
    ) -> Vec<ScannedStructField> {
        let mut scanned = Vec::with_capacity(fields.len());
        for field in fields {
            scanned.extend(self.classify_field(field, owner));
        }
        scanned
    }
}
