use crate::ast::Decl;
use crate::types::{OmissionReason, ScannedStruct, ScannedType};

use super::Extractor;

/// Outcome of routing one top-level declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Routed {
    Struct(ScannedStruct),
    /// One entry per supported initializer; may be empty when every
    /// initializer was unsupported.
    Values(Vec<ScannedType>),
    /// Neither a struct nor a value declaration the extractors handle.
    Empty,
}

impl Routed {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        match self {
            Self::Struct(_) => false,
            Self::Values(items) => items.is_empty(),
            Self::Empty => true,
        }
    }
}

impl Extractor<'_> {
    /// Dispatch `decl` to the struct extractor or the value extractor.
    pub fn route(&mut self, decl: &Decl) -> Routed {
        decl.name().clone_into(&mut self.current);

        match decl {
            Decl::Type(spec) => {
                if let Some(scanned) = self.extract_struct(spec) {
                    return Routed::Struct(scanned);
                }
                self.omit(
                    &spec.name,
                    OmissionReason::UnsupportedDeclaration {
                        shape: spec.ty.shape().to_string(),
                    },
                );
                Routed::Empty
            }
            Decl::Value(spec) if spec.values.is_empty() && spec.ty.is_none() => {
                self.omit(&spec.names.join(", "), OmissionReason::MissingInitializer);
                Routed::Empty
            }
            Decl::Value(spec) => Routed::Values(self.extract_values(spec)),
        }
    }
}
