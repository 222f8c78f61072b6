//! Declaration-to-model extraction.
//!
//! [`Extractor::route`] dispatches one declaration to the struct extractor
//! or the literal/value extractor. Unsupported shapes are dropped silently;
//! with [`ExtractOptions::diagnostics`] each drop is also recorded as an
//! [`Omission`].

use crate::ast::{Decl, GoFile};
use crate::index::DeclIndex;
use crate::types::{Omission, OmissionReason, ScannedFile};

mod diagnostics;
mod element;
mod fields;
mod router;
mod structs;
mod values;

pub use router::Routed;

use diagnostics::Diagnostics;
use element::ByValueReach;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Record every silent omission in [`ScannedFile::omissions`].
    pub diagnostics: bool,
}

/// Extraction state for one file: its declaration index and the
/// diagnostics sink. Holds nothing else between declarations.
pub struct Extractor<'a> {
    index: DeclIndex<'a>,
    diagnostics: Diagnostics,
    by_value: ByValueReach<'a>,
    /// Top-level declaration currently being extracted.
    current: String,
}

impl<'a> Extractor<'a> {
    #[must_use]
    pub fn new(file: &'a GoFile, options: ExtractOptions) -> Self {
        Self {
            index: DeclIndex::build(file),
            diagnostics: Diagnostics::new(options.diagnostics),
            by_value: ByValueReach::default(),
            current: String::new(),
        }
    }

    /// Omissions recorded so far (empty unless diagnostics are enabled).
    #[must_use]
    pub fn omissions(&self) -> &[Omission] {
        self.diagnostics.omissions()
    }

    #[must_use]
    pub fn into_omissions(self) -> Vec<Omission> {
        self.diagnostics.into_omissions()
    }

    fn omit(&mut self, subject: &str, reason: OmissionReason) {
        self.diagnostics.record(&self.current, subject, reason);
    }
}

/// Extract every top-level declaration of `file`, in source order.
#[must_use]
pub fn extract_file(file: &GoFile, options: ExtractOptions) -> ScannedFile {
    let mut extractor = Extractor::new(file, options);
    let mut scanned = ScannedFile {
        package: file.package.clone(),
        ..ScannedFile::default()
    };

    for decl in &file.decls {
        match extractor.route(decl) {
            Routed::Struct(item) => scanned.structs.push(item),
            Routed::Values(items) => scanned.types.extend(items),
            Routed::Empty => {}
        }
    }

    scanned.omissions = extractor.into_omissions();
    tracing::debug!(
        package = %scanned.package,
        structs = scanned.structs.len(),
        types = scanned.types.len(),
        omissions = scanned.omissions.len(),
        "extracted go file"
    );
    scanned
}

/// Route a single declaration against `file`'s index.
///
/// Convenience for callers that only need one declaration; building the
/// index is linear in the file, so prefer [`Extractor`] for many lookups.
#[must_use]
pub fn route_declaration(file: &GoFile, decl: &Decl) -> Routed {
    Extractor::new(file, ExtractOptions::default()).route(decl)
}

#[cfg(test)]
mod tests;
