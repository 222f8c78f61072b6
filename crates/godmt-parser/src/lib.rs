//! # godmt-parser
//!
//! Go declaration extraction into the godmt scanned model.
//!
//! Go source is parsed with ast-grep's tree-sitter Go grammar, lowered into
//! typed declaration nodes ([`ast`]), indexed per file ([`index`]), and
//! routed through the extractors into [`ScannedStruct`] and [`ScannedType`]
//! entries. Declarations whose shape is unsupported are dropped; pass
//! [`ExtractOptions`] with `diagnostics` set to see why.

pub mod ast;
pub mod error;
pub mod extractors;
pub mod index;
pub mod lower;
pub mod parser;
pub mod test_files;
pub mod types;

use std::path::Path;

pub use error::ParserError;
pub use extractors::{ExtractOptions, Extractor, Routed, extract_file, route_declaration};
pub use parser::is_go_source;
pub use test_files::{is_test_dir, is_test_file};
pub use types::{
    ImportDetails, InternalType, MapEntry, Omission, OmissionReason, ScannedFile, ScannedStruct,
    ScannedStructField, ScannedType, ScannedValue,
};

/// Parse, lower, and extract one Go source text.
///
/// # Errors
/// Returns `ParserError::MissingPackage` if the source has no package clause.
pub fn extract_source(source: &str, options: ExtractOptions) -> Result<ScannedFile, ParserError> {
    let file = lower::lower_source(source)?;
    Ok(extract_file(&file, options))
}

/// Read and extract the Go file at `path`.
///
/// # Errors
/// Returns `ParserError::Io` if the file cannot be read and
/// `ParserError::MissingPackage` if it is not a Go source file.
pub fn extract_path(path: &Path, options: ExtractOptions) -> Result<ScannedFile, ParserError> {
    let source = std::fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), bytes = source.len(), "read go source");
    extract_source(&source, options)
}
