//! Parser error types for godmt-parser.

/// Errors that can occur while reading Go source into declaration nodes.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("Source has no package clause")]
    MissingPackage,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
