//! ast-grep wrapper for the Go grammar.

use std::path::Path;

use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::SupportLang;

/// The concrete AST tree type returned by `parse_source`.
pub type AstTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

/// Returns `true` when `path` has a `.go` extension.
#[must_use]
pub fn is_go_source(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some("go")
}

/// Parse Go source code into an ast-grep tree.
#[must_use]
pub fn parse_source(source: &str) -> AstTree {
    use ast_grep_language::LanguageExt;
    SupportLang::Go.ast_grep(source)
}
