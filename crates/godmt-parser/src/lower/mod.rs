//! Go front-end: lowers an ast-grep tree into [`GoFile`] declaration nodes.
//!
//! Only top-level `import`, `type`, `const`, and `var` declarations are
//! lowered; function bodies are never entered.

use crate::ast::{GoFile, ValueKeyword};
use crate::error::ParserError;
use crate::parser::parse_source;

mod helpers;
mod processors;

/// Parse and lower Go source text.
///
/// # Errors
/// Returns `ParserError::MissingPackage` if the source has no package clause.
pub fn lower_source(source: &str) -> Result<GoFile, ParserError> {
    let tree = parse_source(source);
    lower_tree(&tree)
}

/// Lower an already-parsed Go tree.
///
/// # Errors
/// Returns `ParserError::MissingPackage` if the tree has no package clause.
pub fn lower_tree<D: ast_grep_core::Doc>(
    tree: &ast_grep_core::AstGrep<D>,
) -> Result<GoFile, ParserError> {
    let mut package = None;
    let mut file = GoFile::default();

    for node in tree.root().children() {
        let kind = node.kind();
        match kind.as_ref() {
            "package_clause" => {
                package = node
                    .children()
                    .find(|c| c.kind().as_ref() == "package_identifier")
                    .map(|n| n.text().to_string());
            }
            "import_declaration" => {
                file.imports
                    .extend(processors::process_import_declaration(&node));
            }
            "type_declaration" => {
                file.decls.extend(processors::process_type_declaration(&node));
            }
            "const_declaration" => {
                file.decls.extend(processors::process_value_declaration(
                    &node,
                    ValueKeyword::Const,
                ));
            }
            "var_declaration" => {
                file.decls.extend(processors::process_value_declaration(
                    &node,
                    ValueKeyword::Var,
                ));
            }
            _ => {}
        }
    }

    file.package = package.ok_or(ParserError::MissingPackage)?;
    tracing::debug!(
        package = %file.package,
        imports = file.imports.len(),
        decls = file.decls.len(),
        "lowered go source"
    );
    Ok(file)
}
