use ast_grep_core::Node;

use crate::ast::{Decl, Import, TypeSpec, ValueKeyword, ValueSpec};

use super::helpers::{extract_go_doc, lower_expression_list, lower_type};

// ── import_declaration ────────────────────────────────────────────

pub(super) fn process_import_declaration<D: ast_grep_core::Doc>(node: &Node<D>) -> Vec<Import> {
    let mut imports = Vec::new();
    for child in node.children() {
        let k = child.kind();
        match k.as_ref() {
            "import_spec" => imports.extend(process_import_spec(&child)),
            "import_spec_list" => {
                for spec in child.children() {
                    if spec.kind().as_ref() == "import_spec" {
                        imports.extend(process_import_spec(&spec));
                    }
                }
            }
            _ => {}
        }
    }
    imports
}

fn process_import_spec<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<Import> {
    let path = node.field("path")?;
    let path = path.text().trim_matches(|c| c == '"' || c == '`').to_string();
    let alias = node.field("name").map(|n| n.text().to_string());
    Some(Import { alias, path })
}

// ── type_declaration ──────────────────────────────────────────────

pub(super) fn process_type_declaration<D: ast_grep_core::Doc>(node: &Node<D>) -> Vec<Decl> {
    let mut decls = Vec::new();
    let doc = extract_go_doc(node);

    for child in node.children() {
        let k = child.kind();
        let alias = match k.as_ref() {
            "type_spec" => false,
            "type_alias" => true,
            _ => continue,
        };
        if let Some(spec) = process_type_spec(&child, doc.as_deref(), alias) {
            decls.push(Decl::Type(spec));
        }
    }
    decls
}

fn process_type_spec<D: ast_grep_core::Doc>(
    node: &Node<D>,
    parent_doc: Option<&str>,
    alias: bool,
) -> Option<TypeSpec> {
    let name = node
        .field("name")
        .or_else(|| {
            node.children()
                .find(|c| c.kind().as_ref() == "type_identifier")
        })
        .map(|n| n.text().to_string())?;
    let ty = node.field("type").map(|ty| lower_type(&ty))?;

    // Use the spec's own doc comment if available, else the group's
    let doc = extract_go_doc(node).or_else(|| parent_doc.map(ToString::to_string));

    Some(TypeSpec {
        name,
        ty,
        doc,
        alias,
    })
}

// ── const_declaration / var_declaration ───────────────────────────

pub(super) fn process_value_declaration<D: ast_grep_core::Doc>(
    node: &Node<D>,
    keyword: ValueKeyword,
) -> Vec<Decl> {
    let mut decls = Vec::new();
    let doc = extract_go_doc(node);

    for child in node.children() {
        let k = child.kind();
        match k.as_ref() {
            "const_spec" | "var_spec" => {
                if let Some(spec) = process_value_spec(&child, keyword, doc.as_deref()) {
                    decls.push(Decl::Value(spec));
                }
            }
            // var ( ... ) block
            "var_spec_list" => {
                for spec in child.children() {
                    if spec.kind().as_ref() == "var_spec"
                        && let Some(value_spec) = process_value_spec(&spec, keyword, doc.as_deref())
                    {
                        decls.push(Decl::Value(value_spec));
                    }
                }
            }
            _ => {}
        }
    }
    decls
}

fn process_value_spec<D: ast_grep_core::Doc>(
    node: &Node<D>,
    keyword: ValueKeyword,
    parent_doc: Option<&str>,
) -> Option<ValueSpec> {
    let names: Vec<String> = node
        .children()
        .filter(|c| c.kind().as_ref() == "identifier")
        .map(|n| n.text().to_string())
        .collect();
    if names.is_empty() {
        return None;
    }

    let doc = extract_go_doc(node).or_else(|| parent_doc.map(ToString::to_string));

    Some(ValueSpec {
        keyword,
        names,
        ty: node.field("type").map(|ty| lower_type(&ty)),
        values: node
            .field("value")
            .map(|list| lower_expression_list(&list))
            .unwrap_or_default(),
        doc,
    })
}
