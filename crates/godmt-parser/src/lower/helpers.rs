use ast_grep_core::Node;

use crate::ast::{Element, Expr, FieldNode, LiteralKind, TypeExpr};

pub(super) fn is_comment<D: ast_grep_core::Doc>(node: &Node<D>) -> bool {
    node.kind().as_ref() == "comment"
}

/// Named children, comments excluded.
pub(super) fn named_children<'r, D: ast_grep_core::Doc>(node: &Node<'r, D>) -> Vec<Node<'r, D>> {
    node.children()
        .filter(|c| c.is_named() && !is_comment(c))
        .collect()
}

fn first_named<'r, D: ast_grep_core::Doc>(node: &Node<'r, D>) -> Option<Node<'r, D>> {
    node.children().find(|c| c.is_named() && !is_comment(c))
}

fn text<D: ast_grep_core::Doc>(node: &Node<D>) -> String {
    node.text().to_string()
}

// ── Doc comment extraction ────────────────────────────────────────

/// Extract Go doc comments by walking backward through sibling `comment` nodes.
///
/// Go convention: doc comments are comments immediately preceding a
/// declaration, with no blank lines in between. A comment sharing its line
/// with earlier code is a trailing comment of that code and ends the walk.
pub(super) fn extract_go_doc<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<String> {
    let mut comments = Vec::new();
    let mut next_line = node.start_pos().line();
    let mut current = node.prev();
    while let Some(sibling) = current {
        if !is_comment(&sibling) || sibling.end_pos().line() + 1 < next_line {
            break;
        }
        if prev_significant(&sibling)
            .is_some_and(|b| b.end_pos().line() == sibling.start_pos().line())
        {
            break;
        }
        comments.push(strip_comment_markers(&sibling.text()));
        next_line = sibling.start_pos().line();
        current = sibling.prev();
    }
    if comments.is_empty() {
        return None;
    }
    comments.reverse();
    Some(comments.join("\n"))
}

/// Previous sibling, skipping `\n` statement terminators.
fn prev_significant<'r, D: ast_grep_core::Doc>(node: &Node<'r, D>) -> Option<Node<'r, D>> {
    let mut current = node.prev();
    while let Some(sibling) = current {
        if sibling.is_named() || !sibling.text().trim().is_empty() {
            return Some(sibling);
        }
        current = sibling.prev();
    }
    None
}

fn strip_comment_markers(raw: &str) -> String {
    if let Some(line) = raw.strip_prefix("//") {
        return line.trim().to_string();
    }
    let block = raw
        .strip_prefix("/*")
        .and_then(|b| b.strip_suffix("*/"))
        .unwrap_or(raw);
    block
        .lines()
        .map(|line| line.trim().trim_start_matches('*').trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

// ── Types ─────────────────────────────────────────────────────────

fn other_type<D: ast_grep_core::Doc>(node: &Node<D>) -> TypeExpr {
    TypeExpr::Other {
        kind: node.kind().to_string(),
        text: text(node),
    }
}

fn array_of<D: ast_grep_core::Doc>(node: &Node<D>, len: Option<String>) -> TypeExpr {
    node.field("element").map_or_else(
        || other_type(node),
        |elem| TypeExpr::Array {
            len,
            elem: Box::new(lower_type(&elem)),
        },
    )
}

/// Lower any `_type` node of the Go grammar.
pub(super) fn lower_type<D: ast_grep_core::Doc>(node: &Node<D>) -> TypeExpr {
    let kind = node.kind();
    match kind.as_ref() {
        "type_identifier" | "identifier" => TypeExpr::Named(text(node)),
        "qualified_type" => match (node.field("package"), node.field("name")) {
            (Some(package), Some(name)) => TypeExpr::Qualified {
                package: text(&package),
                name: text(&name),
            },
            _ => other_type(node),
        },
        "pointer_type" => first_named(node).map_or_else(
            || other_type(node),
            |inner| TypeExpr::Pointer(Box::new(lower_type(&inner))),
        ),
        "slice_type" => array_of(node, None),
        "array_type" => array_of(node, node.field("length").map(|len| text(&len))),
        "implicit_length_array_type" => array_of(node, Some("...".to_string())),
        "map_type" => match (node.field("key"), node.field("value")) {
            (Some(key), Some(value)) => TypeExpr::Map {
                key: Box::new(lower_type(&key)),
                value: Box::new(lower_type(&value)),
            },
            _ => other_type(node),
        },
        "struct_type" => TypeExpr::Struct(
            node.children()
                .find(|c| c.kind().as_ref() == "field_declaration_list")
                .map(|list| lower_field_list(&list))
                .unwrap_or_default(),
        ),
        "parenthesized_type" => {
            first_named(node).map_or_else(|| other_type(node), |inner| lower_type(&inner))
        }
        _ => other_type(node),
    }
}

/// Lower a `field_declaration_list` into field nodes.
///
/// Handles named fields (`Port int`, `X, Y int`), embedded types
/// (`Config`, `pkg.Config`) and embedded pointers (`*Logger`).
pub(super) fn lower_field_list<D: ast_grep_core::Doc>(list: &Node<D>) -> Vec<FieldNode> {
    list.children()
        .filter(|c| c.kind().as_ref() == "field_declaration")
        .filter_map(|field| lower_field(&field))
        .collect()
}

fn lower_field<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<FieldNode> {
    let names: Vec<String> = node
        .children()
        .filter(|c| c.kind().as_ref() == "field_identifier")
        .map(|c| text(&c))
        .collect();
    let type_node = node.field("type")?;
    let mut ty = lower_type(&type_node);
    // Embedded pointers carry a bare `*` token instead of a pointer_type.
    if names.is_empty() && node.children().any(|c| c.kind().as_ref() == "*") {
        ty = TypeExpr::Pointer(Box::new(ty));
    }
    Some(FieldNode {
        names,
        ty,
        tag: node.field("tag").map(|tag| text(&tag)),
        doc: extract_go_doc(node),
    })
}

// ── Expressions ───────────────────────────────────────────────────

fn other_expr<D: ast_grep_core::Doc>(node: &Node<D>) -> Expr {
    Expr::Other {
        kind: node.kind().to_string(),
        text: text(node),
    }
}

fn literal<D: ast_grep_core::Doc>(node: &Node<D>, kind: LiteralKind) -> Expr {
    Expr::Literal {
        kind,
        text: text(node),
    }
}

/// Lower an initializer or composite element expression.
pub(super) fn lower_expr<D: ast_grep_core::Doc>(node: &Node<D>) -> Expr {
    let kind = node.kind();
    match kind.as_ref() {
        "int_literal" => literal(node, LiteralKind::Int),
        "float_literal" => literal(node, LiteralKind::Float),
        "imaginary_literal" => literal(node, LiteralKind::Imaginary),
        "rune_literal" => literal(node, LiteralKind::Rune),
        "interpreted_string_literal" | "raw_string_literal" => literal(node, LiteralKind::String),
        "true" | "false" => literal(node, LiteralKind::Bool),
        "identifier" | "field_identifier" | "nil" | "iota" => Expr::Ident(text(node)),
        "composite_literal" => Expr::Composite {
            ty: node.field("type").map(|ty| lower_type(&ty)),
            elements: node
                .field("body")
                .map(|body| lower_literal_value(&body))
                .unwrap_or_default(),
        },
        "literal_value" => Expr::Composite {
            ty: None,
            elements: lower_literal_value(node),
        },
        "literal_element" | "element" | "parenthesized_expression" => {
            first_named(node).map_or_else(|| other_expr(node), |inner| lower_expr(&inner))
        }
        _ => other_expr(node),
    }
}

fn lower_literal_value<D: ast_grep_core::Doc>(node: &Node<D>) -> Vec<Element> {
    named_children(node)
        .iter()
        .map(|child| {
            if child.kind().as_ref() != "keyed_element" {
                return Element {
                    key: None,
                    value: lower_expr(child),
                };
            }
            match named_children(child).as_slice() {
                [key, value] => Element {
                    key: Some(lower_expr(key)),
                    value: lower_expr(value),
                },
                _ => Element {
                    key: None,
                    value: other_expr(child),
                },
            }
        })
        .collect()
}

/// Lower the `expression_list` of a const/var spec.
pub(super) fn lower_expression_list<D: ast_grep_core::Doc>(list: &Node<D>) -> Vec<Expr> {
    named_children(list).iter().map(lower_expr).collect()
}
