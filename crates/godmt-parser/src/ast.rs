//! Typed declaration nodes consumed by the extractors.
//!
//! The Go front-end (`crate::lower`) builds these from an ast-grep tree.
//! Extractors only ever see these tagged unions, one variant per
//! declaration shape, so classification is plain pattern matching.

/// A type expression as written in a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// A bare type name, builtin or declared: `int`, `User`.
    Named(String),
    /// A package-qualified reference: `time.Time`.
    Qualified { package: String, name: String },
    /// `*T`
    Pointer(Box<TypeExpr>),
    /// `[]T` when `len` is `None`, `[N]T` or `[...]T` otherwise.
    Array {
        len: Option<String>,
        elem: Box<TypeExpr>,
    },
    /// `map[K]V`
    Map {
        key: Box<TypeExpr>,
        value: Box<TypeExpr>,
    },
    /// An anonymous `struct { ... }`.
    Struct(Vec<FieldNode>),
    /// Anything else (channels, funcs, interfaces, generics), kept as text.
    Other { kind: String, text: String },
}

impl TypeExpr {
    /// Short shape name used in diagnostics.
    #[must_use]
    pub fn shape(&self) -> &str {
        match self {
            Self::Named(_) => "named",
            Self::Qualified { .. } => "qualified",
            Self::Pointer(_) => "pointer",
            Self::Array { len: None, .. } => "slice",
            Self::Array { .. } => "array",
            Self::Map { .. } => "map",
            Self::Struct(_) => "struct",
            Self::Other { kind, .. } => kind.as_str(),
        }
    }

    /// The type name as written, looking through pointers and containers.
    ///
    /// `map[string]*time.Time` yields `Time`; anonymous structs yield `struct`.
    #[must_use]
    pub fn written_name(&self) -> String {
        match self {
            Self::Named(name) | Self::Qualified { name, .. } => name.clone(),
            Self::Pointer(inner) => inner.written_name(),
            Self::Array { elem, .. } => elem.written_name(),
            Self::Map { value, .. } => value.written_name(),
            Self::Struct(_) => "struct".to_string(),
            Self::Other { text, .. } => text.clone(),
        }
    }
}

/// One entry of a struct's field list.
///
/// A field line may declare several names (`X, Y int`); embedded fields
/// declare none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNode {
    pub names: Vec<String>,
    pub ty: TypeExpr,
    /// Raw tag text including its quotes.
    pub tag: Option<String>,
    pub doc: Option<String>,
}

impl FieldNode {
    #[must_use]
    pub const fn is_embedded(&self) -> bool {
        self.names.is_empty()
    }
}

/// Literal token forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Int,
    Float,
    Imaginary,
    Rune,
    String,
    Bool,
}

impl LiteralKind {
    /// The type an untyped constant of this form defaults to.
    #[must_use]
    pub const fn default_type(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float64",
            Self::Imaginary => "complex128",
            Self::Rune => "rune",
            Self::String => "string",
            Self::Bool => "bool",
        }
    }
}

/// An initializer expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Literal { kind: LiteralKind, text: String },
    /// A bare identifier, including `nil` and `iota`.
    Ident(String),
    /// A composite literal. `ty` is `None` for elided inner literals
    /// such as the `{1, 2}` entries of `[][]int{{1, 2}}`.
    Composite {
        ty: Option<TypeExpr>,
        elements: Vec<Element>,
    },
    Other { kind: String, text: String },
}

impl Expr {
    #[must_use]
    pub fn shape(&self) -> &str {
        match self {
            Self::Literal { .. } => "literal",
            Self::Ident(_) => "identifier",
            Self::Composite { .. } => "composite",
            Self::Other { kind, .. } => kind.as_str(),
        }
    }
}

/// An element of a composite literal, keyed (`"a": 1`) or positional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub key: Option<Expr>,
    pub value: Expr,
}

/// `type Name T` or `type Name = T`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSpec {
    pub name: String,
    pub ty: TypeExpr,
    pub doc: Option<String>,
    pub alias: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKeyword {
    Const,
    Var,
}

/// One `const`/`var` spec: names, optional declared type, initializers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueSpec {
    pub keyword: ValueKeyword,
    pub names: Vec<String>,
    pub ty: Option<TypeExpr>,
    pub values: Vec<Expr>,
    pub doc: Option<String>,
}

/// A top-level named declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decl {
    Type(TypeSpec),
    Value(ValueSpec),
}

impl Decl {
    /// The declaring identifier (first name for multi-name value specs).
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Type(spec) => &spec.name,
            Self::Value(spec) => spec.names.first().map_or("", String::as_str),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    pub alias: Option<String>,
    pub path: String,
}

impl Import {
    /// The qualifier code uses to reference this import: the alias when
    /// present, otherwise the last path segment.
    #[must_use]
    pub fn qualifier(&self) -> &str {
        self.alias
            .as_deref()
            .unwrap_or_else(|| self.path.rsplit('/').next().unwrap_or(&self.path))
    }
}

/// A lowered Go source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoFile {
    pub package: String,
    pub imports: Vec<Import>,
    pub decls: Vec<Decl>,
}
