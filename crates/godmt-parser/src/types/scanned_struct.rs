use serde::{Deserialize, Serialize};

use super::InternalType;

/// One struct declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannedStruct {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    /// Classifiable fields only, in declaration order.
    pub fields: Vec<ScannedStructField>,
    pub internal_type: InternalType,
}

/// One struct field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannedStructField {
    pub name: String,
    /// Resolved type name: `int`, `struct`, or the element kind of a slice.
    pub kind: String,
    /// Raw tag text including its quotes, empty when the field has no tag.
    #[serde(default)]
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    #[serde(default)]
    pub is_pointer: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import_details: Option<ImportDetails>,
    /// Populated only for anonymous nested structs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_fields: Option<Vec<ScannedStructField>>,
    pub internal_type: InternalType,
}

/// Origin of a package-qualified field type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportDetails {
    /// Qualifier as written (the import alias or package name).
    pub package: String,
    /// Referenced type name.
    pub name: String,
    /// Import path, when the qualifier matches one of the file's imports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}
