use serde::{Deserialize, Serialize};

use super::{InternalType, ScannedValue};

/// One constant or variable entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannedType {
    /// The declaring identifier.
    pub name: String,
    pub kind: String,
    pub value: ScannedValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    /// Set for typed declarations without initializer, e.g. `var P *int`.
    #[serde(default)]
    pub is_pointer: bool,
    pub internal_type: InternalType,
}
