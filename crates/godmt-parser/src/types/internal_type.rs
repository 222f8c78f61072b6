use serde::{Deserialize, Serialize};

/// Shape tag carried by every model entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InternalType {
    Var,
    Slice,
    Map,
    Struct,
}

impl std::fmt::Display for InternalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Var => "var",
            Self::Slice => "slice",
            Self::Map => "map",
            Self::Struct => "struct",
        };
        write!(f, "{s}")
    }
}
