use serde::{Deserialize, Serialize};

use super::{Omission, ScannedStruct, ScannedType};

/// Everything extracted from one Go source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannedFile {
    pub package: String,
    pub structs: Vec<ScannedStruct>,
    pub types: Vec<ScannedType>,
    /// Empty unless diagnostics were requested.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub omissions: Vec<Omission>,
}

impl ScannedFile {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.structs.is_empty() && self.types.is_empty()
    }

    #[must_use]
    pub fn find_struct(&self, name: &str) -> Option<&ScannedStruct> {
        self.structs.iter().find(|s| s.name == name)
    }

    /// All value entries declared under `name`, in extraction order.
    pub fn types_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a ScannedType> {
        self.types.iter().filter(move |t| t.name == name)
    }
}
