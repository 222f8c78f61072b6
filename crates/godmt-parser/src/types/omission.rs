use serde::{Deserialize, Serialize};

/// A unit dropped from the model because its shape is unsupported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Omission {
    /// Top-level declaration being extracted.
    pub declaration: String,
    /// The dropped field, initializer, or declaration.
    pub subject: String,
    #[serde(flatten)]
    pub reason: OmissionReason,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum OmissionReason {
    PointerToMap,
    PointerToArray,
    UnsupportedPointer { pointee: String },
    UnsupportedType { shape: String },
    RecursiveStruct { name: String },
    AliasCycle { name: String },
    UnresolvedIdentifier { name: String },
    IdentifierCycle { name: String },
    UnsupportedInitializer { shape: String },
    MissingInitializer,
    DuplicateKey { key: String },
    UnkeyedMapElement,
    UnsupportedDeclaration { shape: String },
}

impl std::fmt::Display for OmissionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PointerToMap => write!(f, "pointer to map is not supported"),
            Self::PointerToArray => write!(f, "pointer to array is not supported"),
            Self::UnsupportedPointer { pointee } => {
                write!(f, "pointer to {pointee} is not supported")
            }
            Self::UnsupportedType { shape } => write!(f, "unsupported type shape '{shape}'"),
            Self::RecursiveStruct { name } => {
                write!(f, "struct '{name}' contains itself by value")
            }
            Self::AliasCycle { name } => write!(f, "type '{name}' aliases itself"),
            Self::UnresolvedIdentifier { name } => write!(f, "identifier '{name}' is not declared"),
            Self::IdentifierCycle { name } => write!(f, "identifier '{name}' refers to itself"),
            Self::UnsupportedInitializer { shape } => {
                write!(f, "unsupported initializer shape '{shape}'")
            }
            Self::MissingInitializer => write!(f, "no initializer and no declared type"),
            Self::DuplicateKey { key } => write!(f, "duplicate map key {key}"),
            Self::UnkeyedMapElement => write!(f, "map literal element without key"),
            Self::UnsupportedDeclaration { shape } => {
                write!(f, "declaration of shape '{shape}' is not extracted")
            }
        }
    }
}

impl std::fmt::Display for Omission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}: {}", self.declaration, self.subject, self.reason)
    }
}
