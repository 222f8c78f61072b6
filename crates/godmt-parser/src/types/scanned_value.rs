use serde::{Deserialize, Serialize};

/// The value carried by a [`ScannedType`](super::ScannedType).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", content = "data", rename_all = "snake_case")]
pub enum ScannedValue {
    /// Literal text as written, quotes included for strings.
    Literal(String),
    /// Map composite entries, unique keys in source order.
    Map(Vec<MapEntry>),
    /// Array/slice composite elements in source order.
    List(Vec<ScannedValue>),
    /// Declared without initializer.
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapEntry {
    pub key: String,
    pub value: ScannedValue,
}

impl ScannedValue {
    /// One-line Go-like rendering: `{"a": 1, "b": 2}`, `{1, 2}`.
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::Literal(text) => text.clone(),
            Self::Map(entries) => {
                let inner: Vec<String> = entries
                    .iter()
                    .map(|entry| format!("{}: {}", entry.key, entry.value.summary()))
                    .collect();
                format!("{{{}}}", inner.join(", "))
            }
            Self::List(elements) => {
                let inner: Vec<String> = elements.iter().map(Self::summary).collect();
                format!("{{{}}}", inner.join(", "))
            }
            Self::None => String::new(),
        }
    }

    /// Number of entries for composites, `None` for scalars.
    #[must_use]
    pub fn entry_count(&self) -> Option<usize> {
        match self {
            Self::Map(entries) => Some(entries.len()),
            Self::List(elements) => Some(elements.len()),
            Self::Literal(_) | Self::None => None,
        }
    }
}

impl std::fmt::Display for ScannedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.summary())
    }
}
