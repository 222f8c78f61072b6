//! Result writer settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_root() -> PathBuf {
    PathBuf::from("result")
}

const fn default_pretty() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Results root; one JSON file per scanned source lands under it.
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Pretty-print result files.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl OutputConfig {
    /// Reject settings the result writer cannot work with.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` when `root` is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.root.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "output.root".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            pretty: default_pretty(),
        }
    }
}
