//! Source walk settings.

use serde::{Deserialize, Serialize};

fn default_exclude() -> Vec<String> {
    vec!["vendor/".to_string()]
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScanConfig {
    /// Also extract `*_test.go` files and `testdata/` trees.
    #[serde(default)]
    pub include_tests: bool,

    /// Gitignore-style globs excluded from the walk.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// Record omitted declarations and fields in each result.
    #[serde(default)]
    pub diagnostics: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            include_tests: false,
            exclude: default_exclude(),
            diagnostics: false,
        }
    }
}
