//! # godmt-config
//!
//! Layered configuration loading for godmt using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`GODMT_*` prefix, `__` as separator)
//! 2. Project-level `.godmt/config.toml`
//! 3. User-level `~/.config/godmt/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `GODMT_SCAN__INCLUDE_TESTS` -> `scan.include_tests`,
//! `GODMT_OUTPUT__ROOT` -> `output.root`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use godmt_config::GodmtConfig;
//!
//! let config = GodmtConfig::load_with_dotenv().expect("config");
//! println!("results go to {}", config.output.root.display());
//! ```

mod error;
mod output;
mod scan;

pub use error::ConfigError;
pub use output::OutputConfig;
pub use scan::ScanConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GodmtConfig {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl GodmtConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    /// Returns `ConfigError` when a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is fine.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate from an explicit figment.
    ///
    /// # Errors
    /// Returns `ConfigError` when extraction or validation fails.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.output.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".godmt/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("GODMT_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("godmt").join("config.toml"))
    }
}
