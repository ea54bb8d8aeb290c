//! # votigo-config
//!
//! Layered configuration loading for Votigo using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`VOTIGO_*` prefix, `__` as separator)
//! 2. Project-level `./votigo.toml`
//! 3. User-level `~/.config/votigo/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `VOTIGO_DATABASE__PATH` -> `database.path`,
//! `VOTIGO_ADMIN__PASSWORD` -> `admin.password`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use votigo_config::VotigoConfig;
//!
//! let config = VotigoConfig::load_with_dotenv().expect("config");
//! println!("database at {}", config.database.path);
//! ```

mod admin;
mod database;
mod error;
mod general;

pub use admin::AdminConfig;
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, relative to the working directory.
pub const LOCAL_CONFIG_FILE: &str = "votigo.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct VotigoConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub admin: AdminConfig,
}

impl VotigoConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading a `.env` file from the current
    /// directory, if one exists.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer providers on top.
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
        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("VOTIGO_").split("__"))
    }

    /// Reject values that would only fail later, far from their source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.path".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.general.default_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.default_limit".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("votigo").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use votigo_core::enums::ShowResults;

    #[test]
    fn default_config_loads() {
        let config = VotigoConfig::default();
        assert_eq!(config.database.path, "votigo.db");
        assert!(!config.database.is_in_memory());
        assert!(!config.admin.is_configured());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: VotigoConfig = VotigoConfig::figment().extract()?;
            assert_eq!(config.general.default_limit, 50);
            assert_eq!(config.general.default_show_results, ShowResults::AfterClose);
            Ok(())
        });
    }

    #[test]
    fn validate_rejects_empty_path() {
        let mut config = VotigoConfig::default();
        config.database.path = "  ".into();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("database.path"));
    }
}
