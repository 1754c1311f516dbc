//! # deck-config
//!
//! Layered configuration loading for taskdeck using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TASKDECK_*` prefix, `__` as separator)
//! 2. Project-level `.taskdeck/config.toml`
//! 3. User-level `~/.config/taskdeck/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TASKDECK_API__BASE_URL` -> `api.base_url`,
//! `TASKDECK_GENERAL__PAGE_SIZE` -> `general.page_size`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use deck_config::DeckConfig;
//!
//! let config = DeckConfig::load_with_dotenv().expect("config");
//! println!("API: {}", config.api.base_url());
//! ```

mod api;
mod error;
mod general;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Largest page size the backend accepts.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Directory holding project-local configuration.
pub const PROJECT_DIR: &str = ".taskdeck";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DeckConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl DeckConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain rooted at the current directory.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_at(Path::new("."))
    }

    /// Build the figment provider chain with `project_root` as the directory
    /// holding `.taskdeck/config.toml`.
    #[must_use]
    pub fn figment_at(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = project_root.join(PROJECT_DIR).join("config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("TASKDECK_").split("__"))
    }

    /// Reject values the client cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.api.is_configured() {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".into(),
                reason: format!("'{}' is not an http(s) URL", self.api.base_url),
            });
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_secs".into(),
                reason: "must be greater than 0".into(),
            });
        }
        if !(1..=MAX_PAGE_SIZE).contains(&self.general.page_size) {
            return Err(ConfigError::InvalidValue {
                field: "general.page_size".into(),
                reason: format!("must be between 1 and {MAX_PAGE_SIZE}"),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("taskdeck").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = DeckConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.general.page_size, 10);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let mut config = DeckConfig::default();
        config.general.page_size = 0;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "general.page_size"));
    }

    #[test]
    fn oversized_page_is_rejected() {
        let mut config = DeckConfig::default();
        config.general.page_size = MAX_PAGE_SIZE + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut config = DeckConfig::default();
        config.api.timeout_secs = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("api.timeout_secs"));
    }
}
