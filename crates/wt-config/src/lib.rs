//! # wt-config
//!
//! Layered configuration loading for webtypes using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`WEBTYPES_*` prefix, `__` as separator)
//! 2. Project-level `.webtypes/config.toml`
//! 3. User-level `~/.config/webtypes/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `WEBTYPES_SCAN__LOCALE` -> `scan.locale`,
//! `WEBTYPES_LIBRARY__VERSION` -> `library.version`, etc.
//!
//! ```no_run
//! use wt_config::WebTypesConfig;
//!
//! let config = WebTypesConfig::load_with_dotenv().expect("config");
//! println!("scanning {}", config.scan.source_dir);
//! ```

mod error;
mod library;
mod output;
mod scan;

pub use error::ConfigError;
pub use library::LibraryConfig;
pub use output::OutputConfig;
pub use scan::ScanConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WebTypesConfig {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub library: LibraryConfig,
}

impl WebTypesConfig {
    /// Load and validate configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    /// Returns `ConfigError::Figment` if a source cannot be read or has the
    /// wrong shape, or `ConfigError::InvalidValue` if [`Self::validate`] fails.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is not an error.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".webtypes/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("WEBTYPES_").split("__"))
    }

    /// Reject values that would produce unusable output.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("scan.suffix", &self.scan.suffix),
            ("scan.locale", &self.scan.locale),
            ("library.tag_prefix", &self.library.tag_prefix),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("webtypes").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = WebTypesConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.output.dir, ".");
        assert_eq!(config.library.version, "2.44.7");
    }

    #[test]
    fn empty_suffix_is_rejected() {
        let mut config = WebTypesConfig::default();
        config.scan.suffix = String::new();
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "scan.suffix")
        );
    }

    #[test]
    fn blank_tag_prefix_is_rejected() {
        let mut config = WebTypesConfig::default();
        config.library.tag_prefix = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
