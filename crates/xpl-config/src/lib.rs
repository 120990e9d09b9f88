//! # xpl-config
//!
//! Connection configuration for xpload, discovered by name and loaded with figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`XPLOAD_DB_*` prefix)
//! 2. The resolved config file (JSON, or TOML when it ends in `.toml`)
//! 3. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `XPLOAD_DB_HOST` -> `host`, `XPLOAD_DB_TIMEOUT_SECS` -> `timeout_secs`, etc.
//! Discovery itself reads `XPLOAD_DIR` and `XPLOAD_CONFIG_NAME` (see [`ConfigLocator`]).
//!
//! # Usage
//!
//! ```no_run
//! use xpl_config::DbConfig;
//!
//! // `--config prod` -> prod.json from the search paths:
//! let config = DbConfig::resolve_with_dotenv("prod").expect("config");
//! println!("talking to {}", config.url());
//! ```

mod db;
mod error;
mod locate;

pub use db::DbConfig;
pub use error::ConfigError;
pub use locate::{ConfigLocator, DEFAULT_CONFIG_NAME, SEARCH_DIRS};

use figment::{
    Figment,
    providers::{Env, Format, Json, Serialized, Toml},
};
use std::path::Path;

impl DbConfig {
    /// Resolve `name` through the environment-driven locator and load it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if no file is found, it cannot be parsed, or
    /// the merged values fail validation.
    pub fn resolve(name: &str) -> Result<Self, ConfigError> {
        Self::resolve_with(&ConfigLocator::from_env(), name)
    }

    /// Load `.env` from the current directory, then [`resolve`](Self::resolve).
    ///
    /// This is the entry point used by the CLI.
    ///
    /// # Errors
    ///
    /// See [`resolve`](Self::resolve).
    pub fn resolve_with_dotenv(name: &str) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::resolve(name)
    }

    /// Resolve `name` with an explicit locator and load it.
    ///
    /// # Errors
    ///
    /// See [`resolve`](Self::resolve).
    pub fn resolve_with(locator: &ConfigLocator, name: &str) -> Result<Self, ConfigError> {
        let path = locator.locate(name)?;
        Self::load(&path)
    }

    /// Load and validate the config at `path`, layered with defaults and env.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] on parse or shape errors (including
    /// unknown keys) and [`ConfigError::InvalidValue`] on validation errors.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(path).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain for the config file at `path`.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment(path: &Path) -> Figment {
        let figment = Figment::from(Serialized::defaults(Self::default()));

        let figment = if locate::is_toml(path) {
            figment.merge(Toml::file(path))
        } else {
            figment.merge(Json::file(path))
        };

        figment.merge(Env::prefixed("XPLOAD_DB_"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn figment_without_file_yields_defaults() {
        let config: DbConfig = DbConfig::figment(Path::new("/nonexistent/xpload.json"))
            .extract()
            .expect("should extract defaults");
        assert_eq!(config, DbConfig::default());
    }

    #[test]
    fn load_without_file_fails_validation() {
        let err = DbConfig::load(Path::new("/nonexistent/xpload.json")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "host"));
    }
}
