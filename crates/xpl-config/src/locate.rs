//! Config file discovery.
//!
//! A config name that looks like a path (contains `.` or `/`) is used as is.
//! Anything else names `{name}.json`, searched for in `$XPLOAD_DIR/.`,
//! `$XPLOAD_DIR/config` (when set), then `.` and `config`.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Config name used when neither `--config` nor `XPLOAD_CONFIG_NAME` is set.
pub const DEFAULT_CONFIG_NAME: &str = "test";

/// Directories searched for a named config, relative to the base directory.
pub const SEARCH_DIRS: [&str; 2] = [".", "config"];

/// Resolves a config name to an existing file.
#[derive(Debug, Clone)]
pub struct ConfigLocator {
    base_dir: Option<PathBuf>,
    default_name: String,
}

impl Default for ConfigLocator {
    fn default() -> Self {
        Self::new(None, DEFAULT_CONFIG_NAME)
    }
}

impl ConfigLocator {
    #[must_use]
    pub fn new(base_dir: Option<PathBuf>, default_name: impl Into<String>) -> Self {
        Self {
            base_dir,
            default_name: default_name.into(),
        }
    }

    /// Build a locator from `XPLOAD_DIR` and `XPLOAD_CONFIG_NAME`.
    #[must_use]
    pub fn from_env() -> Self {
        let base_dir = std::env::var("XPLOAD_DIR")
            .ok()
            .filter(|dir| !dir.is_empty())
            .map(|dir| PathBuf::from(dir.trim_end_matches('/')));
        let default_name = std::env::var("XPLOAD_CONFIG_NAME")
            .ok()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_CONFIG_NAME.to_string());
        Self::new(base_dir, default_name)
    }

    /// Directories searched for a named config, in priority order.
    #[must_use]
    pub fn search_paths(&self) -> Vec<PathBuf> {
        let local = SEARCH_DIRS.iter().map(PathBuf::from);
        match &self.base_dir {
            Some(base) => SEARCH_DIRS
                .iter()
                .map(|dir| base.join(dir))
                .chain(local)
                .collect(),
            None => local.collect(),
        }
    }

    /// Resolve `name` (empty for the default) to the config file to load.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if no candidate file exists.
    pub fn locate(&self, name: &str) -> Result<PathBuf, ConfigError> {
        if looks_like_path(name) {
            let path = PathBuf::from(name);
            if path.is_file() {
                return Ok(path);
            }
            return Err(ConfigError::NotFound {
                file: name.to_string(),
                searched: Vec::new(),
            });
        }

        let stem = if name.is_empty() {
            self.default_name.as_str()
        } else {
            name
        };
        let file = format!("{stem}.json");

        let searched = self.search_paths();
        for dir in &searched {
            let candidate = dir.join(&file);
            if candidate.is_file() {
                tracing::debug!(path = %candidate.display(), "resolved config file");
                return Ok(candidate);
            }
        }

        Err(ConfigError::NotFound { file, searched })
    }
}

fn looks_like_path(name: &str) -> bool {
    name.contains('.') || name.contains('/')
}

/// Whether `path` should be parsed as TOML rather than JSON.
pub(crate) fn is_toml(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_paths_without_base_dir() {
        let locator = ConfigLocator::default();
        assert_eq!(
            locator.search_paths(),
            vec![PathBuf::from("."), PathBuf::from("config")]
        );
    }

    #[test]
    fn search_paths_prefer_base_dir() {
        let locator = ConfigLocator::new(Some(PathBuf::from("/opt/xpload")), "test");
        assert_eq!(
            locator.search_paths(),
            vec![
                PathBuf::from("/opt/xpload/."),
                PathBuf::from("/opt/xpload/config"),
                PathBuf::from("."),
                PathBuf::from("config"),
            ]
        );
    }

    #[test]
    fn path_detection() {
        assert!(looks_like_path("prod.json"));
        assert!(looks_like_path("configs/prod"));
        assert!(!looks_like_path("prod"));
        assert!(!looks_like_path(""));
    }

    #[test]
    fn toml_detection() {
        assert!(is_toml(Path::new("db.toml")));
        assert!(is_toml(Path::new("db.TOML")));
        assert!(!is_toml(Path::new("db.json")));
        assert!(!is_toml(Path::new("db")));
    }

    #[test]
    fn missing_explicit_path_is_not_found() {
        let err = ConfigLocator::default()
            .locate("/nonexistent/xpload/prod.json")
            .unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { ref searched, .. } if searched.is_empty()));
    }
}
