//! Runtime configuration for an inventory session.
//!
//! # Responsibility
//! - Locate the data directory and collection names.
//! - Carry logging settings to `init_logging`.
//!
//! # Invariants
//! - `data_dir` is never empty.
//! - `log_dir`, when set, is absolute.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

use crate::logging::default_log_level;

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_HOTELS_COLLECTION: &str = "hotels";
pub const DEFAULT_ROOMS_COLLECTION: &str = "rooms";

pub const ENV_DATA_DIR: &str = "HOTELINV_DATA_DIR";
pub const ENV_LOG_LEVEL: &str = "HOTELINV_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "HOTELINV_LOG_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyDataDir,
    UnsupportedLogLevel(String),
    RelativeLogDir(PathBuf),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDataDir => write!(f, "data_dir cannot be empty"),
            Self::UnsupportedLogLevel(level) => write!(
                f,
                "unsupported log level `{level}`; expected trace|debug|info|warn|error"
            ),
            Self::RelativeLogDir(path) => write!(
                f,
                "log_dir must be an absolute path, got `{}`",
                path.display()
            ),
        }
    }
}

impl Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryConfig {
    pub data_dir: PathBuf,
    pub hotels_collection: String,
    pub rooms_collection: String,
    pub log_level: String,
    /// Rolling log directory. `None` leaves logging uninitialized.
    pub log_dir: Option<PathBuf>,
}

impl InventoryConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            hotels_collection: DEFAULT_HOTELS_COLLECTION.to_string(),
            rooms_collection: DEFAULT_ROOMS_COLLECTION.to_string(),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }

    /// Builds a config from `HOTELINV_*` environment variables.
    ///
    /// Unset variables fall back to `./data`, the build-mode log level and
    /// no log directory.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let data_dir = non_blank(ENV_DATA_DIR).unwrap_or_else(|| DEFAULT_DATA_DIR.to_string());
        let mut config = Self::new(data_dir);
        if let Some(level) = non_blank(ENV_LOG_LEVEL) {
            config.log_level = level;
        }
        config.log_dir = non_blank(ENV_LOG_DIR).map(PathBuf::from);
        config
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    pub fn with_log_dir(mut self, log_dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(log_dir.into());
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyDataDir);
        }
        normalize_level(&self.log_level)?;
        if let Some(log_dir) = &self.log_dir {
            normalize_log_dir(log_dir)?;
        }
        Ok(())
    }
}

/// Maps a user-supplied level onto the canonical level names.
pub fn normalize_level(level: &str) -> Result<&'static str, ConfigError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(ConfigError::UnsupportedLogLevel(other.to_string())),
    }
}

pub(crate) fn normalize_log_dir(log_dir: &Path) -> Result<PathBuf, ConfigError> {
    if !log_dir.is_absolute() {
        return Err(ConfigError::RelativeLogDir(log_dir.to_path_buf()));
    }
    Ok(log_dir.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::{
        normalize_level, ConfigError, InventoryConfig, ENV_DATA_DIR, ENV_LOG_DIR, ENV_LOG_LEVEL,
    };
    use std::collections::HashMap;
    use std::path::PathBuf;

    #[test]
    fn normalize_level_accepts_known_values() {
        assert_eq!(normalize_level("INFO").unwrap(), "info");
        assert_eq!(normalize_level(" warning ").unwrap(), "warn");
        assert!(matches!(
            normalize_level("loud"),
            Err(ConfigError::UnsupportedLogLevel(_))
        ));
    }

    #[test]
    fn from_lookup_uses_defaults_for_missing_or_blank_values() {
        let env: HashMap<&str, &str> = HashMap::from([(ENV_LOG_LEVEL, "  ")]);
        let config = InventoryConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.hotels_collection, "hotels");
        assert_eq!(config.rooms_collection, "rooms");
        assert_eq!(config.log_dir, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn from_lookup_reads_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_DATA_DIR, "/srv/hotels"),
            (ENV_LOG_LEVEL, "warn"),
            (ENV_LOG_DIR, "/var/log/hotelinv"),
        ]);
        let config = InventoryConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.data_dir, PathBuf::from("/srv/hotels"));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/hotelinv")));
    }

    #[test]
    fn validate_rejects_relative_log_dir_and_empty_data_dir() {
        let config = InventoryConfig::new("data").with_log_dir("logs/dev");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::RelativeLogDir(_))
        ));

        assert_eq!(
            InventoryConfig::new("").validate(),
            Err(ConfigError::EmptyDataDir)
        );
    }
}
