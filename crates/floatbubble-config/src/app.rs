//! Application configuration file

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use floatbubble_core::OverlayConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ConfigError, Result};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "FLOATBUBBLE_CONFIG";

/// Environment variable overriding the log filter
pub const LOG_ENV: &str = "FLOATBUBBLE_LOG";

/// File name looked up in the platform config directory
pub const CONFIG_FILE_NAME: &str = "floatbubble.toml";

/// Log output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `info` or `floatbubble_core=trace`
    pub level: String,
    /// Log file; hosts that own the terminal need one
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

/// Top-level configuration file
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub overlay: OverlayConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Parse and validate TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(content)?;
        config.overlay.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Write the config as TOML, creating parent directories
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let content = self.to_toml_string()?;
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(path, content).map_err(io_err)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Platform config location, e.g. `~/.config/floatbubble/floatbubble.toml`
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "floatbubble", "floatbubble")
            .ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load from the explicit path, then `FLOATBUBBLE_CONFIG`, then the platform default.
    ///
    /// An explicit or environment path must exist. A missing default file yields the
    /// built-in defaults. `FLOATBUBBLE_LOG` is applied on top in every case.
    pub fn discover(explicit: Option<PathBuf>) -> Result<Self> {
        let env_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let log_override = std::env::var(LOG_ENV).ok();

        let mut config = Self::discover_from(explicit.or(env_path), Self::default_path())?;
        if let Some(level) = log_override {
            config.override_log_level(level);
        }
        Ok(config)
    }

    fn discover_from(chosen: Option<PathBuf>, fallback: Result<PathBuf>) -> Result<Self> {
        if let Some(path) = chosen {
            return Self::load_from_path(&path);
        }

        let path = fallback?;
        if path.exists() {
            Self::load_from_path(&path)
        } else {
            info!(
                "No configuration at {}, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Replace the log filter, ignoring blank values
    pub fn override_log_level(&mut self, level: impl Into<String>) {
        let level = level.into();
        if !level.trim().is_empty() {
            self.logging.level = level;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use floatbubble_core::{Easing, OverlayError, OverlayOption};
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
[overlay.bubble]
diameter = 48.0
expanded_width = 280.0

[overlay.transition]
duration_ms = 250
easing = "ease_out_cubic"

[overlay.motion]
distance_max = 60.0

[logging]
level = "debug"
"#;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = AppConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.overlay.bubble.diameter, 48.0);
        assert_eq!(config.overlay.bubble.expanded_width, 280.0);
        assert_eq!(config.overlay.bubble.expanded_height, 224.0);
        assert_eq!(config.overlay.transition.duration_ms, 250);
        assert_eq!(config.overlay.transition.easing, Easing::EaseOutCubic);
        assert_eq!(config.overlay.motion.distance_max, 60.0);
        assert_eq!(config.overlay.motion.cycle_count_ratio, 60);
        assert_eq!(config.overlay.options, vec![OverlayOption::Draggable]);
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(AppConfig::from_toml_str("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_options_list() {
        let config = AppConfig::from_toml_str("[overlay]\noptions = []\n").unwrap();
        assert!(config.overlay.options.is_empty());

        let config = AppConfig::from_toml_str("[overlay]\noptions = [\"draggable\"]\n").unwrap();
        assert_eq!(config.overlay.options, vec![OverlayOption::Draggable]);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = AppConfig::from_toml_str("[overlay.bubble]\ndiameter = 0.0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid(OverlayError::InvalidDiameter(_))
        ));

        let err = AppConfig::from_toml_str("[overlay.bubble]\ndiameter = \"big\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        let mut config = AppConfig::default();
        config.overlay.bubble.diameter = 40.0;
        config.logging.file = Some(PathBuf::from("/tmp/bubble.log"));
        config.save_to_path(&path).unwrap();

        assert_eq!(AppConfig::load_from_path(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = AppConfig::discover_from(Some(missing), AppConfig::default_path()).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_missing_default_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let fallback = Ok(dir.path().join(CONFIG_FILE_NAME));
        assert_eq!(
            AppConfig::discover_from(None, fallback).unwrap(),
            AppConfig::default()
        );

        let err = AppConfig::discover_from(None, Err(ConfigError::NoConfigDir)).unwrap_err();
        assert!(matches!(err, ConfigError::NoConfigDir));
    }

    #[test]
    fn test_default_file_is_loaded_when_present() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, SAMPLE).unwrap();

        let config = AppConfig::discover_from(None, Ok(path)).unwrap();
        assert_eq!(config.overlay.bubble.diameter, 48.0);
    }

    #[test]
    fn test_log_override_ignores_blank() {
        let mut config = AppConfig::default();
        config.override_log_level("  ");
        assert_eq!(config.logging.level, "info");
        config.override_log_level("trace");
        assert_eq!(config.logging.level, "trace");
    }
}
