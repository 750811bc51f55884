//! src/config.rs
//! ============================================================================
//! # Config: Application Configuration Loader and Saver
//!
//! Settings live as TOML at the platform config path resolved by the
//! [`directories`](https://docs.rs/directories) crate. A missing default
//! config file is created with defaults on first run; a missing file given
//! explicitly with `--config` is an error. Command-line flags are applied on
//! top with [`Config::apply_cli`].
//!
//! ## Example
//! ```rust,ignore
//! let mut config = Config::load(None).await?;
//! config.apply_cli(&cli);
//! ```

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tokio::fs as TokioFs;
use tracing::info;

use crate::{cli::Cli, error::ConfigError};

pub const DEFAULT_SOURCE: &str = "files.json";
pub const DEFAULT_BASE_URL: &str = "https://files.aspenini.com/";

/// Logging settings; see [`crate::logging::LoggerConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// `EnvFilter` directive.
    pub level: String,

    /// Log directory; defaults to the platform data dir.
    pub dir: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: None,
        }
    }
}

/// Main configuration struct for the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Manifest location, URL or path.
    pub source: String,

    /// Prefix of copied URLs.
    pub base_url: String,

    pub download_dir: PathBuf,

    /// How long toasts stay up.
    #[serde(with = "humantime_serde")]
    pub toast_duration: Duration,

    pub log: LogSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            download_dir: PathBuf::from("."),
            toast_duration: Duration::from_secs(2),
            log: LogSettings::default(),
        }
    }
}

impl Config {
    /// Load from `path`, or from the default location when `None`.
    pub async fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                if !TokioFs::try_exists(path).await.unwrap_or(false) {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                Self::read(path).await
            }
            None => {
                let path = Self::config_path()?;
                if TokioFs::try_exists(&path).await.unwrap_or(false) {
                    Self::read(&path).await
                } else {
                    info!(
                        "No config file found at {}, using default configuration. Creating it now.",
                        path.display()
                    );
                    let config = Self::default();
                    config.save_to(&path).await?;
                    Ok(config)
                }
            }
        }
    }

    async fn read(path: &Path) -> Result<Self, ConfigError> {
        info!("Loading config from {}", path.display());

        let text = TokioFs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        Self::from_toml(&text)
    }

    /// Parse and validate TOML text. Missing keys take their defaults.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves config as TOML, creating parent directories.
    pub async fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        info!("Saving config to {}", path.display());

        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            TokioFs::create_dir_all(parent).await.map_err(io_err)?;
        }

        let toml_str = toml::to_string_pretty(self)?;
        TokioFs::write(path, toml_str).await.map_err(io_err)?;

        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source.trim().is_empty() {
            return Err(ConfigError::invalid_value("source", "must not be empty"));
        }
        if self.toast_duration.is_zero() {
            return Err(ConfigError::invalid_value(
                "toast_duration",
                "must be greater than 0",
            ));
        }
        Ok(())
    }

    /// Flags win over file values.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(source) = &cli.source {
            self.source.clone_from(source);
        }
        if let Some(base_url) = &cli.base_url {
            self.base_url.clone_from(base_url);
        }
        if let Some(dir) = &cli.download_dir {
            self.download_dir.clone_from(dir);
        }
        if let Some(level) = &cli.log_level {
            self.log.level.clone_from(level);
        }
    }

    fn project_dirs() -> Result<ProjectDirs, ConfigError> {
        ProjectDirs::from("com", "aspenini", "fileshelf").ok_or(ConfigError::NoConfigDir)
    }

    /// Canonical config file path.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::project_dirs()?.config_dir().join("config.toml"))
    }

    /// Default log directory when none is configured.
    pub fn default_log_dir() -> Result<PathBuf, ConfigError> {
        Ok(Self::project_dirs()?.data_local_dir().join("logs"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = Config::from_toml(
            r#"
            source = "https://example.org/files.json"
            toast_duration = "3s 500ms"

            [log]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.source, "https://example.org/files.json");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.toast_duration, Duration::from_millis(3500));
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.log.dir, None);
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(matches!(
            Config::from_toml("source = \"  \""),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            Config::from_toml("toast_duration = \"0s\""),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            Config::from_toml("source = 3"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn cli_overrides_file_values() {
        let mut config = Config::default();
        let cli = Cli {
            base_url: Some("https://mirror.example/".into()),
            log_level: Some("trace".into()),
            ..Cli::default()
        };

        config.apply_cli(&cli);
        assert_eq!(config.base_url, "https://mirror.example/");
        assert_eq!(config.log.level, "trace");
        assert_eq!(config.source, DEFAULT_SOURCE);
    }

    #[tokio::test]
    async fn save_then_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/config.toml");

        let mut config = Config::default();
        config.download_dir = PathBuf::from("/tmp/shelf");
        config.save_to(&path).await.unwrap();

        assert_eq!(Config::load(Some(&path)).await.unwrap(), config);
    }

    #[tokio::test]
    async fn explicit_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            Config::load(Some(&missing)).await,
            Err(ConfigError::NotFound(_))
        ));
    }
}
