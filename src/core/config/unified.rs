//! Engine configuration
//!
//! Groups every configuration section into one TOML document. Missing
//! sections fall back to their defaults so partial files stay valid.
use super::traits::*;
use crate::core::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Analysis cache limits
    pub cache: CacheConfig,

    /// Health score penalties and recommendation thresholds
    pub diagnostics: DiagnosticsConfig,

    /// Code fix application settings
    pub fixes: FixConfig,

    /// Log filter defaults for the CLI
    pub logging: LoggingConfig,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Small cache and no backups, for tests and CI
    pub fn testing() -> Self {
        Self {
            cache: CacheConfig { max_analyses: 64 },
            fixes: FixConfig {
                create_backups: false,
                ..FixConfig::default()
            },
            logging: LoggingConfig {
                default_filter: "faultline=debug".to_string(),
            },
            ..Self::default()
        }
    }

    /// `<config dir>/faultline/config.toml`, falling back to the working directory
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("faultline")
            .join("config.toml")
    }

    /// Load configuration from file, falling back to defaults if file doesn't exist
    pub async fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path).await
        } else {
            Ok(Self::new())
        }
    }

    /// Load configuration from TOML file
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to TOML file
    pub async fn save(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(write_err)?;
        }

        let content = toml::to_string_pretty(self)?;
        tokio::fs::write(path, content).await.map_err(write_err)?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache.max_analyses == 0 {
            return Err(invalid(
                "cache.max_analyses",
                self.cache.max_analyses,
                "must be greater than 0",
            ));
        }

        if self.diagnostics.secret_penalty > 100 {
            return Err(invalid(
                "diagnostics.secret_penalty",
                self.diagnostics.secret_penalty,
                "cannot exceed the 100 point health scale",
            ));
        }

        if self.diagnostics.warning_penalty > 100 {
            return Err(invalid(
                "diagnostics.warning_penalty",
                self.diagnostics.warning_penalty,
                "cannot exceed the 100 point health scale",
            ));
        }

        if self.fixes.max_file_size_bytes == 0 {
            return Err(invalid(
                "fixes.max_file_size_bytes",
                self.fixes.max_file_size_bytes,
                "must be greater than 0",
            ));
        }

        if self.logging.default_filter.trim().is_empty() {
            return Err(invalid(
                "logging.default_filter",
                "",
                "must not be empty",
            ));
        }

        Ok(())
    }
}

fn invalid(field: &str, value: impl ToString, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

impl HasCacheConfig for EngineConfig {
    fn cache_config(&self) -> &CacheConfig {
        &self.cache
    }
}

impl HasDiagnosticsConfig for EngineConfig {
    fn diagnostics_config(&self) -> &DiagnosticsConfig {
        &self.diagnostics
    }
}

impl HasFixConfig for EngineConfig {
    fn fix_config(&self) -> &FixConfig {
        &self.fixes
    }
}
