/// Domain-specific error types for faultline using thiserror
///
/// Analysis itself never fails: unknown input degrades to the `unknown`
/// category with low confidence. These types cover the collaborators around
/// it: the stores, configuration files and fix application.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for faultline operations
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Store operation failed")]
    Store(#[from] StoreError),

    #[error("Configuration error")]
    Config(#[from] ConfigError),

    #[error("Fix application failed")]
    Fix(#[from] FixError),
}

/// Analysis cache and error log store errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Error log not found: {id}")]
    LogNotFound { id: String },

    #[error("Store unavailable during {operation}: {reason}")]
    Unavailable { operation: String, reason: String },

    #[error("Store backend failed during {operation}")]
    Backend {
        operation: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write configuration file {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("TOML parsing failed in {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("TOML serialization failed")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid configuration value for {field}: {value} - {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// Code fix application errors
#[derive(Error, Debug)]
pub enum FixError {
    #[error("Failed to read file {path}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write file {path}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("File too large: {path} is {size} bytes, limit {limit}")]
    FileTooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("Line {line} out of range for {path} ({total} lines)")]
    LineOutOfRange { path: PathBuf, line: u32, total: usize },

    #[error("Line {line} of {path} no longer matches the analyzed code")]
    StaleLine { path: PathBuf, line: u32 },
}

/// Convenience type alias for Results with EngineError
pub type EngineResult<T> = Result<T, EngineError>;
