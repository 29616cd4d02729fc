//! Configuration sections and the traits components use to reach them.

/// Trait for components that need analysis cache configuration
pub trait HasCacheConfig {
    fn cache_config(&self) -> &CacheConfig;
}

/// Trait for components that need diagnostics scoring configuration
pub trait HasDiagnosticsConfig {
    fn diagnostics_config(&self) -> &DiagnosticsConfig;
}

/// Trait for components that apply code fixes
pub trait HasFixConfig {
    fn fix_config(&self) -> &FixConfig;
}

/// In-memory analysis cache limits
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Oldest analyses are evicted past this count
    pub max_analyses: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { max_analyses: 1000 }
    }
}

/// Health score penalties for the batch diagnostics runner
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    pub secret_penalty: u8,
    pub warning_penalty: u8,
    /// More errors than this triggers the comprehensive review recommendation
    pub comprehensive_review_threshold: usize,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            secret_penalty: 10,
            warning_penalty: 2,
            comprehensive_review_threshold: 5,
        }
    }
}

/// Code fix application settings
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FixConfig {
    pub create_backups: bool,
    pub max_file_size_bytes: u64,
}

impl Default for FixConfig {
    fn default() -> Self {
        Self {
            create_backups: true,
            max_file_size_bytes: 10 * 1024 * 1024, // 10MB
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub default_filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_filter: "faultline=info".to_string(),
        }
    }
}
