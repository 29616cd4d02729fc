//! Configuration for the analysis engine
//!
//! - Section structs and the `Has*` access traits live in [`traits`]
//! - [`EngineConfig`] groups every section and handles TOML load/save/validate
pub mod traits;
pub mod unified;

pub use traits::{
    CacheConfig, DiagnosticsConfig, FixConfig, HasCacheConfig, HasDiagnosticsConfig,
    HasFixConfig, LoggingConfig,
};
pub use unified::EngineConfig;
