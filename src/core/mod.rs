pub mod config;
pub mod constants;
pub mod errors;
pub mod types;
pub mod utils;

pub use config::EngineConfig;
pub use errors::{ConfigError, EngineError, EngineResult, FixError, StoreError};
pub use types::*;
