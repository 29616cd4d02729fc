//! # faultline
//!
//! Rule-driven analysis of JavaScript and TypeScript runtime errors.
//!
//! faultline turns a raw error message and stack trace into a structured
//! diagnosis: a category, a severity, a root-cause hypothesis with evidence,
//! a ranked list of recovery suggestions (including single-line code fixes
//! it can apply to disk) and documentation links. It also scores a body of
//! source text for common quality and security smells, and keeps a
//! per-project history of analyzed errors.
//!
//! ## Core Features
//!
//! - **Pattern Registry**: Known error shapes with causes and curated solutions
//! - **Analysis Pipeline**: Parse, categorize, assess severity, explain, suggest
//! - **Quick Fixes**: Rule-based line rewrites with backups and stale-line checks
//! - **Diagnostics**: Heuristic health score with recommendations
//! - **History**: Pluggable async stores for analyses and error logs
//!
//! ## Quick Start
//!
//! ```rust
//! use faultline::{EngineConfig, ErrorInput, RecoveryEngine};
//!
//! #[tokio::main]
//! async fn main() {
//!     let engine = RecoveryEngine::in_memory(EngineConfig::default());
//!     let analysis = engine
//!         .analyze_error(&ErrorInput::from("Error: Cannot find module 'lodash'"), None)
//!         .await;
//!     assert_eq!(analysis.category.as_str(), "dependency");
//! }
//! ```
//!
//! ## Module Overview
//!
//! - [`core`] - Shared types, errors, configuration and file utilities
//! - [`patterns`] - Static registry of known error patterns
//! - [`parser`] - Error text and stack trace parsing
//! - [`analyzers`] - Categorization, severity, root cause and documentation
//! - [`quick_fix`] - Suggestion generation and code fix application
//! - [`diagnostics`] - Source health checks and reports
//! - [`store`] - Analysis cache and error log stores
//! - [`engine`] - Store-backed entry point tying the above together
//! - [`format`] - Markdown and JSON rendering
//! - [`cli`] - Command-line interface

/// Error analysis stages
pub mod analyzers;
/// Command-line interface and argument parsing
pub mod cli;
/// Core types, errors, configuration and utilities
pub mod core;
/// Source health checks
pub mod diagnostics;
/// Store-backed analysis engine
pub mod engine;
/// Output rendering
pub mod format;
/// Error text and stack trace parsing
pub mod parser;
/// Known error pattern registry
pub mod patterns;
/// Recovery suggestions and code fix application
pub mod quick_fix;
/// Analysis cache and error log storage
pub mod store;

// Re-export core functionality for easy access
pub use crate::core::*;
pub use analyzers::ErrorAnalyzer;
pub use engine::RecoveryEngine;
