//! Output rendering for analyses and diagnostics reports
pub mod markdown;

use anyhow::{Context, Result};
use serde::Serialize;

pub use markdown::{render_analysis, render_report};

/// Serialize to JSON with pretty formatting
pub fn to_json_pretty<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize to JSON")
}
