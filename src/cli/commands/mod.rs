use anyhow::Result;
use async_trait::async_trait;

pub mod analyze;
pub mod config;
pub mod diagnose;

pub use analyze::AnalyzeCommand;
pub use config::ConfigCommand;
pub use diagnose::DiagnoseCommand;

/// Trait for CLI command implementations
#[async_trait]
pub trait Command {
    /// Execute the command with the given arguments
    async fn execute(&self) -> Result<()>;
}

/// Common utilities for command implementations
pub mod utils {
    use crate::cli::args::OutputFormat;
    use crate::core::types::{DiagnosticReport, ErrorAnalysis};
    use crate::format;
    use anyhow::{Context, Result};
    use std::io::{self, Read};

    /// Read all of stdin
    pub fn read_stdin() -> Result<String> {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        Ok(buffer)
    }

    pub fn render_analysis(analysis: &ErrorAnalysis, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => format::to_json_pretty(analysis),
            OutputFormat::Markdown => Ok(format::render_analysis(analysis)),
        }
    }

    pub fn render_report(report: &DiagnosticReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => format::to_json_pretty(report),
            OutputFormat::Markdown => Ok(format::render_report(report)),
        }
    }
}
