use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Main CLI structure for faultline - rule-driven error analysis and recovery.
///
/// # Examples
///
/// ```bash
/// # Analyze an error message
/// faultline analyze --message "TypeError: Cannot read properties of undefined (reading 'name')"
///
/// # Analyze a trace piped from a log, with the offending source file
/// cat crash.log | faultline analyze --source src/profile.ts --line 12 --format markdown
///
/// # Score a project's health
/// faultline diagnose src/ --project web
/// ```
#[derive(Parser)]
#[command(name = "faultline")]
#[command(about = "Categorize errors, explain root causes and propose fixes")]
#[command(version)]
pub struct Cli {
    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (default: <config dir>/faultline/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Analyze one error and print the diagnosis
    Analyze {
        /// Error text; read from --input or stdin when omitted
        #[arg(short, long, conflicts_with = "input")]
        message: Option<String>,

        /// File holding the error text and stack trace
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Source file the error points into
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// 1-based line in the source file
        #[arg(short, long)]
        line: Option<u32>,

        /// Project to record the error under
        #[arg(short, long)]
        project: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "markdown")]
        format: OutputFormat,

        /// Apply the synthesized code fix, if any
        #[arg(long, requires = "source")]
        apply_fix: bool,

        /// Confirm --apply-fix without prompting
        #[arg(short, long)]
        yes: bool,
    },

    /// Run heuristic health checks over source files
    Diagnose {
        /// Files or directories to scan
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Project id for the report
        #[arg(short, long)]
        project: Option<String>,

        /// Glob for files to include; repeatable (default: JS/TS sources)
        #[arg(long)]
        include: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "markdown")]
        format: OutputFormat,
    },

    /// Manage configuration
    Config {
        /// Configuration action to perform
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration actions
#[derive(Debug, Clone, Subcommand)]
pub enum ConfigAction {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the effective configuration
    Show,
    /// Check the configuration file for invalid values
    Validate,
}

/// Output formats for reports
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// JSON format
    Json,
    /// Markdown format
    Markdown,
}

// Argument structures for command handlers
pub struct AnalyzeArgs {
    pub message: Option<String>,
    pub input: Option<PathBuf>,
    pub source: Option<PathBuf>,
    pub line: Option<u32>,
    pub project: Option<String>,
    pub format: OutputFormat,
    pub apply_fix: bool,
    pub yes: bool,
}

pub struct DiagnoseArgs {
    pub paths: Vec<PathBuf>,
    pub project: Option<String>,
    pub include: Vec<String>,
    pub format: OutputFormat,
}
