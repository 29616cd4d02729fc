use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, ConfigAction, OutputFormat};

use crate::core::config::EngineConfig;
use args::{AnalyzeArgs, DiagnoseArgs};
use commands::{AnalyzeCommand, Command, ConfigCommand, DiagnoseCommand};

/// Main entry point for the CLI
pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(EngineConfig::default_path);

    // Config commands still run when the file fails to load
    let config = match EngineConfig::load_or_default(&config_path).await {
        Ok(config) => Some(config),
        Err(e) if matches!(cli.command, Commands::Config { .. }) => {
            eprintln!("warning: {e}");
            None
        }
        Err(e) => return Err(e.into()),
    };

    init_logging(cli.verbose, config.as_ref());
    tracing::debug!(path = %config_path.display(), "configuration resolved");
    let config = config.unwrap_or_default();

    match cli.command {
        Commands::Analyze {
            message,
            input,
            source,
            line,
            project,
            format,
            apply_fix,
            yes,
        } => {
            let args = AnalyzeArgs {
                message,
                input,
                source,
                line,
                project,
                format,
                apply_fix,
                yes,
            };
            AnalyzeCommand::new(args, config).execute().await
        }

        Commands::Diagnose {
            paths,
            project,
            include,
            format,
        } => {
            let args = DiagnoseArgs {
                paths,
                project,
                include,
                format,
            };
            DiagnoseCommand::new(args, config).execute().await
        }

        Commands::Config { action } => ConfigCommand::new(action, config_path).execute().await,
    }
}

/// `RUST_LOG` wins; otherwise `--verbose`, then the configured default.
fn init_logging(verbose: bool, config: Option<&EngineConfig>) {
    let fallback = if verbose {
        "faultline=debug".to_string()
    } else {
        config
            .map(|c| c.logging.default_filter.clone())
            .unwrap_or_else(|| "faultline=info".to_string())
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
