use anyhow::{bail, Result};
use async_trait::async_trait;
use colored::*;

use super::utils::render_report;
use crate::cli::args::DiagnoseArgs;
use crate::cli::commands::Command;
use crate::core::config::EngineConfig;
use crate::core::utils::FileUtils;
use crate::engine::RecoveryEngine;

const DEFAULT_PROJECT: &str = "default";

pub struct DiagnoseCommand {
    args: DiagnoseArgs,
    config: EngineConfig,
}

impl DiagnoseCommand {
    pub fn new(args: DiagnoseArgs, config: EngineConfig) -> Self {
        Self { args, config }
    }
}

#[async_trait]
impl Command for DiagnoseCommand {
    async fn execute(&self) -> Result<()> {
        let files = FileUtils::collect_sources(&self.args.paths, &self.args.include)?;
        if files.is_empty() {
            bail!("No source files found under the given paths");
        }
        tracing::debug!(count = files.len(), "collected source files");

        let mut source = String::new();
        let mut names = Vec::with_capacity(files.len());
        for file in &files {
            source.push_str(&FileUtils::read_with_context(file, "source file").await?);
            source.push('\n');
            names.push(file.to_string_lossy().into_owned());
        }

        let project = self.args.project.as_deref().unwrap_or(DEFAULT_PROJECT);
        let engine = RecoveryEngine::in_memory(self.config.clone());
        let report = engine.run_diagnostics(project, &source, &names).await;

        println!("{}", render_report(&report, self.args.format)?);

        let score = format!("Health score: {}/100", report.health_score);
        let score = match report.health_score {
            90..=100 => score.green(),
            70..=89 => score.yellow(),
            _ => score.red(),
        };
        eprintln!("{score} ({} files)", files.len());
        Ok(())
    }
}
