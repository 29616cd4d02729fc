use anyhow::{bail, Result};
use async_trait::async_trait;
use colored::*;

use super::utils::{read_stdin, render_analysis};
use crate::cli::args::AnalyzeArgs;
use crate::cli::commands::Command;
use crate::core::config::EngineConfig;
use crate::core::types::{AnalysisContext, ErrorInput};
use crate::core::utils::FileUtils;
use crate::engine::RecoveryEngine;
use crate::quick_fix::{ConfidenceScore, ConfidenceThreshold};

pub struct AnalyzeCommand {
    args: AnalyzeArgs,
    config: EngineConfig,
}

impl AnalyzeCommand {
    pub fn new(args: AnalyzeArgs, config: EngineConfig) -> Self {
        Self { args, config }
    }

    async fn read_error_text(&self) -> Result<String> {
        let text = match (&self.args.message, &self.args.input) {
            (Some(message), _) => message.clone(),
            (None, Some(path)) => FileUtils::read_with_context(path, "error input").await?,
            (None, None) => read_stdin()?,
        };
        if text.trim().is_empty() {
            bail!("No error text given. Pass --message, --input or pipe it on stdin.");
        }
        Ok(text)
    }

    async fn build_context(&self) -> Result<AnalysisContext> {
        let mut context = AnalysisContext::new();
        if let Some(source) = &self.args.source {
            let code = FileUtils::read_with_context(source, "source file").await?;
            context = context
                .with_file(source.to_string_lossy().into_owned())
                .with_code(code);
        }
        if let Some(line) = self.args.line {
            context = context.with_line(line);
        }
        if let Some(project) = &self.args.project {
            context = context.with_project(project.clone());
        }
        Ok(context)
    }
}

#[async_trait]
impl Command for AnalyzeCommand {
    async fn execute(&self) -> Result<()> {
        let text = self.read_error_text().await?;
        let context = self.build_context().await?;
        let engine = RecoveryEngine::in_memory(self.config.clone());

        let analysis = engine
            .analyze_error(&ErrorInput::from(text), Some(&context))
            .await;
        println!("{}", render_analysis(&analysis, self.args.format)?);

        if !self.args.apply_fix {
            return Ok(());
        }

        let candidate = analysis
            .suggestions
            .iter()
            .find_map(|s| s.fix.as_ref().map(|fix| (s, fix)));
        let Some((suggestion, fix)) = candidate else {
            eprintln!("{}", "No automatic fix is available for this error".yellow());
            return Ok(());
        };

        if !self.args.yes {
            bail!("Refusing to modify {} without --yes", fix.file);
        }

        let threshold = ConfidenceThreshold::default();
        let confidence = ConfidenceScore::new(suggestion.confidence);
        if !confidence.is_at_least(&threshold) {
            eprintln!(
                "{} fix confidence {:.2} is below {:.2}",
                "Skipped:".yellow(),
                confidence.value(),
                threshold.minimum
            );
            return Ok(());
        }

        if engine.apply_fix(fix).await {
            eprintln!(
                "{} {}:{} {}",
                "Applied".green(),
                fix.file,
                fix.line,
                fix.explanation
            );
            Ok(())
        } else {
            bail!(
                "Fix could not be applied to {}:{} (file changed or unreadable)",
                fix.file,
                fix.line
            );
        }
    }
}
