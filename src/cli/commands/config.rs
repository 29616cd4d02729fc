use anyhow::{bail, Result};
use async_trait::async_trait;
use colored::*;
use std::path::PathBuf;

use crate::cli::args::ConfigAction;
use crate::cli::commands::Command;
use crate::core::config::EngineConfig;

pub struct ConfigCommand {
    action: ConfigAction,
    path: PathBuf,
}

impl ConfigCommand {
    pub fn new(action: ConfigAction, path: PathBuf) -> Self {
        Self { action, path }
    }
}

#[async_trait]
impl Command for ConfigCommand {
    async fn execute(&self) -> Result<()> {
        match &self.action {
            ConfigAction::Init { force } => {
                if self.path.exists() && !force {
                    bail!(
                        "{} already exists. Use --force to overwrite it.",
                        self.path.display()
                    );
                }
                EngineConfig::default().save(&self.path).await?;
                println!("Configuration initialized at {}", self.path.display());
            }

            ConfigAction::Show => {
                let config = EngineConfig::load_or_default(&self.path).await?;
                if !self.path.exists() {
                    eprintln!(
                        "No configuration file at {}; showing defaults. Use 'config init' to create one.",
                        self.path.display()
                    );
                }
                println!("{}", toml::to_string_pretty(&config)?);
            }

            ConfigAction::Validate => {
                if !self.path.exists() {
                    bail!("No configuration file at {}", self.path.display());
                }
                EngineConfig::load(&self.path).await?;
                println!("{} {}", "Valid:".green(), self.path.display());
            }
        }

        Ok(())
    }
}
