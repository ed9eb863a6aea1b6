// Show effective configuration

use super::Command;
use crate::config::GslConfig;
use crate::error::CliResult;
use crate::output::OutputStyle;
use std::path::PathBuf;

/// Print the effective configuration as TOML
pub struct ConfigCommand {
    pub config: GslConfig,
    pub source: Option<PathBuf>,
}

impl ConfigCommand {
    pub fn new(config: GslConfig, source: Option<PathBuf>) -> Self {
        Self { config, source }
    }
}

impl Command for ConfigCommand {
    fn execute(&self) -> CliResult<()> {
        let style = OutputStyle::default();

        println!("{}", self.config.to_toml()?);

        let origin = match &self.source {
            Some(path) if path.exists() => format!("Config file: {}", path.display()),
            Some(path) => format!("Config file: {} (not found, using defaults)", path.display()),
            None => "No config file, using defaults".to_string(),
        };
        eprintln!("{}", style.info(&origin));

        Ok(())
    }
}
