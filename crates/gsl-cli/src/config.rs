// Configuration loading
// File (explicit, project or user-level) first, then GSL_* environment overrides

use crate::error::{CliError, CliResult};
use config::{Config, Environment, File, FileFormat};
use gsl_generation::OutputWriterConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-local configuration file name
pub const PROJECT_CONFIG_FILE: &str = "gsl.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "GSL";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Effective GSL configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GslConfig {
    pub merge: MergeSettings,
    pub logging: LoggingSettings,
}

/// `[merge]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeSettings {
    /// Copy the previous file to `<path>.bak` before replacing it
    pub create_backups: bool,
    /// Never write, only report
    pub dry_run: bool,
}

impl Default for MergeSettings {
    fn default() -> Self {
        Self {
            create_backups: true,
            dry_run: false,
        }
    }
}

/// `[logging]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    /// Include target, file and line in log records
    pub debug: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            debug: false,
        }
    }
}

impl GslConfig {
    /// Load configuration, optionally from an explicit file
    ///
    /// An explicit file must exist. The project and user-level files are
    /// optional.
    pub fn load(explicit: Option<&Path>) -> CliResult<Self> {
        let source = Self::config_file(explicit);
        Self::load_from(source.as_deref(), explicit.is_some())
    }

    /// Build configuration from a single optional file plus the environment
    pub fn load_from(path: Option<&Path>, required: bool) -> CliResult<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            );
        }

        let builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: GslConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve which configuration file applies
    ///
    /// Explicit path, else `./gsl.toml` if present, else the user-level
    /// `<config_dir>/gsl/config.toml`.
    pub fn config_file(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }

        let project = PathBuf::from(PROJECT_CONFIG_FILE);
        if project.exists() {
            return Some(project);
        }

        dirs::config_dir().map(|dir| dir.join("gsl").join("config.toml"))
    }

    /// Reject values the rest of the tool cannot use
    pub fn validate(&self) -> CliResult<()> {
        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(CliError::Config(format!(
                "Unknown log level '{}', expected one of: {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }

    /// Serialize as TOML
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string(self).map_err(|e| CliError::Internal(e.to_string()))
    }

    /// Output writer settings derived from the `[merge]` section
    pub fn writer_config(&self) -> OutputWriterConfig {
        OutputWriterConfig {
            dry_run: self.merge.dry_run,
            create_backups: self.merge.create_backups,
        }
    }
}
