// CLI error types

use gsl_core::{MergeError, RegionError};
use gsl_generation::GenerationError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Region error: {0}")]
    Region(#[from] RegionError),

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<MergeError> for CliError {
    fn from(err: MergeError) -> Self {
        match err {
            MergeError::Region(e) => CliError::Region(e),
            MergeError::Io(e) => CliError::Io(e),
        }
    }
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::Config(err.to_string())
    }
}

impl CliError {
    /// Get a user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            CliError::InvalidArgument { message } => {
                format!("Invalid argument: {}\n\nRun 'gsl --help' for usage information.", message)
            }
            CliError::Io(e) => {
                format!("File operation failed: {}", e)
            }
            CliError::Config(msg) => {
                format!("Configuration error: {}\n\nRun 'gsl config' to check your configuration.", msg)
            }
            CliError::Region(e) => region_message(e),
            CliError::Generation(GenerationError::Region(e)) => region_message(e),
            CliError::Generation(e) => {
                format!("Generation failed: {}\n\nThe destination file was not modified.", e)
            }
            CliError::Internal(msg) => {
                format!("Internal error: {}\n\nPlease report this issue.", msg)
            }
        }
    }
}

fn region_message(e: &RegionError) -> String {
    format!(
        "Misplaced region marker: {}\n\nThe destination file was not modified.",
        e
    )
}

pub type CliResult<T> = Result<T, CliError>;
