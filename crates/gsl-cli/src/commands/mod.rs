// Command handlers for gsl CLI

pub mod case;
pub mod config;
pub mod merge;
pub mod regions;

pub use case::CaseCommand;
pub use config::ConfigCommand;
pub use merge::MergeCommand;
pub use regions::RegionsCommand;

use crate::error::CliResult;

/// Trait for command handlers
pub trait Command {
    /// Execute the command
    fn execute(&self) -> CliResult<()>;
}
