// GSL command-line library
// Exposes the command router so the binary stays a thin shell

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod router;

pub use error::{CliError, CliResult};
