// Command routing and dispatch

use crate::commands::*;
use crate::config::GslConfig;
use crate::error::CliResult;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// GSL - regenerate files without losing hand-edited regions
#[derive(Parser, Debug)]
#[command(name = "gsl")]
#[command(bin_name = "gsl")]
#[command(about = "Regenerate files while keeping customized regions")]
#[command(
    long_about = "Merges freshly generated output into an existing file.\n\nContent between `<GSL customizable: NAME>` and `</GSL customizable: NAME>` markers in the existing file survives regeneration. Regions the generator marks as `default` are only filled with template content the first time."
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimize output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file (default: ./gsl.toml, then the user config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Merge generated output into a file
    #[command(about = "Merge freshly generated lines into DEST, keeping customized regions")]
    Merge {
        /// File to update
        #[arg(value_name = "DEST")]
        dest: PathBuf,

        /// Generated lines (default: stdin)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Preview changes without writing
        #[arg(long)]
        dry_run: bool,

        /// Print a unified diff of the changes
        #[arg(long)]
        diff: bool,

        /// Do not keep a .bak copy of the previous file
        #[arg(long)]
        no_backup: bool,
    },

    /// List customizable regions in a file
    #[command(about = "List the customizable regions a merge would preserve")]
    Regions {
        /// File to scan
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print the region map as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert identifier case
    #[command(about = "Convert an identifier to another case style")]
    Case {
        /// Identifier to convert
        #[arg(value_name = "IDENT")]
        ident: String,

        /// Target style (pascal, camel, snake, constant, kebab)
        #[arg(long, value_name = "STYLE")]
        to: String,
    },

    /// Show effective configuration
    #[command(about = "Print the effective configuration as TOML")]
    Config,
}

/// Command router
pub struct CommandRouter;

impl CommandRouter {
    /// Parse CLI arguments and route to appropriate handler
    pub fn route() -> CliResult<()> {
        let cli = Cli::parse();

        let config = GslConfig::load(cli.config.as_deref())?;
        crate::logging::init_logging(&config.logging, cli.verbose, cli.quiet);

        Self::execute(&cli, &config)
    }

    /// Execute a command
    pub fn execute(cli: &Cli, config: &GslConfig) -> CliResult<()> {
        match &cli.command {
            Commands::Merge {
                dest,
                input,
                dry_run,
                diff,
                no_backup,
            } => {
                let settings = config.writer_config();
                let cmd = MergeCommand::new(dest.clone(), input.clone())
                    .with_dry_run(*dry_run || settings.dry_run)
                    .with_diff(*diff)
                    .with_backups(settings.create_backups && !*no_backup);
                cmd.execute()
            }
            Commands::Regions { file, json } => {
                let cmd = RegionsCommand::new(file.clone(), *json);
                cmd.execute()
            }
            Commands::Case { ident, to } => {
                let cmd = CaseCommand::new(ident.clone(), to.clone());
                cmd.execute()
            }
            Commands::Config => {
                let cmd = ConfigCommand::new(
                    config.clone(),
                    GslConfig::config_file(cli.config.as_deref()),
                );
                cmd.execute()
            }
        }
    }
}
