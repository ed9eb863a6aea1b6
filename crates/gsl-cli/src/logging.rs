// Logging setup
// Installs a tracing fmt subscriber on stderr so stdout stays clean for output

use crate::config::LoggingSettings;
use tracing::Level;

/// Pick the max log level from config and CLI flags
///
/// `--quiet` wins over `--verbose`, and both win over the configured level.
pub fn log_level(settings: &LoggingSettings, verbose: bool, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    if verbose {
        return Level::DEBUG;
    }

    match settings.level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Initialize logging based on config and CLI flags
pub fn init_logging(settings: &LoggingSettings, verbose: bool, quiet: bool) {
    use tracing_subscriber::fmt;

    let level = log_level(settings, verbose, quiet);

    // A subscriber may already be installed (tests, embedding)
    let _ = fmt()
        .with_max_level(level)
        .with_target(settings.debug)
        .with_file(settings.debug)
        .with_line_number(settings.debug)
        .with_writer(std::io::stderr)
        .try_init();
}
