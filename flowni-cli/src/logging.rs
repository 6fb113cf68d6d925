//! Logging setup for the CLI.
//!
//! Diagnostics go to stderr through `tracing`, leaving stdout for converted
//! documents. `FLOWNI_LOG` takes precedence over both the configured level and
//! `-v` flags.

use flowni_config::LogFormat;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "FLOWNI_LOG";

/// Maps a `-v` count to a tracing directive, or `None` to keep the configured level.
pub fn verbosity_to_directive(verbosity: u8) -> Option<&'static str> {
    match verbosity {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Installs the global subscriber. Safe to call more than once.
pub fn init_logging(format: LogFormat, configured_level: &str, verbosity: u8) {
    let directive = verbosity_to_directive(verbosity).unwrap_or(configured_level);
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(directive));

    match format {
        LogFormat::Human => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(verbosity >= 2)
                .with_writer(std::io::stderr)
                .try_init();
        }
        LogFormat::Json => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .json()
                .with_writer(std::io::stderr)
                .try_init();
        }
    }
}
