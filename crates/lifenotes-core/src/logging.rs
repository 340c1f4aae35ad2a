//! Tracing subscriber setup for the binary

use crate::config::NotesConfig;
use crate::error::{NotesError, Result};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber
///
/// `RUST_LOG` wins over the configured filter. Logs go to stderr so the
/// rendered page on stdout stays clean.
///
/// # Errors
///
/// [`NotesError::Logging`] if a global subscriber is already installed.
pub fn init(config: &NotesConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    let installed = if config.json_logs {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };
    installed.map_err(|e| NotesError::Logging(e.to_string()))
}
