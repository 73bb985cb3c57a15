//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Install the global subscriber. Logs go to stderr so stdout stays clean
/// for `--json` output.
///
/// `RUST_LOG` wins over the configured level; `--verbose` raises the
/// configured level to `debug`.
pub fn init(config: &LoggingConfig, verbose: bool) {
    let level = if verbose { "debug" } else { config.level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    // A subscriber may already be installed (tests); keep it.
    let _ = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };
}
