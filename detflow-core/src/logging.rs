use clap::ValueEnum;
use std::io;
use tracing_subscriber::{EnvFilter, fmt};

/// Filter applied when `RUST_LOG` is unset. Keeps stderr quiet so the
/// stdout report reads cleanly.
pub const DEFAULT_FILTER: &str = "warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human readable lines.
    #[default]
    Pretty,
    /// One flattened JSON object per event.
    Json,
}

/// Initialize the diagnostics subscriber.
///
/// Events go to stderr and are filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_FILTER`].
pub fn init_logging(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    match format {
        LogFormat::Pretty => fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .init(),
        LogFormat::Json => fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .json()
            .flatten_event(true)
            .init(),
    }
}
