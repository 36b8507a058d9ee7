//! Routing of diagnostics to the standard error stream

use crate::Result;

use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

/// Map a verbosity level to the most verbose tracing level that is displayed
pub fn level_filter(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global tracing subscriber
pub fn setup_logging(verbosity: u8) -> Result<()> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(level_filter(verbosity))
        .with(stderr_layer)
        .try_init()?;

    Ok(())
}
