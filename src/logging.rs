//! Tracing setup for the hwk2lua binary.
//!
//! Events go to stderr; stdout is reserved for the produced Lua.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Filter directives for a `-v` count. Zero keeps the configured filter.
pub fn filter_for_verbosity(configured: &str, verbosity: u8) -> &str {
    match verbosity {
        0 => configured,
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over `default_filter`.
pub fn init(default_filter: &str) -> Result<(), Box<dyn std::error::Error>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| std::io::Error::other(err.to_string()))?;
    Ok(())
}
