//! Tracing subscriber setup for the command-line tool

use crate::io::configuration::DEFAULT_LOG_FILTER;
use tracing_subscriber::EnvFilter;

/// Filter directive for a given number of `-v` flags
pub const fn filter_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => DEFAULT_LOG_FILTER,
        1 => "retrodither=info",
        2 => "retrodither=debug",
        _ => "retrodither=trace",
    }
}

/// Install a stderr subscriber
///
/// `RUST_LOG` takes precedence over the verbosity flag. Installing twice is
/// harmless; the second call is ignored.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}
