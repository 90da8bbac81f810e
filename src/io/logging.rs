//! Tracing subscriber setup for the command-line tool

use tracing_subscriber::EnvFilter;

/// Log filter for a given number of `-v` flags
pub const fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "tilematch=warn",
        1 => "tilematch=info",
        2 => "tilematch=debug",
        _ => "tilematch=trace",
    }
}

/// Install a stderr subscriber; `RUST_LOG` takes precedence over `verbosity`
///
/// Calling this more than once is harmless: later calls leave the first
/// subscriber in place.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
