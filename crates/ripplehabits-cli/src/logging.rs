//! Tracing initialization.
//!
//! Logs go to stderr so stdout stays machine-readable JSON. `RUST_LOG` takes
//! precedence; otherwise the level is `warn`, or `debug` with `--verbose`.

use tracing_subscriber::EnvFilter;

pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
