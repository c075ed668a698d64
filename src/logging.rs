//! Tracing initialization

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static INIT: Once = Once::new();

/// Environment variable holding an `EnvFilter` directive, e.g.
/// `FILELISTER_LOG=filelister=debug`.
pub const LOG_ENV: &str = "FILELISTER_LOG";

/// Default filter directive for a `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "filelister=warn",
        1 => "filelister=info",
        _ => "filelister=debug",
    }
}

/// Initialize logging to stderr. `FILELISTER_LOG` overrides `verbosity`.
///
/// Safe to call more than once; only the first call has an effect.
pub fn init_tracing(verbosity: u8) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .without_time(),
            )
            .with(filter)
            .init();
    });
}
