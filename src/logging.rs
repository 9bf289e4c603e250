//! Tracing setup
//!
//! Logs go to stderr so `render --json` keeps stdout clean for widget hosts.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Default filter directive for the given verbosity
pub fn default_directive(debug: bool) -> &'static str {
    if debug {
        "actual_widget=debug"
    } else {
        "actual_widget=info"
    }
}

/// Install the global subscriber once; `RUST_LOG` takes precedence
pub fn init(debug: bool) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
