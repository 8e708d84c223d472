use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "stopwatch=info";

/// Initialise tracing subscriber once per process.
///
/// Honors `RUST_LOG`; defaults to `stopwatch=info`, which keeps
/// [`TimedScope`](crate::TimedScope) drop events quiet unless debug is
/// requested.
pub fn init_logging() {
    init_logging_with(DEFAULT_DIRECTIVE);
}

/// Like [`init_logging`], but with an explicit fallback filter directive for
/// when `RUST_LOG` is unset (e.g. `"stopwatch=debug"` to see scope timings).
pub fn init_logging_with(fallback: &str) {
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

        fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .compact()
            .init();
    });
}
