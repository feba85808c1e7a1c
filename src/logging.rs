//! Diagnostic logging setup
//!
//! The library only emits `tracing` events; binaries call [`init_tracing`]
//! once to print them on stderr. `RUST_LOG` overrides the default level.

use std::sync::Once;

use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Default directive when `RUST_LOG` doesn't mention this crate
const DEFAULT_DIRECTIVE: &str = "expense_tracker=warn";

/// Initializes the global tracing subscriber
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::builder()
            .with_default_directive(default_directive())
            .from_env_lossy();

        // A subscriber installed elsewhere (e.g. by a test harness) wins
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

fn default_directive() -> Directive {
    DEFAULT_DIRECTIVE
        .parse()
        .unwrap_or_else(|_| LevelFilter::WARN.into())
}
