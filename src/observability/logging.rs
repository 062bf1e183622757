//! Structured logging.
//!
//! # Design Decisions
//! - Uses the tracing crate for structured events
//! - `RUST_LOG` wins over the caller-provided default directive

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber.
///
/// Falls back to `default_directive` (e.g. `"config_store=info"`) when
/// `RUST_LOG` is unset or unparsable. Calling it twice is harmless: the
/// second installation attempt is ignored.
pub fn init_logging(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
