//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! store operations produce:
//!     → tracing events (logging.rs installs the subscriber)
//!     → metrics.rs (counters and gauges through the metrics facade)
//! ```

pub mod logging;
pub mod metrics;
