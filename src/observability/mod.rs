//! Observability for the song service
//!
//! - Structured logging through `tracing`
//! - In-process counters exposed over HTTP

mod logging;
mod metrics;

pub use logging::init_logging;
pub use metrics::{MetricsRegistry, MetricsSnapshot};
