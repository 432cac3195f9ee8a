//! Tracing/logging setup shared by anything that embeds the catalog.

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use self::tracing::{LogFormat, ObservabilityError, TracingConfig};

/// Initialize process-wide observability from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}
