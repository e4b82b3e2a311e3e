//! Tracing and logging (shared setup).

pub use crate::tracing::LogFormat;

/// Initialize process-wide logging, format chosen by `CATALOG_LOG_FORMAT`.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, layers).
pub mod tracing;
