//! Logging setup shared by the storefront binaries.

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use crate::tracing::LogFormat;

/// Initialize process-wide logging with the format named by
/// `STOREFRONT_LOG_FORMAT` (JSON unless it says `pretty`).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(LogFormat::from_env());
}
