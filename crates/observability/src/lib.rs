//! Shared tracing/logging setup.

/// Tracing configuration (filters, layers).
pub mod tracing;

/// Initialize process-wide observability.
///
/// Safe to call multiple times; subsequent calls become no-ops, so tests can
/// call it unconditionally.
pub fn init() {
    tracing::init();
}
