//! Tracing, logging (shared setup).

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Initialize with explicit filter directives instead of `RUST_LOG`.
pub fn init_with_directives(directives: &str) {
    tracing::init_with_directives(directives);
}

/// Tracing configuration (filters, layers).
pub mod tracing;
