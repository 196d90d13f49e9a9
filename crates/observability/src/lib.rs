//! Tracing/logging setup shared by binaries and tests that embed the ledger.

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Initialize a human-readable subscriber writing to the test harness.
///
/// Also idempotent. Intended for `#[test]` functions that want to see notices.
pub fn init_for_tests() {
    tracing::init_for_tests();
}

/// Tracing configuration (filters, layers).
pub mod tracing;
