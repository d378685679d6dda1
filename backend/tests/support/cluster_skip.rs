//! Policy for integration tests when no embedded cluster is available.
//!
//! Embedded PostgreSQL needs downloadable binaries and a writable runtime
//! directory. Suites skip with a marker by default; CI sets
//! `REQUIRE_TEST_CLUSTER=1` so a broken bootstrap fails loudly instead.

/// True when `REQUIRE_TEST_CLUSTER` is set to "1", "true", or "yes".
pub fn test_cluster_required() -> bool {
    std::env::var("REQUIRE_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Print a skip marker and return `None`, or panic when the cluster is required.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if test_cluster_required() {
        panic!("Test cluster setup failed: {reason}. Unset REQUIRE_TEST_CLUSTER to skip.");
    }
    eprintln!("SKIP-TEST-CLUSTER: {reason}");
    None
}
