//! Statistics data structures.

/// Atomic counters for thread-safe statistics updates.
pub mod cache_stats;

/// Snapshot of current statistics values.
pub mod stats;
