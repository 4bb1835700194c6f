//! Implementation blocks for statistics.

/// Counter updates, snapshots and Prometheus rendering.
pub mod cache_stats;
