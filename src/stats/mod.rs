//! Outcome counters for the cache handler.
//!
//! Every request processed by the middleware ends in exactly one of three
//! outcomes (hit, miss, bypass) and increments exactly one counter.
//!
//! # Thread Safety
//!
//! Counters are atomic integers shared by all workers; no locking is involved.
//!
//! # Monitoring Integration
//!
//! - JSON snapshot via `CacheStats::get_stats()`
//! - Prometheus text format via `CacheStats::prometheus()`
//!
//! # Example
//!
//! ```rust,ignore
//! use cache_handler::stats::enums::stats_event::StatsEvent;
//!
//! stats.update_stats(StatsEvent::Hit);
//! let snapshot = stats.get_stats();
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters).
pub mod structs;
