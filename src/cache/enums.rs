//! Cache enumerations.

/// Supported cache store engines (file, redis).
pub mod cache_engine;

/// The closed set of configured store backends.
pub mod cache_connector;
