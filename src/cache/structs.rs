//! Cache connector structures.

/// File-backed cache connector.
pub mod cache_connector_file;

/// Redis-specific cache connector.
pub mod cache_connector_redis;

/// Record persisted by the file store.
pub mod file_record;
