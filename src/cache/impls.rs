//! Implementation blocks for cache types.

/// Backend dispatch for the connector enumeration.
pub mod cache_connector;

/// Local file store implementation.
pub mod cache_connector_file;

/// Redis store implementation.
pub mod cache_connector_redis;

/// Display and helpers for cache engines.
pub mod cache_engine;

/// Expiry and encoding of file store records.
pub mod file_record;
