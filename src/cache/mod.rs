//! Cache store module supporting a local file store and Redis.
//!
//! This module provides the persistence layer behind the response cache.
//! Every backend speaks the same three operations on raw bytes; encoding and
//! decoding of the stored HTTP response happens above this boundary.
//!
//! # Supported Backends
//!
//! - **File**: SHA-256 sharded directory tree, one MessagePack record per key
//! - **Redis**: Remote key-value store, TTL delegated to `SET ... EX`
//!
//! # Architecture
//!
//! - `CacheBackend` trait defines `has`, `get` and `put`
//! - Each backend has its own connector implementation
//! - `CacheConnector` is the closed set of backends, dispatching to the active one
//!
//! # Consistency
//!
//! `has` and `get`/`put` are independent calls. Concurrent misses on the same
//! key may all observe an absent entry and all write it; the last write wins.
//!
//! # Example
//!
//! ```rust,ignore
//! use cache_handler::cache::enums::cache_connector::CacheConnector;
//! use cache_handler::cache::traits::cache_backend::CacheBackend;
//!
//! let connector = CacheConnector::new(&config).await?;
//! connector.put("key", b"value".to_vec(), Duration::from_secs(60)).await?;
//! ```

/// Cache engine and connector enumerations.
pub mod enums;

/// Error types for cache operations.
pub mod errors;

/// Implementation blocks for cache connectors.
pub mod impls;

/// Data structures for cache connections and stored records.
pub mod structs;

/// Cache backend trait definitions.
pub mod traits;
