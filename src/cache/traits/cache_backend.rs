use std::time::Duration;
use async_trait::async_trait;
use crate::cache::errors::CacheError;

/// Key/value persistence contract shared by every store backend.
///
/// Values are opaque bytes; backends never look inside them. Calls are not
/// coordinated with each other, so a `has` followed by a `get` may observe
/// different states when other requests write in between.
#[async_trait]
pub trait CacheBackend: Send + Sync {
    /// True when a non-expired entry exists for `key`.
    async fn has(&self, key: &str) -> bool;

    /// Raw bytes of the entry stored under `key`, or `KeyNotFound`.
    async fn get(&self, key: &str) -> Result<Vec<u8>, CacheError>;

    /// Stores `value` under `key`, replacing any existing entry.
    async fn put(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), CacheError>;
}
