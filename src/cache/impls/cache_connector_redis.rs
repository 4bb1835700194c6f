use std::time::Duration;
use async_trait::async_trait;
use log::{debug, warn};
use crate::cache::errors::CacheError;
use crate::cache::structs::cache_connector_redis::CacheConnectorRedis;
use crate::cache::traits::cache_backend::CacheBackend;

impl CacheConnectorRedis {
    pub async fn connect(url: &str, prefix: &str) -> Result<Self, CacheError> {
        let client = redis::Client::open(url)
            .map_err(|e| CacheError::ConnectionError(format!("Failed to create Redis client: {}", e)))?;
        let connection = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e)))?;
        Ok(Self {
            connection,
            prefix: prefix.to_string(),
        })
    }

    pub fn entry_key(prefix: &str, key: &str) -> String {
        format!("{}{}", prefix, key)
    }

    /// Whole seconds for `SET ... EX`, rounded up so sub-second TTLs survive.
    pub fn expire_seconds(ttl: Duration) -> u64 {
        let seconds = ttl.as_secs();
        if ttl.subsec_nanos() > 0 { seconds + 1 } else { seconds }
    }

    async fn fetch(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let mut conn = self.connection.clone();
        let value = redis::cmd("GET")
            .arg(Self::entry_key(&self.prefix, key))
            .query_async::<Option<Vec<u8>>>(&mut conn)
            .await
            .map_err(CacheError::RedisError)?;
        Ok(value)
    }
}

#[async_trait]
impl CacheBackend for CacheConnectorRedis {
    // Present means a non-empty value under the prefixed key.
    async fn has(&self, key: &str) -> bool {
        match self.fetch(key).await {
            Ok(Some(value)) => !value.is_empty(),
            Ok(None) => false,
            Err(e) => {
                warn!("[Redis] Lookup for {} failed: {}", key, e);
                false
            }
        }
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>, CacheError> {
        match self.fetch(key).await? {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(CacheError::KeyNotFound(key.to_string())),
        }
    }

    async fn put(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), CacheError> {
        if ttl.is_zero() {
            debug!("[Redis] Skipping {} with zero TTL", key);
            return Ok(());
        }
        let mut conn = self.connection.clone();
        redis::cmd("SET")
            .arg(Self::entry_key(&self.prefix, key))
            .arg(value)
            .arg("EX")
            .arg(Self::expire_seconds(ttl))
            .query_async::<()>(&mut conn)
            .await
            .map_err(CacheError::RedisError)?;
        debug!("[Redis] Set {} with ttl={:?}", key, ttl);
        Ok(())
    }
}
