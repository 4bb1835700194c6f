use std::time::Duration;
use crate::cache::enums::cache_engine::CacheEngine;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::bypass_config::BypassConfig;
use crate::config::structs::cache_config::CacheConfig;

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            engine: CacheEngine::file,
            host: "127.0.0.1:6379".to_string(),
            prefix: "httpcache:".to_string(),
            directory: "./cache".to_string(),
            levels: 2,
            expire: 120,
            handler_id: "cache".to_string(),
            bypass: BypassConfig::default(),
        }
    }
}

impl CacheConfig {
    pub const MAX_LEVELS: usize = 8;

    /// TTL applied to every stored entry. Zero or negative `expire` yields a
    /// zero TTL, which every store treats as already expired.
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.expire.max(0) as u64)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.levels == 0 || self.levels > Self::MAX_LEVELS {
            return Err(ConfigurationError::InvalidValue(format!(
                "cache.levels must be between 1 and {}, got {}", Self::MAX_LEVELS, self.levels
            )));
        }
        if self.handler_id.is_empty() {
            return Err(ConfigurationError::InvalidValue("cache.handler_id must not be empty".to_string()));
        }
        match self.engine {
            CacheEngine::file if self.directory.is_empty() => {
                Err(ConfigurationError::InvalidValue("cache.directory must be set for the file store".to_string()))
            }
            CacheEngine::redis if self.host.is_empty() => {
                Err(ConfigurationError::InvalidValue("cache.host must be set for the redis store".to_string()))
            }
            _ => Ok(()),
        }
    }
}
