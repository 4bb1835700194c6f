use std::time::Duration;
use async_trait::async_trait;
use log::info;
use crate::cache::enums::cache_connector::CacheConnector;
use crate::cache::enums::cache_engine::CacheEngine;
use crate::cache::errors::CacheError;
use crate::cache::structs::cache_connector_file::CacheConnectorFile;
use crate::cache::structs::cache_connector_redis::CacheConnectorRedis;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::config::structs::cache_config::CacheConfig;

impl CacheConnector {
    pub async fn new(config: &CacheConfig) -> Result<CacheConnector, CacheError> {
        match config.engine {
            CacheEngine::file => {
                tokio::fs::create_dir_all(&config.directory).await?;
                info!("[Cache] Using file store at {} ({} levels)", config.directory, config.levels);
                Ok(CacheConnector::File(CacheConnectorFile::new(&config.directory, config.levels)))
            }
            CacheEngine::redis => {
                let connection_url = format!("{}{}", config.engine.url_scheme().unwrap_or_default(), config.host);
                let redis_connector = CacheConnectorRedis::connect(&connection_url, &config.prefix).await?;
                info!("[Cache] Connected to Redis at {}", config.host);
                Ok(CacheConnector::Redis(redis_connector))
            }
        }
    }

    pub fn engine(&self) -> CacheEngine {
        match self {
            CacheConnector::File(_) => CacheEngine::file,
            CacheConnector::Redis(_) => CacheEngine::redis,
        }
    }

    pub fn backend(&self) -> &dyn CacheBackend {
        match self {
            CacheConnector::File(file) => file,
            CacheConnector::Redis(redis) => redis,
        }
    }
}

#[async_trait]
impl CacheBackend for CacheConnector {
    async fn has(&self, key: &str) -> bool {
        self.backend().has(key).await
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>, CacheError> {
        self.backend().get(key).await
    }

    async fn put(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), CacheError> {
        self.backend().put(key, value, ttl).await
    }
}
