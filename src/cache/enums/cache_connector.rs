use crate::cache::structs::cache_connector_file::CacheConnectorFile;
use crate::cache::structs::cache_connector_redis::CacheConnectorRedis;

/// The configured store backend. Adding a backend means adding a variant.
#[derive(Debug, Clone)]
pub enum CacheConnector {
    File(CacheConnectorFile),
    Redis(CacheConnectorRedis),
}
