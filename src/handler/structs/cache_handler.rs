use std::sync::Arc;
use std::time::Duration;
use crate::cache::enums::cache_connector::CacheConnector;
use crate::config::structs::cache_config::CacheConfig;
use crate::deciders::enums::decider::Decider;
use crate::stats::structs::cache_stats::CacheStats;

/// Provisioned cache handler. Immutable after construction apart from the
/// atomic counters in `stats`.
#[derive(Debug)]
pub struct CacheHandler {
    pub(crate) config: CacheConfig,
    pub(crate) ttl: Duration,
    pub(crate) deciders: Vec<Decider>,
    pub(crate) store: CacheConnector,
    pub(crate) stats: Arc<CacheStats>,
}
