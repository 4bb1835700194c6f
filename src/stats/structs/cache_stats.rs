use std::sync::atomic::AtomicU64;

#[derive(Debug)]
pub struct CacheStats {
    pub handler_id: String,
    pub hits: AtomicU64,
    pub misses: AtomicU64,
    pub bypasses: AtomicU64,
}
