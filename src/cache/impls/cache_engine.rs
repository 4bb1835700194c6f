use crate::cache::enums::cache_engine::CacheEngine;
use std::fmt;

impl fmt::Display for CacheEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheEngine::file => write!(f, "file"),
            CacheEngine::redis => write!(f, "redis"),
        }
    }
}

impl CacheEngine {
    /// Scheme prepended to `host` when the engine talks to a remote service.
    pub fn url_scheme(&self) -> Option<&'static str> {
        match self {
            CacheEngine::file => None,
            CacheEngine::redis => Some("redis://"),
        }
    }
}
