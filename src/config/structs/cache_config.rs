use serde::{Deserialize, Serialize};
use crate::cache::enums::cache_engine::CacheEngine;
use crate::config::structs::bypass_config::BypassConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CacheConfig {
    #[serde(rename = "type")]
    pub engine: CacheEngine,
    pub host: String,
    pub prefix: String,
    pub directory: String,
    pub levels: usize,
    pub expire: i64,
    pub handler_id: String,
    pub bypass: BypassConfig,
}
