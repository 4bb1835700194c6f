use std::sync::Arc;
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::handler::structs::cache_handler::CacheHandler;

#[derive(Debug)]
pub struct HttpServiceData {
    pub cache_handler: Arc<CacheHandler>,
    pub http_server_config: Arc<HttpServerConfig>,
    pub client: reqwest::Client,
}
