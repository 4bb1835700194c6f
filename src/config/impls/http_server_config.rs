use std::thread::available_parallelism;
use crate::config::structs::http_server_config::HttpServerConfig;

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            upstream: "http://127.0.0.1:3000".to_string(),
            threads: available_parallelism().map(|threads| threads.get() as u64).unwrap_or(4),
            keep_alive: 60,
            request_timeout: 15,
            disconnect_timeout: 15,
            metrics_path: Some("/metrics".to_string()),
        }
    }
}
