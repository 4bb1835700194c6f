use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use clap::Parser;
use log::{error, info};
use tokio::runtime::Builder;
use cache_handler::config::structs::configuration::Configuration;
use cache_handler::handler::structs::cache_handler::CacheHandler;
use cache_handler::http::http::http_service;
use cache_handler::logging::setup_logging;
use cache_handler::structs::Cli;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    setup_logging(&config);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let cache_handler = match CacheHandler::new(config.cache.clone()).await {
                Ok(cache_handler) => Arc::new(cache_handler),
                Err(error) => {
                    error!("[BOOT] Unable to provision cache handler '{}': {}", config.cache.handler_id, error);
                    exit(1);
                }
            };

            let address: SocketAddr = match config.http_server.bind_address.parse() {
                Ok(address) => address,
                Err(error) => {
                    error!("[BOOT] Invalid bind address {}: {}", config.http_server.bind_address, error);
                    exit(1);
                }
            };

            let (handle, future) = http_service(
                address,
                cache_handler.clone(),
                Arc::new(config.http_server.clone())
            ).await?;
            let server = tokio::spawn(future);

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown request received, shutting down...");
                    handle.stop(true).await;
                }
                result = server => {
                    match result {
                        Ok(Ok(())) => info!("[HTTP] Server stopped"),
                        Ok(Err(error)) => error!("[HTTP] Server failed: {}", error),
                        Err(error) => error!("[HTTP] Server task failed: {}", error),
                    }
                }
            }

            let stats = cache_handler.stats().get_stats();
            info!(
                "[STATS] handler={} hits={} misses={} bypasses={}",
                config.cache.handler_id, stats.hits, stats.misses, stats.bypasses
            );
            info!("Server shutting down completed");
            Ok(())
        })
}
