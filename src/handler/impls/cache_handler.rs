use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;
use actix_web::body::{BoxBody, MessageBody};
use actix_web::dev::{Service, ServiceRequest, ServiceResponse};
use actix_web::{Error, HttpResponse};
use log::{debug, error, info};
use crate::cache::enums::cache_connector::CacheConnector;
use crate::cache::errors::CacheError;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::config::structs::cache_config::CacheConfig;
use crate::deciders::enums::decider::Decider;
use crate::handler::cache_key::cache_key;
use crate::handler::enums::cache_status::CacheStatus;
use crate::handler::structs::cache_handler::CacheHandler;
use crate::handler::structs::cached_response::CachedResponse;
use crate::stats::structs::cache_stats::CacheStats;

impl CacheHandler {
    /// Validates the configuration, compiles the deciders and connects the
    /// configured store.
    pub async fn new(config: CacheConfig) -> Result<CacheHandler, CacheError> {
        config.validate()?;
        let store = CacheConnector::new(&config).await?;
        Self::with_store(config, store)
    }

    /// Same as `new` with an already connected store.
    pub fn with_store(config: CacheConfig, store: CacheConnector) -> Result<CacheHandler, CacheError> {
        let deciders = Decider::from_config(&config.bypass)?;
        let stats = Arc::new(CacheStats::new(&config.handler_id));
        info!(
            "[Cache] Handler '{}' ready: store={} ttl={}s deciders=[{}]",
            config.handler_id,
            store.engine(),
            config.expire,
            deciders.iter().map(|d| d.name()).collect::<Vec<_>>().join(", ")
        );
        Ok(CacheHandler {
            ttl: config.ttl(),
            config,
            deciders,
            store,
            stats,
        })
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn store(&self) -> &CacheConnector {
        &self.store
    }

    pub fn stats(&self) -> Arc<CacheStats> {
        self.stats.clone()
    }

    #[tracing::instrument(level = "debug", skip_all, fields(method = %request.method(), path = %request.path()))]
    pub async fn handle<S, B>(&self, request: ServiceRequest, service: Rc<S>) -> Result<ServiceResponse<BoxBody>, Error>
    where
        S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
        B: MessageBody + 'static,
    {
        if let Some(decider) = Decider::should_bypass(&self.deciders, request.request()) {
            debug!("[Cache] {} {} bypassed by {} decider", request.method(), request.path(), decider.name());
            let response = service.call(request).await?;
            return Ok(self.finish(response.map_into_boxed_body(), CacheStatus::Bypass));
        }

        let key = cache_key(request.request());

        if self.store.has(&key).await {
            let response = self.replay(&key).await.map_err(|e| {
                error!("[Cache] Stored entry {} for {} is unusable: {}", key, request.path(), e);
                e
            })?;
            debug!("[Cache] {} {} served from cache", request.method(), request.path());
            let (http_request, _) = request.into_parts();
            return Ok(self.finish(ServiceResponse::new(http_request, response), CacheStatus::Hit));
        }

        let response = service.call(request).await?;
        let (http_request, response) = response.into_parts();
        let (cached, head, body) = CachedResponse::capture(response).await?;

        match cached.to_bytes() {
            Ok(encoded) => {
                if let Err(e) = self.store.put(&key, encoded, self.ttl).await {
                    error!("[Cache] Unable to store {} for {}: {}", key, http_request.path(), e);
                }
            }
            Err(e) => error!("[Cache] Unable to encode response for {}: {}", http_request.path(), e),
        }
        debug!("[Cache] {} {} fetched downstream ({} bytes)", http_request.method(), http_request.path(), cached.content_length);

        let response = head.set_body(body).map_into_boxed_body();
        Ok(self.finish(ServiceResponse::new(http_request, response), CacheStatus::Miss))
    }

    async fn replay(&self, key: &str) -> Result<HttpResponse, CacheError> {
        let bytes = self.store.get(key).await?;
        CachedResponse::from_bytes(&bytes)?.to_http_response()
    }

    fn finish(&self, mut response: ServiceResponse<BoxBody>, status: CacheStatus) -> ServiceResponse<BoxBody> {
        response.headers_mut().insert(CacheStatus::header_name(), status.header_value());
        self.stats.update_stats(status.stats_event());
        response
    }
}
