use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;
use actix_web::body::{BoxBody, MessageBody};
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::Error;
use futures_util::future::LocalBoxFuture;
use crate::handler::structs::cache_handler::CacheHandler;
use crate::handler::structs::cache_middleware::{CacheMiddleware, CacheMiddlewareService};

impl CacheMiddleware {
    pub fn new(handler: Arc<CacheHandler>) -> CacheMiddleware {
        CacheMiddleware { handler }
    }

    pub fn handler(&self) -> Arc<CacheHandler> {
        self.handler.clone()
    }
}

impl<S, B> Transform<S, ServiceRequest> for CacheMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Transform = CacheMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CacheMiddlewareService {
            service: Rc::new(service),
            handler: self.handler.clone(),
        }))
    }
}

impl<S, B> Service<ServiceRequest> for CacheMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, request: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let handler = Arc::clone(&self.handler);
        Box::pin(async move { handler.handle(request, service).await })
    }
}
