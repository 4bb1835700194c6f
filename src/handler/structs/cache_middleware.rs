use std::rc::Rc;
use std::sync::Arc;
use crate::handler::structs::cache_handler::CacheHandler;

/// Middleware factory handed to `App::wrap`.
#[derive(Debug, Clone)]
pub struct CacheMiddleware {
    pub(crate) handler: Arc<CacheHandler>,
}

pub struct CacheMiddlewareService<S> {
    pub(crate) service: Rc<S>,
    pub(crate) handler: Arc<CacheHandler>,
}
