//! Response caching middleware.
//!
//! Composes the bypass deciders, key derivation, response capture and the
//! configured store into the per-request hit/miss/bypass flow.
//!
//! # Request Flow
//!
//! 1. **Bypass**: a decider fires. The request goes downstream untouched and
//!    the response is marked `Cache-Status: bypass`.
//! 2. **Hit**: the store holds a live entry for the request key. The entry is
//!    decoded and replayed without calling downstream (`Cache-Status: hit`).
//! 3. **Miss**: downstream is called, its response is buffered, stored with
//!    the configured TTL and then sent as captured (`Cache-Status: miss`).
//!
//! # Failure Policy
//!
//! An entry that the store reports as present but that cannot be read or
//! decoded fails the request. On the miss path, capture and store failures
//! are logged and the live response is still delivered.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use actix_web::App;
//! use cache_handler::handler::structs::cache_handler::CacheHandler;
//! use cache_handler::handler::structs::cache_middleware::CacheMiddleware;
//!
//! let handler = Arc::new(CacheHandler::new(config.cache.clone()).await?);
//! let app = App::new().wrap(CacheMiddleware::new(handler.clone()));
//! ```

/// Cache key derivation.
pub mod cache_key;

/// Cache outcome enumeration.
pub mod enums;

/// Implementation blocks for the handler, middleware and stored responses.
pub mod impls;

/// Handler, middleware and stored response structures.
pub mod structs;

/// Unit tests for the handler.
pub mod tests;
