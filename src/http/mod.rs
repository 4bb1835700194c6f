//! Reverse-proxy listener for the standalone binary.
//!
//! Every request that does not hit the metrics route is forwarded to the
//! configured upstream origin. The forwarding service sits behind
//! [`CacheMiddleware`](crate::handler::structs::cache_middleware::CacheMiddleware),
//! so upstream responses are cached per the handler's configuration.
//!
//! # Routes
//!
//! - `metrics_path` (default `/metrics`) - Prometheus counters, never cached
//! - everything else - proxied to `upstream`
//!
//! Responses are compressed per client by actix's `Compress`, outside the
//! cache, so stored entries are always identity encoded; `accept-encoding`
//! is not forwarded upstream.
//!
//! Hop-by-hop headers are dropped in both directions. An unreachable
//! upstream answers `502 Bad Gateway`; like any other downstream response
//! it goes through the cache on a miss.

/// Data structures shared by the HTTP routes.
pub mod structs;

/// Core HTTP service implementation.
#[allow(clippy::module_inception)]
pub mod http;
