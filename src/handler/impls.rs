//! Implementation blocks for the handler.

/// Outcome header values and counter mapping.
pub mod cache_status;

/// Capture, encoding and replay of responses.
pub mod cached_response;

/// Conversion between header values and their stored form.
pub mod header_text;

/// Provisioning and the hit/miss/bypass flow.
pub mod cache_handler;

/// actix-web `Transform`/`Service` plumbing.
pub mod cache_middleware;
