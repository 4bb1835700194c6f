//! Handler enumerations.

/// Terminal outcome of a request.
pub mod cache_status;

/// Lossless stored header value.
pub mod header_text;
