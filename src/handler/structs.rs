//! Handler structures.

/// Stored representation of a captured response.
pub mod cached_response;

/// Per-request orchestrator shared by all workers.
pub mod cache_handler;

/// actix-web transform and service wrapping the orchestrator.
pub mod cache_middleware;
