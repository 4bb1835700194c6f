//! Bypass decision pipeline.
//!
//! An ordered list of predicates built once from `BypassConfig`. A request
//! bypasses the cache when any decider fires; the pipeline is a plain OR, so
//! ordering only decides which decider reports first, never the outcome.
//!
//! # Deciders
//!
//! - **Path**: first path segment matches a configured token (case-insensitive)
//! - **Method**: request method is in the configured set (case-insensitive)
//! - **Cookie**: a cookie name matches one of the configured patterns

/// Decider enumeration.
pub mod enums;

/// Construction and evaluation of deciders.
pub mod impls;

/// Unit tests for the deciders.
pub mod tests;
