//! Cache traits.

/// The three-operation store contract.
pub mod cache_backend;
