//! Decider enumerations.

/// The bypass predicates.
pub mod decider;
