//! Implementation blocks for deciders.

/// Evaluation of a single decider and of the pipeline.
pub mod decider;
