//! Candidate business record validation.
//!
//! Provides the fixed rule set, a pure-logic evaluator, and batch
//! partitioning into accepted records and aggregated error messages — all
//! without database dependencies.

pub mod batch;
pub mod evaluator;
pub mod rules;

pub use batch::{validate_batch, validate_businesses, ValidationOutcome};
