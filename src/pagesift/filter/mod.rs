//! Filtering: state, predicate building, and the executor.
//!
//! The split mirrors the pipeline: [`FilterState`] is plain data owned by the
//! consumer and mutated only through its reducer; [`Predicate`] compiles that
//! state into one composite `Record -> bool` check; [`execute`] applies the
//! predicate over a snapshot. Filtering is **stable**: survivors keep their
//! original relative order, and the all-default state returns the input
//! unchanged (the identity law the integration tests pin down).

pub mod predicate;
pub mod state;

pub use predicate::Predicate;
pub use state::{FilterAction, FilterState};

use crate::model::Filterable;

/// Apply `state` to a record snapshot, preserving input order.
///
/// Pure and allocation-proportional to the number of survivors; collections on
/// these dashboards are tens to low hundreds of records, so there is no
/// caching and no incremental path. Every call recomputes from its inputs.
pub fn execute<R: Filterable + Clone>(records: &[R], state: &FilterState<R>) -> Vec<R> {
    let predicate = Predicate::new(state);
    records
        .iter()
        .filter(|record| predicate.matches(record))
        .cloned()
        .collect()
}
