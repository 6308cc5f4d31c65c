//! # View Facade
//!
//! The thin entry point a dashboard actually calls per render: filter the
//! snapshot, re-clamp the page cursor against the new filtered length, slice
//! the current page, and report the numbers the chrome needs (total pages,
//! active-filter badge count). It contains no logic of its own — every step is
//! the public component it delegates to, and consumers that need only one
//! stage use that stage directly.

use crate::filter::{self, FilterState};
use crate::model::Filterable;
use crate::page::PaginationState;

/// One rendered page of a filtered collection, plus the counters around it.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewPage<R> {
    pub items: Vec<R>,
    /// Survivors of the filter, before paging.
    pub filtered_count: usize,
    pub total_pages: usize,
    /// The page actually shown, after clamping. May differ from the
    /// requested page when a filter change shrank the collection.
    pub current_page: usize,
    /// Badge count, per [`FilterState::active_filter_count`].
    pub active_filters: usize,
}

/// Run the full pipeline for one render.
pub fn run<R: Filterable + Clone>(
    records: &[R],
    filter_state: &FilterState<R>,
    pagination: &PaginationState,
) -> ViewPage<R> {
    let filtered = filter::execute(records, filter_state);
    let cursor = (*pagination).clamped(filtered.len());

    ViewPage {
        filtered_count: filtered.len(),
        total_pages: cursor.total_pages(filtered.len()),
        current_page: cursor.current_page,
        active_filters: filter_state.active_filter_count(),
        items: cursor.slice(&filtered).to_vec(),
    }
}
