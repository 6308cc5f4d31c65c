//! Compiles a [`FilterState`] into one composite predicate.
//!
//! A record passes iff it passes **every** dimension: text search, status,
//! priority, course, and date range (logical AND). Unconstrained dimensions
//! match everything. The one wrinkle worth stating: a record that has *no*
//! value for a dimension (`None`) fails that dimension when it is constrained —
//! selecting a status means "show records with one of these statuses", and a
//! record without a status isn't one of them.

use std::collections::HashSet;
use std::hash::Hash;

use super::FilterState;
use crate::model::Filterable;

/// A pure `Record -> bool` check built from one filter snapshot.
///
/// Construction lower-cases and trims the search term once, so matching a
/// whole collection pays the normalization cost a single time.
pub struct Predicate<'a, R: Filterable> {
    state: &'a FilterState<R>,
    needle: Option<String>,
}

impl<'a, R: Filterable> Predicate<'a, R> {
    pub fn new(state: &'a FilterState<R>) -> Self {
        let term = state.search_term.trim().to_lowercase();
        let needle = (!term.is_empty()).then_some(term);
        Self { state, needle }
    }

    /// No I/O, no mutation; safe to call in any order, any number of times.
    pub fn matches(&self, record: &R) -> bool {
        self.matches_search(record)
            && member_or_unconstrained(&self.state.status, record.status())
            && member_or_unconstrained(&self.state.priority, record.priority())
            && member_or_unconstrained(&self.state.courses, record.course())
            && self.state.date_range.contains(record.created_at())
    }

    /// Case-insensitive substring match against any configured search field.
    fn matches_search(&self, record: &R) -> bool {
        let Some(needle) = &self.needle else {
            return true;
        };
        record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle.as_str()))
    }
}

fn member_or_unconstrained<T: Eq + Hash>(set: &HashSet<T>, value: Option<&T>) -> bool {
    if set.is_empty() {
        return true;
    }
    value.is_some_and(|value| set.contains(value))
}
