//! # Filter State and Its Reducer
//!
//! `FilterState` is an immutable-style snapshot of every active filter
//! criterion. Views never poke at the fields mid-render; all mutation goes
//! through [`FilterState::apply`], a reducer over [`FilterAction`] values. Two
//! things fall out of that:
//!
//! - Raw UI input stays at the edge. `SetDateRange` carries the strings the
//!   date picker produced; the reducer runs them through the lossy parser, so a
//!   malformed date degrades to "unconstrained" with a logged warning instead
//!   of an error surfacing mid-keystroke.
//! - The engine stays trivially unit-testable: build a state, apply actions,
//!   assert on the output. No DOM, no store, no ambient anything.
//!
//! ## The Active-Filter Count
//!
//! The badge number shown next to a dashboard's "Filters" button counts
//! *individual selected values* for the set dimensions (two statuses and one
//! priority is 3) but only *presence* for the date range (one bound or two is
//! still 1). That asymmetry is inherited behavior that real screens depend on;
//! it is a deliberate, tested contract, not an accident. The search box does
//! not contribute to the count.

use std::collections::HashSet;
use std::hash::Hash;

use crate::model::{DateRange, Filterable};

/// Every active filter criterion for one view. Empty sets, an empty search
/// term and an unset range all mean "no constraint on this dimension".
pub struct FilterState<R: Filterable> {
    pub search_term: String,
    pub status: HashSet<R::Status>,
    pub priority: HashSet<R::Priority>,
    pub courses: HashSet<R::Course>,
    pub date_range: DateRange,
}

/// A single state transition, typically produced by one UI interaction.
pub enum FilterAction<R: Filterable> {
    SetSearchTerm(String),
    ToggleStatus(R::Status),
    TogglePriority(R::Priority),
    ToggleCourse(R::Course),
    /// Replace the whole status selection (the "select all / none" controls).
    SetStatuses(HashSet<R::Status>),
    /// Raw date-picker input; malformed bounds degrade to unset.
    SetDateRange {
        start: Option<String>,
        end: Option<String>,
    },
    ClearAll,
}

impl<R: Filterable> Default for FilterState<R> {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            status: HashSet::new(),
            priority: HashSet::new(),
            courses: HashSet::new(),
            date_range: DateRange::default(),
        }
    }
}

impl<R: Filterable> Clone for FilterState<R> {
    fn clone(&self) -> Self {
        Self {
            search_term: self.search_term.clone(),
            status: self.status.clone(),
            priority: self.priority.clone(),
            courses: self.courses.clone(),
            date_range: self.date_range.clone(),
        }
    }
}

impl<R: Filterable> FilterState<R> {
    /// The single mutation path: consume the state, return the next one.
    pub fn apply(mut self, action: FilterAction<R>) -> Self {
        match action {
            FilterAction::SetSearchTerm(term) => self.search_term = term,
            FilterAction::ToggleStatus(value) => toggle(&mut self.status, value),
            FilterAction::TogglePriority(value) => toggle(&mut self.priority, value),
            FilterAction::ToggleCourse(value) => toggle(&mut self.courses, value),
            FilterAction::SetStatuses(values) => self.status = values,
            FilterAction::SetDateRange { start, end } => {
                self.date_range = DateRange::parse_lossy(start.as_deref(), end.as_deref());
            }
            FilterAction::ClearAll => return Self::default(),
        }
        self
    }

    /// How many individual filter values are active, for UI badges.
    ///
    /// Set dimensions contribute their cardinality; a set date range
    /// contributes exactly 1 whether one or both bounds are present.
    pub fn active_filter_count(&self) -> usize {
        let mut count = self.status.len() + self.priority.len() + self.courses.len();
        if !self.date_range.is_unset() {
            count += 1;
        }
        count
    }
}

fn toggle<T: Eq + Hash>(set: &mut HashSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{Priority, Request, Status};

    #[test]
    fn toggle_adds_then_removes() {
        let state = FilterState::<Request>::default()
            .apply(FilterAction::ToggleStatus(Status::Pending))
            .apply(FilterAction::ToggleStatus(Status::Approved));
        assert_eq!(state.status.len(), 2);

        let state = state.apply(FilterAction::ToggleStatus(Status::Pending));
        assert_eq!(state.status.len(), 1);
        assert!(state.status.contains(&Status::Approved));
    }

    #[test]
    fn set_statuses_replaces_the_selection() {
        let state = FilterState::<Request>::default()
            .apply(FilterAction::ToggleStatus(Status::Pending))
            .apply(FilterAction::SetStatuses(HashSet::from([
                Status::Approved,
                Status::Rejected,
            ])));

        assert!(!state.status.contains(&Status::Pending));
        assert_eq!(state.status.len(), 2);
    }

    #[test]
    fn clear_all_returns_to_default() {
        let state = FilterState::<Request>::default()
            .apply(FilterAction::SetSearchTerm("alice".into()))
            .apply(FilterAction::TogglePriority(Priority::High))
            .apply(FilterAction::ClearAll);

        assert_eq!(state.active_filter_count(), 0);
        assert!(state.search_term.is_empty());
    }

    #[test]
    fn malformed_date_input_leaves_range_unset() {
        let state = FilterState::<Request>::default().apply(FilterAction::SetDateRange {
            start: Some("01/05/2024".into()),
            end: None,
        });
        assert!(state.date_range.is_unset());
        assert_eq!(state.active_filter_count(), 0);
    }

    #[test]
    fn count_mixes_cardinality_and_presence() {
        let state = FilterState::<Request>::default()
            .apply(FilterAction::ToggleStatus(Status::Pending))
            .apply(FilterAction::ToggleStatus(Status::Rejected))
            .apply(FilterAction::TogglePriority(Priority::High))
            .apply(FilterAction::SetDateRange {
                start: Some("2024-01-01".into()),
                end: Some("2024-02-01".into()),
            });

        // 2 statuses + 1 priority + 1 for the range, bounds notwithstanding
        assert_eq!(state.active_filter_count(), 4);
    }

    #[test]
    fn search_term_does_not_count() {
        let state =
            FilterState::<Request>::default().apply(FilterAction::SetSearchTerm("query".into()));
        assert_eq!(state.active_filter_count(), 0);
    }
}
