//! Fixed-size page slicing over a filtered snapshot.
//!
//! Pages are 1-based and the requested page is clamped into range before
//! slicing, so out-of-range navigation (page 0, or a page that no longer
//! exists after a filter shrank the collection) degrades to the nearest valid
//! page instead of failing. The paginator is stateless per call; the consumer
//! owns [`PaginationState`] and is responsible for re-clamping it after every
//! filter change (the [`view`](crate::view) facade does this for you).

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// `ceil(len / page_size)`; zero for an empty collection.
pub fn total_pages(len: usize, page_size: NonZeroUsize) -> usize {
    len.div_ceil(page_size.get())
}

/// The current page as a zero-copy slice of `records`.
///
/// `current_page` is clamped to `[1, total_pages]`; an empty collection yields
/// an empty slice with page 1 treated as valid.
pub fn page<R>(records: &[R], page_size: NonZeroUsize, current_page: usize) -> &[R] {
    let total = total_pages(records.len(), page_size);
    if total == 0 {
        return &records[..0];
    }
    let index = current_page.clamp(1, total) - 1;
    let start = index * page_size.get();
    let end = (start + page_size.get()).min(records.len());
    &records[start..end]
}

/// Consumer-owned pagination cursor: page size plus a 1-based current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    pub page_size: NonZeroUsize,
    pub current_page: usize,
}

impl PaginationState {
    /// Start at page 1. Rejects a zero page size rather than guessing one.
    pub fn new(page_size: usize) -> Result<Self> {
        let page_size = NonZeroUsize::new(page_size).ok_or(Error::ZeroPageSize)?;
        Ok(Self {
            page_size,
            current_page: 1,
        })
    }

    pub fn total_pages(&self, filtered_count: usize) -> usize {
        total_pages(filtered_count, self.page_size)
    }

    /// The state with `current_page` pulled back into `[1, max(1, total)]`.
    /// Call after anything that changes the filtered collection's length.
    pub fn clamped(self, filtered_count: usize) -> Self {
        let last = self.total_pages(filtered_count).max(1);
        Self {
            current_page: self.current_page.clamp(1, last),
            ..self
        }
    }

    pub fn slice<'a, R>(&self, records: &'a [R]) -> &'a [R] {
        page(records, self.page_size, self.current_page)
    }
}
