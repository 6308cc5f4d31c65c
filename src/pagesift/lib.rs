//! # Pagesift Architecture
//!
//! Pagesift is a **UI-agnostic record-view engine**. Dashboard screens that show a
//! filterable, pageable table of records (enrollment requests, content items,
//! submissions) all repeat the same shape of glue code; this crate is that shape,
//! written once, as a library with no I/O assumptions.
//!
//! ## The Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Consumer (a UI view — out of scope)                        │
//! │  - Owns FilterState / PaginationState                       │
//! │  - Supplies an immutable snapshot of records                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Predicate Builder (filter/predicate.rs)                    │
//! │  - FilterState → one composite Record -> bool predicate     │
//! │  - AND across dimensions, match-all when unconstrained      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Filter Executor (filter/mod.rs)                            │
//! │  - Stable, order-preserving filter over the snapshot        │
//! │  - Active-filter count for UI badges                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Paginator (page.rs)                                        │
//! │  - Clamped 1-based page slicing, stateless per call         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The [`view`] module is a thin facade that runs the whole pipeline in one call
//! and discharges the re-clamping obligation for you. The [`debounce`] module
//! sits beside the pipeline: it delays re-running a text search until the user
//! stops typing, with explicit cancellation.
//!
//! ## Key Principle: No I/O Assumptions
//!
//! Everything in this crate:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Vec`, slices, `Result`)
//! - **Never** performs I/O, spawns threads, or installs timers
//! - **Never** caches across calls — every call recomputes from its inputs
//!
//! Records are generic: anything implementing [`model::Filterable`] can flow
//! through the pipeline, so request queues, content listings and submission
//! tables share one engine instead of three copies of it.
//!
//! ## State Ownership
//!
//! [`filter::FilterState`] and [`page::PaginationState`] are plain data owned by
//! the consumer. All filter mutation is routed through a single reducer,
//! [`filter::FilterState::apply`], which keeps raw UI input (including malformed
//! date strings) at the edge and the engine pure.

pub mod debounce;
pub mod error;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod filter;
pub mod model;
pub mod page;
pub mod view;

pub use debounce::{Debouncer, DEFAULT_WINDOW};
pub use error::{Error, Result};
pub use filter::{execute, FilterAction, FilterState};
pub use model::{DateRange, Filterable};
pub use page::{page, total_pages, PaginationState};
pub use view::{run as view, ViewPage};
