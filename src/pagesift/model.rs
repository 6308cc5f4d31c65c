//! # Record Capabilities and the Date Range
//!
//! The engine never hardcodes record shapes. A dashboard over enrollment
//! requests and a dashboard over content items differ only in *which* fields are
//! searchable and *which* enums are filterable; the filtering logic is the same.
//! [`Filterable`] captures exactly that minimal capability surface:
//!
//! - an identity (`id`) and a creation timestamp (`created_at`), which every
//!   record has,
//! - up to three enum-like filter dimensions (`status`, `priority`, `course`),
//! - a caller-chosen list of searchable string fields.
//!
//! A record kind that lacks a dimension keeps the default `None` implementation
//! (and can use `()` as the associated type); an empty filter set matches
//! everything anyway, so the dimension simply never constrains.
//!
//! [`DateRange`] is the one filter dimension with its own parsing rules, because
//! its values arrive from the UI as raw strings. Malformed input must never take
//! a dashboard down, so the reducer path uses [`DateRange::parse_lossy`], which
//! drops bad bounds with a logged diagnostic instead of failing.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The minimal capability interface a record needs to flow through the engine.
///
/// Implementations should be cheap: accessors return borrows, and
/// `search_fields` is expected to list a handful of already-owned string fields
/// (name, email, title, message), not to allocate.
pub trait Filterable {
    type Id: Eq + Clone;
    type Status: Eq + std::hash::Hash + Clone;
    type Priority: Eq + std::hash::Hash + Clone;
    type Course: Eq + std::hash::Hash + Clone;

    fn id(&self) -> &Self::Id;

    fn created_at(&self) -> DateTime<Utc>;

    /// The record's status, if this record kind has one.
    fn status(&self) -> Option<&Self::Status> {
        None
    }

    /// The record's priority, if this record kind has one.
    fn priority(&self) -> Option<&Self::Priority> {
        None
    }

    /// The owning course (or other parent collection), if any.
    fn course(&self) -> Option<&Self::Course> {
        None
    }

    /// String fields the text search should look at, in no particular order.
    fn search_fields(&self) -> Vec<&str> {
        Vec::new()
    }
}

/// An inclusive `created_at` window. Either bound may be unset; both unset
/// means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl DateRange {
    pub fn new(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        Self { start, end }
    }

    /// Parse raw UI input strictly. Empty or whitespace-only input is treated
    /// as an unset bound; anything else must be RFC 3339 or `YYYY-MM-DD`.
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Result<Self> {
        Ok(Self {
            start: parse_bound(start)?,
            end: parse_bound(end)?,
        })
    }

    /// Parse raw UI input leniently: a malformed bound becomes unset (the
    /// dimension stops constraining on that side) and a diagnostic is logged.
    ///
    /// This is the path the [`FilterState::apply`](crate::filter::FilterState::apply)
    /// reducer takes, so a typo in a date picker never breaks a dashboard.
    pub fn parse_lossy(start: Option<&str>, end: Option<&str>) -> Self {
        let lossy = |raw: Option<&str>| match parse_bound(raw) {
            Ok(bound) => bound,
            Err(err) => {
                log::warn!("ignoring malformed date bound: {err}");
                None
            }
        };
        Self {
            start: lossy(start),
            end: lossy(end),
        }
    }

    pub fn is_unset(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Whether `at` falls inside the window. Unset bounds do not constrain.
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        if self.start.is_some_and(|start| at < start) {
            return false;
        }
        if self.end.is_some_and(|end| at > end) {
            return false;
        }
        true
    }
}

/// Parse one bound. Bare dates (`2024-01-05`) mean midnight UTC, matching how
/// the upstream dashboards interpreted date-picker values.
fn parse_bound(raw: Option<&str>) -> Result<Option<DateTime<Utc>>> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(at.with_timezone(&Utc)));
    }

    match NaiveDate::from_str(raw) {
        Ok(date) => Ok(Some(date.and_time(NaiveTime::MIN).and_utc())),
        Err(source) => Err(Error::InvalidDate {
            value: raw.to_string(),
            source,
        }),
    }
}
