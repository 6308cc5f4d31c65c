//! Shared fixtures for unit tests: a fully-featured record kind standing in
//! for an instructor dashboard's enrollment-request rows.

use chrono::{DateTime, TimeZone, Utc};

use crate::model::Filterable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    Low,
    Normal,
    High,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub id: u32,
    pub created_at: DateTime<Utc>,
    pub status: Status,
    pub priority: Priority,
    pub course: String,
    pub student: String,
    pub message: String,
}

impl Filterable for Request {
    type Id = u32;
    type Status = Status;
    type Priority = Priority;
    type Course = String;

    fn id(&self) -> &u32 {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn status(&self) -> Option<&Status> {
        Some(&self.status)
    }

    fn priority(&self) -> Option<&Priority> {
        Some(&self.priority)
    }

    fn course(&self) -> Option<&String> {
        Some(&self.course)
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.student, &self.message]
    }
}

pub fn request(id: u32, (y, m, d): (i32, u32, u32), status: Status) -> Request {
    Request {
        id,
        created_at: Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap(),
        status,
        priority: Priority::Normal,
        course: "crs-algebra".into(),
        student: format!("Student {id}"),
        message: "Requesting enrollment".into(),
    }
}
