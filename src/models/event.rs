use super::action::Action;
use crate::errors::{AppError, AppResult};
use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;

/// Storage / display format of event timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Event {
    pub owner_id: String,         // ⇔ 학생ID (free text, never blank)
    pub action: Action,           // ⇔ 구분 ('반출' | '반입')
    pub timestamp: NaiveDateTime, // ⇔ 시간 ("YYYY-MM-DD HH:MM:SS")
}

impl Event {
    /// Build an event from already trusted parts.
    /// Sub-second precision is dropped so that the in-memory value always
    /// equals what is written to the store.
    pub fn new(owner_id: impl Into<String>, action: Action, timestamp: NaiveDateTime) -> Self {
        Self {
            owner_id: owner_id.into(),
            action,
            timestamp: timestamp.with_nanosecond(0).unwrap_or(timestamp),
        }
    }

    /// Build an event from user input.
    /// - trims the owner id
    /// - rejects a blank owner id with `AppError::Validation`
    pub fn validated(owner_id: &str, action: Action, timestamp: NaiveDateTime) -> AppResult<Self> {
        let owner = owner_id.trim();
        if owner.is_empty() {
            return Err(AppError::Validation("Owner id must not be empty".into()));
        }
        Ok(Self::new(owner, action, timestamp))
    }

    pub fn timestamp_str(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).ok()
    }
}
