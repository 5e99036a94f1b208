// src/export/model.rs

use crate::models::{Event, OwnerCounts};
use serde::Serialize;

/// Flat event row for export.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct EventExport {
    pub owner_id: String,
    pub action: String,
    pub timestamp: String,
}

impl From<&Event> for EventExport {
    fn from(ev: &Event) -> Self {
        Self {
            owner_id: ev.owner_id.clone(),
            action: ev.action.as_str().to_string(),
            timestamp: ev.timestamp_str(),
        }
    }
}

/// Flat per-owner counters row for export.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SummaryExport {
    pub owner_id: String,
    pub checkout: u64,
    pub checkin: u64,
}

impl SummaryExport {
    pub fn new(owner_id: &str, counts: &OwnerCounts) -> Self {
        Self {
            owner_id: owner_id.to_string(),
            checkout: counts.checkout,
            checkin: counts.checkin,
        }
    }
}
