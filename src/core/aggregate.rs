//! Read-only views derived from an event collection. No I/O, no mutation.

use crate::models::{Action, Event, OwnerCounts};
use std::collections::BTreeMap;

/// All events, most recent first.
///
/// `sort_by` is stable: events sharing a timestamp keep their append order.
pub fn sorted_by_time_descending(events: &[Event]) -> Vec<Event> {
    let mut sorted = events.to_vec();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    sorted
}

/// Per-owner check-out / check-in counters.
///
/// Every owner appearing in either category is present; the missing
/// category is 0.
pub fn cumulative_counts(events: &[Event]) -> BTreeMap<String, OwnerCounts> {
    let mut counts: BTreeMap<String, OwnerCounts> = BTreeMap::new();

    for ev in events {
        let entry = counts.entry(ev.owner_id.clone()).or_default();
        match ev.action {
            Action::CheckOut => entry.checkout += 1,
            Action::CheckIn => entry.checkin += 1,
        }
    }

    counts
}

/// Events of a single owner (exact match), append order.
pub fn events_for_owner(events: &[Event], owner_id: &str) -> Vec<Event> {
    events
        .iter()
        .filter(|ev| ev.owner_id == owner_id)
        .cloned()
        .collect()
}

/// Owners whose check-outs exceed their check-ins.
pub fn owners_with_devices_out(counts: &BTreeMap<String, OwnerCounts>) -> Vec<&str> {
    counts
        .iter()
        .filter(|(_, c)| c.balance() > 0)
        .map(|(owner, _)| owner.as_str())
        .collect()
}
