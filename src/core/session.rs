//! Entry point used by the presentation layer (the CLI commands).

use crate::core::aggregate;
use crate::core::clock::{Clock, SystemClock};
use crate::errors::AppResult;
use crate::models::{Action, Event, OwnerCounts};
use crate::store::{EventCollection, EventStore, FileBackend, StorageBackend};
use std::collections::BTreeMap;
use std::path::Path;

/// One loaded event collection plus the store it came from.
pub struct DeviceLog<B: StorageBackend, C: Clock = SystemClock> {
    store: EventStore<B>,
    clock: C,
    events: EventCollection,
}

impl DeviceLog<FileBackend, SystemClock> {
    /// Open the CSV file at `path` with the wall clock.
    pub fn open_file(path: impl AsRef<Path>) -> AppResult<Self> {
        Self::open(FileBackend::new(path.as_ref()), SystemClock)
    }
}

impl<B: StorageBackend, C: Clock> DeviceLog<B, C> {
    /// Load the current collection from `backend`.
    pub fn open(backend: B, clock: C) -> AppResult<Self> {
        let store = EventStore::new(backend);
        let events = store.load()?;
        Ok(Self {
            store,
            clock,
            events,
        })
    }

    /// Validate, append and persist a new event.
    ///
    /// On a blank owner nothing is appended or written. On a write failure
    /// the in-memory collection is left as it was before the call.
    pub fn submit_event(&mut self, owner_id: &str, action: Action) -> AppResult<Event> {
        let event = Event::validated(owner_id, action, self.clock.now())?;

        let updated = self.store.append(&self.events, event.clone());
        self.store.persist(&updated)?;
        self.events = updated;

        Ok(event)
    }

    /// All events, most recent first.
    pub fn all_events_view(&self) -> Vec<Event> {
        aggregate::sorted_by_time_descending(&self.events)
    }

    /// Per-owner check-out / check-in counts.
    pub fn cumulative_view(&self) -> BTreeMap<String, OwnerCounts> {
        aggregate::cumulative_counts(&self.events)
    }

    /// Raw collection in append order.
    pub fn events(&self) -> &EventCollection {
        &self.events
    }
}
