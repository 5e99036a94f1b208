//! Durable, append-only storage of the event collection.

pub mod backend;
pub mod codec;
pub mod oplog;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};

use crate::errors::{AppError, AppResult};
use crate::models::Event;
use std::ops::Deref;

/// Ordered sequence of events, insertion order = append order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventCollection {
    events: Vec<Event>,
}

impl EventCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[Event] {
        &self.events
    }
}

impl Deref for EventCollection {
    type Target = [Event];

    fn deref(&self) -> &[Event] {
        &self.events
    }
}

impl From<Vec<Event>> for EventCollection {
    fn from(events: Vec<Event>) -> Self {
        Self { events }
    }
}

/// Loads and persists the event collection through an injected backend.
pub struct EventStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> EventStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Read the whole collection.
    /// - store absent → empty collection
    /// - store present but not matching the layout → `StorageCorrupt`
    pub fn load(&self) -> AppResult<EventCollection> {
        match self.backend.read()? {
            None => Ok(EventCollection::new()),
            Some(bytes) => {
                let events = codec::decode(&bytes, &self.backend.describe())?;
                Ok(EventCollection::from(events))
            }
        }
    }

    /// Return a new collection with `event` at the end; `collection` is untouched.
    pub fn append(&self, collection: &EventCollection, event: Event) -> EventCollection {
        let mut events = Vec::with_capacity(collection.len() + 1);
        events.extend_from_slice(collection.as_slice());
        events.push(event);
        EventCollection::from(events)
    }

    /// Replace the stored content with the full collection.
    pub fn persist(&self, collection: &EventCollection) -> AppResult<()> {
        let bytes = codec::encode(collection.as_slice())?;
        self.backend
            .write(&bytes)
            .map_err(|source| AppError::StorageWrite {
                target: self.backend.describe(),
                source,
            })
    }

    /// Write a header-only store if none exists yet.
    /// Returns `true` when a new store was created.
    pub fn ensure_initialized(&self) -> AppResult<bool> {
        if self.backend.read()?.is_some() {
            // an existing store must still be readable
            self.load()?;
            return Ok(false);
        }
        self.persist(&EventCollection::new())?;
        Ok(true)
    }
}
