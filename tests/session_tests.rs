use devicelog::core::{DeviceLog, FixedClock};
use devicelog::errors::AppError;
use devicelog::models::{Action, OwnerCounts};
use devicelog::store::{MemoryBackend, StorageBackend};
use std::io;

mod common;
use common::ts;

/// Backend whose writes always fail.
struct ReadOnlyBackend;

impl StorageBackend for ReadOnlyBackend {
    fn read(&self) -> io::Result<Option<Vec<u8>>> {
        Ok(None)
    }

    fn write(&self, _content: &[u8]) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
    }

    fn describe(&self) -> String {
        "read-only".to_string()
    }
}

fn open_memory() -> (DeviceLog<MemoryBackend, FixedClock>, MemoryBackend) {
    let backend = MemoryBackend::new();
    let log = DeviceLog::open(backend.clone(), FixedClock::new(ts(10, 8, 0, 0))).expect("open");
    (log, backend)
}

#[test]
fn test_checkout_then_checkin_counts_once_each() {
    let (mut log, _) = open_memory();

    log.submit_event("p1", Action::CheckOut).expect("out");
    log.submit_event("p1", Action::CheckIn).expect("in");

    let view = log.cumulative_view();
    assert_eq!(view.len(), 1);
    assert_eq!(view["p1"], OwnerCounts::new(1, 1));
}

#[test]
fn test_blank_owner_is_rejected_and_nothing_written() {
    let (mut log, backend) = open_memory();

    for owner in ["", "   ", "\t\n"] {
        let err = log.submit_event(owner, Action::CheckOut).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)), "got {err:?}");
    }

    assert!(log.events().is_empty());
    assert!(backend.content().is_none());
}

#[test]
fn test_blank_owner_keeps_previous_content() {
    let (mut log, backend) = open_memory();
    log.submit_event("p1", Action::CheckOut).expect("out");
    let before = backend.content();

    assert!(log.submit_event(" ", Action::CheckIn).is_err());

    assert_eq!(log.events().len(), 1);
    assert_eq!(backend.content(), before);
}

#[test]
fn test_owner_id_is_trimmed() {
    let (mut log, _) = open_memory();
    let ev = log.submit_event("  10101 ", Action::CheckOut).expect("out");
    assert_eq!(ev.owner_id, "10101");
}

#[test]
fn test_every_submit_is_persisted() {
    let backend = MemoryBackend::new();
    let clock = FixedClock::new(ts(10, 8, 0, 0));
    let mut log = DeviceLog::open(backend.clone(), clock).expect("open");

    log.submit_event("a", Action::CheckOut).expect("a");
    log.submit_event("b", Action::CheckOut).expect("b");

    let reopened = DeviceLog::open(backend, FixedClock::new(ts(11, 0, 0, 0))).expect("reopen");
    assert_eq!(reopened.events().as_slice(), log.events().as_slice());
}

#[test]
fn test_all_events_view_is_most_recent_first() {
    let clock = FixedClock::new(ts(10, 8, 0, 0));
    let mut log = DeviceLog::open(MemoryBackend::new(), &clock).expect("open");

    log.submit_event("early", Action::CheckOut).expect("early");
    clock.advance(3600);
    log.submit_event("late", Action::CheckIn).expect("late");

    let view = log.all_events_view();
    assert_eq!(view[0].owner_id, "late");
    assert_eq!(view[1].owner_id, "early");
    assert_eq!(view[0].timestamp_str(), "2025-03-10 09:00:00");

    // stored order is append order
    assert_eq!(log.events()[0].owner_id, "early");
}

#[test]
fn test_write_failure_keeps_collection_unchanged() {
    let mut log = DeviceLog::open(ReadOnlyBackend, FixedClock::new(ts(10, 8, 0, 0))).expect("open");

    let err = log.submit_event("p1", Action::CheckOut).unwrap_err();

    assert!(matches!(err, AppError::StorageWrite { .. }), "got {err:?}");
    assert!(log.events().is_empty());
}

#[test]
fn test_corrupt_store_fails_to_open() {
    let backend = MemoryBackend::with_content("id,type,when\n");
    let result = DeviceLog::open(backend, FixedClock::new(ts(10, 8, 0, 0)));
    assert!(matches!(result, Err(AppError::StorageCorrupt { .. })));
}
