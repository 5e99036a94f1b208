use devicelog::core::aggregate::{
    cumulative_counts, events_for_owner, owners_with_devices_out, sorted_by_time_descending,
};
use devicelog::models::{Action, Event, OwnerCounts};

mod common;
use common::ts;

#[test]
fn test_counts_of_empty_collection_is_empty() {
    assert!(cumulative_counts(&[]).is_empty());
}

#[test]
fn test_counts_fill_missing_category_with_zero() {
    let events = vec![
        Event::new("A", Action::CheckOut, ts(1, 8, 0, 0)),
        Event::new("A", Action::CheckOut, ts(1, 9, 0, 0)),
        Event::new("A", Action::CheckIn, ts(1, 10, 0, 0)),
        Event::new("B", Action::CheckIn, ts(1, 11, 0, 0)),
    ];

    let counts = cumulative_counts(&events);

    assert_eq!(counts.len(), 2);
    assert_eq!(counts["A"], OwnerCounts::new(2, 1));
    assert_eq!(counts["B"], OwnerCounts::new(0, 1));
}

#[test]
fn test_sort_descending_keeps_append_order_on_ties() {
    let t1 = ts(2, 8, 0, 0);
    let t2 = ts(2, 9, 0, 0);
    let events = vec![
        Event::new("first", Action::CheckOut, t1),
        Event::new("second", Action::CheckOut, t2),
        Event::new("third", Action::CheckIn, t1),
    ];

    let sorted = sorted_by_time_descending(&events);
    let owners: Vec<&str> = sorted.iter().map(|e| e.owner_id.as_str()).collect();

    assert_eq!(owners, ["second", "first", "third"]);
    // input untouched
    assert_eq!(events[0].owner_id, "first");
}

#[test]
fn test_sort_orders_across_days() {
    let events = vec![
        Event::new("a", Action::CheckOut, ts(3, 23, 59, 59)),
        Event::new("b", Action::CheckOut, ts(4, 0, 0, 0)),
        Event::new("c", Action::CheckOut, ts(2, 12, 0, 0)),
    ];

    let owners: Vec<String> = sorted_by_time_descending(&events)
        .into_iter()
        .map(|e| e.owner_id)
        .collect();

    assert_eq!(owners, ["b", "a", "c"]);
}

#[test]
fn test_events_for_owner_is_exact_match() {
    let events = vec![
        Event::new("p1", Action::CheckOut, ts(1, 8, 0, 0)),
        Event::new("p10", Action::CheckOut, ts(1, 8, 1, 0)),
        Event::new("p1", Action::CheckIn, ts(1, 9, 0, 0)),
    ];

    let p1 = events_for_owner(&events, "p1");
    assert_eq!(p1.len(), 2);
    assert!(p1.iter().all(|e| e.owner_id == "p1"));
}

#[test]
fn test_balance_and_devices_out() {
    let events = vec![
        Event::new("A", Action::CheckOut, ts(1, 8, 0, 0)),
        Event::new("B", Action::CheckOut, ts(1, 8, 0, 0)),
        Event::new("B", Action::CheckIn, ts(1, 9, 0, 0)),
        Event::new("C", Action::CheckIn, ts(1, 9, 0, 0)),
    ];
    let counts = cumulative_counts(&events);

    assert_eq!(counts["A"].balance(), 1);
    assert_eq!(counts["B"].balance(), 0);
    assert_eq!(counts["C"].balance(), -1);
    assert_eq!(counts["B"].total(), 2);
    assert_eq!(owners_with_devices_out(&counts), vec!["A"]);
}
