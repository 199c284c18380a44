// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use std::collections::HashSet;

use unilife_core::EventStore;

/// Asserts that no id is listed twice across all days.
pub fn assert_no_duplicate_ids(store: &EventStore) {
    let mut seen = HashSet::new();
    for event in store.iter() {
        assert!(seen.insert(event.id()), "duplicate event id {}", event.id());
    }
    assert_eq!(seen.len(), store.len(), "index and days disagree on size");
}

/// Asserts the day-key invariants: every event sits under its start date, the
/// id index agrees, and no marked day is empty.
pub fn assert_store_consistent(store: &EventStore) {
    assert_no_duplicate_ids(store);
    for day in store.all_marked_days() {
        let events = store.events_for_day(day);
        assert!(!events.is_empty(), "marked day {day} has no events");
        for event in events {
            assert_eq!(event.day(), day, "event {} listed under wrong day", event.id());
            assert_eq!(store.day_of(event.id()), Some(day));
        }
    }
}
