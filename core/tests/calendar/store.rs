// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! EventStore integration tests.
//!
//! Tests the day-key bookkeeping of upsert and remove.

use jiff::civil::{date, datetime};
use unilife_core::{Config, EventDraft, EventForm};

use crate::common::{assert_store_consistent, calculus_draft, test_event_draft, test_store};

fn form() -> EventForm {
    EventForm::new(&Config::new())
}

#[test]
fn inserted_event_is_listed_under_its_start_day() {
    let mut store = test_store();
    let event = form()
        .normalize(EventDraft {
            id: Some("1".to_string()),
            ..calculus_draft()
        })
        .unwrap();
    store.upsert(event);

    let events = store.events_for_day(date(2025, 3, 9));
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id(), "1");
    assert_eq!(events[0].title(), "Calculus");
    assert!(store.all_marked_days().contains(&date(2025, 3, 9)));
    assert_store_consistent(&store);
}

#[test]
fn unknown_day_has_no_events() {
    let store = test_store();
    assert!(store.events_for_day(date(2025, 3, 9)).is_empty());
    assert!(store.all_marked_days().is_empty());
}

#[test]
fn moving_start_date_moves_event_and_unmarks_old_day() {
    let mut store = test_store();
    let form = form();
    store.upsert(
        form.normalize(EventDraft {
            id: Some("1".to_string()),
            ..calculus_draft()
        })
        .unwrap(),
    );
    store.upsert(
        form.normalize(EventDraft {
            id: Some("1".to_string()),
            start: datetime(2025, 3, 10, 8, 0, 0, 0),
            end: datetime(2025, 3, 10, 10, 0, 0, 0),
            ..calculus_draft()
        })
        .unwrap(),
    );

    assert!(store.events_for_day(date(2025, 3, 9)).is_empty());
    assert!(!store.all_marked_days().contains(&date(2025, 3, 9)));
    let moved = store.events_for_day(date(2025, 3, 10));
    assert_eq!(moved.len(), 1);
    assert_eq!(moved[0].id(), "1");
    assert_eq!(store.len(), 1);
    assert_store_consistent(&store);
}

#[test]
fn repeated_upserts_never_duplicate_an_id() {
    let mut store = test_store();
    let form = form();
    for hour in 8..12 {
        let draft = EventDraft {
            id: Some("same".to_string()),
            start: datetime(2025, 3, 9, hour, 0, 0, 0),
            end: datetime(2025, 3, 9, hour, 30, 0, 0),
            ..calculus_draft()
        };
        store.upsert(form.normalize(draft).unwrap());
        assert_store_consistent(&store);
    }
    assert_eq!(store.len(), 1);
    assert_eq!(store.get("same").unwrap().start(), datetime(2025, 3, 9, 11, 0, 0, 0));
}

#[test]
fn remove_prunes_empty_day() {
    let mut store = test_store();
    let form = form();
    let keep = form
        .normalize(test_event_draft(
            "Data Structures",
            datetime(2025, 3, 10, 8, 0, 0, 0),
            datetime(2025, 3, 10, 10, 0, 0, 0),
        ))
        .unwrap();
    let drop = form.normalize(calculus_draft()).unwrap();
    let drop_id = drop.id().to_owned();
    store.upsert(keep);
    store.upsert(drop);

    let removed = store.remove(&drop_id).unwrap();
    assert_eq!(removed.title(), "Calculus");
    assert!(store.events_for_day(date(2025, 3, 9)).is_empty());
    assert!(store.iter().all(|e| e.id() != drop_id));
    assert_eq!(
        store.all_marked_days().into_iter().collect::<Vec<_>>(),
        [date(2025, 3, 10)]
    );
    assert_store_consistent(&store);
}

#[test]
fn remove_keeps_other_events_of_the_day() {
    let mut store = test_store();
    let form = form();
    let a = form.normalize(calculus_draft()).unwrap();
    let b = form
        .normalize(test_event_draft(
            "Web Programming",
            datetime(2025, 3, 9, 10, 15, 0, 0),
            datetime(2025, 3, 9, 12, 15, 0, 0),
        ))
        .unwrap();
    let a_id = a.id().to_owned();
    store.upsert(a);
    store.upsert(b);

    store.remove(&a_id);
    let left = store.events_for_day(date(2025, 3, 9));
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].title(), "Web Programming");
    assert!(store.all_marked_days().contains(&date(2025, 3, 9)));
}

#[test]
fn removing_unknown_id_is_a_no_op() {
    let mut store = test_store();
    store.upsert(form().normalize(calculus_draft()).unwrap());
    assert!(store.remove("missing").is_none());
    assert_eq!(store.len(), 1);
    assert_store_consistent(&store);
}

#[test]
fn event_starting_at_midnight_belongs_to_that_day() {
    let mut store = test_store();
    let event = form()
        .normalize(test_event_draft(
            "Night Owl",
            datetime(2025, 3, 9, 23, 30, 0, 0),
            datetime(2025, 3, 10, 0, 30, 0, 0),
        ))
        .unwrap();
    store.upsert(event);
    assert_eq!(store.events_for_day(date(2025, 3, 9)).len(), 1);
    assert!(store.events_for_day(date(2025, 3, 10)).is_empty());
}
