// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Event lifecycle workflow tests.
//!
//! Create, edit, move and delete events through the session intents, re-reading
//! the active day after each one the way a screen does.

use jiff::civil::{date, datetime};
use unilife_core::{CampusError, EventDraft, FieldError};

use crate::common::{assert_store_consistent, calculus_draft, test_campus, test_event_draft};

#[test]
fn create_shows_up_on_active_day() {
    let mut campus = test_campus();
    let id = campus.submit_create(calculus_draft()).unwrap().id().to_owned();

    assert_eq!(campus.current(), date(2025, 3, 9));
    let today = campus.events_today();
    assert_eq!(today.len(), 1);
    assert_eq!(today[0].id(), id);
    assert!(campus.all_marked_days().contains(&date(2025, 3, 9)));
}

#[test]
fn create_ignores_id_on_the_draft() {
    let mut campus = test_campus();
    let first = campus.submit_create(calculus_draft()).unwrap().id().to_owned();
    let draft = EventDraft {
        id: Some(first.clone()),
        ..calculus_draft()
    };
    let second = campus.submit_create(draft).unwrap().id().to_owned();

    assert_ne!(first, second);
    assert_eq!(campus.events_today().len(), 2);
}

#[test]
fn invalid_create_leaves_store_untouched() {
    let mut campus = test_campus();
    let draft = EventDraft {
        title: String::new(),
        start: datetime(2025, 3, 9, 10, 0, 0, 0),
        end: datetime(2025, 3, 9, 9, 0, 0, 0),
        ..calculus_draft()
    };
    match campus.submit_create(draft) {
        Err(CampusError::Validation(err)) => {
            assert_eq!(
                err.errors(),
                &[FieldError::MissingTitle, FieldError::EndBeforeStart]
            );
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(campus.events().is_empty());
    assert!(campus.all_marked_days().is_empty());
}

#[test]
fn edit_moves_event_to_new_day() {
    let mut campus = test_campus();
    let created = campus.submit_create(calculus_draft()).unwrap().clone();

    let draft = EventDraft {
        start: datetime(2025, 3, 10, 8, 0, 0, 0),
        end: datetime(2025, 3, 10, 10, 0, 0, 0),
        ..EventDraft::from_event(&created)
    };
    campus.submit_edit(created.id(), draft).unwrap();

    assert!(campus.events_for_day(date(2025, 3, 9)).is_empty());
    assert!(!campus.all_marked_days().contains(&date(2025, 3, 9)));
    let moved = campus.events_for_day(date(2025, 3, 10));
    assert_eq!(moved.len(), 1);
    assert_eq!(moved[0].id(), created.id());

    campus.next_day();
    assert_eq!(campus.events_today()[0].id(), created.id());
    assert_store_consistent(campus.events());
}

#[test]
fn edit_of_unknown_id_is_not_found() {
    let mut campus = test_campus();
    let err = campus.submit_edit("ghost", calculus_draft()).unwrap_err();
    assert!(matches!(err, CampusError::NotFound(id) if id == "ghost"));
    assert!(campus.events().is_empty());
}

#[test]
fn invalid_edit_keeps_the_old_event() {
    let mut campus = test_campus();
    let created = campus.submit_create(calculus_draft()).unwrap().clone();
    let draft = EventDraft {
        title: "  ".to_string(),
        ..EventDraft::from_event(&created)
    };
    assert!(campus.submit_edit(created.id(), draft).is_err());
    assert_eq!(campus.event(created.id()), Some(&created));
}

#[test]
fn delete_then_day_is_unmarked() {
    let mut campus = test_campus();
    let id = campus.submit_create(calculus_draft()).unwrap().id().to_owned();

    let removed = campus.delete(&id).unwrap();
    assert_eq!(removed.title(), "Calculus");
    assert!(campus.events_today().is_empty());
    assert!(campus.all_marked_days().is_empty());
    assert!(campus.delete(&id).is_none());
}

#[test]
fn seeded_week_renders_per_day() {
    let mut campus = test_campus();
    for (title, start, end) in [
        ("Calculus III", (9, 8, 0), (9, 10, 0)),
        ("Study Group", (9, 16, 30), (9, 18, 0)),
        ("Web Programming", (9, 10, 15), (9, 12, 15)),
        ("Data Structures", (10, 8, 0), (10, 10, 0)),
        ("Databases", (11, 10, 15), (11, 12, 15)),
    ] {
        let draft = test_event_draft(
            title,
            datetime(2025, 3, start.0, start.1, start.2, 0, 0),
            datetime(2025, 3, end.0, end.1, end.2, 0, 0),
        );
        campus.submit_create(draft).unwrap();
    }

    let titles: Vec<_> = campus.events_today().iter().map(|e| e.title()).collect();
    assert_eq!(titles, ["Calculus III", "Web Programming", "Study Group"]);

    campus.toggle_expanded();
    campus.tap_day(date(2025, 3, 11));
    assert!(!campus.is_expanded());
    assert_eq!(campus.events_today()[0].title(), "Databases");

    campus.previous_day();
    assert_eq!(campus.events_today()[0].title(), "Data Structures");

    assert_eq!(campus.all_marked_days().len(), 3);
    assert_store_consistent(campus.events());
}

#[test]
fn default_draft_lands_on_active_day() {
    let mut campus = test_campus();
    campus.tap_day(date(2025, 3, 20));
    let draft = campus.default_event_draft(datetime(2025, 3, 9, 14, 5, 0, 0));
    assert_eq!(draft.start, datetime(2025, 3, 20, 14, 5, 0, 0));
    assert_eq!(draft.end, datetime(2025, 3, 20, 15, 5, 0, 0));
}
