// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! EventForm integration tests.
//!
//! Tests field-level validation and normalization of drafts.

use jiff::SignedDuration;
use jiff::civil::datetime;
use unilife_core::{Config, EventCategory, EventDraft, EventForm, FieldError};

use crate::common::calculus_draft;

#[test]
fn empty_title_is_missing_title() {
    let form = EventForm::new(&Config::new());
    let draft = EventDraft {
        title: String::new(),
        ..calculus_draft()
    };
    let errors = form.validate(&draft);
    assert_eq!(errors, [FieldError::MissingTitle]);
    assert_eq!(errors[0].as_ref(), "missing-title");
}

#[test]
fn end_before_start_is_reported() {
    let form = EventForm::new(&Config::new());
    let draft = EventDraft {
        start: datetime(2025, 3, 9, 10, 0, 0, 0),
        end: datetime(2025, 3, 9, 9, 0, 0, 0),
        ..calculus_draft()
    };
    let err = form.normalize(draft).unwrap_err();
    assert!(err.contains(FieldError::EndBeforeStart));
    assert_eq!(err.to_string(), "invalid form: end-before-start");
}

#[test]
fn default_draft_fails_only_on_required_text() {
    let form = EventForm::new(&Config::new());
    let draft = EventDraft::new(datetime(2025, 3, 9, 8, 0, 0, 0), SignedDuration::from_hours(1));
    assert_eq!(
        form.validate(&draft),
        [FieldError::MissingTitle, FieldError::MissingLocation]
    );
}

#[test]
fn normalized_event_carries_all_fields() {
    let form = EventForm::new(&Config::new());
    let draft = EventDraft {
        category: EventCategory::Study,
        notes: "Bring the exercise list".to_string(),
        ..calculus_draft()
    };
    let event = form.normalize(draft).unwrap();
    assert_eq!(event.title(), "Calculus");
    assert_eq!(event.location(), "Room 201");
    assert_eq!(event.category(), EventCategory::Study);
    assert_eq!(event.notes(), Some("Bring the exercise list"));
    assert_eq!(event.time_range(), "08:00 - 10:00");
    assert_eq!(event.category().style().label, "Study");
}

#[test]
fn edit_round_trip_keeps_identity() {
    let form = EventForm::new(&Config::new());
    let created = form.normalize(calculus_draft()).unwrap();
    let edited = form
        .normalize(EventDraft {
            title: "Calculus III".to_string(),
            ..EventDraft::from_event(&created)
        })
        .unwrap();
    assert_eq!(edited.id(), created.id());
    assert_eq!(edited.title(), "Calculus III");
    assert_eq!(edited.start(), created.start());
}
