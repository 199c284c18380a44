// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Assignment workflow tests.
//!
//! Mark coursework done and undone through the campus session.

use jiff::civil::datetime;
use unilife_core::{Assignment, CampusError};

use crate::common::test_campus;

fn physics_report() -> Assignment {
    Assignment {
        id: "1".to_string(),
        title: "Physics Report".to_string(),
        subject: "Physics III".to_string(),
        due: datetime(2025, 3, 10, 23, 59, 0, 0),
        completed: false,
    }
}

#[test]
fn toggle_marks_done_then_pending_again() {
    let mut campus = test_campus();
    campus.assignments_mut().add(physics_report());

    assert!(campus.toggle_assignment("1").unwrap());
    assert!(campus.assignments().pending().is_empty());

    assert!(!campus.toggle_assignment("1").unwrap());
    assert_eq!(campus.assignments().pending().len(), 1);
}

#[test]
fn toggle_unknown_assignment_is_not_found() {
    let mut campus = test_campus();
    campus.assignments_mut().add(physics_report());

    match campus.toggle_assignment("2") {
        Err(CampusError::NotFound(id)) => assert_eq!(id, "2"),
        other => panic!("expected not found, got {other:?}"),
    }
    assert_eq!(campus.assignments().pending().len(), 1);
}

#[test]
fn assignments_do_not_touch_the_calendar() {
    let mut campus = test_campus();
    campus.assignments_mut().add(physics_report());
    campus.toggle_assignment("1").unwrap();
    assert!(campus.all_marked_days().is_empty());
}
