// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! DaySelection integration tests.
//!
//! Tests day navigation across month, year and leap-day boundaries.

use jiff::civil::{Date, date};
use unilife_core::{CalendarView, DaySelection};

fn round_trip(day: Date) {
    let mut selection = DaySelection::new(day);
    selection.go_to_previous_day();
    selection.go_to_next_day();
    assert_eq!(selection.current(), day, "back and forth from {day}");

    selection.go_to_next_day();
    selection.go_to_previous_day();
    assert_eq!(selection.current(), day, "forth and back from {day}");
}

#[test]
fn previous_then_next_returns_to_start() {
    for day in [
        date(2025, 3, 9),
        date(2025, 3, 1),
        date(2024, 3, 1),
        date(2025, 1, 1),
        date(2024, 12, 31),
        date(2024, 2, 29),
    ] {
        round_trip(day);
    }
}

#[test]
fn crosses_february_in_common_and_leap_years() {
    let mut selection = DaySelection::new(date(2025, 3, 1));
    assert_eq!(selection.go_to_previous_day(), date(2025, 2, 28));

    let mut selection = DaySelection::new(date(2024, 3, 1));
    assert_eq!(selection.go_to_previous_day(), date(2024, 2, 29));
    assert_eq!(selection.go_to_next_day(), date(2024, 3, 1));
}

#[test]
fn crosses_year_boundary() {
    let mut selection = DaySelection::new(date(2024, 12, 31));
    assert_eq!(selection.go_to_next_day(), date(2025, 1, 1));
    assert_eq!(selection.go_to_previous_day(), date(2024, 12, 31));
}

#[test]
fn expand_then_tap_returns_to_single_day() {
    let mut selection = DaySelection::new(date(2025, 3, 9));
    selection.toggle_expanded();
    assert_eq!(selection.view(), CalendarView::MonthGrid);

    selection.jump_to(date(2025, 3, 11));
    assert_eq!(selection.view(), CalendarView::SingleDay);
    assert_eq!(selection.current(), date(2025, 3, 11));
}
