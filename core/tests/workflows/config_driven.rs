// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration-driven workflow tests.
//!
//! Tests that session behavior follows the parsed configuration.

use jiff::civil::{date, datetime};
use unilife_core::{Campus, Config, DayOrder, EventDraft};

use crate::common::{calculus_draft, test_campus, test_config, test_event_draft};

#[test]
fn insertion_order_from_config() {
    let config: Config = toml::from_str(r#"day_order = "insertion""#).unwrap();
    let mut campus = Campus::with_today(config, date(2025, 3, 9));
    campus
        .submit_create(test_event_draft(
            "Afternoon",
            datetime(2025, 3, 9, 14, 0, 0, 0),
            datetime(2025, 3, 9, 15, 0, 0, 0),
        ))
        .unwrap();
    campus.submit_create(calculus_draft()).unwrap();

    let titles: Vec<_> = campus.events_today().iter().map(|e| e.title()).collect();
    assert_eq!(titles, ["Afternoon", "Calculus"]);
}

#[test]
fn chronological_order_is_the_default() {
    let mut campus = test_campus();
    assert_eq!(campus.config().day_order, DayOrder::Chronological);
    campus
        .submit_create(test_event_draft(
            "Afternoon",
            datetime(2025, 3, 9, 14, 0, 0, 0),
            datetime(2025, 3, 9, 15, 0, 0, 0),
        ))
        .unwrap();
    campus.submit_create(calculus_draft()).unwrap();

    let titles: Vec<_> = campus.events_today().iter().map(|e| e.title()).collect();
    assert_eq!(titles, ["Calculus", "Afternoon"]);
}

#[test]
fn optional_location_from_config() {
    let config = Config {
        require_location: false,
        ..test_config(DayOrder::Chronological)
    };
    let mut campus = Campus::with_today(config, date(2025, 3, 9));
    let draft = EventDraft {
        location: String::new(),
        ..calculus_draft()
    };
    let event = campus.submit_create(draft).unwrap();
    assert_eq!(event.location(), "");

    let mut strict = test_campus();
    let draft = EventDraft {
        location: String::new(),
        ..calculus_draft()
    };
    assert!(strict.submit_create(draft).is_err());
}

#[test]
fn default_duration_from_config() {
    let config: Config = toml::from_str(r#"default_duration = "90m""#).unwrap();
    let campus = Campus::with_today(config, date(2025, 3, 9));
    let draft = campus.default_event_draft(datetime(2025, 3, 9, 8, 0, 0, 0));
    assert_eq!(draft.end, datetime(2025, 3, 9, 9, 30, 0, 0));
}
