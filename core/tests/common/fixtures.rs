// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use jiff::civil::{DateTime, date, datetime};
use unilife_core::{
    Campus, Config, DayOrder, EventCategory, EventDraft, EventStore, RideDraft,
};

/// Creates a configuration with the given within-day order and location required.
#[must_use]
pub fn test_config(day_order: DayOrder) -> Config {
    Config {
        day_order,
        ..Config::new()
    }
}

/// Creates a campus session whose "today" is 2025-03-09.
#[must_use]
pub fn test_campus() -> Campus {
    Campus::with_today(test_config(DayOrder::Chronological), date(2025, 3, 9))
}

#[must_use]
pub fn test_store() -> EventStore {
    EventStore::new(DayOrder::Chronological)
}

/// Creates a valid class draft with the given title and time range.
#[must_use]
pub fn test_event_draft(title: &str, start: DateTime, end: DateTime) -> EventDraft {
    EventDraft {
        id: None,
        title: title.to_string(),
        location: "Room 201".to_string(),
        category: EventCategory::Class,
        start,
        end,
        notes: String::new(),
    }
}

/// The Calculus class of 2025-03-09, 08:00 - 10:00.
#[must_use]
pub fn calculus_draft() -> EventDraft {
    test_event_draft(
        "Calculus",
        datetime(2025, 3, 9, 8, 0, 0, 0),
        datetime(2025, 3, 9, 10, 0, 0, 0),
    )
}

/// Creates a valid ride offer draft from downtown to campus.
#[must_use]
pub fn test_ride_draft() -> RideDraft {
    RideDraft {
        origin: "Downtown".to_string(),
        destination: "Campus".to_string(),
        seats: 3,
        price_cents: 500,
        contact: "(47) 98888-8888".to_string(),
        ..RideDraft::new(datetime(2025, 3, 10, 7, 0, 0, 0))
    }
}
