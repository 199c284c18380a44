// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Demo data loaded by `--seed`, laid out around "today" so that the calendar
//! has something to show whatever day the session starts on.

use jiff::ToSpan;
use jiff::civil::{Date, DateTime, time};
use unilife_core::{
    Assignment, Campus, CampusError, Driver, EventCategory, EventDraft, HousingKind, HousingListing, Place,
    PlaceCategory, RideDraft, RideListing, RideStatus, Trip,
};

/// Fills every board of the campus with demo data.
pub fn seed(campus: &mut Campus) -> Result<(), CampusError> {
    let today = campus.current();
    tracing::debug!(%today, "seeding demo data");

    seed_events(campus, today)?;
    seed_rides(campus, today)?;

    for listing in housing() {
        campus.housing_mut().add(listing);
    }
    for place in places() {
        campus.places_mut().add(place);
    }
    for assignment in assignments(today) {
        campus.assignments_mut().add(assignment);
    }
    Ok(())
}

fn seed_events(campus: &mut Campus, today: Date) -> Result<(), CampusError> {
    #[rustfmt::skip]
    let events = [
        (0, "Calculus III",          "Room 201",     EventCategory::Class, time(8, 0, 0, 0),   time(10, 0, 0, 0),  "Bring the solved exercise list"),
        (0, "Web Programming",       "Lab 3",        EventCategory::Class, time(10, 15, 0, 0), time(12, 15, 0, 0), "Final project presentation"),
        (0, "Study Group Meeting",   "Library",      EventCategory::Study, time(16, 30, 0, 0), time(18, 0, 0, 0),  "Calculus exam review"),
        (1, "Data Structures",       "Room 105",     EventCategory::Class, time(8, 0, 0, 0),   time(10, 0, 0, 0),  "Binary tree implementation"),
        (1, "Talk: Machine Learning", "Auditorium",  EventCategory::Event, time(14, 0, 0, 0),  time(16, 0, 0, 0),  "Speaker: Prof. Dr. Silva"),
        (2, "Databases",             "Lab 2",        EventCategory::Class, time(10, 15, 0, 0), time(12, 15, 0, 0), "Final assignment due"),
    ];

    for (offset, title, location, category, start, end, notes) in events {
        let day = shift(today, offset);
        campus.submit_create(EventDraft {
            id: None,
            title: title.to_string(),
            location: location.to_string(),
            category,
            start: day.to_datetime(start),
            end: day.to_datetime(end),
            notes: notes.to_string(),
        })?;
    }
    Ok(())
}

fn seed_rides(campus: &mut Campus, today: Date) -> Result<(), CampusError> {
    let tomorrow = shift(today, 1);
    let listings = [
        RideListing {
            id: "ride-carlos".to_string(),
            trip: trip(
                "Downtown",
                "University",
                tomorrow.to_datetime(time(7, 30, 0, 0)),
                3,
                500,
                Some("Leaving from Downtown, near the main square. Can wait up to 5 minutes."),
                "(47) 99999-9999",
            ),
            driver: Driver {
                id: "driver1".to_string(),
                name: "Carlos Silva".to_string(),
                verified: true,
                faculty: Some("Engineering".to_string()),
                course: Some("Software Engineering".to_string()),
                member_since: Some("March 2023".to_string()),
            },
        },
        RideListing {
            id: "ride-ana".to_string(),
            trip: trip(
                "South Side",
                "University",
                tomorrow.to_datetime(time(8, 0, 0, 0)),
                2,
                600,
                Some("Leaving from the South Side mall, main parking lot."),
                "ana.whatsapp",
            ),
            driver: Driver {
                id: "driver2".to_string(),
                name: "Ana Oliveira".to_string(),
                verified: false,
                faculty: Some("Computer Science".to_string()),
                course: Some("Data Science".to_string()),
                member_since: None,
            },
        },
        RideListing {
            id: "ride-pedro".to_string(),
            trip: trip(
                "University",
                "Downtown",
                tomorrow.to_datetime(time(18, 0, 0, 0)),
                4,
                500,
                None,
                "pedro@email.com",
            ),
            driver: Driver {
                id: "driver3".to_string(),
                name: "Pedro Santos".to_string(),
                verified: true,
                faculty: None,
                course: None,
                member_since: None,
            },
        },
    ];
    for listing in listings {
        campus.rides_mut().add_listing(listing);
    }

    campus.submit_ride(RideDraft {
        origin: "North Side".to_string(),
        destination: "University".to_string(),
        seats: 3,
        price_cents: 500,
        description: "Leaving on time. Meeting point: in front of the Municipal Market.".to_string(),
        contact: "(47) 98888-8888".to_string(),
        ..RideDraft::new(shift(today, 2).to_datetime(time(7, 45, 0, 0)))
    })?;
    Ok(())
}

fn trip(
    origin: &str,
    destination: &str,
    departure: DateTime,
    seats: u8,
    price_cents: u32,
    description: Option<&str>,
    contact: &str,
) -> Trip {
    Trip {
        origin: origin.to_string(),
        destination: destination.to_string(),
        departure,
        seats,
        price_cents,
        description: description.map(str::to_string),
        contact: contact.to_string(),
        status: RideStatus::Active,
    }
}

fn housing() -> Vec<HousingListing> {
    #[rustfmt::skip]
    let listings = [
        ("1", HousingKind::Room,      "Single room near the university",  "Flower Street, 123",   "500m from campus", 60_000, &["Furnished", "Internet", "Water and power included"][..]),
        ("2", HousingKind::Apartment, "Shared apartment (3 bedrooms)",    "Main Avenue, 456",     "1km from campus",  50_000, &["Furnished", "Internet", "Equipped kitchen", "2 bathrooms"][..]),
        ("3", HousingKind::Room,      "Room in a student house",          "Students Street, 789", "300m from campus", 45_000, &["Furnished", "Internet", "Common area", "Laundry"][..]),
        ("4", HousingKind::Apartment, "Studio for students",              "Acacia Street, 101",   "800m from campus", 90_000, &["Furnished", "Internet", "Air conditioning", "Balcony"][..]),
    ];

    listings
        .into_iter()
        .map(|(id, kind, title, address, distance, price_cents, features)| HousingListing {
            id: id.to_string(),
            kind,
            title: title.to_string(),
            address: address.to_string(),
            distance: distance.to_string(),
            price_cents,
            features: features.iter().map(|f| f.to_string()).collect(),
        })
        .collect()
}

fn places() -> Vec<Place> {
    #[rustfmt::skip]
    let places = [
        ("1", "University Restaurant", PlaceCategory::Restaurant, "150m", 4.2, "07:00 - 19:00"),
        ("2", "Downtown Cafe",         PlaceCategory::Cafe,       "200m", 4.5, "08:00 - 20:00"),
        ("3", "Academic Bookstore",    PlaceCategory::Bookstore,  "350m", 4.0, "09:00 - 18:00"),
        ("4", "Express Market",        PlaceCategory::Market,     "500m", 3.8, "08:00 - 22:00"),
        ("5", "Corner Pizzeria",       PlaceCategory::Restaurant, "600m", 4.7, "18:00 - 23:00"),
    ];

    places
        .into_iter()
        .map(|(id, name, category, distance, rating, open_hours)| Place {
            id: id.to_string(),
            name: name.to_string(),
            category,
            distance: distance.to_string(),
            rating,
            open_hours: open_hours.to_string(),
        })
        .collect()
}

fn assignments(today: Date) -> Vec<Assignment> {
    #[rustfmt::skip]
    let assignments = [
        ("physics-report",   "Physics Report",   "Physics III",  1, time(23, 59, 0, 0), false),
        ("database-project", "Database Project", "Databases I",  2, time(18, 0, 0, 0),  false),
        ("exercise-list",    "Exercise List",    "Calculus III", 3, time(12, 0, 0, 0),  true),
    ];

    assignments
        .into_iter()
        .map(|(id, title, subject, offset, due, completed)| Assignment {
            id: id.to_string(),
            title: title.to_string(),
            subject: subject.to_string(),
            due: shift(today, offset).to_datetime(due),
            completed,
        })
        .collect()
}

/// `day` moved by `days`, clamped to the representable range.
fn shift(day: Date, days: i64) -> Date {
    day.checked_add(days.days()).unwrap_or(day)
}
