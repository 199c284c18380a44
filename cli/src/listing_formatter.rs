// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Table columns for assignments, the ride board, housing listings and nearby
//! places.

use std::borrow::Cow;

use colored::{Color, Colorize};
use unilife_core::{
    Assignment, HousingListing, Place, Ride, RideStatus, datetime::STABLE_FORMAT_DATETIME,
};

use crate::table::{PaddingDirection, TableColumn};
use crate::util::short_id;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentColumn {
    Id,
    Done,
    Due,
    Subject,
    Title,
}

impl AssignmentColumn {
    pub fn all() -> Vec<Self> {
        vec![Self::Id, Self::Done, Self::Due, Self::Subject, Self::Title]
    }
}

impl TableColumn<Assignment> for AssignmentColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            Self::Id => "id",
            Self::Done => "done",
            Self::Due => "due",
            Self::Subject => "subject",
            Self::Title => "title",
        }
        .into()
    }

    fn format<'a>(&self, assignment: &'a Assignment) -> Cow<'a, str> {
        match self {
            Self::Id => short_id(&assignment.id).into(),
            Self::Done if assignment.completed => "[x]".into(),
            Self::Done => "[ ]".into(),
            Self::Due => assignment.due.strftime(STABLE_FORMAT_DATETIME).to_string().into(),
            Self::Subject => assignment.subject.as_str().into(),
            Self::Title => assignment.title.as_str().into(),
        }
    }

    fn color(&self, assignment: &Assignment) -> Option<Color> {
        match self {
            Self::Done | Self::Title if assignment.completed => Some(Color::BrightBlack),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RideColumn {
    Id,
    Route,
    Departure,
    Seats,
    Price,
    Driver,
    Contact,
    Status,
}

impl RideColumn {
    pub fn board() -> Vec<Self> {
        vec![
            Self::Id,
            Self::Departure,
            Self::Route,
            Self::Seats,
            Self::Price,
            Self::Driver,
        ]
    }

    pub fn mine() -> Vec<Self> {
        vec![
            Self::Id,
            Self::Departure,
            Self::Route,
            Self::Seats,
            Self::Price,
            Self::Contact,
            Self::Status,
        ]
    }
}

impl TableColumn<Ride> for RideColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            Self::Id => "id",
            Self::Route => "route",
            Self::Departure => "departure",
            Self::Seats => "seats",
            Self::Price => "price",
            Self::Driver => "driver",
            Self::Contact => "contact",
            Self::Status => "status",
        }
        .into()
    }

    fn format<'a>(&self, ride: &'a Ride) -> Cow<'a, str> {
        let trip = ride.trip();
        match self {
            Self::Id => short_id(ride.id()).into(),
            Self::Route => format!("{} -> {}", trip.origin, trip.destination).into(),
            Self::Departure => trip.departure.strftime(STABLE_FORMAT_DATETIME).to_string().into(),
            Self::Seats => trip.seats.to_string().into(),
            Self::Price => trip.price().into(),
            Self::Driver => match ride.driver() {
                Some(driver) if driver.verified => format!("{} (verified)", driver.name).into(),
                Some(driver) => driver.name.as_str().into(),
                None => "me".into(),
            },
            Self::Contact => trip.contact.as_str().into(),
            Self::Status => trip.status.as_ref().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            Self::Id | Self::Seats | Self::Price => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn color(&self, ride: &Ride) -> Option<Color> {
        match self {
            Self::Status => Some(status_color(ride.trip().status)),
            _ => None,
        }
    }
}

fn status_color(status: RideStatus) -> Color {
    match status {
        RideStatus::Active => Color::Green,
        RideStatus::Canceled => Color::Red,
        RideStatus::Completed => Color::BrightBlack,
    }
}

/// The full card of a ride: route, schedule, driver profile and how to get in
/// touch.
pub fn format_ride_details(ride: &Ride) -> String {
    let trip = ride.trip();
    let mut out = format!(
        "{} -> {} [{}]\n  {:<10}{}\n  {:<10}{}\n  {:<10}{}\n  {:<10}{}\n",
        trip.origin.bold(),
        trip.destination.bold(),
        trip.status.as_ref().color(status_color(trip.status)),
        "Id:",
        ride.id(),
        "When:",
        trip.departure.strftime(STABLE_FORMAT_DATETIME),
        "Seats:",
        trip.seats,
        "Price:",
        trip.price(),
    );

    let mut line = |label: &str, value: &str| out.push_str(&format!("  {label:<10}{value}\n"));
    match ride.driver() {
        Some(driver) => {
            let badge = if driver.verified {
                "verified".green()
            } else {
                "not verified".yellow()
            };
            line("Driver:", &format!("{} ({badge})", driver.name));
            if let Some(faculty) = &driver.faculty {
                line("Faculty:", faculty);
            }
            if let Some(course) = &driver.course {
                line("Course:", course);
            }
            if let Some(since) = &driver.member_since {
                line("Since:", since);
            }
        }
        None => line("Driver:", "me"),
    }
    line("Contact:", &trip.contact);
    if let Some(description) = &trip.description {
        line("Notes:", description);
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HousingColumn {
    Kind,
    Title,
    Address,
    Distance,
    Price,
    Features,
}

impl HousingColumn {
    pub fn all() -> Vec<Self> {
        vec![
            Self::Kind,
            Self::Price,
            Self::Title,
            Self::Address,
            Self::Distance,
            Self::Features,
        ]
    }
}

impl TableColumn<HousingListing> for HousingColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            Self::Kind => "kind",
            Self::Title => "title",
            Self::Address => "address",
            Self::Distance => "distance",
            Self::Price => "price",
            Self::Features => "features",
        }
        .into()
    }

    fn format<'a>(&self, listing: &'a HousingListing) -> Cow<'a, str> {
        match self {
            Self::Kind => listing.kind.as_ref().into(),
            Self::Title => listing.title.as_str().into(),
            Self::Address => listing.address.as_str().into(),
            Self::Distance => listing.distance.as_str().into(),
            Self::Price => format!(
                "{}.{:02}/mo",
                listing.price_cents / 100,
                listing.price_cents % 100
            )
            .into(),
            Self::Features => listing.features.join(", ").into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            Self::Price => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceColumn {
    Name,
    Category,
    Distance,
    Rating,
    OpenHours,
}

impl PlaceColumn {
    pub fn all() -> Vec<Self> {
        vec![
            Self::Name,
            Self::Category,
            Self::Distance,
            Self::Rating,
            Self::OpenHours,
        ]
    }
}

impl TableColumn<Place> for PlaceColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            Self::Name => "name",
            Self::Category => "category",
            Self::Distance => "distance",
            Self::Rating => "rating",
            Self::OpenHours => "open_hours",
        }
        .into()
    }

    fn format<'a>(&self, place: &'a Place) -> Cow<'a, str> {
        match self {
            Self::Name => place.name.as_str().into(),
            Self::Category => place.category.as_ref().into(),
            Self::Distance => place.distance.as_str().into(),
            Self::Rating => format!("{:.1}", place.rating).into(),
            Self::OpenHours => place.open_hours.as_str().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            Self::Distance | Self::Rating => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn color(&self, place: &Place) -> Option<Color> {
        match self {
            Self::Rating if place.rating >= 4.5 => Some(Color::Yellow),
            _ => None,
        }
    }
}
