// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Core of the university life companion: the class calendar, assignments, the
//! ride board, housing listings and nearby places, all held in memory for one session.

mod assignment;
mod campus;
mod config;
pub mod datetime;
mod error;
mod event;
mod form;
mod housing;
mod places;
mod ride;
mod selection;
mod store;

pub use crate::assignment::{Assignment, AssignmentBoard};
pub use crate::campus::Campus;
pub use crate::config::{APP_NAME, Config, ConfigDuration, DayOrder};
pub use crate::error::{CampusError, FieldError, ValidationError};
pub use crate::event::{CategoryStyle, Event, EventCategory, EventDraft};
pub use crate::form::EventForm;
pub use crate::housing::{HousingBoard, HousingKind, HousingListing};
pub use crate::places::{Place, PlaceCategory, PlaceDirectory};
pub use crate::ride::{
    Driver, Ride, RideBoard, RideDraft, RideForm, RideListing, RideOffer, RideStatus, Trip,
};
pub use crate::selection::{CalendarView, DaySelection};
pub use crate::store::EventStore;
