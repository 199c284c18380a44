// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

/// A single field-level problem found while validating a draft.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldError {
    /// The title is empty or only whitespace.
    MissingTitle,

    /// The location is empty while the form requires one.
    MissingLocation,

    /// The end of the time range is earlier than its start.
    EndBeforeStart,

    /// A ride has no origin.
    MissingOrigin,

    /// A ride has no destination.
    MissingDestination,

    /// A ride has no contact information for interested passengers.
    MissingContact,

    /// A ride offers zero seats.
    NoSeats,
}

const MISSING_TITLE: &str = "missing-title";
const MISSING_LOCATION: &str = "missing-location";
const END_BEFORE_START: &str = "end-before-start";
const MISSING_ORIGIN: &str = "missing-origin";
const MISSING_DESTINATION: &str = "missing-destination";
const MISSING_CONTACT: &str = "missing-contact";
const NO_SEATS: &str = "no-seats";

impl FieldError {
    /// Human readable message shown next to the offending input.
    pub fn message(self) -> &'static str {
        match self {
            Self::MissingTitle => "Title is required",
            Self::MissingLocation => "Location is required",
            Self::EndBeforeStart => "End time must not be earlier than start time",
            Self::MissingOrigin => "Origin is required",
            Self::MissingDestination => "Destination is required",
            Self::MissingContact => "Contact information is required",
            Self::NoSeats => "At least one seat must be available",
        }
    }
}

impl AsRef<str> for FieldError {
    fn as_ref(&self) -> &str {
        match self {
            Self::MissingTitle => MISSING_TITLE,
            Self::MissingLocation => MISSING_LOCATION,
            Self::EndBeforeStart => END_BEFORE_START,
            Self::MissingOrigin => MISSING_ORIGIN,
            Self::MissingDestination => MISSING_DESTINATION,
            Self::MissingContact => MISSING_CONTACT,
            Self::NoSeats => NO_SEATS,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

/// A rejected form submission, carrying every violated field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid form: {}", join_codes(.errors))]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    /// Wraps the collected field errors, or returns `None` when there are none.
    pub fn from_errors(errors: Vec<FieldError>) -> Option<Self> {
        (!errors.is_empty()).then_some(Self { errors })
    }

    /// The field errors, in the order the fields appear on the form.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Whether the given field error is part of this failure.
    pub fn contains(&self, error: FieldError) -> bool {
        self.errors.contains(&error)
    }
}

fn join_codes(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors raised by the campus session when handling user intents.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum CampusError {
    /// The submitted form did not pass validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No item with the given id exists.
    #[error("not found: {0}")]
    NotFound(String),
}
