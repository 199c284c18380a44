// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt::Display, str::FromStr};

use jiff::SignedDuration;
use jiff::civil::{Date, DateTime};

use crate::datetime::{day_key, format_time_range, truncate_to_minute};

/// A scheduled activity on the calendar.
///
/// Events are only built by [`crate::EventForm::normalize`], so every value of
/// this type has a non-empty title and an end that does not precede its start.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Event {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) start: DateTime,
    pub(crate) end: DateTime,
    pub(crate) location: String,
    pub(crate) category: EventCategory,
    pub(crate) notes: Option<String>,
}

impl Event {
    /// The unique identifier for the event.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn start(&self) -> DateTime {
        self.start
    }

    pub fn end(&self) -> DateTime {
        self.end
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn category(&self) -> EventCategory {
        self.category
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// The day this event is listed under.
    pub fn day(&self) -> Date {
        day_key(&self.start)
    }

    /// The time range formatted for display, e.g. `08:00 - 10:00`.
    pub fn time_range(&self) -> String {
        format_time_range(&self.start, &self.end)
    }
}

/// Kind of activity, used to pick the icon, color and label of an event.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum EventCategory {
    /// A lecture or lab.
    #[default]
    Class,

    /// A study session or study group meeting.
    Study,

    /// A talk, party or any other social event.
    Event,
}

/// Presentation attributes of an event category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    pub label: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

/// Indexed by `EventCategory as usize`.
const CATEGORY_STYLES: [CategoryStyle; 3] = [
    CategoryStyle {
        label: "Class",
        icon: "book-outline",
        color: "#167f6c",
    },
    CategoryStyle {
        label: "Study",
        icon: "people-outline",
        color: "#ffcc00",
    },
    CategoryStyle {
        label: "Event",
        icon: "calendar-outline",
        color: "#5ac8fa",
    },
];

const CATEGORY_CLASS: &str = "class";
const CATEGORY_STUDY: &str = "study";
const CATEGORY_EVENT: &str = "event";

impl EventCategory {
    pub const ALL: [EventCategory; 3] = [Self::Class, Self::Study, Self::Event];

    /// Looks up the icon, color and label for this category.
    pub fn style(self) -> &'static CategoryStyle {
        &CATEGORY_STYLES[self as usize]
    }
}

impl AsRef<str> for EventCategory {
    fn as_ref(&self) -> &str {
        match self {
            EventCategory::Class => CATEGORY_CLASS,
            EventCategory::Study => CATEGORY_STUDY,
            EventCategory::Event => CATEGORY_EVENT,
        }
    }
}

impl Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for EventCategory {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            CATEGORY_CLASS => Ok(EventCategory::Class),
            CATEGORY_STUDY => Ok(EventCategory::Study),
            CATEGORY_EVENT => Ok(EventCategory::Event),
            _ => Err(()),
        }
    }
}

/// Unvalidated form data for creating or editing an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    /// The id of the event being edited, `None` when creating a new one.
    pub id: Option<String>,

    pub title: String,

    pub location: String,

    pub category: EventCategory,

    pub start: DateTime,

    pub end: DateTime,

    /// Additional notes, an empty string means no notes.
    pub notes: String,
}

impl EventDraft {
    /// Creates the default draft shown by an empty creation form: starting now and
    /// lasting `duration`.
    pub fn new(now: DateTime, duration: SignedDuration) -> Self {
        let start = truncate_to_minute(now);
        let end = start.checked_add(duration).unwrap_or(start);
        Self {
            id: None,
            title: String::new(),
            location: String::new(),
            category: EventCategory::default(),
            start,
            end,
            notes: String::new(),
        }
    }

    /// Pre-fills an edit form with the values of an existing event.
    pub fn from_event(event: &Event) -> Self {
        Self {
            id: Some(event.id.clone()),
            title: event.title.clone(),
            location: event.location.clone(),
            category: event.category,
            start: event.start,
            end: event.end,
            notes: event.notes.clone().unwrap_or_default(),
        }
    }
}
