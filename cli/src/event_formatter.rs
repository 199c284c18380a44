// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::{Color, Colorize};
use unilife_core::Event;

use crate::table::{PaddingDirection, Table, TableColumn, hex_color};
use crate::util::{OutputFormat, short_id};

#[derive(Debug)]
pub struct EventFormatter {
    columns: Vec<EventColumn>,
    format: OutputFormat,
}

impl EventFormatter {
    pub fn new(columns: Vec<EventColumn>, format: OutputFormat) -> Self {
        Self { columns, format }
    }

    /// The columns of a day listing.
    pub fn day_columns(verbose: bool) -> Vec<EventColumn> {
        let mut columns = vec![
            EventColumn::Id,
            EventColumn::TimeRange,
            EventColumn::Category,
            EventColumn::Title,
            EventColumn::Location,
        ];
        if verbose {
            columns.push(EventColumn::Notes);
        }
        columns
    }

    pub fn format<'a>(&'a self, events: &'a [Event]) -> Display<'a> {
        Display {
            events,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    events: &'a [Event],
    formatter: &'a EventFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = Table::new(self.formatter.format, &self.formatter.columns, self.events);
        write!(f, "{table}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventColumn {
    Id,
    /// The full id, used by JSON output.
    Uid,
    TimeRange,
    Title,
    Location,
    Category,
    Notes,
}

impl TableColumn<Event> for EventColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            EventColumn::Id | EventColumn::Uid => "id",
            EventColumn::TimeRange => "time",
            EventColumn::Title => "title",
            EventColumn::Location => "location",
            EventColumn::Category => "category",
            EventColumn::Notes => "notes",
        }
        .into()
    }

    fn format<'a>(&self, event: &'a Event) -> Cow<'a, str> {
        match self {
            EventColumn::Id => short_id(event.id()).into(),
            EventColumn::Uid => event.id().into(),
            EventColumn::TimeRange => event.time_range().into(),
            EventColumn::Title => event.title().into(),
            EventColumn::Location => event.location().into(),
            EventColumn::Category => event.category().style().label.into(),
            EventColumn::Notes => event.notes().unwrap_or_default().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            EventColumn::Id | EventColumn::Uid => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn color(&self, event: &Event) -> Option<Color> {
        match self {
            EventColumn::Category => hex_color(event.category().style().color),
            _ => None,
        }
    }
}

/// Multi-line description of a single event.
pub fn format_event_details(event: &Event) -> String {
    let style = event.category().style();
    let label = match hex_color(style.color) {
        Some(color) => style.label.color(color).to_string(),
        None => style.label.to_string(),
    };

    let mut out = format!(
        "{} [{}]\n  {:<9}{}\n  {:<9}{} {}\n  {:<9}{}\n",
        event.title().bold(),
        label,
        "Id:",
        event.id(),
        "When:",
        event.day(),
        event.time_range(),
        "Where:",
        event.location(),
    );
    if let Some(notes) = event.notes() {
        out.push_str(&format!("  {:<9}{}\n", "Notes:", notes));
    }
    out
}
