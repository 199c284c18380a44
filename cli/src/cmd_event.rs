// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{Arg, ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use unilife_core::{Campus, Event, EventCategory, EventDraft, datetime};

use crate::event_formatter::format_event_details;
use crate::util::{OutputFormat, parse_datetime_on, resolve_id};

/// Field values given on the command line, applied on top of a draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFields {
    pub title: Option<String>,
    pub location: Option<String>,
    pub category: Option<EventCategory>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub notes: Option<String>,
}

impl EventFields {
    fn args() -> [Arg; 5] {
        [
            arg!(-l --location <LOCATION> "Where it takes place"),
            arg!(-k --category <CATEGORY> "Kind of activity")
                .value_parser(value_parser!(EventCategory)),
            arg!(-s --start <START> "Start, as HH:MM or YYYY-MM-DD HH:MM"),
            arg!(-e --end <END> "End, as HH:MM on the start day or YYYY-MM-DD HH:MM"),
            arg!(-n --notes <NOTES> "Additional notes"),
        ]
    }

    fn from(matches: &ArgMatches) -> Self {
        Self {
            title: matches.get_one::<String>("title").cloned(),
            location: matches.get_one::<String>("location").cloned(),
            category: matches.get_one::<EventCategory>("category").copied(),
            start: matches.get_one::<String>("start").cloned(),
            end: matches.get_one::<String>("end").cloned(),
            notes: matches.get_one::<String>("notes").cloned(),
        }
    }

    fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Writes the given fields into the draft. A bare `HH:MM` start is taken on
    /// the draft's day; a new start without an end keeps the draft's length.
    pub fn apply(self, draft: &mut EventDraft) -> Result<(), Box<dyn Error>> {
        if let Some(title) = self.title {
            draft.title = title;
        }
        if let Some(location) = self.location {
            draft.location = location;
        }
        if let Some(category) = self.category {
            draft.category = category;
        }
        if let Some(notes) = self.notes {
            draft.notes = notes;
        }

        if let Some(start) = self.start {
            let length = draft.end.duration_since(draft.start);
            let start = parse_datetime_on(draft.start.date(), &start)?;
            draft.start = start;
            draft.end = start.checked_add(length).unwrap_or(start);
        }
        if let Some(end) = self.end {
            draft.end = parse_datetime_on(draft.start.date(), &end)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventNew {
    pub fields: EventFields,
}

impl CmdEventNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Add an event on the active day")
            .arg(arg!(title: [TITLE] "Title of the event"))
            .args(EventFields::args())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            fields: EventFields::from(matches),
        }
    }

    pub fn run(self, campus: &mut Campus, out: &mut impl io::Write) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "adding new event...");
        let mut draft = campus.default_event_draft(datetime::now());
        self.fields.apply(&mut draft)?;

        let event = campus.submit_create(draft)?;
        writeln!(out, "{}", "Event created".green())?;
        write!(out, "{}", format_event_details(event))?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventEdit {
    pub id: String,
    pub fields: EventFields,
}

impl CmdEventEdit {
    pub const NAME: &str = "edit";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Change an event")
            .arg(arg!(id: <ID> "Id of the event, or a unique prefix of it"))
            .arg(arg!(-t --title <TITLE> "Title of the event"))
            .args(EventFields::args())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: get_id(matches),
            fields: EventFields::from(matches),
        }
    }

    pub fn run(self, campus: &mut Campus, out: &mut impl io::Write) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "editing event...");
        let id = resolve_event_id(campus, &self.id)?;
        if self.fields.is_empty() {
            writeln!(out, "Nothing to change")?;
            return Ok(());
        }

        let event = campus
            .event(&id)
            .ok_or_else(|| format!("No event found with id '{id}'"))?;
        let mut draft = EventDraft::from_event(event);
        self.fields.apply(&mut draft)?;

        let event = campus.submit_edit(&id, draft)?;
        writeln!(out, "{}", "Event updated".green())?;
        write!(out, "{}", format_event_details(event))?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventDelete {
    pub id: String,
}

impl CmdEventDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete an event")
            .arg(arg!(id: <ID> "Id of the event, or a unique prefix of it"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self { id: get_id(matches) }
    }

    pub fn run(self, campus: &mut Campus, out: &mut impl io::Write) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "deleting event...");
        let id = resolve_event_id(campus, &self.id)?;
        match campus.delete(&id) {
            Some(event) => writeln!(out, "{} {}", "Deleted".yellow(), event.title())?,
            None => tracing::warn!(%id, "event vanished before deletion"),
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventShow {
    pub id: String,
    pub output_format: OutputFormat,
}

impl CmdEventShow {
    pub const NAME: &str = "show";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the details of an event")
            .arg(arg!(id: <ID> "Id of the event, or a unique prefix of it"))
            .arg(OutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: get_id(matches),
            output_format: OutputFormat::from(matches),
        }
    }

    pub fn run(self, campus: &Campus, out: &mut impl io::Write) -> Result<(), Box<dyn Error>> {
        let id = resolve_event_id(campus, &self.id)?;
        let event = campus
            .event(&id)
            .ok_or_else(|| format!("No event found with id '{id}'"))?;
        match self.output_format {
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(event)?)?,
            OutputFormat::Table => write!(out, "{}", format_event_details(event))?,
        }
        Ok(())
    }
}

fn get_id(matches: &ArgMatches) -> String {
    matches
        .get_one::<String>("id")
        .cloned()
        .unwrap_or_default()
}

fn resolve_event_id(campus: &Campus, input: &str) -> Result<String, Box<dyn Error>> {
    resolve_id(campus.events().iter().map(Event::id), input)
}
