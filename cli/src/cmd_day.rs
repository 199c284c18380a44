// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use jiff::civil::Date;
use unilife_core::{Campus, datetime};

use crate::event_formatter::{EventColumn, EventFormatter};
use crate::util::OutputFormat;

/// Lists the events of the active day.
#[derive(Debug, Clone, Copy)]
pub struct CmdDay {
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdDay {
    pub const NAME: &str = "day";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List the events of the active day")
            .arg(OutputFormat::arg())
            .arg(arg!(-v --verbose "Show notes as well"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: OutputFormat::from(matches),
            verbose: matches.get_flag("verbose"),
        }
    }

    pub fn run(self, campus: &Campus, out: &mut impl io::Write) -> Result<(), Box<dyn Error>> {
        print_day(campus, self.output_format, self.verbose, out)
    }
}

/// Shows the active month with the days that have events.
#[derive(Debug, Clone, Copy)]
pub struct CmdMonth;

impl CmdMonth {
    pub const NAME: &str = "month";

    pub fn command() -> Command {
        Command::new(Self::NAME).about("Show the month of the active day")
    }

    pub fn run(self, campus: &Campus, out: &mut impl io::Write) -> Result<(), Box<dyn Error>> {
        print_month(campus, out)
    }
}

/// Moves the active day and shows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmdNavigate {
    Previous,
    Next,
    Today,
    Jump(Date),
}

impl CmdNavigate {
    pub const NAME_PREVIOUS: &str = "prev";
    pub const NAME_NEXT: &str = "next";
    pub const NAME_TODAY: &str = "today";
    pub const NAME_JUMP: &str = "jump";

    pub fn commands() -> [Command; 4] {
        [
            Command::new(Self::NAME_PREVIOUS)
                .alias("p")
                .about("Go to the previous day"),
            Command::new(Self::NAME_NEXT)
                .alias("n")
                .about("Go to the next day"),
            Command::new(Self::NAME_TODAY).about("Go back to today"),
            Command::new(Self::NAME_JUMP)
                .alias("goto")
                .about("Go to the given day")
                .arg(
                    arg!(date: <DATE> "The day to show, as YYYY-MM-DD")
                        .value_parser(parse_date_arg),
                ),
        ]
    }

    pub fn from(name: &str, matches: &ArgMatches) -> Option<Self> {
        match name {
            Self::NAME_PREVIOUS => Some(Self::Previous),
            Self::NAME_NEXT => Some(Self::Next),
            Self::NAME_TODAY => Some(Self::Today),
            Self::NAME_JUMP => matches.get_one::<Date>("date").copied().map(Self::Jump),
            _ => None,
        }
    }

    pub fn run(self, campus: &mut Campus, out: &mut impl io::Write) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "navigating...");
        match self {
            Self::Previous => {
                campus.previous_day();
            }
            Self::Next => {
                campus.next_day();
            }
            Self::Today => campus.tap_day(datetime::now().date()),
            Self::Jump(day) => campus.tap_day(day),
        }
        print_day(campus, OutputFormat::Table, false, out)
    }
}

/// Switches between the single-day list and the month grid.
#[derive(Debug, Clone, Copy)]
pub struct CmdToggle;

impl CmdToggle {
    pub const NAME: &str = "toggle";

    pub fn command() -> Command {
        Command::new(Self::NAME).about("Expand or collapse the month calendar")
    }

    pub fn run(self, campus: &mut Campus, out: &mut impl io::Write) -> Result<(), Box<dyn Error>> {
        if campus.toggle_expanded() {
            print_month(campus, out)
        } else {
            print_day(campus, OutputFormat::Table, false, out)
        }
    }
}

fn parse_date_arg(value: &str) -> Result<Date, String> {
    datetime::parse_date(value).map_err(|_| format!("invalid date '{value}', expected YYYY-MM-DD"))
}

pub fn print_day(
    campus: &Campus,
    output_format: OutputFormat,
    verbose: bool,
    out: &mut impl io::Write,
) -> Result<(), Box<dyn Error>> {
    let day = campus.current();
    let events = campus.events_today();

    let columns = match output_format {
        OutputFormat::Json => vec![
            EventColumn::Uid,
            EventColumn::TimeRange,
            EventColumn::Category,
            EventColumn::Title,
            EventColumn::Location,
            EventColumn::Notes,
        ],
        OutputFormat::Table => EventFormatter::day_columns(verbose),
    };
    let formatter = EventFormatter::new(columns, output_format);

    match output_format {
        OutputFormat::Json => write!(out, "{}", formatter.format(events))?,
        OutputFormat::Table => {
            let header = format!("{} {}", day.strftime("%A,"), day);
            writeln!(out, "{}", header.bold())?;
            if events.is_empty() {
                writeln!(out, "{}", "No events on this day".italic())?;
            } else {
                write!(out, "{}", formatter.format(events))?;
            }
        }
    }
    Ok(())
}

/// Writes the month grid, Sunday first. Days with events carry a `*`, the
/// active day is highlighted.
pub fn print_month(campus: &Campus, out: &mut impl io::Write) -> Result<(), Box<dyn Error>> {
    let current = campus.current();
    let marked = campus.events().marked_days_in_month(current);

    writeln!(out, "{}", current.strftime("%B %Y").to_string().bold())?;
    writeln!(out, "Su  Mo  Tu  We  Th  Fr  Sa")?;
    for week in campus.selection().month_grid() {
        let cells: Vec<String> = week
            .iter()
            .map(|day| match day {
                Some(day) => {
                    let mark = if marked.contains(day) { "*" } else { " " };
                    let cell = format!("{:>2}{mark}", day.day());
                    if *day == current {
                        cell.reversed().to_string()
                    } else {
                        cell
                    }
                }
                None => "   ".to_string(),
            })
            .collect();
        writeln!(out, "{}", cells.join(" ").trim_end())?;
    }
    Ok(())
}
