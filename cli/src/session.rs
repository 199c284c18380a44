// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    error::Error,
    io::{self, BufRead},
};

use clap::{ArgMatches, Command, error::ErrorKind};
use colored::Colorize;
use unilife_core::{APP_NAME, Campus, CampusError, ValidationError};

use crate::cmd_assignment::{CmdAssignments, CmdDone};
use crate::cmd_day::{CmdDay, CmdMonth, CmdNavigate, CmdToggle};
use crate::cmd_directory::{CmdHousing, CmdPlaces};
use crate::cmd_event::{CmdEventDelete, CmdEventEdit, CmdEventNew, CmdEventShow};
use crate::cmd_ride::{CmdMyRides, CmdOffer, CmdRide, CmdRides};

/// An interactive session: reads one command per line and runs it against the
/// campus until `quit` or the end of input.
#[derive(Debug)]
pub struct Session {
    campus: Campus,
    prompt: bool,
}

impl Session {
    pub fn new(campus: Campus) -> Self {
        Self {
            campus,
            prompt: false,
        }
    }

    /// Print a prompt before reading each line.
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn campus(&self) -> &Campus {
        &self.campus
    }

    /// The grammar of a session line.
    pub fn command() -> Command {
        Command::new(APP_NAME)
            .no_binary_name(true)
            .subcommand_required(true)
            .subcommand(CmdEventNew::command())
            .subcommand(CmdEventEdit::command())
            .subcommand(CmdEventDelete::command())
            .subcommand(CmdEventShow::command())
            .subcommand(CmdDay::command())
            .subcommand(CmdMonth::command())
            .subcommands(CmdNavigate::commands())
            .subcommand(CmdToggle::command())
            .subcommand(CmdRides::command())
            .subcommand(CmdRide::command())
            .subcommand(CmdMyRides::command())
            .subcommand(CmdOffer::command())
            .subcommand(CmdHousing::command())
            .subcommand(CmdPlaces::command())
            .subcommand(CmdAssignments::command())
            .subcommand(CmdDone::command())
            .subcommand(
                Command::new(SessionCommand::NAME_QUIT)
                    .alias("exit")
                    .about("End the session"),
            )
    }

    /// Runs every line of `input`. Failed commands are reported on `out` and
    /// never end the session.
    pub fn run(&mut self, input: impl BufRead, out: &mut impl io::Write) -> io::Result<()> {
        if self.prompt {
            writeln!(out, "Type {} for the list of commands.", "help".bold())?;
        }
        let mut lines = input.lines();
        loop {
            if self.prompt {
                write!(out, "{}> ", APP_NAME)?;
                out.flush()?;
            }
            let Some(line) = lines.next() else { break };
            match self.execute(&line?, out) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(e) => report_error(e.as_ref(), out)?,
            }
        }
        tracing::debug!("session ended");
        Ok(())
    }

    /// Parses and runs a single line.
    pub fn execute(&mut self, line: &str, out: &mut impl io::Write) -> Result<Flow, Box<dyn Error>> {
        let args = split_line(line)?;
        if args.is_empty() {
            return Ok(Flow::Continue);
        }

        let matches = match Self::command().try_get_matches_from(args) {
            Ok(matches) => matches,
            Err(e) if is_informational(e.kind()) => {
                write!(out, "{}", e.render())?;
                return Ok(Flow::Continue);
            }
            Err(e) => {
                let msg = e.render().to_string();
                let msg = msg.trim_end();
                return Err(msg.strip_prefix("error: ").unwrap_or(msg).into());
            }
        };

        SessionCommand::from(&matches)?.run(&mut self.campus, out)
    }
}

/// Whether the session goes on after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A parsed session line.
#[derive(Debug, Clone)]
enum SessionCommand {
    New(CmdEventNew),
    Edit(CmdEventEdit),
    Delete(CmdEventDelete),
    Show(CmdEventShow),
    Day(CmdDay),
    Month(CmdMonth),
    Navigate(CmdNavigate),
    Toggle(CmdToggle),
    Rides(CmdRides),
    Ride(CmdRide),
    MyRides(CmdMyRides),
    Offer(CmdOffer),
    Housing(CmdHousing),
    Places(CmdPlaces),
    Assignments(CmdAssignments),
    Done(CmdDone),
    Quit,
}

impl SessionCommand {
    const NAME_QUIT: &str = "quit";

    fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        use SessionCommand::*;
        let command = match matches.subcommand() {
            Some((CmdEventNew::NAME, matches)) => New(CmdEventNew::from(matches)),
            Some((CmdEventEdit::NAME, matches)) => Edit(CmdEventEdit::from(matches)),
            Some((CmdEventDelete::NAME, matches)) => Delete(CmdEventDelete::from(matches)),
            Some((CmdEventShow::NAME, matches)) => Show(CmdEventShow::from(matches)),
            Some((CmdDay::NAME, matches)) => Day(CmdDay::from(matches)),
            Some((CmdMonth::NAME, _)) => Month(CmdMonth),
            Some((CmdToggle::NAME, _)) => Toggle(CmdToggle),
            Some((CmdRides::NAME, matches)) => Rides(CmdRides::from(matches)),
            Some((CmdRide::NAME, matches)) => Ride(CmdRide::from(matches)),
            Some((CmdMyRides::NAME, matches)) => MyRides(CmdMyRides::from(matches)),
            Some((CmdOffer::NAME, matches)) => Offer(CmdOffer::from(matches)),
            Some((CmdHousing::NAME, matches)) => Housing(CmdHousing::from(matches)),
            Some((CmdPlaces::NAME, matches)) => Places(CmdPlaces::from(matches)),
            Some((CmdAssignments::NAME, matches)) => Assignments(CmdAssignments::from(matches)),
            Some((CmdDone::NAME, matches)) => Done(CmdDone::from(matches)),
            Some((Self::NAME_QUIT, _)) => Quit,
            Some((name, matches)) => match CmdNavigate::from(name, matches) {
                Some(cmd) => Navigate(cmd),
                None => return Err(format!("Unknown command: {name}").into()),
            },
            None => return Err("No command given".into()),
        };
        Ok(command)
    }

    #[rustfmt::skip]
    fn run(self, campus: &mut Campus, out: &mut impl io::Write) -> Result<Flow, Box<dyn Error>> {
        use SessionCommand::*;
        match self {
            New(a)         => a.run(campus, out)?,
            Edit(a)        => a.run(campus, out)?,
            Delete(a)      => a.run(campus, out)?,
            Show(a)        => a.run(campus, out)?,
            Day(a)         => a.run(campus, out)?,
            Month(a)       => a.run(campus, out)?,
            Navigate(a)    => a.run(campus, out)?,
            Toggle(a)      => a.run(campus, out)?,
            Rides(a)       => a.run(campus, out)?,
            Ride(a)        => a.run(campus, out)?,
            MyRides(a)     => a.run(campus, out)?,
            Offer(a)       => a.run(campus, out)?,
            Housing(a)     => a.run(campus, out)?,
            Places(a)      => a.run(campus, out)?,
            Assignments(a) => a.run(campus, out)?,
            Done(a)        => a.run(campus, out)?,
            Quit           => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}

fn is_informational(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            | ErrorKind::DisplayVersion
    )
}

/// Writes an error, listing each offending field of a rejected form.
fn report_error(err: &(dyn Error + 'static), out: &mut impl io::Write) -> io::Result<()> {
    writeln!(out, "{} {}", "Error:".red(), err)?;

    let validation = match err.downcast_ref::<CampusError>() {
        Some(CampusError::Validation(e)) => Some(e),
        _ => err.downcast_ref::<ValidationError>(),
    };
    if let Some(validation) = validation {
        for field in validation.errors() {
            writeln!(out, "  {} {}", "-".red(), field.message())?;
        }
    }
    Ok(())
}

/// Splits a line into words the way a shell would: whitespace separates words,
/// single quotes keep everything literal, double quotes keep whitespace, and a
/// backslash escapes the next character outside single quotes.
pub fn split_line(line: &str) -> Result<Vec<String>, &'static str> {
    #[derive(Clone, Copy, PartialEq)]
    enum Quote {
        None,
        Single,
        Double,
    }

    let mut words = Vec::new();
    let mut word = String::new();
    let mut in_word = false;
    let mut quote = Quote::None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Quote::Single, '\'') | (Quote::Double, '"') => quote = Quote::None,
            (Quote::Single, c) => word.push(c),
            (_, '\\') => match chars.next() {
                Some(escaped) => {
                    word.push(escaped);
                    in_word = true;
                }
                None => return Err("Trailing backslash"),
            },
            (Quote::Double, c) => word.push(c),
            (Quote::None, '\'') => {
                quote = Quote::Single;
                in_word = true;
            }
            (Quote::None, '"') => {
                quote = Quote::Double;
                in_word = true;
            }
            (Quote::None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut word));
                    in_word = false;
                }
            }
            (Quote::None, c) => {
                word.push(c);
                in_word = true;
            }
        }
    }

    if quote != Quote::None {
        return Err("Unterminated quote");
    }
    if in_word {
        words.push(word);
    }
    Ok(words)
}
