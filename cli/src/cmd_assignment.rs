// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use unilife_core::{Assignment, Campus};

use crate::listing_formatter::AssignmentColumn;
use crate::table::Table;
use crate::util::{OutputFormat, resolve_id};

/// Lists the assignments, optionally only the pending ones.
#[derive(Debug, Clone, Copy)]
pub struct CmdAssignments {
    pub pending: bool,
    pub output_format: OutputFormat,
}

impl CmdAssignments {
    pub const NAME: &str = "assignments";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("hw")
            .about("List your assignments")
            .arg(arg!(--pending "Only show assignments not done yet, earliest deadline first"))
            .arg(OutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            pending: matches.get_flag("pending"),
            output_format: OutputFormat::from(matches),
        }
    }

    pub fn run(self, campus: &Campus, out: &mut impl io::Write) -> Result<(), Box<dyn Error>> {
        let board = campus.assignments();
        let assignments: Vec<Assignment> = match self.pending {
            true => board.pending().into_iter().cloned().collect(),
            false => board.iter().cloned().collect(),
        };

        match self.output_format {
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&assignments)?)?,
            OutputFormat::Table if assignments.is_empty() => {
                writeln!(out, "{}", "No assignments".italic())?
            }
            OutputFormat::Table => {
                let columns = AssignmentColumn::all();
                write!(out, "{}", Table::new(self.output_format, &columns, &assignments))?
            }
        }
        Ok(())
    }
}

/// Toggles the completion of an assignment.
#[derive(Debug, Clone)]
pub struct CmdDone {
    pub id: String,
}

impl CmdDone {
    pub const NAME: &str = "done";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Mark an assignment as done, or as not done if it already is")
            .arg(arg!(id: <ID> "Id of the assignment, or a unique prefix of it"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: matches.get_one::<String>("id").cloned().unwrap_or_default(),
        }
    }

    pub fn run(self, campus: &mut Campus, out: &mut impl io::Write) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "toggling assignment...");
        let ids = campus.assignments().iter().map(|a| a.id.as_str());
        let id = resolve_id(ids, &self.id)?;
        let completed = campus.toggle_assignment(&id)?;

        let title = campus
            .assignments()
            .get(&id)
            .map(|a| a.title.clone())
            .unwrap_or_default();
        if completed {
            writeln!(out, "{} {}", "Done:".green(), title)?;
        } else {
            writeln!(out, "{} {}", "Not done:".yellow(), title)?;
        }
        Ok(())
    }
}
