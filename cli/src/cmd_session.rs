// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    error::Error,
    io::{self, IsTerminal},
};

use clap::{Arg, ArgMatches, Command, arg, value_parser};
use jiff::civil::Date;
use unilife_core::{Campus, Config, datetime};

use crate::demo;
use crate::session::Session;

/// Starts an interactive session reading commands from standard input.
#[derive(Debug, Clone, Copy, Default)]
pub struct CmdSession {
    pub seed: bool,
    pub today: Option<Date>,
}

impl CmdSession {
    pub const NAME: &str = "session";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Start an interactive session (default)")
            .args(Self::args())
    }

    /// Arguments shared with the top-level command, which starts a session
    /// when no subcommand is given.
    pub fn args() -> [Arg; 2] {
        [
            arg!(--seed "Fill the session with sample events, rides, housing and places"),
            arg!(--today <DATE> "Pretend today is the given day, as YYYY-MM-DD")
                .value_parser(value_parser!(Date)),
        ]
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            seed: matches.get_flag("seed"),
            today: matches.get_one::<Date>("today").copied(),
        }
    }

    /// Builds the campus this session works on.
    pub fn campus(self, config: Config) -> Result<Campus, Box<dyn Error>> {
        let today = self.today.unwrap_or_else(|| datetime::now().date());
        let mut campus = Campus::with_today(config, today);
        if self.seed {
            tracing::debug!(%today, "seeding sample data");
            demo::seed(&mut campus)?;
        }
        Ok(campus)
    }

    pub async fn run(self, config: Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "starting session...");
        let campus = self.campus(config)?;
        let stdin = io::stdin();
        let prompt = stdin.is_terminal();
        let mut session = Session::new(campus).with_prompt(prompt);
        session.run(stdin.lock(), &mut io::stdout())?;
        Ok(())
    }
}
