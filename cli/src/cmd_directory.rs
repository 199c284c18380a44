// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use unilife_core::{Campus, HousingKind, HousingListing, Place, PlaceCategory};

use crate::listing_formatter::{HousingColumn, PlaceColumn};
use crate::table::Table;
use crate::util::OutputFormat;

#[derive(Debug, Clone)]
pub struct CmdHousing {
    pub kind: Option<HousingKind>,
    pub query: String,
    pub output_format: OutputFormat,
}

impl CmdHousing {
    pub const NAME: &str = "housing";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Browse rooms and apartments for rent")
            .arg(arg!(query: [QUERY] "Text to look for in title, address or features"))
            .arg(
                arg!(-k --kind <KIND> "Only show this kind of housing")
                    .value_parser(value_parser!(HousingKind)),
            )
            .arg(OutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            kind: matches.get_one::<HousingKind>("kind").copied(),
            query: matches
                .get_one::<String>("query")
                .cloned()
                .unwrap_or_default(),
            output_format: OutputFormat::from(matches),
        }
    }

    pub fn run(self, campus: &Campus, out: &mut impl io::Write) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "filtering housing...");
        let listings: Vec<HousingListing> = campus
            .housing()
            .filter(self.kind, &self.query)
            .into_iter()
            .cloned()
            .collect();

        match self.output_format {
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&listings)?)?,
            OutputFormat::Table if listings.is_empty() => {
                writeln!(out, "{}", "No housing found".italic())?
            }
            OutputFormat::Table => {
                let columns = HousingColumn::all();
                write!(out, "{}", Table::new(self.output_format, &columns, &listings))?
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdPlaces {
    pub category: Option<PlaceCategory>,
    pub output_format: OutputFormat,
}

impl CmdPlaces {
    pub const NAME: &str = "places";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Browse places near campus")
            .arg(
                arg!(category: [CATEGORY] "Only show this category")
                    .value_parser(value_parser!(PlaceCategory)),
            )
            .arg(OutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            category: matches.get_one::<PlaceCategory>("category").copied(),
            output_format: OutputFormat::from(matches),
        }
    }

    pub fn run(self, campus: &Campus, out: &mut impl io::Write) -> Result<(), Box<dyn Error>> {
        let places: Vec<Place> = campus
            .places()
            .filter(self.category)
            .into_iter()
            .cloned()
            .collect();

        match self.output_format {
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&places)?)?,
            OutputFormat::Table if places.is_empty() => {
                writeln!(out, "{}", "No places found".italic())?
            }
            OutputFormat::Table => {
                let columns = PlaceColumn::all();
                write!(out, "{}", Table::new(self.output_format, &columns, &places))?
            }
        }
        Ok(())
    }
}
