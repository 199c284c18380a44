// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use unilife_core::{Campus, Ride, RideDraft, RideStatus, datetime};

use crate::listing_formatter::{RideColumn, format_ride_details};
use crate::table::Table;
use crate::util::{OutputFormat, parse_datetime_on, parse_price, resolve_id};

#[derive(Debug, Clone)]
pub struct CmdRides {
    pub query: String,
    pub output_format: OutputFormat,
}

impl CmdRides {
    pub const NAME: &str = "rides";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Search the rides offered by other drivers")
            .arg(arg!(query: [QUERY] "Origin, destination or driver name to look for"))
            .arg(OutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            query: matches
                .get_one::<String>("query")
                .cloned()
                .unwrap_or_default(),
            output_format: OutputFormat::from(matches),
        }
    }

    pub fn run(self, campus: &Campus, out: &mut impl io::Write) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "searching rides...");
        let rides: Vec<Ride> = campus
            .rides()
            .search(&self.query)
            .into_iter()
            .cloned()
            .map(Ride::Listing)
            .collect();

        if rides.is_empty() && self.output_format == OutputFormat::Table {
            writeln!(out, "{}", "No rides found".italic())?;
            return Ok(());
        }
        let columns = RideColumn::board();
        write!(out, "{}", Table::new(self.output_format, &columns, &rides))?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdMyRides {
    pub output_format: OutputFormat,
}

impl CmdMyRides {
    pub const NAME: &str = "my-rides";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List the rides you offer")
            .arg(OutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: OutputFormat::from(matches),
        }
    }

    pub fn run(self, campus: &Campus, out: &mut impl io::Write) -> Result<(), Box<dyn Error>> {
        let rides: Vec<Ride> = campus
            .rides()
            .my_rides()
            .into_iter()
            .cloned()
            .map(Ride::Offering)
            .collect();

        if rides.is_empty() && self.output_format == OutputFormat::Table {
            writeln!(out, "{}", "You are not offering any ride".italic())?;
            return Ok(());
        }
        let columns = RideColumn::mine();
        write!(out, "{}", Table::new(self.output_format, &columns, &rides))?;
        Ok(())
    }
}

/// Shows a single ride with the driver profile and contact details.
#[derive(Debug, Clone)]
pub struct CmdRide {
    pub id: String,
    pub output_format: OutputFormat,
}

impl CmdRide {
    pub const NAME: &str = "ride";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the details of a ride and how to contact the driver")
            .arg(arg!(id: <ID> "Id of the ride, or a unique prefix of it"))
            .arg(OutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: matches.get_one::<String>("id").cloned().unwrap_or_default(),
            output_format: OutputFormat::from(matches),
        }
    }

    pub fn run(self, campus: &Campus, out: &mut impl io::Write) -> Result<(), Box<dyn Error>> {
        let rides = campus.rides();
        let id = resolve_id(rides.iter().map(Ride::id), &self.id)?;
        let ride = rides
            .get(&id)
            .ok_or_else(|| format!("No ride found with id '{id}'"))?;
        match self.output_format {
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(ride)?)?,
            OutputFormat::Table => write!(out, "{}", format_ride_details(ride))?,
        }
        Ok(())
    }
}

/// Offers a new ride, or changes one of the user's offers with `--edit`.
#[derive(Debug, Clone, Default)]
pub struct CmdOffer {
    pub edit: Option<String>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub departure: Option<String>,
    pub seats: Option<u8>,
    pub price: Option<u32>,
    pub contact: Option<String>,
    pub description: Option<String>,
    pub status: Option<RideStatus>,
}

impl CmdOffer {
    pub const NAME: &str = "offer";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Offer a ride, or change one of your offers")
            .arg(arg!(--edit <ID> "Id of your offer to change"))
            .arg(arg!(-f --from <ORIGIN> "Where the ride starts"))
            .arg(arg!(-t --to <DESTINATION> "Where the ride goes"))
            .arg(arg!(-a --at <DEPARTURE> "Departure, as HH:MM on the active day or YYYY-MM-DD HH:MM"))
            .arg(arg!(--seats <SEATS> "Free seats").value_parser(value_parser!(u8)))
            .arg(arg!(--price <PRICE> "Price per passenger, e.g. 5.00").value_parser(parse_price))
            .arg(arg!(--contact <CONTACT> "How passengers can reach you"))
            .arg(arg!(-d --description <DESCRIPTION> "Meeting point and other details"))
            .arg(arg!(--status <STATUS> "Status of the ride").value_parser(value_parser!(RideStatus)))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            edit: matches.get_one::<String>("edit").cloned(),
            origin: matches.get_one::<String>("from").cloned(),
            destination: matches.get_one::<String>("to").cloned(),
            departure: matches.get_one::<String>("at").cloned(),
            seats: matches.get_one::<u8>("seats").copied(),
            price: matches.get_one::<u32>("price").copied(),
            contact: matches.get_one::<String>("contact").cloned(),
            description: matches.get_one::<String>("description").cloned(),
            status: matches.get_one::<RideStatus>("status").copied(),
        }
    }

    pub fn run(self, campus: &mut Campus, out: &mut impl io::Write) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "submitting ride offer...");
        let mut draft = match &self.edit {
            Some(input) => {
                let mine = campus.rides().my_rides();
                let id = resolve_id(mine.iter().map(|o| o.id.as_str()), input)?;
                let offer = mine
                    .into_iter()
                    .find(|o| o.id == id)
                    .ok_or_else(|| format!("You have no ride offer with id '{id}'"))?;
                RideDraft::from_offer(offer)
            }
            None => {
                let now = datetime::now();
                RideDraft::new(campus.current().to_datetime(now.time()))
            }
        };
        self.apply(&mut draft)?;

        let created = draft.id.is_none();
        let offer = campus.submit_ride(draft)?;
        let verb = if created { "Ride offered" } else { "Ride updated" };
        writeln!(
            out,
            "{} {} -> {} at {} ({})",
            verb.green(),
            offer.trip.origin,
            offer.trip.destination,
            offer.trip.departure.strftime(datetime::STABLE_FORMAT_DATETIME),
            offer.id,
        )?;
        Ok(())
    }

    fn apply(self, draft: &mut RideDraft) -> Result<(), Box<dyn Error>> {
        if let Some(origin) = self.origin {
            draft.origin = origin;
        }
        if let Some(destination) = self.destination {
            draft.destination = destination;
        }
        if let Some(departure) = self.departure {
            draft.departure = parse_datetime_on(draft.departure.date(), &departure)?;
        }
        if let Some(seats) = self.seats {
            draft.seats = seats;
        }
        if let Some(price) = self.price {
            draft.price_cents = price;
        }
        if let Some(contact) = self.contact {
            draft.contact = contact;
        }
        if let Some(description) = self.description {
            draft.description = description;
        }
        if let Some(status) = self.status {
            draft.status = status;
        }
        Ok(())
    }
}
