// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{Arg, ArgMatches, arg, value_parser};
use jiff::civil::{Date, DateTime};
use unilife_core::datetime::{parse_datetime, parse_time};

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

impl OutputFormat {
    pub fn arg() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn from(matches: &ArgMatches) -> Self {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }
}

/// Parses `HH:MM` on the given day, or a full `YYYY-MM-DD HH:MM`.
pub fn parse_datetime_on(day: Date, value: &str) -> Result<DateTime, Box<dyn Error>> {
    let value = value.trim();
    if let Ok(time) = parse_time(value) {
        return Ok(day.to_datetime(time));
    }
    parse_datetime(value).map_err(|_| {
        format!("Invalid date-time '{value}'. Expected format: HH:MM or YYYY-MM-DD HH:MM").into()
    })
}

/// Parses a price such as `5`, `5.5` or `12,05` into cents.
pub fn parse_price(value: &str) -> Result<u32, String> {
    let value = value.trim().replace(',', ".");
    let invalid = || format!("Invalid price '{value}'. Expected format: 12.34");

    let (units, cents) = match value.split_once('.') {
        Some((units, cents)) => (units, cents),
        None => (value.as_str(), ""),
    };
    if units.is_empty() || cents.len() > 2 || !cents.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let units: u32 = units.parse().map_err(|_| invalid())?;
    let cents: u32 = match cents.len() {
        0 => 0,
        1 => cents.parse::<u32>().map_err(|_| invalid())? * 10,
        _ => cents.parse().map_err(|_| invalid())?,
    };
    units
        .checked_mul(100)
        .and_then(|a| a.checked_add(cents))
        .ok_or_else(invalid)
}

/// Finds the id the user meant: an exact match, or the only id starting with
/// the given prefix. A blank input never matches.
pub fn resolve_id<'a, I>(ids: I, input: &str) -> Result<String, Box<dyn Error>>
where
    I: IntoIterator<Item = &'a str>,
{
    let input = input.trim();
    if input.is_empty() {
        return Err("No id given".into());
    }

    let mut candidates = Vec::new();
    for id in ids {
        if id == input {
            return Ok(id.to_string());
        } else if id.starts_with(input) {
            candidates.push(id);
        }
    }

    match candidates.as_slice() {
        [id] => Ok(id.to_string()),
        [] => Err(format!("No item found with id '{input}'").into()),
        _ => Err(format!(
            "Id '{input}' is ambiguous, it matches {} items",
            candidates.len()
        )
        .into()),
    }
}

/// The first characters of an id, enough to tell items apart on screen.
pub fn short_id(id: &str) -> &str {
    const SHORT_ID_LEN: usize = 8;
    match id.char_indices().nth(SHORT_ID_LEN) {
        Some((idx, _)) => &id[..idx],
        None => id,
    }
}
