// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt::Display, str::FromStr};

use crate::ride::contains_ignore_case;

/// The kind of accommodation on offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum HousingKind {
    /// A room in a shared house or apartment.
    Room,

    /// A whole apartment.
    Apartment,
}

const KIND_ROOM: &str = "room";
const KIND_APARTMENT: &str = "apartment";

impl AsRef<str> for HousingKind {
    fn as_ref(&self) -> &str {
        match self {
            HousingKind::Room => KIND_ROOM,
            HousingKind::Apartment => KIND_APARTMENT,
        }
    }
}

impl Display for HousingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for HousingKind {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            KIND_ROOM => Ok(HousingKind::Room),
            KIND_APARTMENT => Ok(HousingKind::Apartment),
            _ => Err(()),
        }
    }
}

/// A room or apartment for rent near campus.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct HousingListing {
    pub id: String,
    pub kind: HousingKind,
    pub title: String,
    pub address: String,
    /// Distance to campus as shown to the user, e.g. `500m`.
    pub distance: String,
    /// Monthly rent, in cents.
    pub price_cents: u32,
    pub features: Vec<String>,
}

impl HousingListing {
    fn matches(&self, query: &str) -> bool {
        contains_ignore_case(&self.title, query)
            || contains_ignore_case(&self.address, query)
            || self.features.iter().any(|f| contains_ignore_case(f, query))
    }
}

/// Housing listings, browsed by kind and free-text search.
#[derive(Debug, Clone, Default)]
pub struct HousingBoard {
    listings: Vec<HousingListing>,
}

impl HousingBoard {
    pub fn new(listings: Vec<HousingListing>) -> Self {
        Self { listings }
    }

    pub fn add(&mut self, listing: HousingListing) {
        tracing::debug!(id = %listing.id, kind = %listing.kind, "adding housing listing");
        self.listings.push(listing);
    }

    pub fn get(&self, id: &str) -> Option<&HousingListing> {
        self.listings.iter().find(|l| l.id == id)
    }

    /// Listings of the given kind (`None` for all kinds) whose title, address or
    /// any feature contains `query`, ignoring case.
    pub fn filter(&self, kind: Option<HousingKind>, query: &str) -> Vec<&HousingListing> {
        let query = query.trim();
        self.listings
            .iter()
            .filter(|l| kind.is_none_or(|k| l.kind == k))
            .filter(|l| query.is_empty() || l.matches(query))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}
