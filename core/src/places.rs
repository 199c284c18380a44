// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt::Display, str::FromStr};

/// Category of a place near campus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum PlaceCategory {
    Restaurant,
    Cafe,
    Bookstore,
    Market,
}

const CATEGORY_RESTAURANT: &str = "restaurant";
const CATEGORY_CAFE: &str = "cafe";
const CATEGORY_BOOKSTORE: &str = "bookstore";
const CATEGORY_MARKET: &str = "market";

impl PlaceCategory {
    /// Icon shown on the category chip.
    pub fn icon(self) -> &'static str {
        match self {
            PlaceCategory::Restaurant => "restaurant-outline",
            PlaceCategory::Cafe => "cafe-outline",
            PlaceCategory::Bookstore => "book-outline",
            PlaceCategory::Market => "cart-outline",
        }
    }
}

impl AsRef<str> for PlaceCategory {
    fn as_ref(&self) -> &str {
        match self {
            PlaceCategory::Restaurant => CATEGORY_RESTAURANT,
            PlaceCategory::Cafe => CATEGORY_CAFE,
            PlaceCategory::Bookstore => CATEGORY_BOOKSTORE,
            PlaceCategory::Market => CATEGORY_MARKET,
        }
    }
}

impl Display for PlaceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for PlaceCategory {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            CATEGORY_RESTAURANT => Ok(PlaceCategory::Restaurant),
            CATEGORY_CAFE => Ok(PlaceCategory::Cafe),
            CATEGORY_BOOKSTORE => Ok(PlaceCategory::Bookstore),
            CATEGORY_MARKET => Ok(PlaceCategory::Market),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub category: PlaceCategory,
    /// Distance as shown to the user, e.g. `150m`.
    pub distance: String,
    /// Average rating out of 5.
    pub rating: f32,
    /// Opening hours label, e.g. `07:00 - 19:00`.
    pub open_hours: String,
}

/// Nearby places, browsed by category.
#[derive(Debug, Clone, Default)]
pub struct PlaceDirectory {
    places: Vec<Place>,
}

impl PlaceDirectory {
    pub fn new(places: Vec<Place>) -> Self {
        Self { places }
    }

    pub fn add(&mut self, place: Place) {
        self.places.push(place);
    }

    /// Places of the given category, or all of them for `None`.
    pub fn filter(&self, category: Option<PlaceCategory>) -> Vec<&Place> {
        self.places
            .iter()
            .filter(|p| category.is_none_or(|c| p.category == c))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}
