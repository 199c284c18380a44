// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt::Display, str::FromStr};

use jiff::civil::DateTime;

use crate::form::generate_id;
use crate::{FieldError, ValidationError};

/// The lifecycle state of a ride.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum RideStatus {
    /// Open for passengers.
    #[default]
    Active,

    /// The trip took place.
    Completed,

    /// The driver called the trip off.
    Canceled,
}

const STATUS_ACTIVE: &str = "active";
const STATUS_COMPLETED: &str = "completed";
const STATUS_CANCELED: &str = "canceled";

impl AsRef<str> for RideStatus {
    fn as_ref(&self) -> &str {
        match self {
            RideStatus::Active => STATUS_ACTIVE,
            RideStatus::Completed => STATUS_COMPLETED,
            RideStatus::Canceled => STATUS_CANCELED,
        }
    }
}

impl Display for RideStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for RideStatus {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            STATUS_ACTIVE => Ok(RideStatus::Active),
            STATUS_COMPLETED => Ok(RideStatus::Completed),
            STATUS_CANCELED => Ok(RideStatus::Canceled),
            _ => Err(()),
        }
    }
}

/// The fields shared by every ride, whoever offers it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Trip {
    pub origin: String,
    pub destination: String,
    pub departure: DateTime,
    pub seats: u8,
    /// Price per passenger, in cents.
    pub price_cents: u32,
    pub description: Option<String>,
    pub contact: String,
    pub status: RideStatus,
}

impl Trip {
    /// Price per passenger formatted with two decimals, e.g. `5.00`.
    pub fn price(&self) -> String {
        format!("{}.{:02}", self.price_cents / 100, self.price_cents % 100)
    }

    fn matches(&self, query: &str) -> bool {
        contains_ignore_case(&self.origin, query) || contains_ignore_case(&self.destination, query)
    }
}

/// Public profile of a driver offering rides.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Driver {
    pub id: String,
    pub name: String,
    pub verified: bool,
    pub faculty: Option<String>,
    pub course: Option<String>,
    pub member_since: Option<String>,
}

/// A ride offered by the current user.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RideOffer {
    pub id: String,
    pub trip: Trip,
}

/// A ride offered by another driver.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RideListing {
    pub id: String,
    pub trip: Trip,
    pub driver: Driver,
}

/// An entry on the ride board.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Ride {
    Offering(RideOffer),
    Listing(RideListing),
}

impl Ride {
    pub fn id(&self) -> &str {
        match self {
            Ride::Offering(offer) => &offer.id,
            Ride::Listing(listing) => &listing.id,
        }
    }

    pub fn trip(&self) -> &Trip {
        match self {
            Ride::Offering(offer) => &offer.trip,
            Ride::Listing(listing) => &listing.trip,
        }
    }

    /// The driver of someone else's ride. Own offers have no driver profile.
    pub fn driver(&self) -> Option<&Driver> {
        match self {
            Ride::Offering(_) => None,
            Ride::Listing(listing) => Some(&listing.driver),
        }
    }

    pub fn is_own(&self) -> bool {
        match self {
            Ride::Offering(_) => true,
            Ride::Listing(_) => false,
        }
    }
}

/// Unvalidated data of the "offer a ride" form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RideDraft {
    /// The id of the offer being edited, `None` when creating a new one.
    pub id: Option<String>,
    pub origin: String,
    pub destination: String,
    pub departure: DateTime,
    pub seats: u8,
    pub price_cents: u32,
    pub description: String,
    pub contact: String,
    pub status: RideStatus,
}

impl RideDraft {
    /// An empty offer leaving at `departure` with one free seat.
    pub fn new(departure: DateTime) -> Self {
        Self {
            id: None,
            origin: String::new(),
            destination: String::new(),
            departure,
            seats: 1,
            price_cents: 0,
            description: String::new(),
            contact: String::new(),
            status: RideStatus::Active,
        }
    }

    pub fn from_offer(offer: &RideOffer) -> Self {
        let trip = &offer.trip;
        Self {
            id: Some(offer.id.clone()),
            origin: trip.origin.clone(),
            destination: trip.destination.clone(),
            departure: trip.departure,
            seats: trip.seats,
            price_cents: trip.price_cents,
            description: trip.description.clone().unwrap_or_default(),
            contact: trip.contact.clone(),
            status: trip.status,
        }
    }
}

/// Checks and normalizes ride drafts.
#[derive(Debug, Default, Clone, Copy)]
pub struct RideForm;

impl RideForm {
    pub fn validate(&self, draft: &RideDraft) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if draft.origin.trim().is_empty() {
            errors.push(FieldError::MissingOrigin);
        }
        if draft.destination.trim().is_empty() {
            errors.push(FieldError::MissingDestination);
        }
        if draft.seats == 0 {
            errors.push(FieldError::NoSeats);
        }
        if draft.contact.trim().is_empty() {
            errors.push(FieldError::MissingContact);
        }
        errors
    }

    pub fn normalize(&self, draft: RideDraft) -> Result<RideOffer, ValidationError> {
        if let Some(err) = ValidationError::from_errors(self.validate(&draft)) {
            tracing::debug!(%err, "rejected ride draft");
            return Err(err);
        }

        let description = draft.description.trim();
        Ok(RideOffer {
            id: draft.id.unwrap_or_else(generate_id),
            trip: Trip {
                origin: draft.origin.trim().to_owned(),
                destination: draft.destination.trim().to_owned(),
                departure: draft.departure,
                seats: draft.seats,
                price_cents: draft.price_cents,
                description: (!description.is_empty()).then(|| description.to_owned()),
                contact: draft.contact.trim().to_owned(),
                status: draft.status,
            },
        })
    }
}

/// Rides offered by the user and by other drivers.
#[derive(Debug, Clone, Default)]
pub struct RideBoard {
    rides: Vec<Ride>,
}

impl RideBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a new offer, or replaces the user's offer with the same id in place.
    pub fn upsert_offer(&mut self, offer: RideOffer) {
        match self.rides.iter_mut().find(|r| r.is_own() && r.id() == offer.id) {
            Some(ride) => {
                tracing::debug!(id = %offer.id, "updating ride offer");
                *ride = Ride::Offering(offer);
            }
            None => {
                tracing::debug!(id = %offer.id, "adding ride offer");
                self.rides.push(Ride::Offering(offer));
            }
        }
    }

    /// Publishes a ride of another driver.
    pub fn add_listing(&mut self, listing: RideListing) {
        tracing::debug!(id = %listing.id, driver = %listing.driver.name, "adding ride listing");
        self.rides.retain(|r| r.id() != listing.id);
        self.rides.push(Ride::Listing(listing));
    }

    /// Removes the ride with the given id. Unknown ids are ignored.
    pub fn remove(&mut self, id: &str) -> Option<Ride> {
        let pos = self.rides.iter().position(|r| r.id() == id)?;
        tracing::debug!(id, "removing ride");
        Some(self.rides.remove(pos))
    }

    pub fn get(&self, id: &str) -> Option<&Ride> {
        self.rides.iter().find(|r| r.id() == id)
    }

    /// Every ride on the board, offers and listings alike.
    pub fn iter(&self) -> impl Iterator<Item = &Ride> {
        self.rides.iter()
    }

    /// Whether the ride with the given id was offered by the user.
    pub fn is_own(&self, id: &str) -> bool {
        self.get(id).is_some_and(Ride::is_own)
    }

    /// Active rides of other drivers whose origin, destination or driver name
    /// contains `query`, ignoring case. An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&RideListing> {
        let query = query.trim();
        self.rides
            .iter()
            .filter_map(|ride| match ride {
                Ride::Listing(listing) => Some(listing),
                Ride::Offering(_) => None,
            })
            .filter(|l| l.trip.status == RideStatus::Active)
            .filter(|l| {
                query.is_empty()
                    || l.trip.matches(query)
                    || contains_ignore_case(&l.driver.name, query)
            })
            .collect()
    }

    /// The rides offered by the user, in the order they were created.
    pub fn my_rides(&self) -> Vec<&RideOffer> {
        self.rides
            .iter()
            .filter_map(|ride| match ride {
                Ride::Offering(offer) => Some(offer),
                Ride::Listing(_) => None,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rides.is_empty()
    }
}

pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use jiff::civil::datetime;

    use super::*;

    fn draft() -> RideDraft {
        RideDraft {
            origin: "Centro".to_string(),
            destination: "Campus".to_string(),
            contact: "(47) 98888-8888".to_string(),
            price_cents: 500,
            ..RideDraft::new(datetime(2025, 3, 10, 7, 0, 0, 0))
        }
    }

    #[test]
    fn empty_draft_reports_all_missing_fields() {
        let draft = RideDraft {
            seats: 0,
            ..RideDraft::new(datetime(2025, 3, 10, 7, 0, 0, 0))
        };
        assert_eq!(
            RideForm.validate(&draft),
            vec![
                FieldError::MissingOrigin,
                FieldError::MissingDestination,
                FieldError::NoSeats,
                FieldError::MissingContact,
            ]
        );
    }

    #[test]
    fn normalize_builds_active_offer() {
        let offer = RideForm.normalize(draft()).unwrap();
        assert!(!offer.id.is_empty());
        assert_eq!(offer.trip.status, RideStatus::Active);
        assert_eq!(offer.trip.price(), "5.00");
        assert_eq!(offer.trip.description, None);
    }

    #[test]
    fn ride_accessors_match_variant() {
        let offer = RideForm.normalize(draft()).unwrap();
        let ride = Ride::Offering(offer.clone());
        assert_eq!(ride.id(), offer.id);
        assert!(ride.is_own());
        assert!(ride.driver().is_none());
    }

    #[test]
    fn upsert_offer_replaces_in_place() {
        let mut board = RideBoard::new();
        let first = RideForm.normalize(draft()).unwrap();
        let second = RideForm.normalize(draft()).unwrap();
        board.upsert_offer(first.clone());
        board.upsert_offer(second.clone());

        let edited = RideForm
            .normalize(RideDraft {
                seats: 3,
                ..RideDraft::from_offer(&first)
            })
            .unwrap();
        board.upsert_offer(edited);

        let mine = board.my_rides();
        assert_eq!(mine.len(), 2);
        assert_eq!(mine[0].id, first.id);
        assert_eq!(mine[0].trip.seats, 3);
        assert_eq!(mine[1].id, second.id);
    }

    #[test]
    fn status_round_trips_through_str() {
        for status in [RideStatus::Active, RideStatus::Completed, RideStatus::Canceled] {
            assert_eq!(status.to_string().parse::<RideStatus>(), Ok(status));
        }
        assert!("cancelled".parse::<RideStatus>().is_err());
    }

    #[test]
    fn serializes_with_variant_tag() {
        let offer = RideForm.normalize(draft()).unwrap();
        let value = serde_json::to_value(Ride::Offering(offer.clone())).unwrap();
        assert_eq!(value["type"], "offering");
        assert_eq!(value["id"], offer.id);
        assert_eq!(value["trip"]["status"], "active");
        assert_eq!(value["trip"]["departure"], "2025-03-10T07:00:00");
        assert!(value.get("driver").is_none());

        let listing = Ride::Listing(RideListing {
            id: "ride-1".to_string(),
            trip: offer.trip,
            driver: Driver {
                id: "driver1".to_string(),
                name: "Carlos Silva".to_string(),
                verified: true,
                faculty: Some("Engineering".to_string()),
                course: None,
                member_since: None,
            },
        });
        let value = serde_json::to_value(listing).unwrap();
        assert_eq!(value["type"], "listing");
        assert_eq!(value["driver"]["faculty"], "Engineering");
        assert_eq!(value["driver"]["course"], serde_json::Value::Null);
    }

    #[test]
    fn iter_covers_offers_and_listings() {
        let mut board = RideBoard::new();
        board.upsert_offer(RideForm.normalize(draft()).unwrap());
        let offer = RideForm.normalize(draft()).unwrap();
        board.add_listing(RideListing {
            id: "ride-1".to_string(),
            trip: offer.trip,
            driver: Driver {
                id: "driver1".to_string(),
                name: "Carlos Silva".to_string(),
                verified: false,
                faculty: None,
                course: None,
                member_since: None,
            },
        });
        assert_eq!(board.iter().count(), 2);
        assert_eq!(board.iter().filter(|r| r.is_own()).count(), 1);
    }

    #[test]
    fn price_pads_cents() {
        let offer = RideForm
            .normalize(RideDraft {
                price_cents: 1205,
                ..draft()
            })
            .unwrap();
        assert_eq!(offer.trip.price(), "12.05");
    }
}
