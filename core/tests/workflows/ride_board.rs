// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Ride board workflow tests.
//!
//! Offer, edit and search rides through the campus session.

use jiff::civil::datetime;
use unilife_core::{
    CampusError, Driver, FieldError, Ride, RideDraft, RideListing, RideStatus, Trip,
};

use crate::common::{test_campus, test_ride_draft};

fn listing(id: &str, driver: &str, origin: &str, status: RideStatus) -> RideListing {
    RideListing {
        id: id.to_string(),
        trip: Trip {
            origin: origin.to_string(),
            destination: "Campus".to_string(),
            departure: datetime(2025, 3, 10, 7, 30, 0, 0),
            seats: 2,
            price_cents: 700,
            description: None,
            contact: "(47) 99999-9999".to_string(),
            status,
        },
        driver: Driver {
            id: format!("driver-{id}"),
            name: driver.to_string(),
            verified: true,
            faculty: None,
            course: None,
            member_since: None,
        },
    }
}

#[test]
fn offer_without_contact_is_rejected() {
    let mut campus = test_campus();
    let draft = RideDraft {
        contact: String::new(),
        ..test_ride_draft()
    };
    match campus.submit_ride(draft) {
        Err(CampusError::Validation(err)) => assert!(err.contains(FieldError::MissingContact)),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(campus.rides().is_empty());
}

#[test]
fn offer_then_edit_keeps_one_entry() {
    let mut campus = test_campus();
    let offer = campus.submit_ride(test_ride_draft()).unwrap().clone();

    let draft = RideDraft {
        seats: 1,
        status: RideStatus::Canceled,
        ..RideDraft::from_offer(&offer)
    };
    let edited = campus.submit_ride(draft).unwrap();
    assert_eq!(edited.id, offer.id);
    assert_eq!(edited.trip.seats, 1);

    assert_eq!(campus.rides().my_rides().len(), 1);
    assert!(campus.rides().is_own(&offer.id));
}

#[test]
fn editing_someone_elses_ride_is_not_found() {
    let mut campus = test_campus();
    campus
        .rides_mut()
        .add_listing(listing("l1", "Maria", "Centro", RideStatus::Active));

    let draft = RideDraft {
        id: Some("l1".to_string()),
        ..test_ride_draft()
    };
    assert!(matches!(
        campus.submit_ride(draft),
        Err(CampusError::NotFound(_))
    ));
    assert!(matches!(campus.rides().get("l1"), Some(Ride::Listing(_))));
}

#[test]
fn search_covers_origin_destination_and_driver() {
    let mut campus = test_campus();
    let board = campus.rides_mut();
    board.add_listing(listing("l1", "Maria Silva", "Centro", RideStatus::Active));
    board.add_listing(listing("l2", "João Souza", "Bairro Norte", RideStatus::Active));
    board.add_listing(listing("l3", "Ana Lima", "Centro", RideStatus::Completed));
    campus.submit_ride(test_ride_draft()).unwrap();

    let ids = |query: &str| -> Vec<String> {
        campus
            .rides()
            .search(query)
            .into_iter()
            .map(|l| l.id.clone())
            .collect()
    };
    assert_eq!(ids(""), ["l1", "l2"]);
    assert_eq!(ids("centro"), ["l1"]);
    assert_eq!(ids("souza"), ["l2"]);
    assert_eq!(ids("CAMPUS"), ["l1", "l2"]);
    assert!(ids("downtown").is_empty());
}

#[test]
fn rides_match_exhaustively_on_variant() {
    let mut campus = test_campus();
    campus
        .rides_mut()
        .add_listing(listing("l1", "Maria", "Centro", RideStatus::Active));
    let own = campus.submit_ride(test_ride_draft()).unwrap().id.clone();

    for id in ["l1", own.as_str()] {
        let ride = campus.rides().get(id).unwrap();
        let who = match ride {
            Ride::Offering(_) => "me",
            Ride::Listing(l) => l.driver.name.as_str(),
        };
        assert_eq!(ride.is_own(), who == "me");
        assert_eq!(ride.trip().destination, "Campus");
    }
}
