// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test data factories (fixtures) and assertion
//! helpers for the event store invariants.

mod assertions;
mod fixtures;

#[allow(unused_imports)]
pub use assertions::{assert_no_duplicate_ids, assert_store_consistent};
#[allow(unused_imports)]
pub use fixtures::{
    calculus_draft, test_campus, test_config, test_event_draft, test_ride_draft, test_store,
};
