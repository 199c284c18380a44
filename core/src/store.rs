// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::{BTreeMap, BTreeSet, HashMap};

use jiff::civil::Date;

use crate::{DayOrder, Event};

/// In-memory calendar: events bucketed by the day they start on.
///
/// Invariants:
/// - every event is listed under exactly one day, the date of its start;
/// - an id appears at most once across all days;
/// - days without events are not kept in the map.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    days: BTreeMap<Date, Vec<Event>>,
    index: HashMap<String, Date>,
    order: DayOrder,
}

impl EventStore {
    pub fn new(order: DayOrder) -> Self {
        Self {
            days: BTreeMap::new(),
            index: HashMap::new(),
            order,
        }
    }

    pub fn order(&self) -> DayOrder {
        self.order
    }

    /// Inserts the event, replacing any event with the same id.
    ///
    /// When the start date changed the event moves to its new day.
    pub fn upsert(&mut self, event: Event) {
        if self.take(&event.id).is_some() {
            tracing::debug!(id = %event.id, "replacing event");
        }

        let day = event.day();
        self.index.insert(event.id.clone(), day);
        let list = self.days.entry(day).or_default();
        let pos = match self.order {
            // after every event starting no later, so equal starts keep submission order
            DayOrder::Chronological => list.partition_point(|e| e.start <= event.start),
            DayOrder::Insertion => list.len(),
        };
        tracing::debug!(id = %event.id, %day, pos, "inserting event");
        list.insert(pos, event);
    }

    /// Removes the event with the given id. Unknown ids are ignored.
    pub fn remove(&mut self, id: &str) -> Option<Event> {
        let removed = self.take(id);
        match &removed {
            Some(event) => tracing::debug!(id, day = %event.day(), "removed event"),
            None => tracing::debug!(id, "no event to remove"),
        }
        removed
    }

    /// The events of the given day in display order.
    pub fn events_for_day(&self, day: Date) -> &[Event] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or_default()
    }

    /// Days with at least one event, in calendar order.
    pub fn all_marked_days(&self) -> BTreeSet<Date> {
        self.days.keys().copied().collect()
    }

    /// Days with at least one event in the month containing `day`.
    pub fn marked_days_in_month(&self, day: Date) -> BTreeSet<Date> {
        self.days
            .range(day.first_of_month()..=day.last_of_month())
            .map(|(d, _)| *d)
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        let day = self.index.get(id)?;
        self.days.get(day)?.iter().find(|e| e.id == id)
    }

    /// The day the event with the given id is listed under.
    pub fn day_of(&self, id: &str) -> Option<Date> {
        self.index.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Total number of events across all days.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Every event, ordered by day and then by display order within the day.
    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.days.values().flatten()
    }

    fn take(&mut self, id: &str) -> Option<Event> {
        let day = self.index.remove(id)?;
        let list = self.days.get_mut(&day)?;
        let pos = list.iter().position(|e| e.id == id)?;
        let event = list.remove(pos);
        if list.is_empty() {
            self.days.remove(&day);
        }
        Some(event)
    }
}
