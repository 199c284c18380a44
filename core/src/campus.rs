// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;

use jiff::civil::{Date, DateTime};

use crate::{
    AssignmentBoard, CampusError, Config, DaySelection, Event, EventDraft, EventForm, EventStore,
    HousingBoard, PlaceDirectory, RideBoard, RideDraft, RideForm, RideOffer, datetime,
};

/// A campus session: owns every store and the view state of the calendar.
///
/// Constructed once per session and handed to the UI layer, which raises
/// intents (`submit_*`, `delete`, day navigation) and re-reads the stores for
/// rendering after each one.
#[derive(Debug, Clone)]
pub struct Campus {
    config: Config,
    form: EventForm,
    events: EventStore,
    selection: DaySelection,
    assignments: AssignmentBoard,
    rides: RideBoard,
    housing: HousingBoard,
    places: PlaceDirectory,
}

impl Campus {
    /// Starts a session on today's date in the system time zone.
    pub fn new(config: Config) -> Self {
        Self::with_today(config, datetime::now().date())
    }

    /// Starts a session with an explicit "today".
    pub fn with_today(config: Config, today: Date) -> Self {
        tracing::debug!(?config, %today, "starting campus session");
        Self {
            config,
            form: EventForm::new(&config),
            events: EventStore::new(config.day_order),
            selection: DaySelection::new(today),
            assignments: AssignmentBoard::default(),
            rides: RideBoard::new(),
            housing: HousingBoard::default(),
            places: PlaceDirectory::default(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn form(&self) -> &EventForm {
        &self.form
    }

    /// The draft of an empty creation form: on the active day, starting at the
    /// given wall-clock time.
    pub fn default_event_draft(&self, now: DateTime) -> EventDraft {
        let start = self.selection.current().to_datetime(now.time());
        EventDraft::new(start, self.config.default_duration.get())
    }

    /// Creates a new event from the creation form.
    ///
    /// Any id already present on the draft is discarded.
    pub fn submit_create(&mut self, mut draft: EventDraft) -> Result<&Event, CampusError> {
        draft.id = None;
        self.save(draft)
    }

    /// Overwrites the event `id` with the edit form values.
    pub fn submit_edit(&mut self, id: &str, mut draft: EventDraft) -> Result<&Event, CampusError> {
        if !self.events.contains(id) {
            return Err(CampusError::NotFound(id.to_owned()));
        }
        draft.id = Some(id.to_owned());
        self.save(draft)
    }

    fn save(&mut self, draft: EventDraft) -> Result<&Event, CampusError> {
        let event = self.form.normalize(draft)?;
        let id = event.id.clone();
        self.events.upsert(event);
        self.events
            .get(&id)
            .ok_or_else(|| CampusError::NotFound(id))
    }

    /// Deletes the event `id`. Unknown ids are ignored.
    pub fn delete(&mut self, id: &str) -> Option<Event> {
        self.events.remove(id)
    }

    /// Selects a day from the month grid.
    pub fn tap_day(&mut self, day: Date) {
        tracing::debug!(%day, "day selected");
        self.selection.jump_to(day);
    }

    pub fn toggle_expanded(&mut self) -> bool {
        self.selection.toggle_expanded();
        self.selection.is_expanded()
    }

    pub fn previous_day(&mut self) -> Date {
        self.selection.go_to_previous_day()
    }

    pub fn next_day(&mut self) -> Date {
        self.selection.go_to_next_day()
    }

    pub fn current(&self) -> Date {
        self.selection.current()
    }

    pub fn is_expanded(&self) -> bool {
        self.selection.is_expanded()
    }

    pub fn selection(&self) -> &DaySelection {
        &self.selection
    }

    pub fn events_for_day(&self, day: Date) -> &[Event] {
        self.events.events_for_day(day)
    }

    /// The events of the active day.
    pub fn events_today(&self) -> &[Event] {
        self.events.events_for_day(self.selection.current())
    }

    pub fn all_marked_days(&self) -> BTreeSet<Date> {
        self.events.all_marked_days()
    }

    pub fn event(&self, id: &str) -> Option<&Event> {
        self.events.get(id)
    }

    pub fn events(&self) -> &EventStore {
        &self.events
    }

    /// Marks an assignment as done, or as not done if it already was. Returns
    /// the new completion state.
    pub fn toggle_assignment(&mut self, id: &str) -> Result<bool, CampusError> {
        self.assignments
            .toggle_completion(id)
            .ok_or_else(|| CampusError::NotFound(id.to_owned()))
    }

    pub fn assignments(&self) -> &AssignmentBoard {
        &self.assignments
    }

    pub fn assignments_mut(&mut self) -> &mut AssignmentBoard {
        &mut self.assignments
    }

    /// Creates or edits one of the user's ride offers.
    pub fn submit_ride(&mut self, draft: RideDraft) -> Result<&RideOffer, CampusError> {
        if let Some(id) = &draft.id {
            if !self.rides.is_own(id) {
                return Err(CampusError::NotFound(id.clone()));
            }
        }

        let offer = RideForm.normalize(draft)?;
        let id = offer.id.clone();
        self.rides.upsert_offer(offer);
        self.rides
            .my_rides()
            .into_iter()
            .find(|o| o.id == id)
            .ok_or(CampusError::NotFound(id))
    }

    pub fn rides(&self) -> &RideBoard {
        &self.rides
    }

    pub fn rides_mut(&mut self) -> &mut RideBoard {
        &mut self.rides
    }

    pub fn housing(&self) -> &HousingBoard {
        &self.housing
    }

    pub fn housing_mut(&mut self) -> &mut HousingBoard {
        &mut self.housing
    }

    pub fn places(&self) -> &PlaceDirectory {
        &self.places
    }

    pub fn places_mut(&mut self) -> &mut PlaceDirectory {
        &mut self.places
    }
}
