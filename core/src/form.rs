// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use uuid::Uuid;

use crate::{Config, Event, EventDraft, FieldError, ValidationError};

/// Turns event drafts into events.
///
/// The form never touches the store: it only checks and normalizes user input,
/// the caller decides what to do with the resulting [`Event`].
#[derive(Debug, Clone, Copy)]
pub struct EventForm {
    require_location: bool,
}

impl EventForm {
    pub fn new(config: &Config) -> Self {
        Self {
            require_location: config.require_location,
        }
    }

    pub fn require_location(&self) -> bool {
        self.require_location
    }

    /// Lists every violated field of the draft, in form order. An empty list
    /// means the draft is valid.
    pub fn validate(&self, draft: &EventDraft) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if draft.title.trim().is_empty() {
            errors.push(FieldError::MissingTitle);
        }
        if self.require_location && draft.location.trim().is_empty() {
            errors.push(FieldError::MissingLocation);
        }
        if draft.end < draft.start {
            errors.push(FieldError::EndBeforeStart);
        }
        errors
    }

    /// Validates the draft and builds the event from it.
    ///
    /// The draft id is kept when present (edit), otherwise a fresh one is
    /// generated (create). Text fields are trimmed and empty notes dropped.
    pub fn normalize(&self, draft: EventDraft) -> Result<Event, ValidationError> {
        if let Some(err) = ValidationError::from_errors(self.validate(&draft)) {
            tracing::debug!(%err, "rejected event draft");
            return Err(err);
        }

        let id = match draft.id {
            Some(id) => id,
            None => generate_id(),
        };
        let notes = draft.notes.trim();
        Ok(Event {
            id,
            title: draft.title.trim().to_owned(),
            start: draft.start,
            end: draft.end,
            location: draft.location.trim().to_owned(),
            category: draft.category,
            notes: (!notes.is_empty()).then(|| notes.to_owned()),
        })
    }
}

pub(crate) fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
