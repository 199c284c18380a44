// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::DateTime;

/// A piece of coursework with a deadline.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Assignment {
    pub id: String,
    pub title: String,
    /// The course the assignment belongs to.
    pub subject: String,
    pub due: DateTime,
    pub completed: bool,
}

/// The user's pending and finished assignments.
#[derive(Debug, Clone, Default)]
pub struct AssignmentBoard {
    assignments: Vec<Assignment>,
}

impl AssignmentBoard {
    pub fn new(assignments: Vec<Assignment>) -> Self {
        Self { assignments }
    }

    /// Adds an assignment, replacing the one with the same id in place.
    pub fn add(&mut self, assignment: Assignment) {
        match self.assignments.iter_mut().find(|a| a.id == assignment.id) {
            Some(existing) => *existing = assignment,
            None => self.assignments.push(assignment),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.id == id)
    }

    /// Flips the completion flag of an assignment and returns the new value,
    /// or `None` if there is no assignment with that id.
    pub fn toggle_completion(&mut self, id: &str) -> Option<bool> {
        let assignment = self.assignments.iter_mut().find(|a| a.id == id)?;
        assignment.completed = !assignment.completed;
        tracing::debug!(id, completed = assignment.completed, "toggled assignment");
        Some(assignment.completed)
    }

    /// Assignments in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &Assignment> {
        self.assignments.iter()
    }

    /// Assignments not completed yet, earliest deadline first.
    pub fn pending(&self) -> Vec<&Assignment> {
        let mut pending: Vec<_> = self.assignments.iter().filter(|a| !a.completed).collect();
        pending.sort_by_key(|a| a.due);
        pending
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}
