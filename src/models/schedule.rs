//! Schedule (solution) model.
//!
//! A schedule is the mutable aggregate the search builds up: the list of
//! committed assignments plus derived per-course, per-professor, and
//! per-room indices for O(conflicts) occupancy lookups.
//!
//! A schedule is owned exclusively by one in-flight search call. It is
//! mutated in place during recursion; assignment removal is the only undo
//! operation the search needs.

use std::collections::HashMap;

use serde::Serialize;

use super::{Assignment, TimeInterval};

/// A collection of committed course assignments with conflict-lookup
/// indices.
///
/// At most one assignment may exist per course id; adding a duplicate is
/// an internal-consistency fault and panics.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Schedule {
    assignments: Vec<Assignment>,
    #[serde(skip)]
    by_course: HashMap<String, Assignment>,
    #[serde(skip)]
    by_professor: HashMap<String, Vec<Assignment>>,
    #[serde(skip)]
    by_room: HashMap<String, Vec<Assignment>>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commits an assignment, updating all indices.
    ///
    /// # Panics
    ///
    /// Panics if an assignment for the same course id is already present.
    /// The search always removes before retrying, so a duplicate add is a
    /// bookkeeping bug, not a recoverable condition.
    pub fn add_assignment(&mut self, assignment: Assignment) {
        let course_id = assignment.course().id().to_string();
        if self.by_course.contains_key(&course_id) {
            panic!("course {course_id} is already scheduled");
        }

        self.by_professor
            .entry(assignment.course().professor_id().to_string())
            .or_default()
            .push(assignment.clone());
        self.by_room
            .entry(assignment.room().id().to_string())
            .or_default()
            .push(assignment.clone());
        self.by_course.insert(course_id, assignment.clone());
        self.assignments.push(assignment);
    }

    /// Removes the assignment for a course from all indices.
    ///
    /// Returns the removed assignment, or `None` if the course was not
    /// scheduled.
    pub fn remove_assignment(&mut self, course_id: &str) -> Option<Assignment> {
        let assignment = self.by_course.remove(course_id)?;

        self.assignments.retain(|a| a.course().id() != course_id);
        if let Some(list) = self.by_professor.get_mut(assignment.course().professor_id()) {
            list.retain(|a| a.course().id() != course_id);
        }
        if let Some(list) = self.by_room.get_mut(assignment.room().id()) {
            list.retain(|a| a.course().id() != course_id);
        }
        Some(assignment)
    }

    /// The assignment for a course, if scheduled.
    pub fn assignment(&self, course_id: &str) -> Option<&Assignment> {
        self.by_course.get(course_id)
    }

    /// All committed assignments, in commit order.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Assignments taught by a professor.
    pub fn assignments_for_professor(&self, professor_id: &str) -> &[Assignment] {
        self.by_professor
            .get(professor_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Assignments occupying a room.
    pub fn assignments_for_room(&self, room_id: &str) -> &[Assignment] {
        self.by_room.get(room_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether a professor has no committed assignment overlapping the
    /// slot.
    ///
    /// This is a schedule-local occupancy check; the professor's static
    /// unavailability is a separate concern.
    pub fn is_professor_available_at(&self, professor_id: &str, slot: &TimeInterval) -> bool {
        !self
            .assignments_for_professor(professor_id)
            .iter()
            .flat_map(|a| a.time_slots())
            .any(|s| s.overlaps(slot))
    }

    /// Whether a room has no committed assignment overlapping the slot.
    pub fn is_room_available_at(&self, room_id: &str, slot: &TimeInterval) -> bool {
        !self
            .assignments_for_room(room_id)
            .iter()
            .flat_map(|a| a.time_slots())
            .any(|s| s.overlaps(slot))
    }

    /// Number of scheduled courses.
    pub fn scheduled_count(&self) -> usize {
        self.assignments.len()
    }

    /// Whether no courses are scheduled.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}
