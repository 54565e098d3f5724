//! The constraint variants and their validation rules.

use serde::{Deserialize, Serialize};

use crate::models::{Course, Professor, Room, Schedule, TimeInterval};

use super::ConstraintResult;

/// A named scheduling constraint.
///
/// Every variant exposes the same pure single-slot check; the
/// `ConsecutiveSlots` variant additionally checks the structure of a full
/// slot sequence via [`Constraint::validate_sequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Constraint {
    /// The professor must be free at the slot: not statically unavailable
    /// and not already teaching. Hard.
    ProfessorAvailability,
    /// The room must be free at the slot: not statically unavailable and
    /// not already occupied. Hard.
    RoomAvailability,
    /// The room must seat the expected enrollment. Hard.
    RoomCapacity,
    /// The room must provide every required feature. Hard.
    RoomFeatures,
    /// The slot should fall in a declared preferred window. Soft.
    PreferredTimeWindow,
    /// A multi-slot course must occupy exactly `duration` consecutive
    /// slots. Hard; the single-slot check always passes.
    ConsecutiveSlots,
    /// The professor must be below their maximum course load. Hard.
    /// Not part of the default set; opt in via a custom validator.
    ProfessorLoad,
}

impl Constraint {
    /// Human-readable constraint name, used in results and messages.
    pub fn name(&self) -> &'static str {
        match self {
            Constraint::ProfessorAvailability => "Professor Availability",
            Constraint::RoomAvailability => "Room Availability",
            Constraint::RoomCapacity => "Room Capacity",
            Constraint::RoomFeatures => "Room Features",
            Constraint::PreferredTimeWindow => "Preferred Time Window",
            Constraint::ConsecutiveSlots => "Consecutive Slots",
            Constraint::ProfessorLoad => "Professor Load",
        }
    }

    /// Whether a violation blocks the assignment outright.
    pub fn is_hard(&self) -> bool {
        !matches!(self, Constraint::PreferredTimeWindow)
    }

    /// Validates a single candidate slot. Pure; never mutates the
    /// schedule.
    pub fn validate(
        &self,
        course: &Course,
        room: &Room,
        slot: &TimeInterval,
        professor: &Professor,
        schedule: &Schedule,
    ) -> ConstraintResult {
        match self {
            Constraint::ProfessorAvailability => {
                check_professor_availability(slot, professor, schedule)
            }
            Constraint::RoomAvailability => check_room_availability(room, slot, schedule),
            Constraint::RoomCapacity => check_room_capacity(course, room),
            Constraint::RoomFeatures => check_room_features(course, room),
            Constraint::PreferredTimeWindow => check_preferred_window(course, slot),
            // Sequence structure is checked once per candidate window, not
            // per slot.
            Constraint::ConsecutiveSlots => ConstraintResult::success(self.name()),
            Constraint::ProfessorLoad => check_professor_load(professor, schedule),
        }
    }

    /// Validates the full ordered slot sequence proposed for one course.
    ///
    /// Only `ConsecutiveSlots` inspects the sequence; every other variant
    /// passes unconditionally.
    pub fn validate_sequence(&self, course: &Course, slots: &[TimeInterval]) -> ConstraintResult {
        match self {
            Constraint::ConsecutiveSlots => check_consecutive(course, slots),
            _ => ConstraintResult::success(self.name()),
        }
    }
}

fn check_professor_availability(
    slot: &TimeInterval,
    professor: &Professor,
    schedule: &Schedule,
) -> ConstraintResult {
    let name = Constraint::ProfessorAvailability.name();
    let mut violations = Vec::new();

    if !professor.is_available_at(slot) {
        violations.push(format!(
            "Professor {} ({}) is unavailable at {}",
            professor.id(),
            professor.name(),
            slot
        ));
    }
    if !schedule.is_professor_available_at(professor.id(), slot) {
        violations.push(format!(
            "Professor {} ({}) is already scheduled at {}",
            professor.id(),
            professor.name(),
            slot
        ));
    }

    if violations.is_empty() {
        ConstraintResult::success(name)
    } else {
        ConstraintResult::failure_all(name, violations)
    }
}

fn check_room_availability(room: &Room, slot: &TimeInterval, schedule: &Schedule) -> ConstraintResult {
    let name = Constraint::RoomAvailability.name();
    let mut violations = Vec::new();

    if !room.is_available_at(slot) {
        violations.push(format!(
            "Room {} ({}) is unavailable at {}",
            room.id(),
            room.name(),
            slot
        ));
    }
    if !schedule.is_room_available_at(room.id(), slot) {
        violations.push(format!(
            "Room {} ({}) is already occupied at {}",
            room.id(),
            room.name(),
            slot
        ));
    }

    if violations.is_empty() {
        ConstraintResult::success(name)
    } else {
        ConstraintResult::failure_all(name, violations)
    }
}

fn check_room_capacity(course: &Course, room: &Room) -> ConstraintResult {
    let name = Constraint::RoomCapacity.name();
    if room.can_accommodate(course.expected_enrollment()) {
        return ConstraintResult::success(name);
    }
    ConstraintResult::failure(
        name,
        format!(
            "Room {} (capacity {}) cannot accommodate course {} (enrollment {})",
            room.id(),
            room.capacity(),
            course.id(),
            course.expected_enrollment()
        ),
    )
}

fn check_room_features(course: &Course, room: &Room) -> ConstraintResult {
    let name = Constraint::RoomFeatures.name();
    if room.has_all_features(course.required_features()) {
        return ConstraintResult::success(name);
    }
    let missing: Vec<String> = room
        .missing_features(course.required_features())
        .into_iter()
        .collect();
    ConstraintResult::failure(
        name,
        format!(
            "Room {} is missing required features for course {}: {}",
            room.id(),
            course.id(),
            missing.join(", ")
        ),
    )
}

fn check_preferred_window(course: &Course, slot: &TimeInterval) -> ConstraintResult {
    let name = Constraint::PreferredTimeWindow.name();
    if !course.has_preferred_windows() {
        return ConstraintResult::success(name);
    }
    let in_preferred = course
        .preferred_windows()
        .iter()
        .any(|preferred| preferred == slot || preferred.overlaps(slot));
    if in_preferred {
        return ConstraintResult::success(name);
    }
    ConstraintResult::failure(
        name,
        format!(
            "Course {} is not scheduled in a preferred time window",
            course.id()
        ),
    )
}

fn check_professor_load(professor: &Professor, schedule: &Schedule) -> ConstraintResult {
    let name = Constraint::ProfessorLoad.name();
    let load = schedule.assignments_for_professor(professor.id()).len();
    if (load as u64) < u64::from(professor.max_load()) {
        return ConstraintResult::success(name);
    }
    ConstraintResult::failure(
        name,
        format!(
            "Professor {} ({}) is already at maximum load ({})",
            professor.id(),
            professor.name(),
            professor.max_load()
        ),
    )
}

fn check_consecutive(course: &Course, slots: &[TimeInterval]) -> ConstraintResult {
    let name = Constraint::ConsecutiveSlots.name();

    if slots.len() != course.duration() as usize {
        return ConstraintResult::failure(
            name,
            format!(
                "Course {} requires {} slots but {} were provided",
                course.id(),
                course.duration(),
                slots.len()
            ),
        );
    }

    for (i, pair) in slots.windows(2).enumerate() {
        if !pair[0].leads_into(&pair[1]) {
            return ConstraintResult::failure(
                name,
                format!(
                    "Course {} requires consecutive slots, but slots {} and {} are not consecutive",
                    course.id(),
                    i,
                    i + 1
                ),
            );
        }
    }

    ConstraintResult::success(name)
}
