//! Input integrity checks for timetabling problems.
//!
//! Advisory checks run before scheduling to surface data problems early:
//! - Duplicate IDs (courses, professors, rooms)
//! - Duplicate time-slot catalog indices
//! - Courses referencing unknown professors
//! - Courses needing more consecutive slots than the catalog holds
//!
//! The scheduler itself never calls these: a course with an unresolvable
//! professor must reach the search and be skipped there, not be rejected
//! up front.

use std::collections::HashSet;

use crate::models::{Course, Professor, Room, TimeInterval};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// Two time slots share the same catalog index.
    DuplicateSlotIndex,
    /// A course references a professor that doesn't exist.
    UnknownProfessor,
    /// A course needs more slots than the catalog provides.
    InsufficientSlots,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for a timetabling problem.
///
/// Collects every detected issue rather than stopping at the first.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    courses: &[Course],
    professors: &[Professor],
    rooms: &[Room],
    time_slots: &[TimeInterval],
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut professor_ids = HashSet::new();
    for p in professors {
        if !professor_ids.insert(p.id()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate professor ID: {}", p.id()),
            ));
        }
    }

    let mut room_ids = HashSet::new();
    for r in rooms {
        if !room_ids.insert(r.id()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room ID: {}", r.id()),
            ));
        }
    }

    let mut course_ids = HashSet::new();
    for c in courses {
        if !course_ids.insert(c.id()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate course ID: {}", c.id()),
            ));
        }
    }

    let mut slot_indices = HashSet::new();
    for slot in time_slots {
        if !slot_indices.insert(slot.index()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateSlotIndex,
                format!("Duplicate time slot index: {}", slot.index()),
            ));
        }
    }

    for c in courses {
        if !professor_ids.contains(c.professor_id()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownProfessor,
                format!(
                    "Course '{}' references unknown professor '{}'",
                    c.id(),
                    c.professor_id()
                ),
            ));
        }
        if c.duration() as usize > time_slots.len() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InsufficientSlots,
                format!(
                    "Course '{}' needs {} consecutive slots but only {} exist",
                    c.id(),
                    c.duration(),
                    time_slots.len()
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
