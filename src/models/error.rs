//! Construction errors for domain models.

use thiserror::Error;

use super::TimeOfDay;

/// An entity invariant violation detected at construction time.
///
/// These are fatal to the construction call that caused them; they are
/// never defaulted away or deferred to scheduling time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A required identifier was empty.
    #[error("{entity} requires a non-empty {field}")]
    MissingId {
        entity: &'static str,
        field: &'static str,
    },

    /// A time of day outside the 24-hour clock.
    #[error("invalid time of day {hour:02}:{minute:02}")]
    InvalidTime { hour: u8, minute: u8 },

    /// A time interval whose end does not come after its start.
    #[error("time interval {index} must end after it starts ({start}-{end})")]
    EmptyInterval {
        index: u32,
        start: TimeOfDay,
        end: TimeOfDay,
    },

    /// A course spanning zero slots.
    #[error("course {id} duration must be at least one slot")]
    ZeroDuration { id: String },

    /// A course expecting zero students.
    #[error("course {id} expected enrollment must be positive")]
    ZeroEnrollment { id: String },

    /// A room that can hold zero students.
    #[error("room {id} capacity must be positive")]
    ZeroCapacity { id: String },

    /// An assignment with no time slots.
    #[error("assignment for course {course} requires at least one time slot")]
    EmptySlotSequence { course: String },

    /// An assignment whose slot count does not match the course duration.
    #[error("assignment for course {course} has {actual} slots but the course requires {expected}")]
    SlotCountMismatch {
        course: String,
        expected: u32,
        actual: usize,
    },
}
