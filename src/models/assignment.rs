//! Assignment model.

use serde::{Deserialize, Serialize};

use super::{Course, DomainError, Room, TimeInterval};

/// A committed binding of one course to one room and an ordered sequence
/// of time slots.
///
/// Immutable once constructed; the slot count always equals the course
/// duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    course: Course,
    room: Room,
    time_slots: Vec<TimeInterval>,
}

impl Assignment {
    /// Creates an assignment.
    ///
    /// Fails if the slot sequence is empty or its length does not match
    /// the course duration.
    pub fn new(
        course: Course,
        room: Room,
        time_slots: Vec<TimeInterval>,
    ) -> Result<Self, DomainError> {
        if time_slots.is_empty() {
            return Err(DomainError::EmptySlotSequence {
                course: course.id().to_string(),
            });
        }
        if time_slots.len() != course.duration() as usize {
            return Err(DomainError::SlotCountMismatch {
                course: course.id().to_string(),
                expected: course.duration(),
                actual: time_slots.len(),
            });
        }
        Ok(Self {
            course,
            room,
            time_slots,
        })
    }

    /// The assigned course.
    #[inline]
    pub fn course(&self) -> &Course {
        &self.course
    }

    /// The assigned room.
    #[inline]
    pub fn room(&self) -> &Room {
        &self.room
    }

    /// The ordered slot sequence.
    #[inline]
    pub fn time_slots(&self) -> &[TimeInterval] {
        &self.time_slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayOfWeek, TimeOfDay};

    fn slot(index: u32, start_hour: u8) -> TimeInterval {
        TimeInterval::new(
            index,
            DayOfWeek::Monday,
            TimeOfDay::new(start_hour, 0).unwrap(),
            TimeOfDay::new(start_hour + 1, 0).unwrap(),
        )
        .unwrap()
    }

    fn course(duration: u32) -> Course {
        Course::new("CS101", "Intro", duration, 50, "P1").unwrap()
    }

    fn room() -> Room {
        Room::new("R1", "Hall", 100).unwrap()
    }

    #[test]
    fn test_assignment_construction() {
        let a = Assignment::new(course(2), room(), vec![slot(1, 9), slot(2, 10)]).unwrap();
        assert_eq!(a.course().id(), "CS101");
        assert_eq!(a.room().id(), "R1");
        assert_eq!(a.time_slots().len(), 2);
    }

    #[test]
    fn test_assignment_rejects_empty_slots() {
        let err = Assignment::new(course(1), room(), Vec::new()).unwrap_err();
        assert_eq!(
            err,
            DomainError::EmptySlotSequence {
                course: "CS101".into()
            }
        );
    }

    #[test]
    fn test_assignment_rejects_slot_count_mismatch() {
        let err = Assignment::new(course(2), room(), vec![slot(1, 9)]).unwrap_err();
        assert_eq!(
            err,
            DomainError::SlotCountMismatch {
                course: "CS101".into(),
                expected: 2,
                actual: 1,
            }
        );
    }
}
