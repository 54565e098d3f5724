//! Course model.
//!
//! A course is a unit of teaching demand: it must be placed into one room
//! for a run of consecutive time slots, taught by one professor. Identity
//! is by `id` alone.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{DomainError, TimeInterval};

/// A course to be scheduled.
///
/// Immutable after construction. Feature and preference sets are ordered
/// so that derived output (messages, serialized forms) is deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    id: String,
    name: String,
    duration: u32,
    expected_enrollment: u32,
    required_features: BTreeSet<String>,
    preferred_windows: BTreeSet<TimeInterval>,
    professor_id: String,
}

impl Course {
    /// Creates a course.
    ///
    /// Fails if the duration or expected enrollment is zero, or if the
    /// course or professor identifier is empty.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        duration: u32,
        expected_enrollment: u32,
        professor_id: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let id = id.into();
        let professor_id = professor_id.into();
        if id.is_empty() {
            return Err(DomainError::MissingId {
                entity: "course",
                field: "id",
            });
        }
        if professor_id.is_empty() {
            return Err(DomainError::MissingId {
                entity: "course",
                field: "professor id",
            });
        }
        if duration < 1 {
            return Err(DomainError::ZeroDuration { id });
        }
        if expected_enrollment < 1 {
            return Err(DomainError::ZeroEnrollment { id });
        }
        Ok(Self {
            id,
            name: name.into(),
            duration,
            expected_enrollment,
            required_features: BTreeSet::new(),
            preferred_windows: BTreeSet::new(),
            professor_id,
        })
    }

    /// Adds a required room feature.
    pub fn with_required_feature(mut self, feature: impl Into<String>) -> Self {
        self.required_features.insert(feature.into());
        self
    }

    /// Adds a preferred time window.
    pub fn with_preferred_window(mut self, window: TimeInterval) -> Self {
        self.preferred_windows.insert(window);
        self
    }

    /// Unique course identifier.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of consecutive slots this course occupies.
    #[inline]
    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Expected number of enrolled students.
    #[inline]
    pub fn expected_enrollment(&self) -> u32 {
        self.expected_enrollment
    }

    /// Room features this course requires.
    #[inline]
    pub fn required_features(&self) -> &BTreeSet<String> {
        &self.required_features
    }

    /// Time windows this course prefers.
    #[inline]
    pub fn preferred_windows(&self) -> &BTreeSet<TimeInterval> {
        &self.preferred_windows
    }

    /// Identifier of the professor teaching this course.
    #[inline]
    pub fn professor_id(&self) -> &str {
        &self.professor_id
    }

    /// Whether any preferred time windows were declared.
    pub fn has_preferred_windows(&self) -> bool {
        !self.preferred_windows.is_empty()
    }
}

impl PartialEq for Course {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Course {}
