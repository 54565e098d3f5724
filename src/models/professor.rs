//! Professor model.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{DomainError, TimeInterval};

/// A professor who teaches courses. Identity is by `id` alone.
///
/// Availability is static: an interval is available when no declared
/// unavailable interval overlaps it. Occupancy by already-scheduled
/// courses is a separate, schedule-local concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Professor {
    id: String,
    name: String,
    unavailable: BTreeSet<TimeInterval>,
    max_load: u32,
}

impl Professor {
    /// Creates a professor. Fails if the identifier is empty.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.is_empty() {
            return Err(DomainError::MissingId {
                entity: "professor",
                field: "id",
            });
        }
        Ok(Self {
            id,
            name: name.into(),
            unavailable: BTreeSet::new(),
            max_load: u32::MAX,
        })
    }

    /// Adds an interval during which the professor cannot teach.
    pub fn with_unavailable(mut self, interval: TimeInterval) -> Self {
        self.unavailable.insert(interval);
        self
    }

    /// Sets the maximum number of courses this professor may carry.
    ///
    /// The default is unbounded. The limit is enforced only by the opt-in
    /// professor-load constraint.
    pub fn with_max_load(mut self, max_load: u32) -> Self {
        self.max_load = max_load;
        self
    }

    /// Unique professor identifier.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Intervals during which the professor cannot teach.
    #[inline]
    pub fn unavailable(&self) -> &BTreeSet<TimeInterval> {
        &self.unavailable
    }

    /// Maximum course load.
    #[inline]
    pub fn max_load(&self) -> u32 {
        self.max_load
    }

    /// Whether the professor is statically available at the given interval.
    pub fn is_available_at(&self, interval: &TimeInterval) -> bool {
        !self.unavailable.iter().any(|u| u.overlaps(interval))
    }
}

impl PartialEq for Professor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Professor {}
