//! Room model.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{DomainError, TimeInterval};

/// A room that courses can be scheduled into. Identity is by `id` alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    id: String,
    name: String,
    capacity: u32,
    features: BTreeSet<String>,
    unavailable: BTreeSet<TimeInterval>,
}

impl Room {
    /// Creates a room. Fails if the identifier is empty or the capacity
    /// is zero.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        capacity: u32,
    ) -> Result<Self, DomainError> {
        let id = id.into();
        if id.is_empty() {
            return Err(DomainError::MissingId {
                entity: "room",
                field: "id",
            });
        }
        if capacity < 1 {
            return Err(DomainError::ZeroCapacity { id });
        }
        Ok(Self {
            id,
            name: name.into(),
            capacity,
            features: BTreeSet::new(),
            unavailable: BTreeSet::new(),
        })
    }

    /// Adds a feature this room provides.
    pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
        self.features.insert(feature.into());
        self
    }

    /// Adds an interval during which the room cannot be used.
    pub fn with_unavailable(mut self, interval: TimeInterval) -> Self {
        self.unavailable.insert(interval);
        self
    }

    /// Unique room identifier.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Seating capacity.
    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Features this room provides.
    #[inline]
    pub fn features(&self) -> &BTreeSet<String> {
        &self.features
    }

    /// Intervals during which the room cannot be used.
    #[inline]
    pub fn unavailable(&self) -> &BTreeSet<TimeInterval> {
        &self.unavailable
    }

    /// Whether the room seats at least `enrollment` students.
    pub fn can_accommodate(&self, enrollment: u32) -> bool {
        self.capacity >= enrollment
    }

    /// Whether the room provides every required feature.
    pub fn has_all_features(&self, required: &BTreeSet<String>) -> bool {
        required.is_subset(&self.features)
    }

    /// Required features this room does not provide.
    pub fn missing_features(&self, required: &BTreeSet<String>) -> BTreeSet<String> {
        required.difference(&self.features).cloned().collect()
    }

    /// Whether the room is statically available at the given interval.
    pub fn is_available_at(&self, interval: &TimeInterval) -> bool {
        !self.unavailable.iter().any(|u| u.overlaps(interval))
    }
}

impl PartialEq for Room {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Room {}
