//! Constraint validation orchestration.

use std::fmt;

use crate::models::{Course, Professor, Room, Schedule, TimeInterval};

use super::{Constraint, ConstraintResult};

/// Validates candidate assignments against an ordered set of constraints.
///
/// Stateless between calls; the same validator can serve any number of
/// candidates.
#[derive(Debug, Clone)]
pub struct ConstraintValidator {
    constraints: Vec<Constraint>,
    treat_soft_as_hard: bool,
}

impl ConstraintValidator {
    /// Creates a validator over the given constraints.
    pub fn new(constraints: Vec<Constraint>) -> Self {
        Self {
            constraints,
            treat_soft_as_hard: false,
        }
    }

    /// Creates a validator with the default single-slot constraint set:
    /// professor availability, room availability, room capacity, room
    /// features, and the soft preferred-time-window check.
    pub fn with_default_constraints() -> Self {
        Self::new(vec![
            Constraint::ProfessorAvailability,
            Constraint::RoomAvailability,
            Constraint::RoomCapacity,
            Constraint::RoomFeatures,
            Constraint::PreferredTimeWindow,
        ])
    }

    /// Promotes every soft constraint to hard for this validator.
    pub fn with_soft_as_hard(mut self, treat_soft_as_hard: bool) -> Self {
        self.treat_soft_as_hard = treat_soft_as_hard;
        self
    }

    /// The constraints this validator runs, in order.
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Validates a single candidate slot.
    ///
    /// Every constraint runs; all results are collected. The report is
    /// valid iff no violated constraint is hard (or, when soft promotion
    /// is on, no constraint at all is violated).
    pub fn validate(
        &self,
        course: &Course,
        room: &Room,
        slot: &TimeInterval,
        professor: &Professor,
        schedule: &Schedule,
    ) -> ValidationReport {
        let mut results = Vec::with_capacity(self.constraints.len());
        let mut valid = true;

        for constraint in &self.constraints {
            let result = constraint.validate(course, room, slot, professor, schedule);
            if !result.is_valid() && (constraint.is_hard() || self.treat_soft_as_hard) {
                valid = false;
            }
            results.push(result);
        }

        ValidationReport { valid, results }
    }

    /// Validates a full candidate slot sequence for one course.
    ///
    /// Runs the consecutive-slots check once over the whole sequence, then
    /// the single-slot validation independently per slot, unioning all
    /// results. The per-slot checks run against the schedule as it stands
    /// before this course is committed, so the sequence never conflicts
    /// with itself.
    pub fn validate_multi_slot(
        &self,
        course: &Course,
        room: &Room,
        slots: &[TimeInterval],
        professor: &Professor,
        schedule: &Schedule,
    ) -> ValidationReport {
        let mut results = Vec::new();

        let sequence = Constraint::ConsecutiveSlots.validate_sequence(course, slots);
        let mut valid = sequence.is_valid();
        results.push(sequence);

        for slot in slots {
            let report = self.validate(course, room, slot, professor, schedule);
            valid &= report.valid;
            results.extend(report.results);
        }

        ValidationReport { valid, results }
    }
}

impl Default for ConstraintValidator {
    fn default() -> Self {
        Self::with_default_constraints()
    }
}

/// Aggregated outcome of validating one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    valid: bool,
    results: Vec<ConstraintResult>,
}

impl ValidationReport {
    /// Whether the candidate satisfied every blocking constraint.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// All per-constraint results, in evaluation order.
    pub fn results(&self) -> &[ConstraintResult] {
        &self.results
    }

    /// The violated results only.
    pub fn failures(&self) -> Vec<&ConstraintResult> {
        self.results.iter().filter(|r| !r.is_valid()).collect()
    }

    /// Every violation message, flattened in evaluation order.
    pub fn messages(&self) -> Vec<String> {
        self.results
            .iter()
            .flat_map(|r| r.messages().iter().cloned())
            .collect()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid {
            return f.write_str("all constraints satisfied");
        }
        write!(f, "constraint violations: {}", self.messages().join("; "))
    }
}
