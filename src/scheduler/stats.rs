//! Schedule quality statistics.
//!
//! Computes diagnostic indicators from a finished schedule and its
//! inputs. The search never consults these; they exist for reporting and
//! for comparing runs.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Scheduled / unscheduled | Courses placed vs. not |
//! | Room utilization | Occupied slots / total slots, per room |
//! | Professor load | Committed assignments per professor |
//! | Preferred-window rate | Scheduled courses with preferences that got one |
//! | Mean capacity slack | Average spare seats across assignments |

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{Course, Schedule, TimeInterval};

/// Diagnostic indicators for a schedule.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleStats {
    /// Number of courses placed.
    pub scheduled_count: usize,
    /// Number of input courses left unplaced.
    pub unscheduled_count: usize,
    /// Fraction of the slot catalog each room is occupied for
    /// (room id → 0.0..1.0). Only rooms with assignments appear.
    pub room_utilization: HashMap<String, f64>,
    /// Committed assignments per professor.
    pub professor_load: HashMap<String, usize>,
    /// Fraction of scheduled preference-declaring courses that landed in
    /// a preferred window. 1.0 when no scheduled course declares one.
    pub preferred_window_rate: f64,
    /// Average spare seats (capacity minus enrollment) across
    /// assignments.
    pub mean_capacity_slack: f64,
}

impl ScheduleStats {
    /// Computes statistics from a schedule and the inputs it was built
    /// from.
    pub fn calculate(schedule: &Schedule, courses: &[Course], time_slots: &[TimeInterval]) -> Self {
        let scheduled_count = schedule.scheduled_count();
        let unscheduled_count = courses
            .iter()
            .filter(|c| schedule.assignment(c.id()).is_none())
            .count();

        let mut room_slots: HashMap<String, usize> = HashMap::new();
        let mut professor_load: HashMap<String, usize> = HashMap::new();
        let mut slack_total: u64 = 0;
        let mut preferred_hits = 0usize;
        let mut preferred_declared = 0usize;

        for assignment in schedule.assignments() {
            let course = assignment.course();
            *room_slots
                .entry(assignment.room().id().to_string())
                .or_insert(0) += assignment.time_slots().len();
            *professor_load
                .entry(course.professor_id().to_string())
                .or_insert(0) += 1;
            slack_total += u64::from(
                assignment
                    .room()
                    .capacity()
                    .saturating_sub(course.expected_enrollment()),
            );

            if course.has_preferred_windows() {
                preferred_declared += 1;
                let hit = assignment.time_slots().iter().any(|slot| {
                    course
                        .preferred_windows()
                        .iter()
                        .any(|preferred| preferred == slot || preferred.overlaps(slot))
                });
                if hit {
                    preferred_hits += 1;
                }
            }
        }

        let room_utilization = if time_slots.is_empty() {
            HashMap::new()
        } else {
            room_slots
                .into_iter()
                .map(|(id, used)| (id, used as f64 / time_slots.len() as f64))
                .collect()
        };

        let preferred_window_rate = if preferred_declared == 0 {
            1.0
        } else {
            preferred_hits as f64 / preferred_declared as f64
        };

        let mean_capacity_slack = if scheduled_count == 0 {
            0.0
        } else {
            slack_total as f64 / scheduled_count as f64
        };

        Self {
            scheduled_count,
            unscheduled_count,
            room_utilization,
            professor_load,
            preferred_window_rate,
            mean_capacity_slack,
        }
    }
}
