//! Backtracking search driver.
//!
//! # Algorithm
//!
//! 1. Order courses once by difficulty; the fixed order is the recursion's
//!    decision sequence, one level per course index.
//! 2. At each level, try every (room, consecutive-slot-window) candidate
//!    in heuristic order: validate, commit, recurse. The first fully
//!    successful branch wins; a dead-ended commit is undone.
//! 3. A course with no feasible candidate (or an unresolvable professor)
//!    is recorded as unscheduled and the search continues with the rest.
//! 4. Wall-clock and iteration budgets are checked on every recursive
//!    call. A tripped budget stops the search immediately; assignments
//!    committed up to that point remain in the schedule.
//!
//! The overall run is a success only when every course was placed.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{info, warn};

use crate::constraints::ConstraintValidator;
use crate::models::{Assignment, Course, Professor, Room, Schedule, TimeInterval};

use super::heuristics;
use super::SchedulerConfig;

/// Result of a scheduling attempt.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleResult {
    /// Whether every course was placed within budget.
    pub success: bool,
    /// The schedule built up by the search, possibly partial.
    pub schedule: Schedule,
    /// Ids of courses the search could not place, in the order they were
    /// given up on.
    pub unscheduled_courses: Vec<String>,
    /// Human-readable diagnostics: infeasible courses, budget trips.
    pub messages: Vec<String>,
    /// Wall-clock time the search consumed.
    pub elapsed: Duration,
}

/// Backtracking course scheduler.
///
/// Holds only configuration and the constraint validator; all search
/// state is local to one [`schedule`](BacktrackingScheduler::schedule)
/// call, so a scheduler value can be reused and calls do not interfere.
#[derive(Debug, Clone)]
pub struct BacktrackingScheduler {
    config: SchedulerConfig,
    validator: ConstraintValidator,
}

/// Immutable inputs shared by every recursion level.
struct SearchContext<'a> {
    courses: &'a [Course],
    professors: &'a HashMap<&'a str, &'a Professor>,
    rooms: &'a [Room],
    time_slots: &'a [TimeInterval],
}

/// Mutable bookkeeping local to one `schedule` call.
struct SearchState {
    start: Instant,
    iterations: u64,
    exhausted: bool,
}

impl BacktrackingScheduler {
    /// Creates a scheduler with the default constraint set, promoting
    /// soft constraints when the configuration asks for it.
    pub fn new(config: SchedulerConfig) -> Self {
        let validator = ConstraintValidator::with_default_constraints()
            .with_soft_as_hard(config.treat_soft_as_hard);
        Self { config, validator }
    }

    /// Creates a scheduler with a custom validator.
    pub fn with_validator(config: SchedulerConfig, validator: ConstraintValidator) -> Self {
        Self { config, validator }
    }

    /// Schedules courses into rooms and time slots.
    ///
    /// Consumes already-parsed entity lists; courses whose professor id
    /// does not resolve are skipped and reported, not rejected up front.
    pub fn schedule(
        &self,
        courses: &[Course],
        professors: &[Professor],
        rooms: &[Room],
        time_slots: &[TimeInterval],
    ) -> ScheduleResult {
        let start = Instant::now();
        info!(
            courses = courses.len(),
            rooms = rooms.len(),
            slots = time_slots.len(),
            "starting backtracking search"
        );

        let professor_map: HashMap<&str, &Professor> =
            professors.iter().map(|p| (p.id(), p)).collect();
        let ordered_courses = heuristics::order_courses_by_difficulty(courses);

        let context = SearchContext {
            courses: &ordered_courses,
            professors: &professor_map,
            rooms,
            time_slots,
        };
        let mut schedule = Schedule::new();
        let mut unscheduled = Vec::new();
        let mut messages = Vec::new();
        let mut state = SearchState {
            start,
            iterations: 0,
            exhausted: false,
        };

        let completed = self.backtrack(
            &context,
            0,
            &mut schedule,
            &mut unscheduled,
            &mut messages,
            &mut state,
        );

        // A tripped budget leaves committed courses in place; everything
        // still unplaced is reported as unscheduled.
        if state.exhausted {
            for course in context.courses {
                if schedule.assignment(course.id()).is_none()
                    && !unscheduled.iter().any(|id| id == course.id())
                {
                    unscheduled.push(course.id().to_string());
                }
            }
        }

        let success = completed && unscheduled.is_empty();
        let elapsed = start.elapsed();
        info!(
            ?elapsed,
            success,
            scheduled = schedule.scheduled_count(),
            total = courses.len(),
            "scheduling completed"
        );

        ScheduleResult {
            success,
            schedule,
            unscheduled_courses: unscheduled,
            messages,
            elapsed,
        }
    }

    fn backtrack(
        &self,
        context: &SearchContext<'_>,
        index: usize,
        schedule: &mut Schedule,
        unscheduled: &mut Vec<String>,
        messages: &mut Vec<String>,
        state: &mut SearchState,
    ) -> bool {
        if self.budget_exceeded(state, messages) {
            return false;
        }

        // Terminal: every course was attempted.
        if index >= context.courses.len() {
            return true;
        }

        let course = &context.courses[index];
        let Some(professor) = context.professors.get(course.professor_id()).copied() else {
            messages.push(format!(
                "Professor {} not found for course {}",
                course.professor_id(),
                course.id()
            ));
            unscheduled.push(course.id().to_string());
            return self.backtrack(context, index + 1, schedule, unscheduled, messages, state);
        };

        let ordered_rooms = heuristics::order_rooms_by_fit(context.rooms, course);
        let ordered_slots = heuristics::order_time_slots(context.time_slots, course);
        let windows = consecutive_windows(&ordered_slots, course.duration());

        for room in ordered_rooms {
            for window in &windows {
                let report =
                    self.validator
                        .validate_multi_slot(course, room, window, professor, schedule);
                if !report.is_valid() {
                    continue;
                }

                let assignment = Assignment::new(course.clone(), room.clone(), window.clone())
                    .expect("candidate window length matches course duration");
                schedule.add_assignment(assignment);

                if self.backtrack(context, index + 1, schedule, unscheduled, messages, state) {
                    return true;
                }
                if state.exhausted {
                    // Committed work stays in place when the budget trips.
                    return false;
                }
                schedule.remove_assignment(course.id());
            }
        }

        warn!(course = course.id(), "no feasible room/slot combination");
        unscheduled.push(course.id().to_string());
        messages.push(describe_failure(course, context.rooms));

        self.backtrack(context, index + 1, schedule, unscheduled, messages, state)
    }

    /// Checks the wall-clock and iteration budgets, recording one message
    /// the first time either trips.
    fn budget_exceeded(&self, state: &mut SearchState, messages: &mut Vec<String>) -> bool {
        if state.exhausted {
            return true;
        }
        if state.start.elapsed() > self.config.timeout {
            messages.push(format!(
                "Scheduling timed out after {} ms",
                self.config.timeout.as_millis()
            ));
            state.exhausted = true;
            return true;
        }
        state.iterations += 1;
        if state.iterations > self.config.max_iterations {
            messages.push(format!(
                "Reached maximum iterations: {}",
                self.config.max_iterations
            ));
            state.exhausted = true;
            return true;
        }
        false
    }
}

/// Generates every feasible consecutive-slot window of the given length.
///
/// Single-slot courses degrade to one window per slot, preserving the
/// heuristic slot order. Longer runs are taken from the naturally sorted
/// slot list; each adjacent pair in a window must lead into the next.
fn consecutive_windows(slots: &[TimeInterval], duration: u32) -> Vec<Vec<TimeInterval>> {
    let duration = duration as usize;
    if duration == 1 {
        return slots.iter().map(|slot| vec![*slot]).collect();
    }

    let mut sorted = slots.to_vec();
    sorted.sort();

    let mut windows = Vec::new();
    if sorted.len() < duration {
        return windows;
    }
    for start in 0..=(sorted.len() - duration) {
        let window = &sorted[start..start + duration];
        if window.windows(2).all(|pair| pair[0].leads_into(&pair[1])) {
            windows.push(window.to_vec());
        }
    }
    windows
}

/// Explains why no candidate existed for a course.
fn describe_failure(course: &Course, rooms: &[Room]) -> String {
    if !rooms
        .iter()
        .any(|room| room.can_accommodate(course.expected_enrollment()))
    {
        return format!(
            "Failed to schedule course {}: no room has capacity for enrollment {}",
            course.id(),
            course.expected_enrollment()
        );
    }
    if !rooms
        .iter()
        .any(|room| room.has_all_features(course.required_features()))
    {
        let required: Vec<String> = course.required_features().iter().cloned().collect();
        return format!(
            "Failed to schedule course {}: no room provides required features: {}",
            course.id(),
            required.join(", ")
        );
    }
    format!(
        "Failed to schedule course {}: no valid room and time slot combination found",
        course.id()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayOfWeek, TimeOfDay};

    fn slot(index: u32, day: DayOfWeek, start_hour: u8) -> TimeInterval {
        TimeInterval::new(
            index,
            day,
            TimeOfDay::new(start_hour, 0).unwrap(),
            TimeOfDay::new(start_hour + 1, 0).unwrap(),
        )
        .unwrap()
    }

    fn professor(id: &str) -> Professor {
        Professor::new(id, format!("Dr. {id}")).unwrap()
    }

    fn scheduler() -> BacktrackingScheduler {
        BacktrackingScheduler::new(SchedulerConfig::new())
    }

    #[test]
    fn test_single_course_schedules_successfully() {
        let courses = vec![Course::new("CS101", "Intro", 1, 50, "P1")
            .unwrap()
            .with_required_feature("projector")];
        let professors = vec![professor("P1")];
        let rooms = vec![Room::new("R1", "Hall A", 100).unwrap().with_feature("projector")];
        let slots = vec![slot(1, DayOfWeek::Monday, 9)];

        let result = scheduler().schedule(&courses, &professors, &rooms, &slots);
        assert!(result.success);
        assert_eq!(result.schedule.scheduled_count(), 1);
        assert!(result.unscheduled_courses.is_empty());

        let assignment = result.schedule.assignment("CS101").unwrap();
        assert_eq!(assignment.room().id(), "R1");
        assert_eq!(assignment.time_slots(), [slot(1, DayOfWeek::Monday, 9)]);
    }

    #[test]
    fn test_undersized_room_reports_capacity() {
        let courses = vec![Course::new("CS101", "Intro", 1, 50, "P1").unwrap()];
        let professors = vec![professor("P1")];
        let rooms = vec![Room::new("R1", "Closet", 10).unwrap()];
        let slots = vec![slot(1, DayOfWeek::Monday, 9)];

        let result = scheduler().schedule(&courses, &professors, &rooms, &slots);
        assert!(!result.success);
        assert_eq!(result.unscheduled_courses, ["CS101"]);
        assert!(result.messages.iter().any(|m| m.contains("capacity")));
        assert!(result.schedule.is_empty());
    }

    #[test]
    fn test_missing_features_reported() {
        let courses = vec![Course::new("CS101", "Lab", 1, 20, "P1")
            .unwrap()
            .with_required_feature("lab-bench")];
        let professors = vec![professor("P1")];
        let rooms = vec![Room::new("R1", "Hall", 100).unwrap()];
        let slots = vec![slot(1, DayOfWeek::Monday, 9)];

        let result = scheduler().schedule(&courses, &professors, &rooms, &slots);
        assert!(!result.success);
        assert!(result
            .messages
            .iter()
            .any(|m| m.contains("required features") && m.contains("lab-bench")));
    }

    #[test]
    fn test_contended_slot_goes_to_harder_course() {
        // Both courses share a professor; only one slot exists. The
        // higher-enrollment course is attempted first and wins;
        // identical inputs always leave the same course unscheduled.
        let courses = vec![
            Course::new("light", "Light", 1, 30, "P1").unwrap(),
            Course::new("heavy", "Heavy", 1, 60, "P1").unwrap(),
        ];
        let professors = vec![professor("P1")];
        let rooms = vec![Room::new("R1", "Hall", 100).unwrap()];
        let slots = vec![slot(1, DayOfWeek::Monday, 9)];

        let result = scheduler().schedule(&courses, &professors, &rooms, &slots);
        assert!(!result.success);
        assert_eq!(result.schedule.scheduled_count(), 1);
        assert!(result.schedule.assignment("heavy").is_some());
        assert_eq!(result.unscheduled_courses, ["light"]);
    }

    #[test]
    fn test_multi_slot_course_gets_consecutive_window() {
        let courses = vec![Course::new("CS201", "Algorithms", 2, 40, "P1").unwrap()];
        let professors = vec![professor("P1")];
        let rooms = vec![Room::new("R1", "Hall", 100).unwrap()];
        let slots = vec![
            slot(3, DayOfWeek::Tuesday, 9),
            slot(2, DayOfWeek::Monday, 10),
            slot(1, DayOfWeek::Monday, 9),
        ];

        let result = scheduler().schedule(&courses, &professors, &rooms, &slots);
        assert!(result.success);
        let assignment = result.schedule.assignment("CS201").unwrap();
        assert_eq!(
            assignment.time_slots(),
            [slot(1, DayOfWeek::Monday, 9), slot(2, DayOfWeek::Monday, 10)]
        );
    }

    #[test]
    fn test_multi_slot_course_fails_without_adjacency() {
        let courses = vec![Course::new("CS201", "Algorithms", 2, 40, "P1").unwrap()];
        let professors = vec![professor("P1")];
        let rooms = vec![Room::new("R1", "Hall", 100).unwrap()];
        // A gap between the two Monday slots.
        let slots = vec![slot(1, DayOfWeek::Monday, 9), slot(2, DayOfWeek::Monday, 11)];

        let result = scheduler().schedule(&courses, &professors, &rooms, &slots);
        assert!(!result.success);
        assert_eq!(result.unscheduled_courses, ["CS201"]);
    }

    #[test]
    fn test_unknown_professor_is_skipped_not_fatal() {
        let courses = vec![
            Course::new("ghosted", "Ghosted", 1, 60, "nobody").unwrap(),
            Course::new("normal", "Normal", 1, 30, "P1").unwrap(),
        ];
        let professors = vec![professor("P1")];
        let rooms = vec![Room::new("R1", "Hall", 100).unwrap()];
        let slots = vec![slot(1, DayOfWeek::Monday, 9), slot(2, DayOfWeek::Tuesday, 9)];

        let result = scheduler().schedule(&courses, &professors, &rooms, &slots);
        assert!(!result.success);
        assert_eq!(result.unscheduled_courses, ["ghosted"]);
        assert!(result.schedule.assignment("normal").is_some());
        assert!(result
            .messages
            .iter()
            .any(|m| m.contains("Professor nobody not found")));
    }

    #[test]
    fn test_iteration_cap_trips_immediately() {
        let courses = vec![Course::new("CS101", "Intro", 1, 50, "P1").unwrap()];
        let professors = vec![professor("P1")];
        let rooms = vec![Room::new("R1", "Hall", 100).unwrap()];
        let slots = vec![slot(1, DayOfWeek::Monday, 9)];

        let config = SchedulerConfig::new().with_max_iterations(0);
        let result =
            BacktrackingScheduler::new(config).schedule(&courses, &professors, &rooms, &slots);
        assert!(!result.success);
        assert!(result
            .messages
            .iter()
            .any(|m| m.contains("maximum iterations")));
        assert!(result.schedule.is_empty());
        assert_eq!(result.unscheduled_courses, ["CS101"]);
    }

    #[test]
    fn test_timeout_trips_immediately() {
        let courses = vec![Course::new("CS101", "Intro", 1, 50, "P1").unwrap()];
        let professors = vec![professor("P1")];
        let rooms = vec![Room::new("R1", "Hall", 100).unwrap()];
        let slots = vec![slot(1, DayOfWeek::Monday, 9)];

        let config = SchedulerConfig::new().with_timeout(Duration::ZERO);
        let result =
            BacktrackingScheduler::new(config).schedule(&courses, &professors, &rooms, &slots);
        assert!(!result.success);
        assert!(result.messages.iter().any(|m| m.contains("timed out")));
    }

    #[test]
    fn test_budget_trip_keeps_committed_assignments() {
        // Iterations: call 0 commits the first course, call 1 the second,
        // call 2 trips the cap before the third is attempted.
        let courses = vec![
            Course::new("a", "A", 1, 30, "P1").unwrap(),
            Course::new("b", "B", 1, 20, "P2").unwrap(),
            Course::new("c", "C", 1, 10, "P3").unwrap(),
        ];
        let professors = vec![professor("P1"), professor("P2"), professor("P3")];
        let rooms = vec![Room::new("R1", "Hall", 100).unwrap()];
        let slots = vec![
            slot(1, DayOfWeek::Monday, 9),
            slot(2, DayOfWeek::Tuesday, 9),
            slot(3, DayOfWeek::Wednesday, 9),
        ];

        let config = SchedulerConfig::new().with_max_iterations(2);
        let result =
            BacktrackingScheduler::new(config).schedule(&courses, &professors, &rooms, &slots);
        assert!(!result.success);
        assert_eq!(result.schedule.scheduled_count(), 2);
        assert!(result.schedule.assignment("a").is_some());
        assert!(result.schedule.assignment("b").is_some());
        assert_eq!(result.unscheduled_courses, ["c"]);
        // The budget message is recorded once, not per unwound level.
        assert_eq!(
            result
                .messages
                .iter()
                .filter(|m| m.contains("maximum iterations"))
                .count(),
            1
        );
    }

    #[test]
    fn test_soft_promotion_blocks_out_of_preference_placement() {
        let preferred = slot(9, DayOfWeek::Tuesday, 9);
        let courses = vec![Course::new("CS101", "Intro", 1, 50, "P1")
            .unwrap()
            .with_preferred_window(preferred)];
        let professors = vec![professor("P1")];
        let rooms = vec![Room::new("R1", "Hall", 100).unwrap()];
        // Only a Monday slot exists, outside the preferred window.
        let slots = vec![slot(1, DayOfWeek::Monday, 9)];

        let relaxed = BacktrackingScheduler::new(SchedulerConfig::new());
        let result = relaxed.schedule(&courses, &professors, &rooms, &slots);
        assert!(result.success);

        let strict =
            BacktrackingScheduler::new(SchedulerConfig::new().with_treat_soft_as_hard(true));
        let result = strict.schedule(&courses, &professors, &rooms, &slots);
        assert!(!result.success);
        assert_eq!(result.unscheduled_courses, ["CS101"]);
    }

    #[test]
    fn test_schedules_around_professor_unavailability() {
        let monday = slot(1, DayOfWeek::Monday, 9);
        let tuesday = slot(2, DayOfWeek::Tuesday, 9);
        let courses = vec![Course::new("CS101", "Intro", 1, 50, "P1").unwrap()];
        let professors = vec![Professor::new("P1", "Dr. Smith")
            .unwrap()
            .with_unavailable(monday)];
        let rooms = vec![Room::new("R1", "Hall", 100).unwrap()];

        let result = scheduler().schedule(&courses, &professors, &rooms, &[monday, tuesday]);
        assert!(result.success);
        let assignment = result.schedule.assignment("CS101").unwrap();
        assert_eq!(assignment.time_slots(), [tuesday]);
    }

    #[test]
    fn test_two_courses_share_room_across_slots() {
        let courses = vec![
            Course::new("CS101", "Intro", 1, 50, "P1").unwrap(),
            Course::new("CS102", "Data Structures", 1, 40, "P2").unwrap(),
        ];
        let professors = vec![professor("P1"), professor("P2")];
        let rooms = vec![Room::new("R1", "Hall", 100).unwrap()];
        let slots = vec![slot(1, DayOfWeek::Monday, 9), slot(2, DayOfWeek::Monday, 10)];

        let result = scheduler().schedule(&courses, &professors, &rooms, &slots);
        assert!(result.success);
        assert_eq!(result.schedule.scheduled_count(), 2);
        // Higher enrollment first, so CS101 takes the earlier slot.
        assert_eq!(
            result.schedule.assignment("CS101").unwrap().time_slots(),
            [slot(1, DayOfWeek::Monday, 9)]
        );
        assert_eq!(
            result.schedule.assignment("CS102").unwrap().time_slots(),
            [slot(2, DayOfWeek::Monday, 10)]
        );
    }

    #[test]
    fn test_empty_course_list_succeeds() {
        let result = scheduler().schedule(&[], &[], &[], &[]);
        assert!(result.success);
        assert!(result.schedule.is_empty());
        assert!(result.messages.is_empty());
    }

    #[test]
    fn test_consecutive_windows_single_slot_keeps_order() {
        let preferred_last = slot(3, DayOfWeek::Wednesday, 9);
        let slots = vec![preferred_last, slot(1, DayOfWeek::Monday, 9)];
        let windows = consecutive_windows(&slots, 1);
        assert_eq!(windows.len(), 2);
        // Heuristic input order is preserved, not re-sorted.
        assert_eq!(windows[0], [preferred_last]);
    }

    #[test]
    fn test_consecutive_windows_skip_gaps_and_days() {
        let slots = vec![
            slot(1, DayOfWeek::Monday, 9),
            slot(2, DayOfWeek::Monday, 10),
            slot(3, DayOfWeek::Monday, 12),
            slot(4, DayOfWeek::Tuesday, 13),
        ];
        let windows = consecutive_windows(&slots, 2);
        assert_eq!(
            windows,
            vec![vec![slot(1, DayOfWeek::Monday, 9), slot(2, DayOfWeek::Monday, 10)]]
        );
    }

    #[test]
    fn test_consecutive_windows_longer_than_supply() {
        let slots = vec![slot(1, DayOfWeek::Monday, 9)];
        assert!(consecutive_windows(&slots, 3).is_empty());
    }

    #[test]
    fn test_consecutive_windows_triple() {
        let slots = vec![
            slot(1, DayOfWeek::Monday, 9),
            slot(2, DayOfWeek::Monday, 10),
            slot(3, DayOfWeek::Monday, 11),
        ];
        let windows = consecutive_windows(&slots, 3);
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].len(), 3);
    }
}
