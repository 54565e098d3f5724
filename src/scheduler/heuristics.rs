//! Variable and value ordering heuristics.
//!
//! Pure, stateless ordering functions that shrink the search tree:
//! hardest courses first (fail fast while resources are still plentiful),
//! tightest-fitting rooms first (don't waste generously equipped rooms on
//! small courses), preferred slots first.
//!
//! # Reference
//!
//! Russell & Norvig (2020), "Artificial Intelligence", Ch. 6.3.1:
//! variable and value ordering

use crate::models::{Course, Room, TimeInterval};

/// Orders courses by estimated scheduling difficulty, hardest first.
///
/// Sorts descending by `(expected enrollment, duration, required feature
/// count)`. The sort is stable, so equally difficult courses keep their
/// input order.
pub fn order_courses_by_difficulty(courses: &[Course]) -> Vec<Course> {
    let mut ordered = courses.to_vec();
    ordered.sort_by(|a, b| {
        b.expected_enrollment()
            .cmp(&a.expected_enrollment())
            .then_with(|| b.duration().cmp(&a.duration()))
            .then_with(|| b.required_features().len().cmp(&a.required_features().len()))
    });
    ordered
}

/// Orders candidate rooms for a course by fit, tightest first.
///
/// Rooms that cannot hold the enrollment or lack a required feature are
/// filtered out entirely. The rest sort ascending by spare capacity, then
/// by total feature count.
pub fn order_rooms_by_fit<'a>(rooms: &'a [Room], course: &Course) -> Vec<&'a Room> {
    let mut fitting: Vec<&Room> = rooms
        .iter()
        .filter(|room| room.can_accommodate(course.expected_enrollment()))
        .filter(|room| room.has_all_features(course.required_features()))
        .collect();
    fitting.sort_by_key(|room| {
        (
            room.capacity() - course.expected_enrollment(),
            room.features().len(),
        )
    });
    fitting
}

/// Orders candidate time slots for a course: slots inside a declared
/// preferred window first, then everything else, each partition in
/// natural `(day, start, index)` order.
pub fn order_time_slots(slots: &[TimeInterval], course: &Course) -> Vec<TimeInterval> {
    let mut ordered = slots.to_vec();
    ordered.sort_by_key(|slot| (!course.preferred_windows().contains(slot), *slot));
    ordered
}

/// Diagnostic difficulty score for a course.
///
/// Not consulted by the ordering above; exposed for reporting and tuning.
pub fn course_difficulty(course: &Course) -> u32 {
    let mut score = course.expected_enrollment();
    score += course.duration() * 10;
    score += course.required_features().len() as u32 * 5;
    if course.has_preferred_windows() {
        score += 10;
    }
    score
}
