//! Course timetabling engine.
//!
//! Assigns a set of courses to (room, time-slot-sequence) pairs subject to
//! hard and soft constraints, using backtracking search over a
//! heuristically ordered variable/value space.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `TimeInterval`, `Course`, `Professor`,
//!   `Room`, `Assignment`, `Schedule`
//! - **`constraints`**: Composable constraint checks and the
//!   `ConstraintValidator` that orchestrates them
//! - **`scheduler`**: Ordering heuristics, the `BacktrackingScheduler`
//!   search driver, and schedule quality statistics
//! - **`validation`**: Input integrity checks (duplicate IDs, dangling
//!   references, slot supply)
//!
//! # Example
//!
//! ```
//! use timetabler::models::{Course, DayOfWeek, Professor, Room, TimeInterval, TimeOfDay};
//! use timetabler::scheduler::{BacktrackingScheduler, SchedulerConfig};
//!
//! # fn main() -> Result<(), timetabler::models::DomainError> {
//! let slot = TimeInterval::new(
//!     1,
//!     DayOfWeek::Monday,
//!     TimeOfDay::new(9, 0)?,
//!     TimeOfDay::new(10, 0)?,
//! )?;
//! let courses = vec![
//!     Course::new("CS101", "Intro to Programming", 1, 50, "P1")?.with_required_feature("projector"),
//! ];
//! let professors = vec![Professor::new("P1", "Dr. Smith")?];
//! let rooms = vec![Room::new("R1", "Lecture Hall A", 100)?.with_feature("projector")];
//!
//! let scheduler = BacktrackingScheduler::new(SchedulerConfig::new());
//! let result = scheduler.schedule(&courses, &professors, &rooms, &[slot]);
//! assert!(result.success);
//! # Ok(())
//! # }
//! ```
//!
//! # Scope
//!
//! The engine consumes already-parsed entity lists and produces a
//! `ScheduleResult`. Argument parsing, file loading, and result rendering
//! are left to the caller.
//!
//! # References
//!
//! - Russell & Norvig (2020), "Artificial Intelligence", Ch. 6: CSPs
//! - Brucker (2007), "Scheduling Algorithms"

pub mod constraints;
pub mod models;
pub mod scheduler;
pub mod validation;
