//! Timetabling domain models.
//!
//! Provides the core data types for representing a course timetabling
//! problem and its solution: time intervals, the entities being scheduled
//! (courses, professors, rooms), and the schedule aggregate that records
//! committed assignments.
//!
//! All entities are immutable after construction and are validated by
//! their constructors; invalid data never enters the search.

mod assignment;
mod course;
mod error;
mod interval;
mod professor;
mod room;
mod schedule;

pub use assignment::Assignment;
pub use course::Course;
pub use error::DomainError;
pub use interval::{DayOfWeek, TimeInterval, TimeOfDay};
pub use professor::Professor;
pub use room::Room;
pub use schedule::Schedule;
