//! Constraint checks for candidate assignments.
//!
//! Each constraint is an independently pluggable check evaluated against a
//! single candidate (course, room, slot, professor, schedule) tuple. Hard
//! constraints must hold for an assignment to be accepted; soft
//! constraints are preferences that block nothing unless promoted.
//!
//! Constraints are a closed enum rather than trait objects so the set is
//! exhaustively matchable and dispatch is a plain `match`.

mod constraint;
mod result;
mod validator;

pub use constraint::Constraint;
pub use result::ConstraintResult;
pub use validator::{ConstraintValidator, ValidationReport};
