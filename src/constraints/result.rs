//! Per-constraint validation outcome.

use std::fmt;

/// The outcome of evaluating one constraint against one candidate.
///
/// Carries the constraint name and zero or more human-readable violation
/// messages. Immutable value object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintResult {
    constraint: &'static str,
    valid: bool,
    messages: Vec<String>,
}

impl ConstraintResult {
    /// A passing result.
    pub fn success(constraint: &'static str) -> Self {
        Self {
            constraint,
            valid: true,
            messages: Vec::new(),
        }
    }

    /// A failing result with a single message.
    pub fn failure(constraint: &'static str, message: impl Into<String>) -> Self {
        Self {
            constraint,
            valid: false,
            messages: vec![message.into()],
        }
    }

    /// A failing result with several independent messages.
    pub fn failure_all(constraint: &'static str, messages: Vec<String>) -> Self {
        Self {
            constraint,
            valid: false,
            messages,
        }
    }

    /// Whether the constraint was satisfied.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Name of the constraint that produced this result.
    #[inline]
    pub fn constraint(&self) -> &'static str {
        self.constraint
    }

    /// Violation messages (empty for a passing result).
    #[inline]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl fmt::Display for ConstraintResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid {
            write!(f, "{}: passed", self.constraint)
        } else {
            write!(f, "{}: failed - {}", self.constraint, self.messages.join("; "))
        }
    }
}
