//! Time interval model.
//!
//! A `TimeInterval` is a discrete teaching period: a day of the week plus a
//! half-open time-of-day range, tagged with a catalog index. Intervals are
//! created once at data-load time, immutable thereafter, and shared by
//! value into every entity that mentions them.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::DomainError;

/// Day of the week, ordered Monday through Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        };
        f.write_str(name)
    }
}

/// A clock time, stored as minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Creates a time of day from an hour and minute on the 24-hour clock.
    pub fn new(hour: u8, minute: u8) -> Result<Self, DomainError> {
        if hour >= 24 || minute >= 60 {
            return Err(DomainError::InvalidTime { hour, minute });
        }
        Ok(Self(u16::from(hour) * 60 + u16::from(minute)))
    }

    /// Hour component (0-23).
    #[inline]
    pub fn hour(&self) -> u8 {
        (self.0 / 60) as u8
    }

    /// Minute component (0-59).
    #[inline]
    pub fn minute(&self) -> u8 {
        (self.0 % 60) as u8
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes_from_midnight(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// A discrete teaching period: day plus half-open `[start, end)` range.
///
/// The catalog `index` distinguishes slots that share a day and time; it
/// participates in ordering only as a tie-break, never as a day/time
/// component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeInterval {
    index: u32,
    day: DayOfWeek,
    start: TimeOfDay,
    end: TimeOfDay,
}

impl TimeInterval {
    /// Creates a time interval. The end must come after the start.
    pub fn new(
        index: u32,
        day: DayOfWeek,
        start: TimeOfDay,
        end: TimeOfDay,
    ) -> Result<Self, DomainError> {
        if end <= start {
            return Err(DomainError::EmptyInterval { index, start, end });
        }
        Ok(Self {
            index,
            day,
            start,
            end,
        })
    }

    /// Catalog index.
    #[inline]
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Day of the week.
    #[inline]
    pub fn day(&self) -> DayOfWeek {
        self.day
    }

    /// Start time (inclusive).
    #[inline]
    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    /// End time (exclusive).
    #[inline]
    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    /// Whether this interval overlaps another.
    ///
    /// Overlap requires the same day; ranges touching at an endpoint do
    /// not overlap.
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.day == other.day && self.start < other.end && other.start < self.end
    }

    /// Whether `other` immediately follows this interval (same day, this
    /// interval's end equals the other's start).
    pub fn leads_into(&self, other: &TimeInterval) -> bool {
        self.day == other.day && self.end == other.start
    }
}

impl Ord for TimeInterval {
    fn cmp(&self, other: &Self) -> Ordering {
        self.day
            .cmp(&other.day)
            .then_with(|| self.start.cmp(&other.start))
            .then_with(|| self.index.cmp(&other.index))
            .then_with(|| self.end.cmp(&other.end))
    }
}

impl PartialOrd for TimeInterval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}-{} (slot {})",
            self.day, self.start, self.end, self.index
        )
    }
}
