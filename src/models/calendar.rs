//! Availability windows, break periods, and bookable slots.
//!
//! # Precedence
//! Breaks override windows. A slot is bookable iff it lies fully inside a
//! window AND does not overlap any break period.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::TimeOfDay;

/// A time-of-day interval [start, end).
///
/// Used both for availability windows and for break periods. An end of
/// `00:00` written by a caller means midnight rollover; see [`normalized`].
///
/// [`normalized`]: TimeWindow::normalized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Interval start (inclusive).
    pub start: TimeOfDay,
    /// Interval end (exclusive).
    pub end: TimeOfDay,
}

impl TimeWindow {
    /// Creates a new time window.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    /// Creates a window from minutes since midnight. `None` past `24:00`.
    pub fn from_minutes(start: u16, end: u16) -> Option<Self> {
        Some(Self::new(
            TimeOfDay::from_minutes(start)?,
            TimeOfDay::from_minutes(end)?,
        ))
    }

    /// Reads an end of `00:00` as `24:00`.
    ///
    /// `19:00-00:00` means "until midnight", never an empty or inverted range.
    pub fn normalized(self) -> Self {
        if self.end == TimeOfDay::MIDNIGHT {
            Self::new(self.start, TimeOfDay::END_OF_DAY)
        } else {
            self
        }
    }

    /// Whether the end strictly follows the start and the start is a real
    /// time of day (not `24:00`).
    pub fn is_well_formed(&self) -> bool {
        !self.start.is_end_of_day() && self.end > self.start
    }

    /// Length in minutes (0 for malformed windows).
    #[inline]
    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes().saturating_sub(self.start.minutes())
    }

    /// Whether a time falls within this window.
    #[inline]
    pub fn contains(&self, time: TimeOfDay) -> bool {
        time >= self.start && time < self.end
    }

    /// Whether two windows overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether `other` lies entirely inside this window.
    pub fn encloses(&self, other: &Self) -> bool {
        other.start >= self.start && other.end <= self.end
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// A fixed-duration bookable interval. Immutable once generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl Slot {
    pub(crate) fn from_minutes(start: u16, end: u16) -> Self {
        Self {
            start: TimeOfDay::from_minutes_unchecked(start),
            end: TimeOfDay::from_minutes_unchecked(end),
        }
    }

    #[inline]
    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes().saturating_sub(self.start.minutes())
    }

    /// The slot as a window, for overlap checks.
    pub fn window(&self) -> TimeWindow {
        TimeWindow::new(self.start, self.end)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
