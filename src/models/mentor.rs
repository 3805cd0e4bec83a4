//! Mentor model.
//!
//! A [`MentorSpec`] is reusable configuration: call type, windows, breaks,
//! and slot sizing. A [`Mentor`] is the state of one mentor inside one
//! scheduling run: its consumable availability and its load counter. Build
//! a fresh `Mentor` from the spec for every run.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::{TimeWindow, Weekday};
use crate::availability::WeeklyAvailability;
use crate::error::Result;

/// Default call length in minutes.
pub const DEFAULT_CALL_DURATION: u16 = 20;
/// Default idle minutes between consecutive calls.
pub const DEFAULT_GAP: u16 = 5;

/// Category of call. Must match between a student's requirement and a
/// mentor's declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallType {
    Normal,
    Academic,
}

impl CallType {
    /// Fixed weekly demand per student: two normal calls, then one academic.
    pub const WEEKLY_QUOTA: [CallType; 3] = [CallType::Normal, CallType::Normal, CallType::Academic];

    pub const fn as_str(self) -> &'static str {
        match self {
            CallType::Normal => "normal",
            CallType::Academic => "academic",
        }
    }
}

impl fmt::Display for CallType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized call type '{0}'")]
pub struct UnknownCallType(pub String);

impl FromStr for CallType {
    type Err = UnknownCallType;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(CallType::Normal),
            "academic" => Ok(CallType::Academic),
            _ => Err(UnknownCallType(s.to_string())),
        }
    }
}

/// Mentor availability configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentorSpec {
    /// Unique mentor identifier.
    pub id: String,
    /// Type of call this mentor takes.
    pub call_type: CallType,
    /// Window shared by Monday through Saturday.
    pub weekday_window: Option<TimeWindow>,
    /// Sunday sub-windows, in declaration order.
    pub sunday_windows: Vec<TimeWindow>,
    /// Periods in which no slot may start or overlap. Applied to every day.
    pub breaks: Vec<TimeWindow>,
    /// Call length (minutes).
    pub duration_minutes: u16,
    /// Idle minutes between consecutive slots.
    pub gap_minutes: u16,
}

impl MentorSpec {
    /// Creates a mentor with no windows and default call sizing.
    pub fn new(id: impl Into<String>, call_type: CallType) -> Self {
        Self {
            id: id.into(),
            call_type,
            weekday_window: None,
            sunday_windows: Vec::new(),
            breaks: Vec::new(),
            duration_minutes: DEFAULT_CALL_DURATION,
            gap_minutes: DEFAULT_GAP,
        }
    }

    /// Creates a normal-call mentor.
    pub fn normal(id: impl Into<String>) -> Self {
        Self::new(id, CallType::Normal)
    }

    /// Creates an academic-call mentor.
    pub fn academic(id: impl Into<String>) -> Self {
        Self::new(id, CallType::Academic)
    }

    /// Sets the Monday–Saturday window.
    pub fn with_weekday_window(mut self, window: TimeWindow) -> Self {
        self.weekday_window = Some(window);
        self
    }

    /// Appends a Sunday sub-window.
    pub fn with_sunday_window(mut self, window: TimeWindow) -> Self {
        self.sunday_windows.push(window);
        self
    }

    /// Adds a break period.
    pub fn with_break(mut self, period: TimeWindow) -> Self {
        self.breaks.push(period);
        self
    }

    /// Sets the call duration.
    pub fn with_duration(mut self, minutes: u16) -> Self {
        self.duration_minutes = minutes;
        self
    }

    /// Sets the inter-call gap.
    pub fn with_gap(mut self, minutes: u16) -> Self {
        self.gap_minutes = minutes;
        self
    }

    /// All declared windows, weekday window first.
    pub fn windows(&self) -> impl Iterator<Item = &TimeWindow> {
        self.weekday_window.iter().chain(self.sunday_windows.iter())
    }
}

/// A mentor's state within a single scheduling run.
#[derive(Debug, Clone)]
pub struct Mentor {
    pub id: String,
    pub call_type: CallType,
    pub availability: WeeklyAvailability,
    /// Calls assigned so far in this run.
    pub load: u32,
}

impl Mentor {
    /// Builds fresh run state (full availability, zero load) from a spec.
    pub fn from_spec(spec: &MentorSpec) -> Result<Self> {
        Ok(Self::with_availability(
            spec.id.clone(),
            spec.call_type,
            WeeklyAvailability::build(spec)?,
        ))
    }

    /// Wraps an already-built availability.
    pub fn with_availability(
        id: impl Into<String>,
        call_type: CallType,
        availability: WeeklyAvailability,
    ) -> Self {
        Self {
            id: id.into(),
            call_type,
            availability,
            load: 0,
        }
    }

    /// Whether any slot remains on a day.
    #[inline]
    pub fn has_slot_on(&self, day: Weekday) -> bool {
        self.availability.slot_count(day) > 0
    }
}
