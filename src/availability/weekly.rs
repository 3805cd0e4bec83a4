//! Per-weekday slot queues for one mentor.

use std::collections::VecDeque;

use tracing::debug;

use super::generate_slots;
use crate::error::{Result, SchedulingError};
use crate::models::{MentorSpec, Slot, TimeWindow, Weekday};

/// A mentor's bookable slots for one week, one ascending queue per weekday.
///
/// Owned by exactly one scheduling run; slots are consumed from the front
/// as calls are assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklyAvailability {
    days: [VecDeque<Slot>; 7],
}

impl WeeklyAvailability {
    /// Creates an availability with no slots on any day.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the week for a mentor.
    ///
    /// Monday–Saturday each get the slots of the weekday window. Sunday gets
    /// the slots of every Sunday sub-window, concatenated in declaration
    /// order. The break list and gap apply to every window.
    ///
    /// # Errors
    /// - [`SchedulingError::MisconfiguredMentor`] for a zero call duration, or
    ///   when the mentor declares neither a weekday window nor a Sunday window.
    /// - [`SchedulingError::InvalidWindow`] for a window or break whose end
    ///   does not follow its start, or a break outside every declared window.
    ///
    /// Validation completes before any slot is generated.
    pub fn build(spec: &MentorSpec) -> Result<Self> {
        validate_spec(spec)?;

        let mut week = Self::empty();

        if let Some(window) = spec.weekday_window {
            let slots = generate_slots(window, &spec.breaks, spec.duration_minutes, spec.gap_minutes)?;
            for day in Weekday::WORKDAYS {
                week.days[day.index()] = slots.iter().copied().collect();
            }
        }

        let sunday = &mut week.days[Weekday::Sun.index()];
        for window in &spec.sunday_windows {
            sunday.extend(generate_slots(
                *window,
                &spec.breaks,
                spec.duration_minutes,
                spec.gap_minutes,
            )?);
        }

        debug!(
            mentor = %spec.id,
            call_type = %spec.call_type,
            weekday_slots = week.slot_count(Weekday::Mon),
            sunday_slots = week.slot_count(Weekday::Sun),
            "built weekly availability"
        );

        Ok(week)
    }

    /// Replaces the slot queue of one day. Slots are kept in the given order.
    pub fn with_day(mut self, day: Weekday, slots: impl IntoIterator<Item = Slot>) -> Self {
        self.days[day.index()] = slots.into_iter().collect();
        self
    }

    /// Remaining slots on a day, earliest first.
    pub fn slots(&self, day: Weekday) -> impl Iterator<Item = &Slot> {
        self.days[day.index()].iter()
    }

    /// Number of remaining slots on a day.
    #[inline]
    pub fn slot_count(&self, day: Weekday) -> usize {
        self.days[day.index()].len()
    }

    /// Remaining slots across the week.
    pub fn total_slots(&self) -> usize {
        self.days.iter().map(VecDeque::len).sum()
    }

    /// Whether no slot remains on any day.
    pub fn is_exhausted(&self) -> bool {
        self.days.iter().all(VecDeque::is_empty)
    }

    /// Removes and returns the earliest remaining slot of a day.
    pub fn pop_earliest(&mut self, day: Weekday) -> Option<Slot> {
        self.days[day.index()].pop_front()
    }
}

fn validate_spec(spec: &MentorSpec) -> Result<()> {
    if spec.duration_minutes == 0 {
        return Err(misconfigured(spec, "call duration must be at least one minute"));
    }
    if spec.weekday_window.is_none() && spec.sunday_windows.is_empty() {
        return Err(misconfigured(spec, "no weekday window and no Sunday windows"));
    }

    let mut windows = Vec::new();
    for window in spec.windows() {
        let window = window.normalized();
        if !window.is_well_formed() {
            return Err(SchedulingError::InvalidWindow {
                window,
                reason: "window end must follow its start",
            });
        }
        windows.push(window);
    }

    // Sunday queues are concatenated, so overlapping sub-windows would
    // double-book the mentor
    let sunday: Vec<TimeWindow> = spec.sunday_windows.iter().map(|w| w.normalized()).collect();
    for (i, window) in sunday.iter().enumerate() {
        if sunday[..i].iter().any(|earlier| earlier.overlaps(window)) {
            return Err(SchedulingError::InvalidWindow {
                window: *window,
                reason: "Sunday window overlaps an earlier Sunday window",
            });
        }
    }

    for period in &spec.breaks {
        let period = period.normalized();
        if !period.is_well_formed() {
            return Err(SchedulingError::InvalidWindow {
                window: period,
                reason: "break end must follow its start",
            });
        }
        if !windows.iter().any(|w: &TimeWindow| w.encloses(&period)) {
            return Err(SchedulingError::InvalidWindow {
                window: period,
                reason: "break lies outside every availability window",
            });
        }
    }

    Ok(())
}

fn misconfigured(spec: &MentorSpec, reason: &str) -> SchedulingError {
    SchedulingError::MisconfiguredMentor {
        mentor_id: spec.id.clone(),
        reason: reason.to_string(),
    }
}
