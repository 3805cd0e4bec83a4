//! Slot generation for one availability window.
//!
//! # Algorithm
//!
//! 1. Place a cursor at the window start.
//! 2. While `cursor + duration <= end`:
//!    - if `[cursor, cursor + duration)` overlaps a break, jump the cursor to
//!      that break's end and retest (the partial span before the break is
//!      dropped, never shifted);
//!    - otherwise emit the slot and advance by `duration + gap`.
//!
//! # Complexity
//! O(w / d · b) where w = window length, d = duration, b = break count.

use tracing::trace;

use crate::error::{Result, SchedulingError};
use crate::models::{Slot, TimeWindow};

/// Splits `window` into `duration`-minute slots separated by `gap` minutes,
/// skipping any span that overlaps a break.
///
/// Window and break ends of `00:00` are read as `24:00`. Breaks that do not
/// touch the window are ignored.
///
/// # Errors
/// - [`SchedulingError::ZeroDuration`] if `duration` is zero.
/// - [`SchedulingError::InvalidWindow`] if the window or a break does not
///   end strictly after it starts.
///
/// # Example
///
/// ```
/// use mentor_call_scheduler::availability::generate_slots;
/// use mentor_call_scheduler::models::TimeWindow;
///
/// let window = TimeWindow::new("19:00".parse()?, "20:00".parse()?);
/// let slots = generate_slots(window, &[], 20, 5)?;
/// let starts: Vec<String> = slots.iter().map(|s| s.start.to_string()).collect();
/// assert_eq!(starts, ["19:00", "19:25"]);
/// # Ok::<(), mentor_call_scheduler::SchedulingError>(())
/// ```
pub fn generate_slots(
    window: TimeWindow,
    breaks: &[TimeWindow],
    duration: u16,
    gap: u16,
) -> Result<Vec<Slot>> {
    if duration == 0 {
        return Err(SchedulingError::ZeroDuration);
    }

    let window = checked(window, "window end must follow its start")?;
    let breaks = breaks
        .iter()
        .map(|b| checked(*b, "break end must follow its start"))
        .collect::<Result<Vec<_>>>()?;

    let duration = u32::from(duration);
    let step = duration + u32::from(gap);
    let end = u32::from(window.end.minutes());

    let mut slots = Vec::new();
    let mut cursor = u32::from(window.start.minutes());

    while cursor + duration <= end {
        let blocking = breaks.iter().find(|b| {
            let b_start = u32::from(b.start.minutes());
            let b_end = u32::from(b.end.minutes());
            cursor < b_end && b_start < cursor + duration
        });

        match blocking {
            Some(b) => {
                trace!(cursor, blocked_until = %b.end, "slot candidate overlaps break");
                cursor = u32::from(b.end.minutes());
            }
            None => {
                // cursor + duration <= end <= 1440, so both fit in u16
                slots.push(Slot::from_minutes(cursor as u16, (cursor + duration) as u16));
                cursor += step;
            }
        }
    }

    Ok(slots)
}

fn checked(window: TimeWindow, reason: &'static str) -> Result<TimeWindow> {
    let window = window.normalized();
    if window.is_well_formed() {
        Ok(window)
    } else {
        Err(SchedulingError::InvalidWindow { window, reason })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn w(start: &str, end: &str) -> TimeWindow {
        TimeWindow::new(start.parse().unwrap(), end.parse().unwrap())
    }

    fn starts(slots: &[Slot]) -> Vec<String> {
        slots.iter().map(|s| s.start.to_string()).collect()
    }

    #[test]
    fn test_single_slot_window() {
        let slots = generate_slots(w("19:00", "20:00"), &[], 20, 5).unwrap();
        assert_eq!(starts(&slots), ["19:00", "19:25"]);

        // 19:50 + 20 > 20:00 → no third slot
        assert_eq!(slots.last().unwrap().end.to_string(), "19:45");
    }

    #[test]
    fn test_evening_with_dinner_break() {
        let slots = generate_slots(w("19:00", "24:00"), &[w("21:00", "22:00")], 20, 5).unwrap();
        assert_eq!(
            starts(&slots),
            ["19:00", "19:25", "19:50", "20:15", "20:40", "22:00", "22:25", "22:50", "23:15", "23:40"]
        );
        // A slot may end exactly when the break begins
        assert_eq!(slots[4].end.to_string(), "21:00");
        assert_eq!(slots[9].end.to_string(), "24:00");
    }

    #[test]
    fn test_blocked_span_is_dropped_not_shifted() {
        // 10:00-10:20 fits, 10:25 would overlap 10:30-10:40 → jump to 10:40
        let slots = generate_slots(w("10:00", "11:30"), &[w("10:30", "10:40")], 20, 5).unwrap();
        assert_eq!(starts(&slots), ["10:00", "10:40", "11:05"]);
    }

    #[test]
    fn test_midnight_end_is_normalized() {
        let a = generate_slots(w("23:00", "00:00"), &[], 20, 5).unwrap();
        let b = generate_slots(w("23:00", "24:00"), &[], 20, 5).unwrap();
        assert_eq!(a, b);
        assert_eq!(starts(&a), ["23:00", "23:25"]);
    }

    #[test]
    fn test_break_outside_window_is_ignored() {
        let with = generate_slots(w("10:00", "12:00"), &[w("21:00", "22:00")], 20, 5).unwrap();
        let without = generate_slots(w("10:00", "12:00"), &[], 20, 5).unwrap();
        assert_eq!(with, without);
        assert_eq!(starts(&with), ["10:00", "10:25", "10:50", "11:15", "11:40"]);
    }

    #[test]
    fn test_window_shorter_than_duration() {
        let slots = generate_slots(w("10:00", "10:15"), &[], 20, 5).unwrap();
        assert!(slots.is_empty());
    }

    #[test]
    fn test_zero_gap_packs_back_to_back() {
        let slots = generate_slots(w("10:00", "11:00"), &[], 20, 0).unwrap();
        assert_eq!(starts(&slots), ["10:00", "10:20", "10:40"]);
    }

    #[test]
    fn test_rejects_inverted_window() {
        let err = generate_slots(w("20:00", "19:00"), &[], 20, 5).unwrap_err();
        assert!(matches!(err, SchedulingError::InvalidWindow { .. }));

        let err = generate_slots(w("19:00", "19:00"), &[], 20, 5).unwrap_err();
        assert!(matches!(err, SchedulingError::InvalidWindow { .. }));
    }

    #[test]
    fn test_rejects_inverted_break() {
        let err = generate_slots(w("19:00", "24:00"), &[w("22:00", "21:00")], 20, 5).unwrap_err();
        match err {
            SchedulingError::InvalidWindow { window, .. } => {
                assert_eq!(window.to_string(), "22:00-21:00");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_zero_duration() {
        let err = generate_slots(w("19:00", "24:00"), &[], 0, 5).unwrap_err();
        assert!(matches!(err, SchedulingError::ZeroDuration));
    }

    #[test]
    fn test_deterministic() {
        let breaks = [w("12:00", "13:00"), w("15:10", "15:30")];
        let a = generate_slots(w("08:00", "18:00"), &breaks, 25, 10).unwrap();
        let b = generate_slots(w("08:00", "18:00"), &breaks, 25, 10).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_windows_respect_invariants() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..500 {
            let start: u16 = rng.random_range(0..1400);
            let end: u16 = rng.random_range(start + 1..=1440);
            let duration: u16 = rng.random_range(1..=60);
            let gap: u16 = rng.random_range(0..=15);
            let window = TimeWindow::from_minutes(start, end).unwrap();

            let breaks: Vec<TimeWindow> = (0..rng.random_range(0..4))
                .map(|_| {
                    let b_start: u16 = rng.random_range(0..1439);
                    let b_end: u16 = rng.random_range(b_start + 1..=1440);
                    TimeWindow::from_minutes(b_start, b_end).unwrap()
                })
                .collect();

            let slots = generate_slots(window, &breaks, duration, gap).unwrap();

            for slot in &slots {
                assert_eq!(slot.duration_minutes(), duration);
                assert!(window.encloses(&slot.window()));
                assert!(breaks.iter().all(|b| !b.overlaps(&slot.window())));
            }
            for pair in slots.windows(2) {
                let spacing = pair[1].start.minutes() - pair[0].start.minutes();
                assert!(spacing >= duration + gap);
            }
        }
    }
}
