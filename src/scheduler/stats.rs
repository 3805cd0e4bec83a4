//! Run statistics.
//!
//! Summarizes a finished [`WeeklySchedule`]: how many calls landed on each
//! weekday, how they split by call type, and how evenly load spread across
//! mentors.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total calls | Number of assignments |
//! | Unfilled | Calls recorded under the `continue` policy |
//! | Load spread | max load - min load among mentors of one type |

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{CallType, Weekday, WeeklySchedule};

/// Summary of one weekly run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScheduleStats {
    pub total_calls: usize,
    pub unfilled_calls: usize,
    /// Calls per weekday; days without calls are absent.
    pub calls_by_day: BTreeMap<Weekday, usize>,
    pub calls_by_type: BTreeMap<CallType, usize>,
    /// Final load per mentor, in mentor input order.
    pub load_by_mentor: Vec<(String, u32)>,
    pub min_load: u32,
    pub max_load: u32,
    pub avg_load: f64,
    /// max load - min load among mentors of each call type present.
    pub spread_by_type: BTreeMap<CallType, u32>,
}

impl ScheduleStats {
    /// Computes statistics from a finished schedule.
    pub fn calculate(schedule: &WeeklySchedule) -> Self {
        let mut calls_by_day = BTreeMap::new();
        let mut calls_by_type = BTreeMap::new();
        for call in &schedule.assignments {
            *calls_by_day.entry(call.day).or_insert(0) += 1;
            *calls_by_type.entry(call.call_type).or_insert(0) += 1;
        }

        let loads: Vec<u32> = schedule.mentor_loads.iter().map(|m| m.load).collect();
        let min_load = loads.iter().copied().min().unwrap_or(0);
        let max_load = loads.iter().copied().max().unwrap_or(0);
        let avg_load = if loads.is_empty() {
            0.0
        } else {
            loads.iter().map(|&l| f64::from(l)).sum::<f64>() / loads.len() as f64
        };

        // Mentors of different types never compete for the same call, so
        // load is only comparable within a type
        let mut range_by_type: BTreeMap<CallType, (u32, u32)> = BTreeMap::new();
        for m in &schedule.mentor_loads {
            range_by_type
                .entry(m.call_type)
                .and_modify(|(lo, hi)| {
                    *lo = (*lo).min(m.load);
                    *hi = (*hi).max(m.load);
                })
                .or_insert((m.load, m.load));
        }
        let spread_by_type = range_by_type
            .into_iter()
            .map(|(call_type, (lo, hi))| (call_type, hi - lo))
            .collect();

        Self {
            total_calls: schedule.assignment_count(),
            unfilled_calls: schedule.unfilled.len(),
            calls_by_day,
            calls_by_type,
            load_by_mentor: schedule
                .mentor_loads
                .iter()
                .map(|m| (m.mentor_id.clone(), m.load))
                .collect(),
            min_load,
            max_load,
            avg_load,
            spread_by_type,
        }
    }

    /// Calls on one weekday.
    pub fn calls_on(&self, day: Weekday) -> usize {
        self.calls_by_day.get(&day).copied().unwrap_or(0)
    }

    /// Difference between the heaviest and lightest mentor of one call type
    /// (0 when no mentor offers it).
    pub fn load_spread(&self, call_type: CallType) -> u32 {
        self.spread_by_type.get(&call_type).copied().unwrap_or(0)
    }

    /// Whether, for every call type, mentor loads differ by at most
    /// `max_spread`.
    pub fn is_balanced(&self, max_spread: u32) -> bool {
        self.spread_by_type.values().all(|&spread| spread <= max_spread)
    }
}
