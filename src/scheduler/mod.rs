//! Weekly call scheduling and run statistics.
//!
//! # Algorithm
//!
//! [`WeeklyScheduler`] is a deterministic, load-balanced first-fit heuristic:
//! for each required call, mentors of the requested type are tried
//! least-loaded first, and the first one with a free slot on a weekday the
//! student has not used yet takes the call. It is not optimal; a greedy
//! choice made early is never revisited.
//!
//! # Statistics
//!
//! [`ScheduleStats`] summarizes a finished run: calls per weekday and per
//! type, and mentor load spread.

mod ordering;
mod stats;
mod weekly;

pub use ordering::{rank_mentors, TieBreaker};
pub use stats::ScheduleStats;
pub use weekly::{ExhaustionPolicy, WeeklyScheduler};
