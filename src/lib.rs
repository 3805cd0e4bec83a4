//! Weekly mentoring-call scheduler.
//!
//! Assigns every student a fixed weekly quota of calls (two `normal`, one
//! `academic`) with mentors of the matching type, spreading load evenly and
//! placing at most one call per student per weekday.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `TimeOfDay`, `TimeWindow`, `Slot`, `Weekday`,
//!   `CallType`, `Student`, `MentorSpec`, `Mentor`, `WeeklySchedule`
//! - **`availability`**: Slot generation and per-weekday slot queues
//! - **`scheduler`**: The load-balanced first-fit weekly scheduler and run statistics
//! - **`validation`**: Pre-flight roster checks (duplicate IDs, unserved call types, capacity)
//! - **`config`**: JSON roster loading
//!
//! # Example
//!
//! ```
//! use mentor_call_scheduler::models::{MentorSpec, Student, TimeWindow};
//! use mentor_call_scheduler::scheduler::{ScheduleStats, WeeklyScheduler};
//!
//! let evening = TimeWindow::new("19:00".parse()?, "24:00".parse()?);
//! let dinner = TimeWindow::new("21:00".parse()?, "22:00".parse()?);
//! let mentors = vec![
//!     MentorSpec::normal("n1").with_weekday_window(evening).with_break(dinner),
//!     MentorSpec::academic("a1").with_weekday_window(evening).with_break(dinner),
//! ];
//! let students: Vec<Student> = (1..=4).map(|i| Student::new(format!("s{i}"))).collect();
//!
//! let schedule = WeeklyScheduler::new().schedule_specs(&students, &mentors)?;
//! assert_eq!(schedule.assignment_count(), 12);
//! assert_eq!(ScheduleStats::calculate(&schedule).max_load, 8);
//! # Ok::<(), mentor_call_scheduler::SchedulingError>(())
//! ```
//!
//! # Logging
//!
//! The crate emits `tracing` events and never installs a subscriber.

pub mod availability;
pub mod config;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{Result, SchedulingError};
