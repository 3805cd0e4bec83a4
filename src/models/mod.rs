//! Mentoring domain models.
//!
//! Provides the data types that flow through a weekly run: time-of-day
//! values, windows and slots, mentors, students, and the produced schedule.
//!
//! # Domain Mappings
//!
//! | Model | Scheduling role |
//! |-------|-----------------|
//! | MentorSpec / Mentor | Resource with consumable weekly capacity |
//! | Student | Task with an ordered list of required calls |
//! | Slot | Bookable unit of mentor time |
//! | CallAssignment | Student × mentor × weekday slot |

mod calendar;
mod mentor;
mod schedule;
mod student;
mod time;

pub use calendar::{Slot, TimeWindow};
pub use mentor::{
    CallType, Mentor, MentorSpec, UnknownCallType, DEFAULT_CALL_DURATION, DEFAULT_GAP,
};
pub use schedule::{CallAssignment, CallStatus, MentorLoad, UnfilledCall, WeeklySchedule};
pub use student::Student;
pub use time::{TimeOfDay, Weekday, MINUTES_PER_DAY};
