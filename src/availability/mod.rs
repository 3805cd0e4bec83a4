//! Mentor availability: slot generation and weekly slot queues.
//!
//! Data flows leaf to root: a [`TimeWindow`] plus breaks becomes a slot list
//! ([`generate_slots`]), and a [`MentorSpec`]'s windows become a
//! [`WeeklyAvailability`] with one queue per weekday.
//!
//! [`TimeWindow`]: crate::models::TimeWindow
//! [`MentorSpec`]: crate::models::MentorSpec

mod slots;
mod weekly;

pub use slots::generate_slots;
pub use weekly::WeeklyAvailability;
