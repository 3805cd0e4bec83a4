//! Failure taxonomy for availability building and weekly runs.

use thiserror::Error;

use crate::models::{CallType, TimeWindow};
use crate::validation::ValidationError;

#[derive(Debug, Error)]
pub enum SchedulingError {
    /// No eligible mentor/weekday/slot combination remains for a required call.
    #[error("No available {call_type} mentor slots for student '{student_id}'")]
    CapacityExhausted {
        student_id: String,
        call_type: CallType,
    },

    #[error("Invalid window {window}: {reason}")]
    InvalidWindow {
        window: TimeWindow,
        reason: &'static str,
    },

    #[error("Mentor '{mentor_id}' is misconfigured: {reason}")]
    MisconfiguredMentor { mentor_id: String, reason: String },

    #[error("Invalid time of day '{value}' (expected HH:MM between 00:00 and 24:00)")]
    InvalidTime { value: String },

    #[error("Slot duration must be at least one minute")]
    ZeroDuration,

    #[error("Invalid roster: {}", summarize(.0))]
    InvalidRoster(Vec<ValidationError>),

    #[error("Failed to parse roster configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Roster configuration could not be read: {0}")]
    Io(#[from] std::io::Error),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, SchedulingError>;
