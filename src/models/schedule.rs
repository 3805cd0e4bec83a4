//! Weekly schedule (run output) model.
//!
//! A weekly schedule is the ordered list of call assignments produced by one
//! run, together with the final load of every mentor and, under the
//! `continue` exhaustion policy, the calls that could not be placed.

use serde::{Deserialize, Serialize};

use super::{CallType, Slot, TimeOfDay, Weekday};

/// Lifecycle status of a call record.
///
/// The engine only emits [`CallStatus::Scheduled`]; the other states belong
/// to the consumer that tracks calls after they are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallStatus {
    #[default]
    Scheduled,
    Completed,
    MissedStudent,
    MissedMentor,
    Rescheduled,
}

/// One scheduled call: student × mentor × weekday slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallAssignment {
    pub student_id: String,
    pub mentor_id: String,
    pub day: Weekday,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub call_type: CallType,
    pub status: CallStatus,
}

impl CallAssignment {
    /// Creates a scheduled call occupying `slot`.
    pub fn new(
        student_id: impl Into<String>,
        mentor_id: impl Into<String>,
        day: Weekday,
        slot: Slot,
        call_type: CallType,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            mentor_id: mentor_id.into(),
            day,
            start: slot.start,
            end: slot.end,
            call_type,
            status: CallStatus::Scheduled,
        }
    }

    /// The occupied slot.
    pub fn slot(&self) -> Slot {
        Slot {
            start: self.start,
            end: self.end,
        }
    }

    /// Call length in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> u16 {
        self.slot().duration_minutes()
    }
}

/// A required call that no mentor could take.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnfilledCall {
    pub student_id: String,
    pub call_type: CallType,
}

/// Final load of one mentor after a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentorLoad {
    pub mentor_id: String,
    pub call_type: CallType,
    pub load: u32,
}

/// Result of one weekly scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    /// Assignments in the order they were made.
    pub assignments: Vec<CallAssignment>,
    /// Calls left unplaced (empty unless the run continued past exhaustion).
    pub unfilled: Vec<UnfilledCall>,
    /// Mentor loads, in mentor input order.
    pub mentor_loads: Vec<MentorLoad>,
}

impl WeeklySchedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an assignment.
    pub fn add_assignment(&mut self, assignment: CallAssignment) {
        self.assignments.push(assignment);
    }

    /// Records an unplaced call.
    pub fn add_unfilled(&mut self, student_id: impl Into<String>, call_type: CallType) {
        self.unfilled.push(UnfilledCall {
            student_id: student_id.into(),
            call_type,
        });
    }

    /// Whether every required call was placed.
    pub fn is_complete(&self) -> bool {
        self.unfilled.is_empty()
    }

    /// Number of assignments.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Returns all calls of a student, in assignment order.
    pub fn assignments_for_student(&self, student_id: &str) -> Vec<&CallAssignment> {
        self.assignments
            .iter()
            .filter(|a| a.student_id == student_id)
            .collect()
    }

    /// Returns all calls taken by a mentor.
    pub fn assignments_for_mentor(&self, mentor_id: &str) -> Vec<&CallAssignment> {
        self.assignments
            .iter()
            .filter(|a| a.mentor_id == mentor_id)
            .collect()
    }

    /// Returns all calls on a weekday.
    pub fn assignments_on(&self, day: Weekday) -> Vec<&CallAssignment> {
        self.assignments.iter().filter(|a| a.day == day).collect()
    }

    /// Final load of a mentor, if it took part in the run.
    pub fn load_of(&self, mentor_id: &str) -> Option<u32> {
        self.mentor_loads
            .iter()
            .find(|m| m.mentor_id == mentor_id)
            .map(|m| m.load)
    }
}
