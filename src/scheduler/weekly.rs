//! Load-balanced first-fit weekly call scheduler.
//!
//! # Algorithm
//!
//! 1. Iterate students in input order, and each student's requirements in order.
//! 2. Rank mentors of the requested call type by load (see [`rank_mentors`]).
//! 3. For the lightest mentor, scan Mon→Sun, skipping weekdays this student
//!    already has a call on.
//! 4. On the first weekday with a free slot: pop it, emit the call, bump the
//!    mentor's load, and mark the weekday used for the student.
//! 5. Otherwise fall through to the next mentor in rank order.
//! 6. If no mentor can take the call, apply the [`ExhaustionPolicy`].
//!
//! This is a single auditable pass, not an optimizer: an early choice is never
//! revisited to make room for a later one.
//!
//! # Complexity
//! O(c · m log m) where c = total required calls, m = mentor count.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::ordering::{rank_mentors, TieBreaker};
use crate::error::{Result, SchedulingError};
use crate::models::{
    CallAssignment, CallType, Mentor, MentorLoad, MentorSpec, Student, Weekday, WeeklySchedule,
};
use crate::validation::check_unique_ids;

/// What a run does when a required call cannot be placed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExhaustionPolicy {
    /// Fail the whole run with [`SchedulingError::CapacityExhausted`]; no
    /// partial schedule is returned.
    #[default]
    Abort,
    /// Record the call in [`WeeklySchedule::unfilled`] and carry on with the
    /// student's next requirement.
    Continue,
}

/// Weekly mentoring-call scheduler.
///
/// # Example
///
/// ```
/// use mentor_call_scheduler::models::{CallType, MentorSpec, Student, TimeWindow, Weekday};
/// use mentor_call_scheduler::scheduler::WeeklyScheduler;
///
/// let mentor = MentorSpec::normal("m1")
///     .with_weekday_window(TimeWindow::new("19:00".parse()?, "20:00".parse()?));
/// let student = Student::new("s1").with_requirements([CallType::Normal]);
///
/// let schedule = WeeklyScheduler::new().schedule_specs(&[student], &[mentor])?;
/// let call = &schedule.assignments[0];
/// assert_eq!(call.day, Weekday::Mon);
/// assert_eq!(call.start.to_string(), "19:00");
/// assert_eq!(call.end.to_string(), "19:20");
/// # Ok::<(), mentor_call_scheduler::SchedulingError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct WeeklyScheduler {
    exhaustion_policy: ExhaustionPolicy,
    tie_breaker: TieBreaker,
}

impl WeeklyScheduler {
    /// Creates a scheduler that aborts on exhaustion and breaks load ties by
    /// declaration order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the exhaustion policy.
    pub fn with_exhaustion_policy(mut self, policy: ExhaustionPolicy) -> Self {
        self.exhaustion_policy = policy;
        self
    }

    /// Sets the tie-breaker among equal-load mentors.
    pub fn with_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    pub fn exhaustion_policy(&self) -> ExhaustionPolicy {
        self.exhaustion_policy
    }

    pub fn tie_breaker(&self) -> TieBreaker {
        self.tie_breaker
    }

    /// Runs one week.
    ///
    /// Takes ownership of the mentors: their slot queues and loads are
    /// consumed by this run and must not be reused for another one.
    ///
    /// # Errors
    /// - [`SchedulingError::InvalidRoster`] for duplicate student or mentor IDs.
    /// - [`SchedulingError::CapacityExhausted`] under [`ExhaustionPolicy::Abort`]
    ///   when a required call cannot be placed.
    pub fn schedule(&self, students: &[Student], mut mentors: Vec<Mentor>) -> Result<WeeklySchedule> {
        check_unique_ids(
            students.iter().map(|s| s.id.as_str()),
            mentors.iter().map(|m| m.id.as_str()),
        )
        .map_err(SchedulingError::InvalidRoster)?;

        info!(
            students = students.len(),
            mentors = mentors.len(),
            policy = ?self.exhaustion_policy,
            "starting weekly scheduling run"
        );

        let mut schedule = WeeklySchedule::new();

        for student in students {
            let mut used_days: HashSet<Weekday> = HashSet::new();

            for &call_type in &student.requirements {
                match self.place(&student.id, call_type, &mut mentors, &mut used_days) {
                    Some(assignment) => schedule.add_assignment(assignment),
                    None => {
                        warn!(
                            student = %student.id,
                            call_type = %call_type,
                            "no available mentor slots"
                        );
                        match self.exhaustion_policy {
                            ExhaustionPolicy::Abort => {
                                return Err(SchedulingError::CapacityExhausted {
                                    student_id: student.id.clone(),
                                    call_type,
                                });
                            }
                            ExhaustionPolicy::Continue => {
                                schedule.add_unfilled(student.id.clone(), call_type);
                            }
                        }
                    }
                }
            }
        }

        schedule.mentor_loads = mentors
            .iter()
            .map(|m| MentorLoad {
                mentor_id: m.id.clone(),
                call_type: m.call_type,
                load: m.load,
            })
            .collect();

        info!(
            calls = schedule.assignment_count(),
            unfilled = schedule.unfilled.len(),
            "weekly scheduling run finished"
        );

        Ok(schedule)
    }

    /// Builds fresh mentor state from specs, then runs one week.
    ///
    /// # Errors
    /// Any availability-build error, then the errors of [`schedule`].
    ///
    /// [`schedule`]: WeeklyScheduler::schedule
    pub fn schedule_specs(&self, students: &[Student], specs: &[MentorSpec]) -> Result<WeeklySchedule> {
        let mentors = specs
            .iter()
            .map(Mentor::from_spec)
            .collect::<Result<Vec<_>>>()?;
        self.schedule(students, mentors)
    }

    /// Places one call, or returns `None` if every eligible mentor is
    /// exhausted for this student's free weekdays.
    fn place(
        &self,
        student_id: &str,
        call_type: CallType,
        mentors: &mut [Mentor],
        used_days: &mut HashSet<Weekday>,
    ) -> Option<CallAssignment> {
        for idx in rank_mentors(mentors, call_type, self.tie_breaker) {
            let mentor = &mut mentors[idx];

            let found = Weekday::ALL
                .into_iter()
                .filter(|day| !used_days.contains(day))
                .find_map(|day| mentor.availability.pop_earliest(day).map(|slot| (day, slot)));

            if let Some((day, slot)) = found {
                mentor.load += 1;
                used_days.insert(day);
                debug!(
                    student = student_id,
                    mentor = %mentor.id,
                    %day,
                    %slot,
                    %call_type,
                    "assigned call"
                );
                return Some(CallAssignment::new(student_id, mentor.id.as_str(), day, slot, call_type));
            }
        }

        None
    }
}
