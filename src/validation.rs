//! Pre-flight roster validation.
//!
//! Checks a roster before scheduling and reports every problem at once:
//! - Duplicate student or mentor IDs
//! - Zero call durations
//! - Mentor configurations whose availability cannot be built
//! - Call types demanded by students that no mentor offers
//! - Per-type demand exceeding the week's generated slot supply
//!
//! Only duplicate IDs are fatal to a run ([`check_unique_ids`] is enforced by
//! the scheduler). The remaining findings are advisory: supply is counted
//! without the one-call-per-weekday rule, so a roster that passes can still
//! exhaust capacity during the run.

use std::collections::{HashMap, HashSet};

use crate::availability::WeeklyAvailability;
use crate::models::{CallType, MentorSpec, Student};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two students or two mentors share the same ID.
    DuplicateId,
    /// A mentor declares a zero-minute call duration.
    ZeroDuration,
    /// A mentor's availability cannot be built (bad window or break).
    InvalidMentor,
    /// Students require a call type no mentor offers.
    UnservedCallType,
    /// Students require more calls of a type than mentors have slots.
    InsufficientCapacity,
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Checks that student IDs and mentor IDs are each unique.
pub fn check_unique_ids<'a>(
    student_ids: impl IntoIterator<Item = &'a str>,
    mentor_ids: impl IntoIterator<Item = &'a str>,
) -> ValidationResult {
    let mut errors = Vec::new();
    push_duplicates(&mut errors, "student", student_ids);
    push_duplicates(&mut errors, "mentor", mentor_ids);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn push_duplicates<'a>(
    errors: &mut Vec<ValidationError>,
    what: &str,
    ids: impl IntoIterator<Item = &'a str>,
) {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate {what} ID: {id}"),
            ));
        }
    }
}

/// Validates a roster.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_roster(students: &[Student], mentors: &[MentorSpec]) -> ValidationResult {
    let mut errors = match check_unique_ids(
        students.iter().map(|s| s.id.as_str()),
        mentors.iter().map(|m| m.id.as_str()),
    ) {
        Ok(()) => Vec::new(),
        Err(errors) => errors,
    };

    // Slot supply per call type, from mentors whose availability builds
    let mut offered: HashSet<CallType> = HashSet::new();
    let mut supply: HashMap<CallType, usize> = HashMap::new();

    for spec in mentors {
        offered.insert(spec.call_type);

        if spec.duration_minutes == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroDuration,
                format!("Mentor '{}' has a zero-minute call duration", spec.id),
            ));
            continue;
        }

        match WeeklyAvailability::build(spec) {
            Ok(week) => *supply.entry(spec.call_type).or_insert(0) += week.total_slots(),
            Err(e) => errors.push(ValidationError::new(
                ValidationErrorKind::InvalidMentor,
                format!("Mentor '{}' cannot be scheduled: {e}", spec.id),
            )),
        }
    }

    let mut demand: HashMap<CallType, usize> = HashMap::new();
    for student in students {
        for &call_type in &student.requirements {
            *demand.entry(call_type).or_insert(0) += 1;
        }
    }

    for call_type in [CallType::Normal, CallType::Academic] {
        let needed = demand.get(&call_type).copied().unwrap_or(0);
        if needed == 0 {
            continue;
        }

        if !offered.contains(&call_type) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnservedCallType,
                format!("{needed} {call_type} calls required but no {call_type} mentor is declared"),
            ));
            continue;
        }

        let available = supply.get(&call_type).copied().unwrap_or(0);
        if needed > available {
            errors.push(ValidationError::new(
                ValidationErrorKind::InsufficientCapacity,
                format!("{needed} {call_type} calls required but only {available} slots available"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
