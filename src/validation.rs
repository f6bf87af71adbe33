//! Input validation for timetabling runs.
//!
//! Checks structural integrity of the input records before optimization.
//! Detects:
//! - Duplicate IDs
//! - Courses referencing unknown teachers
//! - Timeslots that do not end after they start
//! - Timeslots out of day-major, time-ascending order
//! - A zero daily-hours limit
//!
//! Lab pairing relies on "position + 1" meaning "next slot the same day",
//! so the ordering check is what keeps generated labs meaningful.

use std::collections::HashSet;
use std::hash::Hash;

use serde::Serialize;

use crate::model::{Constraints, Course, Room, Teacher, Timeslot};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidationErrorKind {
    /// Two entities of one kind share an ID.
    DuplicateId,
    /// A course references a teacher that doesn't exist.
    UnknownTeacher,
    /// A timeslot's end is not after its start.
    EmptyTimeslot,
    /// A day's timeslots are split up, or not in ascending start order.
    UnorderedTimeslots,
    /// A constraint value is unusable.
    InvalidConstraint,
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for a timetabling run.
///
/// Checks:
/// 1. No duplicate teacher, course, room or timeslot IDs
/// 2. Every course teacher reference points to an existing teacher
/// 3. Every timeslot ends after it starts
/// 4. Each day's timeslots are contiguous and strictly ascending by start
/// 5. `max_hours_per_day` is positive
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    teachers: &[Teacher],
    courses: &[Course],
    rooms: &[Room],
    timeslots: &[Timeslot],
    constraints: &Constraints,
) -> ValidationResult {
    let mut errors = Vec::new();

    let teacher_ids = check_unique(teachers.iter().map(|t| t.id), "teacher", &mut errors);
    check_unique(courses.iter().map(|c| c.id), "course", &mut errors);
    check_unique(rooms.iter().map(|r| r.id), "room", &mut errors);
    check_unique(timeslots.iter().map(|t| t.id), "timeslot", &mut errors);

    for course in courses {
        if let Some(teacher) = course.teacher_id {
            if !teacher_ids.contains(&teacher) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownTeacher,
                    format!(
                        "Course {} references unknown teacher {}",
                        course.id, teacher
                    ),
                ));
            }
        }
    }

    for slot in timeslots {
        if slot.end <= slot.start {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyTimeslot,
                format!(
                    "Timeslot {} ends at {} but starts at {}",
                    slot.id, slot.end, slot.start
                ),
            ));
        }
    }

    errors.extend(check_order(timeslots));

    if constraints.max_hours_per_day == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidConstraint,
            "max_hours_per_day must be positive",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Collects IDs, reporting each repeat once per extra occurrence.
fn check_unique<K: Eq + Hash + std::fmt::Display>(
    ids: impl Iterator<Item = K>,
    entity: &str,
    errors: &mut Vec<ValidationError>,
) -> HashSet<K> {
    let mut seen = HashSet::new();
    for id in ids {
        let message = format!("Duplicate {entity} ID: {id}");
        if !seen.insert(id) {
            errors.push(ValidationError::new(ValidationErrorKind::DuplicateId, message));
        }
    }
    seen
}

/// Day-major, time-ascending check.
fn check_order(timeslots: &[Timeslot]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut finished_days: HashSet<&str> = HashSet::new();

    for pair in timeslots.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if prev.day != next.day {
            finished_days.insert(prev.day.as_str());
            if finished_days.contains(next.day.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnorderedTimeslots,
                    format!(
                        "Timeslot {} on {} appears after that day's block has ended",
                        next.id, next.day
                    ),
                ));
            }
        } else if next.start <= prev.start {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnorderedTimeslots,
                format!(
                    "Timeslot {} on {} starts at {}, not after timeslot {} at {}",
                    next.id, next.day, next.start, prev.id, prev.start
                ),
            ));
        }
    }

    errors
}
