//! Error types surfaced by a timetabling run.

use serde::Serialize;
use thiserror::Error;

use crate::validation::ValidationError;

/// Errors that abort a run. No partial timetable is produced.
#[derive(Debug, Error)]
pub enum TimetableError {
    /// A timeslot string could not be read as `HH:MM - HH:MM`.
    #[error("cannot parse '{input}': {reason}")]
    Parse { input: String, reason: String },

    /// The input records failed structural validation.
    #[error("invalid input: {}", summarize(.0))]
    Validation(Vec<ValidationError>),

    /// A configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl TimetableError {
    pub(crate) fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        TimetableError::Parse {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

// Callers hand errors straight to a JSON boundary as plain messages.
impl Serialize for TimetableError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_validation_message_joins_all_errors() {
        let err = TimetableError::Validation(vec![
            ValidationError::new(ValidationErrorKind::DuplicateId, "Duplicate room ID: 3"),
            ValidationError::new(
                ValidationErrorKind::UnknownTeacher,
                "Course 7 references unknown teacher 9",
            ),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid input: Duplicate room ID: 3; Course 7 references unknown teacher 9"
        );
    }

    #[test]
    fn test_serializes_as_message() {
        let err = TimetableError::parse("8:00 to 9:00", "expected 'HH:MM - HH:MM'");
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, "\"cannot parse '8:00 to 9:00': expected 'HH:MM - HH:MM'\"");
    }
}
