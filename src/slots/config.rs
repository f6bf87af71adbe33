//! Slot classification parameters.

use serde::{Deserialize, Serialize};

use crate::error::TimetableError;
use crate::model::ClockTime;

/// How lab sessions map onto timeslots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LabMode {
    /// Two adjacent standard slots form one lab.
    #[default]
    Paired,
    /// One long slot forms one lab.
    LongSlot,
}

/// Rules for deciding slot eligibility.
///
/// # Defaults
///
/// ```
/// use campus_timetable::slots::{LabMode, SlotPolicy};
///
/// let policy = SlotPolicy::default();
/// assert_eq!(policy.lunch_start.to_string(), "13:00");
/// assert_eq!(policy.lunch_end.to_string(), "13:50");
/// assert_eq!((policy.lecture_min_minutes, policy.lecture_max_minutes), (45, 55));
/// assert_eq!(policy.lab_mode, LabMode::Paired);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotPolicy {
    /// Start of the lunch break. Slots starting in `[lunch_start, lunch_end)`
    /// are excluded.
    pub lunch_start: ClockTime,

    /// End of the lunch break. Slots ending in `(lunch_start, lunch_end]`
    /// are excluded.
    pub lunch_end: ClockTime,

    /// Shortest standard slot, in minutes (inclusive).
    pub lecture_min_minutes: u32,

    /// Longest standard slot, in minutes (inclusive).
    pub lecture_max_minutes: u32,

    /// Minimum length of a standalone lab slot in [`LabMode::LongSlot`].
    pub long_lab_minutes: u32,

    pub lab_mode: LabMode,
}

impl Default for SlotPolicy {
    fn default() -> Self {
        Self {
            lunch_start: ClockTime::at(13, 0),
            lunch_end: ClockTime::at(13, 50),
            lecture_min_minutes: 45,
            lecture_max_minutes: 55,
            long_lab_minutes: 95,
            lab_mode: LabMode::Paired,
        }
    }
}

impl SlotPolicy {
    pub fn with_lunch(mut self, start: ClockTime, end: ClockTime) -> Self {
        self.lunch_start = start;
        self.lunch_end = end;
        self
    }

    pub fn with_lecture_band(mut self, min_minutes: u32, max_minutes: u32) -> Self {
        self.lecture_min_minutes = min_minutes;
        self.lecture_max_minutes = max_minutes;
        self
    }

    pub fn with_lab_mode(mut self, mode: LabMode) -> Self {
        self.lab_mode = mode;
        self
    }

    pub fn with_long_lab_minutes(mut self, minutes: u32) -> Self {
        self.long_lab_minutes = minutes;
        self
    }

    pub(crate) fn is_standard_length(&self, minutes: u32) -> bool {
        (self.lecture_min_minutes..=self.lecture_max_minutes).contains(&minutes)
    }

    /// Validates the policy.
    pub fn validate(&self) -> Result<(), TimetableError> {
        if self.lunch_end < self.lunch_start {
            return Err(TimetableError::Config(
                "lunch_end must not precede lunch_start".into(),
            ));
        }
        if self.lecture_min_minutes > self.lecture_max_minutes {
            return Err(TimetableError::Config(
                "lecture_min_minutes exceeds lecture_max_minutes".into(),
            ));
        }
        if self.long_lab_minutes == 0 {
            return Err(TimetableError::Config("long_lab_minutes must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(SlotPolicy::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_band() {
        let policy = SlotPolicy::default().with_lecture_band(60, 40);
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_lunch() {
        let policy = SlotPolicy::default().with_lunch(
            ClockTime::new(14, 0).unwrap(),
            ClockTime::new(13, 0).unwrap(),
        );
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_deserialize_partial() {
        let policy: SlotPolicy =
            serde_json::from_str(r#"{"lab_mode": "LongSlot", "lunch_start": "12:30"}"#).unwrap();
        assert_eq!(policy.lab_mode, LabMode::LongSlot);
        assert_eq!(policy.lunch_start.to_string(), "12:30");
        assert_eq!(policy.lunch_end.to_string(), "13:50");
        assert_eq!(policy.long_lab_minutes, 95);
    }
}
