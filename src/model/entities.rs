//! Input entities as supplied by the calling layer.

use serde::{Deserialize, Serialize};

use super::time::ClockTime;
use crate::error::TimetableError;

pub type TeacherId = u32;
pub type CourseId = u32;
pub type RoomId = u32;
pub type TimeslotId = u32;

/// A teacher. Only the display name matters to the optimizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: TeacherId,
    pub first_name: String,
    pub last_name: String,
}

impl Teacher {
    pub fn new(id: TeacherId, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// `first_name last_name`.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Room category. Determines which timeslots a room may legally use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RoomCategory {
    Lab,
    Theatre,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    #[serde(rename = "type")]
    pub category: RoomCategory,
}

impl Room {
    pub fn new(id: RoomId, name: impl Into<String>, category: RoomCategory) -> Self {
        Self {
            id,
            name: name.into(),
            category,
        }
    }
}

/// A course and the number of weekly sessions it needs.
///
/// A course without a teacher can still be placed, but always costs
/// fitness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    #[serde(default)]
    pub teacher_id: Option<TeacherId>,
    #[serde(default)]
    pub number_of_lectures: u32,
    #[serde(default)]
    pub number_of_labs: u32,
}

impl Course {
    pub fn new(id: CourseId, name: impl Into<String>, teacher_id: Option<TeacherId>) -> Self {
        Self {
            id,
            name: name.into(),
            teacher_id,
            number_of_lectures: 0,
            number_of_labs: 0,
        }
    }

    pub fn with_lectures(mut self, n: u32) -> Self {
        self.number_of_lectures = n;
        self
    }

    pub fn with_labs(mut self, n: u32) -> Self {
        self.number_of_labs = n;
        self
    }
}

/// A timeslot as stored by the calling layer: `slot` is `"HH:MM - HH:MM"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeslotRecord {
    pub id: TimeslotId,
    pub day: String,
    pub slot: String,
}

impl TimeslotRecord {
    pub fn new(id: TimeslotId, day: impl Into<String>, slot: impl Into<String>) -> Self {
        Self {
            id,
            day: day.into(),
            slot: slot.into(),
        }
    }
}

/// A parsed timeslot.
///
/// Within a run, timeslots are addressed by their position in the input
/// sequence, which is day-major and time-ascending. The stored slot string
/// is kept verbatim for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeslot {
    pub id: TimeslotId,
    pub day: String,
    pub start: ClockTime,
    pub end: ClockTime,
    label: String,
}

impl Timeslot {
    /// Builds a slot labelled `"HH:MM - HH:MM"`.
    pub fn new(id: TimeslotId, day: impl Into<String>, start: ClockTime, end: ClockTime) -> Self {
        Self {
            id,
            day: day.into(),
            start,
            end,
            label: format!("{start} - {end}"),
        }
    }

    /// Parses a stored record.
    ///
    /// # Errors
    /// [`TimetableError::Parse`] when `slot` is not two `HH:MM` tokens
    /// separated by `-`.
    pub fn parse(record: &TimeslotRecord) -> Result<Self, TimetableError> {
        let (start, end) = parse_slot(&record.slot)?;
        Ok(Self {
            label: record.slot.clone(),
            ..Self::new(record.id, record.day.clone(), start, end)
        })
    }

    pub fn duration_minutes(&self) -> u32 {
        self.end.minutes_since(self.start)
    }

    /// The slot string as stored.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Start token of the stored string, trimmed.
    pub fn start_label(&self) -> &str {
        self.label_parts().0
    }

    /// End token of the stored string, trimmed.
    pub fn end_label(&self) -> &str {
        self.label_parts().1
    }

    // Both constructors leave exactly one '-' in the label.
    fn label_parts(&self) -> (&str, &str) {
        let (start, end) = self.label.split_once('-').unwrap_or((self.label.as_str(), ""));
        (start.trim(), end.trim())
    }
}

/// Splits `"HH:MM - HH:MM"` into start and end.
pub(crate) fn parse_slot(slot: &str) -> Result<(ClockTime, ClockTime), TimetableError> {
    let mut parts = slot.split('-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(start), Some(end), None) => {
            let start = start
                .parse::<ClockTime>()
                .map_err(|e| TimetableError::parse(slot, e.to_string()))?;
            let end = end
                .parse::<ClockTime>()
                .map_err(|e| TimetableError::parse(slot, e.to_string()))?;
            Ok((start, end))
        }
        _ => Err(TimetableError::parse(slot, "expected 'HH:MM - HH:MM'")),
    }
}

/// Run-wide scheduling limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraints {
    #[serde(default = "default_max_hours_per_day")]
    pub max_hours_per_day: u32,
}

fn default_max_hours_per_day() -> u32 {
    5
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            max_hours_per_day: default_max_hours_per_day(),
        }
    }
}

/// Everything a run needs, already materialized from storage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimetableInput {
    #[serde(default)]
    pub teachers: Vec<Teacher>,
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub timeslots: Vec<TimeslotRecord>,
    #[serde(default)]
    pub constraints: Constraints,
}
