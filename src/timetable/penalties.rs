//! Fitness weights.

use serde::{Deserialize, Serialize};

use super::fitness::ViolationKind;
use crate::ga::Score;

/// Base score and the amount each violation subtracts from it.
///
/// # Defaults
///
/// | Violation | Penalty |
/// |---|---|
/// | course unplaced or without teacher | 50 |
/// | room already used in that slot | 20 |
/// | slot not eligible for the room | 25 |
/// | teacher over daily hours | 10 |
/// | second lecture of a teacher that day | 100 |
/// | second lab of a course that day | 80 |
/// | sessions `min_gap_minutes` or less apart | 20 |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Penalties {
    pub base: Score,
    pub missing_course: Score,
    pub room_clash: Score,
    pub ineligible_slot: Score,
    pub hours_exceeded: Score,
    pub repeated_lecture: Score,
    pub repeated_lab: Score,
    pub short_gap: Score,
    /// Gaps of this many minutes or fewer between a teacher's consecutive
    /// sessions count as [`ViolationKind::ShortGap`].
    pub min_gap_minutes: i64,
}

impl Default for Penalties {
    fn default() -> Self {
        Self {
            base: 1000,
            missing_course: 50,
            room_clash: 20,
            ineligible_slot: 25,
            hours_exceeded: 10,
            repeated_lecture: 100,
            repeated_lab: 80,
            short_gap: 20,
            min_gap_minutes: 10,
        }
    }
}

impl Penalties {
    pub fn weight(&self, kind: ViolationKind) -> Score {
        match kind {
            ViolationKind::MissingCourse => self.missing_course,
            ViolationKind::RoomClash => self.room_clash,
            ViolationKind::IneligibleSlot => self.ineligible_slot,
            ViolationKind::HoursExceeded => self.hours_exceeded,
            ViolationKind::RepeatedLecture => self.repeated_lecture,
            ViolationKind::RepeatedLab => self.repeated_lab,
            ViolationKind::ShortGap => self.short_gap,
        }
    }
}
