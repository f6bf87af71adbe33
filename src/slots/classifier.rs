//! Eligibility lists per room category.

use super::config::{LabMode, SlotPolicy};
use crate::error::TimetableError;
use crate::model::{RoomCategory, Timeslot, TimeslotRecord};

/// Timeslot positions usable by each room category, in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EligibleSlots {
    lab: Vec<usize>,
    theatre: Vec<usize>,
}

impl EligibleSlots {
    pub fn lab(&self) -> &[usize] {
        &self.lab
    }

    pub fn theatre(&self) -> &[usize] {
        &self.theatre
    }

    pub fn for_category(&self, category: RoomCategory) -> &[usize] {
        match category {
            RoomCategory::Lab => &self.lab,
            RoomCategory::Theatre => &self.theatre,
        }
    }

    pub fn contains(&self, category: RoomCategory, slot: usize) -> bool {
        self.for_category(category).binary_search(&slot).is_ok()
    }
}

/// Parses every stored timeslot, failing on the first malformed one.
pub fn parse_timeslots(records: &[TimeslotRecord]) -> Result<Vec<Timeslot>, TimetableError> {
    records.iter().map(Timeslot::parse).collect()
}

/// Whether a slot touches the lunch window.
///
/// Excluded when the start falls in `[lunch_start, lunch_end)`, the end
/// falls in `(lunch_start, lunch_end]`, or the slot spans the whole window.
pub fn overlaps_lunch(slot: &Timeslot, policy: &SlotPolicy) -> bool {
    let starts_inside = policy.lunch_start <= slot.start && slot.start < policy.lunch_end;
    let ends_inside = policy.lunch_start < slot.end && slot.end <= policy.lunch_end;
    let spans = slot.start < policy.lunch_start && slot.end > policy.lunch_end;
    starts_inside || ends_inside || spans
}

/// Partitions slot positions into per-category eligibility lists.
pub fn classify(slots: &[Timeslot], policy: &SlotPolicy) -> EligibleSlots {
    let mut eligible = EligibleSlots::default();

    for (idx, slot) in slots.iter().enumerate() {
        if overlaps_lunch(slot, policy) {
            continue;
        }
        let minutes = slot.duration_minutes();
        let standard = policy.is_standard_length(minutes);

        if standard {
            eligible.theatre.push(idx);
        }
        match policy.lab_mode {
            LabMode::Paired if standard => eligible.lab.push(idx),
            LabMode::LongSlot if minutes >= policy.long_lab_minutes => eligible.lab.push(idx),
            _ => {}
        }
    }

    eligible
}
