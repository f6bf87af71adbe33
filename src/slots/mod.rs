//! Timeslot classification.
//!
//! Decides which timeslots each [`RoomCategory`](crate::model::RoomCategory)
//! may use. A slot is usable when it avoids the lunch window and its length
//! matches the session-duration rules of [`SlotPolicy`].
//!
//! # Lab modes
//!
//! - [`LabMode::Paired`] (default): a lab is a double session built from two
//!   chronologically adjacent standard slots, so the lab list equals the
//!   lecture list.
//! - [`LabMode::LongSlot`]: a reduced mode where any slot of at least
//!   [`SlotPolicy::long_lab_minutes`] is a standalone lab slot.

mod classifier;
mod config;

pub use classifier::{classify, overlaps_lunch, parse_timeslots, EligibleSlots};
pub use config::{LabMode, SlotPolicy};
