#![allow(dead_code)]

use campus_timetable::ga::GaConfig;
use campus_timetable::model::{
    ClockTime, Course, Room, RoomCategory, Teacher, TimeslotRecord, TimetableInput,
};
use campus_timetable::SolveOptions;

pub const DAYS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

/// Fourteen 50-minute slots per weekday, back to back from 08:00.
pub fn week_timeslots() -> Vec<TimeslotRecord> {
    let mut records = Vec::new();
    for day in DAYS {
        for i in 0..14u32 {
            let start = ClockTime::from_minutes(8 * 60 + i * 50).unwrap();
            let end = ClockTime::from_minutes(start.minutes() + 50).unwrap();
            let id = records.len() as u32 + 1;
            records.push(TimeslotRecord::new(id, day, format!("{start} - {end}")));
        }
    }
    records
}

/// The same week written without zero padding or spaces, e.g. `8:00-8:50`.
pub fn compact_week_timeslots() -> Vec<TimeslotRecord> {
    week_timeslots()
        .into_iter()
        .map(|mut record| {
            record.slot = record
                .slot
                .split(" - ")
                .map(|t| t.strip_prefix('0').unwrap_or(t))
                .collect::<Vec<_>>()
                .join("-");
            record
        })
        .collect()
}

pub fn week_input() -> TimetableInput {
    TimetableInput {
        teachers: vec![
            Teacher::new(1, "Ada", "Lovelace"),
            Teacher::new(2, "Alan", "Turing"),
            Teacher::new(3, "Grace", "Hopper"),
        ],
        courses: vec![
            Course::new(1, "Calculus", Some(1)).with_lectures(3),
            Course::new(2, "Computability", Some(2)).with_lectures(2).with_labs(1),
            Course::new(3, "Compilers", Some(3)).with_lectures(2).with_labs(2),
            Course::new(4, "Databases", Some(1)).with_lectures(1).with_labs(1),
        ],
        rooms: vec![
            Room::new(1, "LT1", RoomCategory::Theatre),
            Room::new(2, "Lab A", RoomCategory::Lab),
        ],
        timeslots: week_timeslots(),
        ..Default::default()
    }
}

pub fn quick_options(seed: u64) -> SolveOptions {
    SolveOptions {
        ga: GaConfig::default()
            .with_population_size(20)
            .with_max_generations(15)
            .with_seed(seed),
        ..Default::default()
    }
}
