//! Domain records for timetabling.
//!
//! - **Input records**: [`Teacher`], [`Course`], [`Room`], [`TimeslotRecord`],
//!   [`Constraints`], bundled as [`TimetableInput`]
//! - **Parsed slots**: [`Timeslot`] with [`ClockTime`] start/end
//! - **Candidate timetable**: [`Timetable`] mapping each course to its
//!   [`Session`]s

mod entities;
mod time;
mod timetable;

pub use entities::{
    Constraints, Course, CourseId, Room, RoomCategory, RoomId, Teacher, TeacherId, Timeslot,
    TimeslotId, TimeslotRecord, TimetableInput,
};
pub use time::ClockTime;
pub use timetable::{
    CourseSessions, LabAssignment, LectureAssignment, Session, SessionKind, Timetable,
};
