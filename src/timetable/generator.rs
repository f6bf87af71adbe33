//! Random candidate construction.
//!
//! Labs are placed for every course before any lecture, because a lab
//! needs two free adjacent slots and is the harder of the two to fit.

use std::collections::HashSet;

use rand::Rng;
use serde::Serialize;

use super::problem::TimetableProblem;
use crate::model::{
    CourseId, LabAssignment, LectureAssignment, RoomCategory, Session, SessionKind, TeacherId,
    Timetable,
};
use crate::slots::LabMode;

/// Why a session could not be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnplacedReason {
    /// No room of the needed category exists.
    NoRoom,
    /// Too few eligible slots to hold the session at all.
    NoEligibleSlots,
    /// Every sampled slot was taken or broke a construction rule.
    AttemptsExhausted,
}

/// A session the generator skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnplacedSession {
    pub course_id: CourseId,
    pub kind: SessionKind,
    pub reason: UnplacedReason,
}

/// A freshly generated timetable and the sessions it is missing.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub timetable: Timetable,
    pub unplaced: Vec<UnplacedSession>,
}

/// Per-individual bookkeeping while sampling.
struct Occupancy<'a> {
    used: Vec<bool>,
    lecture_days: HashSet<(Option<TeacherId>, &'a str)>,
    lab_days: HashSet<(CourseId, &'a str)>,
}

impl TimetableProblem {
    /// Builds one random, structurally valid timetable.
    ///
    /// Every session gets up to `max_attempts` random draws. A slot is
    /// never used twice within one candidate. A course gets at most one lab
    /// per day and a teacher at most one lecture per day. Sessions that
    /// cannot be placed are reported in [`Candidate::unplaced`] and left out.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Candidate {
        let mut timetable = Timetable::new();
        let mut unplaced = Vec::new();
        let mut occ = Occupancy {
            used: vec![false; self.slots.len()],
            lecture_days: HashSet::new(),
            lab_days: HashSet::new(),
        };

        for course in &self.courses {
            for _ in 0..course.number_of_labs {
                match self.place_lab(course.id, &mut occ, rng) {
                    Ok(lab) => timetable.place(course.id, Session::Lab(lab)),
                    Err(reason) => unplaced.push(UnplacedSession {
                        course_id: course.id,
                        kind: SessionKind::Lab,
                        reason,
                    }),
                }
            }
        }

        for course in &self.courses {
            for _ in 0..course.number_of_lectures {
                match self.place_lecture(course.teacher_id, &mut occ, rng) {
                    Ok(lecture) => timetable.place(course.id, Session::Lecture(lecture)),
                    Err(reason) => unplaced.push(UnplacedSession {
                        course_id: course.id,
                        kind: SessionKind::Lecture,
                        reason,
                    }),
                }
            }
        }

        Candidate {
            timetable,
            unplaced,
        }
    }

    fn place_lab<'a, R: Rng>(
        &'a self,
        course: CourseId,
        occ: &mut Occupancy<'a>,
        rng: &mut R,
    ) -> Result<LabAssignment, UnplacedReason> {
        let room = self
            .first_room(RoomCategory::Lab)
            .ok_or(UnplacedReason::NoRoom)?;
        let list = self.eligible.lab();
        let span = match self.lab_mode {
            LabMode::Paired => 2,
            LabMode::LongSlot => 1,
        };
        if list.len() < span {
            return Err(UnplacedReason::NoEligibleSlots);
        }

        for _ in 0..self.max_attempts {
            let pos = rng.random_range(0..=list.len() - span);
            let first = list[pos];
            let second = list[pos + span - 1];
            let day = self.slots[first].day.as_str();

            let adjacent = second == first + (span - 1) && self.slots[second].day == day;
            if !adjacent || occ.used[first] || occ.used[second] {
                continue;
            }
            if occ.lab_days.contains(&(course, day)) {
                continue;
            }

            occ.used[first] = true;
            occ.used[second] = true;
            occ.lab_days.insert((course, day));
            return Ok(LabAssignment {
                room,
                first,
                second,
            });
        }

        Err(UnplacedReason::AttemptsExhausted)
    }

    fn place_lecture<'a, R: Rng>(
        &'a self,
        teacher: Option<TeacherId>,
        occ: &mut Occupancy<'a>,
        rng: &mut R,
    ) -> Result<LectureAssignment, UnplacedReason> {
        let room = self
            .first_room(RoomCategory::Theatre)
            .ok_or(UnplacedReason::NoRoom)?;
        let list = self.eligible.theatre();
        if list.is_empty() {
            return Err(UnplacedReason::NoEligibleSlots);
        }

        for _ in 0..self.max_attempts {
            let slot = list[rng.random_range(0..list.len())];
            let day = self.slots[slot].day.as_str();
            if occ.used[slot] || occ.lecture_days.contains(&(teacher, day)) {
                continue;
            }

            occ.used[slot] = true;
            occ.lecture_days.insert((teacher, day));
            return Ok(LectureAssignment { room, slot });
        }

        Err(UnplacedReason::AttemptsExhausted)
    }
}
