//! Candidate timetables: the GA individual.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::entities::{CourseId, RoomId};
use crate::ga::{Individual, Score};

/// A lecture occupies one timeslot in one room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LectureAssignment {
    pub room: RoomId,
    /// Position in the run's timeslot sequence.
    pub slot: usize,
}

/// A lab is one double-length session spanning two timeslots.
///
/// In the paired lab mode `second == first + 1` and both share a day. A
/// lab placed on a single long slot has `first == second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LabAssignment {
    pub room: RoomId,
    pub first: usize,
    pub second: usize,
}

impl LabAssignment {
    pub fn paired(room: RoomId, first: usize) -> Self {
        Self {
            room,
            first,
            second: first + 1,
        }
    }

    pub fn single(room: RoomId, slot: usize) -> Self {
        Self {
            room,
            first: slot,
            second: slot,
        }
    }

    pub fn is_single(&self) -> bool {
        self.first == self.second
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionKind {
    Lecture,
    Lab,
}

impl SessionKind {
    /// Teaching hours credited to the teacher's daily tally.
    pub fn hours(self) -> u32 {
        match self {
            SessionKind::Lecture => 1,
            SessionKind::Lab => 2,
        }
    }
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionKind::Lecture => f.write_str("Lecture"),
            SessionKind::Lab => f.write_str("Lab"),
        }
    }
}

/// One scheduled occurrence of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Session {
    Lecture(LectureAssignment),
    Lab(LabAssignment),
}

impl Session {
    pub fn kind(&self) -> SessionKind {
        match self {
            Session::Lecture(_) => SessionKind::Lecture,
            Session::Lab(_) => SessionKind::Lab,
        }
    }
}

/// All sessions placed for one course.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseSessions {
    sessions: Vec<Session>,
}

impl CourseSessions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, session: Session) {
        self.sessions.push(session);
    }

    pub fn lectures(&self) -> impl Iterator<Item = &LectureAssignment> {
        self.sessions.iter().filter_map(|s| match s {
            Session::Lecture(l) => Some(l),
            Session::Lab(_) => None,
        })
    }

    pub fn lectures_mut(&mut self) -> impl Iterator<Item = &mut LectureAssignment> {
        self.sessions.iter_mut().filter_map(|s| match s {
            Session::Lecture(l) => Some(l),
            Session::Lab(_) => None,
        })
    }

    pub fn labs(&self) -> impl Iterator<Item = &LabAssignment> {
        self.sessions.iter().filter_map(|s| match s {
            Session::Lab(l) => Some(l),
            Session::Lecture(_) => None,
        })
    }

    pub fn count(&self, kind: SessionKind) -> usize {
        self.sessions.iter().filter(|s| s.kind() == kind).count()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

/// One complete candidate timetable: course id → placed sessions.
///
/// A course with no placed session has no entry at all. Entries are kept
/// in course-id order so that iteration, and therefore every operator
/// drawing from a seeded generator, is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timetable {
    entries: BTreeMap<CourseId, CourseSessions>,
    fitness: Score,
}

impl Default for Timetable {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
            fitness: Score::MIN,
        }
    }
}

impl Timetable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, course: CourseId) -> Option<&CourseSessions> {
        self.entries.get(&course)
    }

    pub fn get_mut(&mut self, course: CourseId) -> Option<&mut CourseSessions> {
        self.entries.get_mut(&course)
    }

    pub fn contains(&self, course: CourseId) -> bool {
        self.entries.contains_key(&course)
    }

    /// Appends a session, creating the course entry on first use.
    pub fn place(&mut self, course: CourseId, session: Session) {
        self.entries.entry(course).or_default().push(session);
    }

    /// Replaces a course's whole entry.
    pub fn insert(&mut self, course: CourseId, sessions: CourseSessions) {
        self.entries.insert(course, sessions);
    }

    pub fn courses(&self) -> impl Iterator<Item = CourseId> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CourseId, &CourseSessions)> {
        self.entries.iter().map(|(id, s)| (*id, s))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn session_count(&self) -> usize {
        self.entries.values().map(CourseSessions::len).sum()
    }
}

impl Individual for Timetable {
    fn fitness(&self) -> Score {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: Score) {
        self.fitness = fitness;
    }
}
