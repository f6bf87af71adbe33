//! Timetabling problem definition.
//!
//! Bridges the domain records (courses, rooms, timeslots) to the GA engine.

use std::collections::HashMap;

use log::trace;
use rand::Rng;

use super::penalties::Penalties;
use crate::ga::{GaProblem, Score};
use crate::model::{Constraints, Course, Room, RoomCategory, RoomId, Timeslot, Timetable};
use crate::slots::{classify, EligibleSlots, LabMode, SlotPolicy};

/// GA problem definition for weekly timetabling.
///
/// # Example
/// ```no_run
/// use campus_timetable::ga::{GaConfig, GaRunner};
/// use campus_timetable::model::{Course, Room, Timeslot};
/// use campus_timetable::slots::SlotPolicy;
/// use campus_timetable::timetable::TimetableProblem;
///
/// let courses: Vec<Course> = vec![/* ... */];
/// let rooms: Vec<Room> = vec![/* ... */];
/// let slots: Vec<Timeslot> = vec![/* ... */];
/// let problem = TimetableProblem::new(&courses, &rooms, &slots, &SlotPolicy::default());
/// let result = GaRunner::run(&problem, &GaConfig::default()).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct TimetableProblem {
    pub(super) courses: Vec<Course>,
    pub(super) rooms: Vec<Room>,
    pub(super) slots: Vec<Timeslot>,
    pub(super) eligible: EligibleSlots,
    pub(super) room_categories: HashMap<RoomId, RoomCategory>,
    pub(super) lab_mode: LabMode,
    pub(super) constraints: Constraints,
    pub(super) penalties: Penalties,
    pub(super) mutation_rate: f64,
    pub(super) max_attempts: usize,
}

impl TimetableProblem {
    /// Creates a problem and classifies its timeslots under `policy`.
    ///
    /// `slots` must be in day-major, time-ascending order; see
    /// [`validate_input`](crate::validation::validate_input).
    pub fn new(
        courses: &[Course],
        rooms: &[Room],
        slots: &[Timeslot],
        policy: &SlotPolicy,
    ) -> Self {
        Self {
            courses: courses.to_vec(),
            rooms: rooms.to_vec(),
            slots: slots.to_vec(),
            eligible: classify(slots, policy),
            room_categories: rooms.iter().map(|r| (r.id, r.category)).collect(),
            lab_mode: policy.lab_mode,
            constraints: Constraints::default(),
            penalties: Penalties::default(),
            mutation_rate: 0.1,
            max_attempts: 50,
        }
    }

    pub fn with_constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = constraints;
        self
    }

    pub fn with_penalties(mut self, penalties: Penalties) -> Self {
        self.penalties = penalties;
        self
    }

    /// Sets the per-course lecture mutation probability (clamped to 0–1).
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the random draws per session before giving up on it.
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts;
        self
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn slots(&self) -> &[Timeslot] {
        &self.slots
    }

    pub fn eligible(&self) -> &EligibleSlots {
        &self.eligible
    }

    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    pub fn penalties(&self) -> &Penalties {
        &self.penalties
    }

    pub(super) fn category_of(&self, room: RoomId) -> Option<RoomCategory> {
        self.room_categories.get(&room).copied()
    }

    /// First room of a category; rooms of one category are interchangeable.
    pub(super) fn first_room(&self, category: RoomCategory) -> Option<RoomId> {
        self.rooms
            .iter()
            .find(|r| r.category == category)
            .map(|r| r.id)
    }
}

impl GaProblem for TimetableProblem {
    type Individual = Timetable;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Timetable {
        let candidate = self.generate(rng);
        for miss in &candidate.unplaced {
            trace!(
                "course {}: {} not placed ({:?})",
                miss.course_id,
                miss.kind,
                miss.reason
            );
        }
        candidate.timetable
    }

    fn evaluate(&self, individual: &Timetable) -> Score {
        self.score(individual)
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &Timetable,
        parent2: &Timetable,
        rng: &mut R,
    ) -> Timetable {
        super::operators::course_crossover(parent1, parent2, rng)
    }

    fn mutate<R: Rng>(&self, individual: &mut Timetable, rng: &mut R) {
        self.mutate_lectures(individual, rng);
    }
}
