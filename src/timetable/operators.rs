//! Crossover and mutation for timetables.

use std::collections::BTreeSet;

use rand::Rng;

use super::problem::TimetableProblem;
use crate::model::Timetable;

/// Per-course uniform crossover.
///
/// For every course id held by either parent, the child takes that
/// course's whole entry from one parent picked with equal probability.
/// If the picked parent has no entry for the course, neither does the
/// child. Entries are never split.
pub fn course_crossover<R: Rng>(
    parent1: &Timetable,
    parent2: &Timetable,
    rng: &mut R,
) -> Timetable {
    let courses: BTreeSet<_> = parent1.courses().chain(parent2.courses()).collect();
    let mut child = Timetable::new();

    for course in courses {
        let donor = if rng.random_bool(0.5) { parent1 } else { parent2 };
        if let Some(entry) = donor.get(course) {
            child.insert(course, entry.clone());
        }
    }

    child
}

impl TimetableProblem {
    /// Reassigns lectures at random.
    ///
    /// Each course present in the timetable is picked with probability
    /// `mutation_rate`; every lecture of a picked course moves to a random
    /// slot from its room's eligible list, or from all slots when that list
    /// is empty. Labs are left alone.
    pub fn mutate_lectures<R: Rng>(&self, timetable: &mut Timetable, rng: &mut R) {
        let total_slots = self.slots.len();

        for course in &self.courses {
            let Some(entry) = timetable.get_mut(course.id) else {
                continue;
            };
            if !rng.random_bool(self.mutation_rate) {
                continue;
            }

            for lecture in entry.lectures_mut() {
                let eligible = self
                    .category_of(lecture.room)
                    .map(|c| self.eligible.for_category(c))
                    .unwrap_or(&[]);
                lecture.slot = if !eligible.is_empty() {
                    eligible[rng.random_range(0..eligible.len())]
                } else if total_slots > 0 {
                    rng.random_range(0..total_slots)
                } else {
                    lecture.slot
                };
            }
        }
    }
}
