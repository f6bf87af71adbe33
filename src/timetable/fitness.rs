//! Penalty-based timetable scoring.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Serialize;

use super::problem::TimetableProblem;
use crate::ga::Score;
use crate::model::{ClockTime, CourseId, RoomId, SessionKind, TeacherId, Timetable};

/// A rule broken by a timetable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ViolationKind {
    /// The course has no placed session, or no teacher.
    MissingCourse,
    /// Another session already holds this room in this slot.
    RoomClash,
    /// The slot is not eligible for the room's category.
    IneligibleSlot,
    /// The teacher's hours for the day went past the daily limit.
    HoursExceeded,
    /// The teacher already lectures on this day.
    RepeatedLecture,
    /// The course already has a lab on this day.
    RepeatedLab,
    /// Two of the teacher's sessions on a day are too close together.
    ShortGap,
}

/// One occurrence of a broken rule, attributed to a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub kind: ViolationKind,
    pub course_id: CourseId,
}

struct Interval {
    start: ClockTime,
    end: ClockTime,
    course: CourseId,
}

impl TimetableProblem {
    /// Scores a timetable: the base score minus every violation's penalty.
    pub fn score(&self, timetable: &Timetable) -> Score {
        self.violations(timetable)
            .iter()
            .fold(self.penalties.base, |score, v| {
                score - self.penalties.weight(v.kind)
            })
    }

    /// Lists every violation in `timetable`.
    ///
    /// Courses are walked in input order, lectures before labs. Room,
    /// eligibility, hour and repetition checks run per session as it is
    /// visited; the gap check runs once all sessions are collected.
    pub fn violations(&self, timetable: &Timetable) -> Vec<Violation> {
        let max_hours = self.constraints.max_hours_per_day;
        let mut found = Vec::new();

        let mut room_usage: HashSet<(RoomId, usize)> = HashSet::new();
        let mut day_hours: HashMap<(TeacherId, &str), u32> = HashMap::new();
        let mut lecture_days: HashSet<(TeacherId, &str)> = HashSet::new();
        let mut lab_days: HashSet<(TeacherId, &str, CourseId)> = HashSet::new();
        let mut intervals: BTreeMap<(TeacherId, &str), Vec<Interval>> = BTreeMap::new();

        for course in &self.courses {
            let mut flag = |kind| {
                found.push(Violation {
                    kind,
                    course_id: course.id,
                })
            };

            let (Some(entry), Some(teacher)) = (timetable.get(course.id), course.teacher_id) else {
                flag(ViolationKind::MissingCourse);
                continue;
            };

            for lecture in entry.lectures() {
                let Some(slot) = self.slots.get(lecture.slot) else {
                    flag(ViolationKind::IneligibleSlot);
                    continue;
                };
                let day = slot.day.as_str();

                if !room_usage.insert((lecture.room, lecture.slot)) {
                    flag(ViolationKind::RoomClash);
                }
                if !self.is_eligible(lecture.room, lecture.slot) {
                    flag(ViolationKind::IneligibleSlot);
                }

                let hours = day_hours.entry((teacher, day)).or_insert(0);
                *hours += SessionKind::Lecture.hours();
                if *hours > max_hours {
                    flag(ViolationKind::HoursExceeded);
                }

                if !lecture_days.insert((teacher, day)) {
                    flag(ViolationKind::RepeatedLecture);
                }

                intervals.entry((teacher, day)).or_default().push(Interval {
                    start: slot.start,
                    end: slot.end,
                    course: course.id,
                });
            }

            for lab in entry.labs() {
                let (Some(first), Some(second)) =
                    (self.slots.get(lab.first), self.slots.get(lab.second))
                else {
                    flag(ViolationKind::IneligibleSlot);
                    continue;
                };
                let day = first.day.as_str();

                let first_taken = !room_usage.insert((lab.room, lab.first));
                let second_taken = !room_usage.insert((lab.room, lab.second)) && !lab.is_single();
                if first_taken || second_taken {
                    flag(ViolationKind::RoomClash);
                }
                if !self.is_eligible(lab.room, lab.first)
                    || !self.is_eligible(lab.room, lab.second)
                {
                    flag(ViolationKind::IneligibleSlot);
                }

                let hours = day_hours.entry((teacher, day)).or_insert(0);
                *hours += SessionKind::Lab.hours();
                if *hours > max_hours {
                    flag(ViolationKind::HoursExceeded);
                }

                if !lab_days.insert((teacher, day, course.id)) {
                    flag(ViolationKind::RepeatedLab);
                }

                intervals.entry((teacher, day)).or_default().push(Interval {
                    start: first.start,
                    end: second.end,
                    course: course.id,
                });
            }
        }

        let min_gap = self.penalties.min_gap_minutes;
        for day in intervals.values_mut() {
            day.sort_by_key(|i| (i.start, i.end));
            for pair in day.windows(2) {
                let gap = pair[1].start.minutes() as i64 - pair[0].end.minutes() as i64;
                if gap <= min_gap {
                    found.push(Violation {
                        kind: ViolationKind::ShortGap,
                        course_id: pair[1].course,
                    });
                }
            }
        }

        found
    }

    fn is_eligible(&self, room: RoomId, slot: usize) -> bool {
        self.category_of(room)
            .is_some_and(|category| self.eligible.contains(category, slot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Constraints, Course, LabAssignment, LectureAssignment, Room, RoomCategory, Session,
        Timeslot,
    };
    use crate::slots::SlotPolicy;

    const THEATRE: RoomId = 1;
    const LAB: RoomId = 2;

    /// Monday 08:00..12:10 in 50-minute steps, then 13:00 (lunch), 13:50.
    fn monday() -> Vec<Timeslot> {
        let starts = [(8, 0), (8, 50), (9, 40), (10, 30), (11, 20), (13, 0), (13, 50)];
        starts
            .iter()
            .enumerate()
            .map(|(i, &(h, m))| {
                let start = ClockTime::new(h, m).unwrap();
                let end = ClockTime::from_minutes(start.minutes() + 50).unwrap();
                Timeslot::new(i as u32, "Monday", start, end)
            })
            .collect()
    }

    fn problem(courses: Vec<Course>) -> TimetableProblem {
        let rooms = vec![
            Room::new(THEATRE, "LT1", RoomCategory::Theatre),
            Room::new(LAB, "Lab A", RoomCategory::Lab),
        ];
        TimetableProblem::new(&courses, &rooms, &monday(), &SlotPolicy::default())
    }

    fn lecture(slot: usize) -> Session {
        Session::Lecture(LectureAssignment {
            room: THEATRE,
            slot,
        })
    }

    fn kinds(p: &TimetableProblem, t: &Timetable) -> Vec<ViolationKind> {
        p.violations(t).into_iter().map(|v| v.kind).collect()
    }

    #[test]
    fn test_clean_timetable_scores_base() {
        let p = problem(vec![
            Course::new(1, "Algebra", Some(1)).with_lectures(1),
            Course::new(2, "Physics", Some(2)).with_labs(1),
        ]);
        let mut t = Timetable::new();
        t.place(1, lecture(0));
        t.place(2, Session::Lab(LabAssignment::paired(LAB, 2)));
        assert!(p.violations(&t).is_empty());
        assert_eq!(p.score(&t), 1000);
    }

    #[test]
    fn test_missing_entry_and_null_teacher() {
        let p = problem(vec![
            Course::new(1, "Algebra", Some(1)).with_lectures(1),
            Course::new(2, "Orphan", None).with_lectures(1),
        ]);
        let mut t = Timetable::new();
        t.place(2, lecture(0));
        assert_eq!(
            p.violations(&t),
            vec![
                Violation {
                    kind: ViolationKind::MissingCourse,
                    course_id: 1
                },
                Violation {
                    kind: ViolationKind::MissingCourse,
                    course_id: 2
                },
            ]
        );
        assert_eq!(p.score(&t), 900);
    }

    #[test]
    fn test_shared_slot_same_teacher() {
        let p = problem(vec![
            Course::new(1, "Algebra", Some(1)).with_lectures(1),
            Course::new(2, "Geometry", Some(1)).with_lectures(1),
        ]);
        let mut t = Timetable::new();
        t.place(1, lecture(0));
        t.place(2, lecture(0));
        assert_eq!(
            kinds(&p, &t),
            vec![
                ViolationKind::RoomClash,
                ViolationKind::RepeatedLecture,
                ViolationKind::ShortGap,
            ]
        );
        assert_eq!(p.score(&t), 1000 - 20 - 100 - 20);
    }

    #[test]
    fn test_back_to_back_sessions_are_short_gaps() {
        let p = problem(vec![
            Course::new(1, "Algebra", Some(1)).with_lectures(1),
            Course::new(2, "Physics", Some(1)).with_labs(1),
        ]);
        let mut t = Timetable::new();
        t.place(1, lecture(0));
        // 08:50-10:30 starts right as the lecture ends.
        t.place(2, Session::Lab(LabAssignment::paired(LAB, 1)));
        assert_eq!(kinds(&p, &t), vec![ViolationKind::ShortGap]);

        let mut spaced = Timetable::new();
        spaced.place(1, lecture(0));
        spaced.place(2, Session::Lab(LabAssignment::paired(LAB, 2)));
        assert!(p.violations(&spaced).is_empty());
    }

    #[test]
    fn test_ineligible_slot_and_wrong_room() {
        let p = problem(vec![Course::new(1, "Algebra", Some(1)).with_lectures(1)]);

        // Lunch slot.
        let mut t = Timetable::new();
        t.place(1, lecture(5));
        assert_eq!(kinds(&p, &t), vec![ViolationKind::IneligibleSlot]);

        // Unknown room.
        let mut t = Timetable::new();
        t.place(1, Session::Lecture(LectureAssignment { room: 99, slot: 0 }));
        assert_eq!(kinds(&p, &t), vec![ViolationKind::IneligibleSlot]);
    }

    #[test]
    fn test_daily_hours_limit() {
        let courses = vec![
            Course::new(1, "Algebra", Some(1)).with_lectures(1),
            Course::new(2, "Physics", Some(1)).with_labs(1),
        ];
        let p = problem(courses).with_constraints(Constraints {
            max_hours_per_day: 2,
        });
        let mut t = Timetable::new();
        t.place(1, lecture(0));
        t.place(2, Session::Lab(LabAssignment::paired(LAB, 2)));
        // 1 + 2 = 3 hours against a limit of 2.
        assert_eq!(kinds(&p, &t), vec![ViolationKind::HoursExceeded]);
        assert_eq!(p.score(&t), 990);
    }

    #[test]
    fn test_repeated_lab_same_day() {
        let p = problem(vec![Course::new(1, "Physics", Some(1)).with_labs(2)]);
        let mut t = Timetable::new();
        t.place(1, Session::Lab(LabAssignment::paired(LAB, 0)));
        t.place(1, Session::Lab(LabAssignment::paired(LAB, 3)));
        assert_eq!(kinds(&p, &t), vec![ViolationKind::RepeatedLab]);
    }

    #[test]
    fn test_lab_clash_counts_once() {
        let p = problem(vec![
            Course::new(1, "Physics", Some(1)).with_labs(1),
            Course::new(2, "Chemistry", Some(2)).with_labs(1),
        ]);
        let mut t = Timetable::new();
        t.place(1, Session::Lab(LabAssignment::paired(LAB, 0)));
        t.place(2, Session::Lab(LabAssignment::paired(LAB, 0)));
        assert_eq!(kinds(&p, &t), vec![ViolationKind::RoomClash]);
    }

    #[test]
    fn test_custom_penalties() {
        let p = problem(vec![Course::new(1, "Algebra", None)]).with_penalties(
            crate::timetable::Penalties {
                base: 10,
                missing_course: 25,
                ..Default::default()
            },
        );
        assert_eq!(p.score(&Timetable::new()), -15);
    }
}
