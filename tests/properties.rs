mod common;

use proptest::prelude::*;

use campus_timetable::format::{format_rows, NameLookup};
use campus_timetable::model::{ClockTime, Course, Timeslot};
use campus_timetable::random::create_rng;
use campus_timetable::slots::{classify, parse_timeslots, SlotPolicy};
use campus_timetable::timetable::{course_crossover, TimetableProblem};

fn week_problem(labs: &[u32]) -> (TimetableProblem, Vec<Timeslot>, Vec<Course>) {
    let input = common::week_input();
    let slots = parse_timeslots(&input.timeslots).unwrap();
    let courses: Vec<Course> = labs
        .iter()
        .enumerate()
        .map(|(i, &n)| {
            Course::new(i as u32 + 1, format!("Course {i}"), Some(i as u32 % 3 + 1))
                .with_lectures(n % 3 + 1)
                .with_labs(n)
        })
        .collect();
    let problem = TimetableProblem::new(&courses, &input.rooms, &slots, &SlotPolicy::default());
    (problem, slots, courses)
}

fn arb_slot() -> impl Strategy<Value = (u32, u32)> {
    (0u32..1200, 1u32..200)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_classified_slots_avoid_lunch(spans in prop::collection::vec(arb_slot(), 1..40)) {
        let slots: Vec<Timeslot> = spans
            .iter()
            .enumerate()
            .map(|(i, &(start, len))| {
                Timeslot::new(
                    i as u32 + 1,
                    "Monday",
                    ClockTime::from_minutes(start).unwrap(),
                    ClockTime::from_minutes(start + len).unwrap(),
                )
            })
            .collect();
        let policy = SlotPolicy::default();
        let eligible = classify(&slots, &policy);

        for &idx in eligible.theatre().iter().chain(eligible.lab()) {
            let s = &slots[idx];
            prop_assert!(!(s.start < policy.lunch_end && s.end > policy.lunch_start));
        }
    }

    #[test]
    fn test_generated_labs_are_adjacent(
        labs in prop::collection::vec(0u32..3, 1..6),
        seed in any::<u64>(),
    ) {
        let (problem, slots, _) = week_problem(&labs);
        let candidate = problem.generate(&mut create_rng(seed));
        let lab_list = problem.eligible().lab();

        for (_, entry) in candidate.timetable.iter() {
            for lab in entry.labs() {
                prop_assert_eq!(lab.second, lab.first + 1);
                prop_assert_eq!(&slots[lab.first].day, &slots[lab.second].day);
                let pos = lab_list.iter().position(|&i| i == lab.first).unwrap();
                prop_assert_eq!(lab_list.get(pos + 1).copied(), Some(lab.second));
            }
        }
    }

    #[test]
    fn test_crossover_only_copies_parent_entries(
        labs in prop::collection::vec(0u32..3, 1..6),
        seeds in any::<(u64, u64, u64)>(),
    ) {
        let (problem, _, _) = week_problem(&labs);
        let p1 = problem.generate(&mut create_rng(seeds.0)).timetable;
        let p2 = problem.generate(&mut create_rng(seeds.1)).timetable;
        let child = course_crossover(&p1, &p2, &mut create_rng(seeds.2));

        for (course, entry) in child.iter() {
            prop_assert!(p1.get(course) == Some(entry) || p2.get(course) == Some(entry));
        }
        let keys = |t: &campus_timetable::model::Timetable| t.courses().collect::<Vec<_>>();
        if keys(&p1) == keys(&p2) {
            prop_assert_eq!(keys(&child), keys(&p1));
        }
    }

    #[test]
    fn test_formatting_twice_gives_same_rows(
        labs in prop::collection::vec(0u32..3, 1..6),
        seed in any::<u64>(),
    ) {
        let input = common::week_input();
        let (problem, slots, courses) = week_problem(&labs);
        let timetable = problem.generate(&mut create_rng(seed)).timetable;
        let names = NameLookup::new(&input.teachers, &input.rooms, &slots);

        let rows = format_rows(&timetable, &courses, &names);
        prop_assert_eq!(&rows, &format_rows(&timetable, &courses, &names));
        prop_assert_eq!(rows.len(), timetable.session_count());
    }
}
