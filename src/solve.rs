//! One-call timetabling: validate, classify, evolve, format.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::TimetableError;
use crate::format::{format_rows, NameLookup, TimetableRow};
use crate::ga::{GaConfig, GaRunner, Score};
use crate::model::{Course, CourseId, SessionKind, Timetable, TimetableInput};
use crate::random::rng_from_option;
use crate::slots::{parse_timeslots, SlotPolicy};
use crate::timetable::{Penalties, TimetableProblem, Violation};
use crate::validation::validate_input;

/// Tunable parameters of a run. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolveOptions {
    pub ga: GaConfig,
    pub slots: SlotPolicy,
    pub penalties: Penalties,
}

/// Sessions a course still lacks in the final timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingSession {
    pub course_id: CourseId,
    pub course: String,
    pub kind: SessionKind,
    pub required: u32,
    pub placed: u32,
}

/// Outcome of a run.
#[derive(Debug, Clone, Serialize)]
pub struct SolveOutput {
    pub rows: Vec<TimetableRow>,
    pub score: Score,
    pub generations: usize,
    pub timed_out: bool,
    pub cancelled: bool,
    pub missing: Vec<MissingSession>,
    pub violations: Vec<Violation>,
}

/// Builds a timetable for `input`.
///
/// # Errors
/// - [`TimetableError::Parse`] for a malformed timeslot string
/// - [`TimetableError::Validation`] for inconsistent input records
/// - [`TimetableError::Config`] for out-of-range options
pub fn generate_timetable(
    input: &TimetableInput,
    options: &SolveOptions,
) -> Result<SolveOutput, TimetableError> {
    let mut rng = rng_from_option(options.ga.seed);
    generate_timetable_with_rng(input, options, &mut rng, None)
}

/// Like [`generate_timetable`], drawing randomness from `rng` and stopping
/// early when `cancel` is set.
pub fn generate_timetable_with_rng<R: Rng>(
    input: &TimetableInput,
    options: &SolveOptions,
    rng: &mut R,
    cancel: Option<Arc<AtomicBool>>,
) -> Result<SolveOutput, TimetableError> {
    options.ga.validate()?;
    options.slots.validate()?;

    let slots = parse_timeslots(&input.timeslots)?;
    validate_input(
        &input.teachers,
        &input.courses,
        &input.rooms,
        &slots,
        &input.constraints,
    )
    .map_err(TimetableError::Validation)?;

    let problem = TimetableProblem::new(&input.courses, &input.rooms, &slots, &options.slots)
        .with_constraints(input.constraints.clone())
        .with_penalties(options.penalties.clone())
        .with_mutation_rate(options.ga.mutation_rate)
        .with_max_attempts(options.ga.max_attempts);

    info!(
        "timetabling {} courses over {} slots ({} lecture-eligible, {} lab-eligible)",
        input.courses.len(),
        slots.len(),
        problem.eligible().theatre().len(),
        problem.eligible().lab().len()
    );

    let result = GaRunner::run_with_rng(&problem, &options.ga, rng, cancel)?;

    let names = NameLookup::new(&input.teachers, &input.rooms, &slots);
    let rows = format_rows(&result.best, &input.courses, &names);
    let missing = missing_sessions(&result.best, &input.courses);

    info!(
        "best score {} with {} rows, {} courses short of sessions",
        result.best_fitness,
        rows.len(),
        missing.len()
    );

    Ok(SolveOutput {
        rows,
        score: result.best_fitness,
        generations: result.generations,
        timed_out: result.timed_out,
        cancelled: result.cancelled,
        missing,
        violations: problem.violations(&result.best),
    })
}

/// Compares placed sessions with each course's requirements.
pub fn missing_sessions(timetable: &Timetable, courses: &[Course]) -> Vec<MissingSession> {
    let mut missing = Vec::new();

    for course in courses {
        let entry = timetable.get(course.id);
        for (kind, required) in [
            (SessionKind::Lecture, course.number_of_lectures),
            (SessionKind::Lab, course.number_of_labs),
        ] {
            let placed = entry.map_or(0, |e| e.count(kind)) as u32;
            if placed < required {
                missing.push(MissingSession {
                    course_id: course.id,
                    course: course.name.clone(),
                    kind,
                    required,
                    placed,
                });
            }
        }
    }

    missing
}
