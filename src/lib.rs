//! Weekly course timetabling with a genetic algorithm.
//!
//! Assigns the lecture and lab sessions of a set of courses to rooms and
//! timeslots, trading off teacher, room-type and timing constraints through
//! a penalty-based fitness score.
//!
//! - **Slot classification** ([`slots`]): lunch-window filtering and
//!   duration rules decide which timeslots each room category may use.
//! - **Timetable problem** ([`timetable`]): candidate generation, fitness
//!   evaluation, per-course crossover and lecture mutation.
//! - **Genetic Algorithm** ([`ga`]): the evolutionary loop with elitism,
//!   fitness-proportionate selection and parallel evaluation.
//! - **Formatting** ([`format`]): joins the winning timetable with display
//!   names into output rows.
//! - **Validation** ([`validation`]): structural checks on the input
//!   records before any optimization runs.
//!
//! [`solve::generate_timetable`] wires all of the above together.
//!
//! # Architecture
//!
//! The optimizer is self-contained: all input is materialized before the
//! run starts and no I/O happens inside the loop. Randomness flows through
//! an injected [`rand::Rng`] so that a fixed seed reproduces a run exactly.

pub mod error;
pub mod format;
pub mod ga;
pub mod model;
pub mod random;
pub mod slots;
pub mod solve;
pub mod timetable;
pub mod validation;

pub use error::TimetableError;
pub use solve::{generate_timetable, SolveOptions, SolveOutput};
