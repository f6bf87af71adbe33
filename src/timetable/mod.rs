//! Timetabling as a GA problem.
//!
//! [`TimetableProblem`] implements [`GaProblem`](crate::ga::GaProblem):
//!
//! - **Generation**: labs first, then lectures, each placed by bounded
//!   random sampling over the eligible slots ([`Candidate`],
//!   [`UnplacedSession`])
//! - **Fitness**: base score minus [`Penalties`] for every [`Violation`]
//! - **Crossover**: each course's whole entry comes from one parent
//! - **Mutation**: per course, lectures jump to another eligible slot

mod fitness;
mod generator;
mod operators;
mod penalties;
mod problem;

pub use fitness::{Violation, ViolationKind};
pub use generator::{Candidate, UnplacedReason, UnplacedSession};
pub use operators::course_crossover;
pub use penalties::Penalties;
pub use problem::TimetableProblem;
