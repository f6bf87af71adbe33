//! Genetic Algorithm engine.
//!
//! A trait-based evolutionary loop. A problem plugs in by implementing
//! [`GaProblem`], which specifies how to create, evaluate, recombine and
//! mutate individuals. Fitness is an integer [`Score`] where higher is
//! better.
//!
//! # Core Traits
//!
//! - [`Individual`]: A candidate solution carrying its score
//! - [`GaProblem`]: Problem definition: initialization, evaluation, operators
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, generations, selection)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best individual plus run statistics
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner};
pub use selection::Selection;
pub use types::{GaProblem, Individual, Score};
