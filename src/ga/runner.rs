//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → elitism → selection → crossover →
//! mutation → repeat.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, info};
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::config::GaConfig;
use super::types::{GaProblem, Individual, Score};
use crate::error::TimetableError;
use crate::random::rng_from_option;

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// The best individual of the final population.
    pub best: I,

    /// Score of `best`.
    pub best_fitness: Score,

    /// Number of generations completed.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Whether the wall-clock limit stopped the run.
    pub timed_out: bool,

    /// Best score of the initial population, then of each generation.
    pub fitness_history: Vec<Score>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// println!("Best score: {}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with a generator seeded from `config.seed`.
    ///
    /// # Errors
    /// [`TimetableError::Config`] if the configuration is invalid.
    pub fn run<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
    ) -> Result<GaResult<P::Individual>, TimetableError> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// If the flag is set, the GA stops at the next generation boundary and
    /// returns the best individual of the current population.
    pub fn run_with_cancel<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult<P::Individual>, TimetableError> {
        let mut rng = rng_from_option(config.seed);
        Self::run_with_rng(problem, config, &mut rng, cancel)
    }

    /// Runs the GA drawing every random decision from `rng`.
    ///
    /// `config.seed` is ignored; the caller owns the generator.
    pub fn run_with_rng<P: GaProblem, R: Rng>(
        problem: &P,
        config: &GaConfig,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult<P::Individual>, TimetableError> {
        config.validate()?;

        let started = Instant::now();
        let deadline = config.time_limit_ms.map(Duration::from_millis);

        info!(
            "GA start: population {}, generations {}, selection {:?}",
            config.population_size, config.max_generations, config.selection
        );

        // 1. Initialize and evaluate population
        let mut population: Vec<P::Individual> = (0..config.population_size)
            .map(|_| problem.create_individual(rng))
            .collect();
        evaluate_population(problem, &mut population, config.parallel);

        let mut fitness_history = Vec::with_capacity(config.max_generations + 1);
        fitness_history.push(population[best_index(&population)].fitness());

        let mut generations = 0usize;
        let mut cancelled = false;
        let mut timed_out = false;

        // 2. Evolutionary loop
        for gen in 0..config.max_generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            if deadline.is_some_and(|limit| started.elapsed() >= limit) {
                timed_out = true;
                break;
            }

            // Elite preservation: stable sort keeps the first of equal scores.
            let mut ranked: Vec<usize> = (0..population.len()).collect();
            ranked.sort_by(|&a, &b| population[b].fitness().cmp(&population[a].fitness()));
            let mut next_gen: Vec<P::Individual> = ranked[..config.elite_count]
                .iter()
                .map(|&i| population[i].clone())
                .collect();

            // Offspring
            while next_gen.len() < config.population_size {
                let p1 = config.selection.select(&population, rng);
                let p2 = config.selection.select(&population, rng);
                let mut child = problem.crossover(&population[p1], &population[p2], rng);
                problem.mutate(&mut child, rng);
                next_gen.push(child);
            }

            // Elites keep their score; only offspring need evaluation.
            evaluate_population(problem, &mut next_gen[config.elite_count..], config.parallel);

            population = next_gen;
            generations = gen + 1;

            let gen_best = population[best_index(&population)].fitness();
            fitness_history.push(gen_best);
            debug!("generation {generations}: best score {gen_best}");
            problem.on_generation(generations, gen_best);
        }

        let best = population[best_index(&population)].clone();
        info!(
            "GA done: {} generations in {:.2?}, best score {}{}",
            generations,
            started.elapsed(),
            best.fitness(),
            if cancelled {
                " (cancelled)"
            } else if timed_out {
                " (time limit)"
            } else {
                ""
            }
        );

        Ok(GaResult {
            best_fitness: best.fitness(),
            best,
            generations,
            cancelled,
            timed_out,
            fitness_history,
        })
    }
}

/// Evaluate all individuals in the slice.
#[cfg(feature = "parallel")]
fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &mut [P::Individual],
    parallel: bool,
) {
    if parallel {
        population.par_iter_mut().for_each(|ind| {
            let f = problem.evaluate(ind);
            ind.set_fitness(f);
        });
    } else {
        evaluate_sequential(problem, population);
    }
}

#[cfg(not(feature = "parallel"))]
fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &mut [P::Individual],
    _parallel: bool,
) {
    evaluate_sequential(problem, population);
}

fn evaluate_sequential<P: GaProblem>(problem: &P, population: &mut [P::Individual]) {
    for ind in population.iter_mut() {
        let f = problem.evaluate(ind);
        ind.set_fitness(f);
    }
}

/// Index of the first individual with the highest score.
fn best_index<I: Individual>(population: &[I]) -> usize {
    let mut best = 0;
    for (i, ind) in population.iter().enumerate().skip(1) {
        if ind.fitness() > population[best].fitness() {
            best = i;
        }
    }
    best
}

// ============================================================================
// Tests
// ============================================================================
