//! Core trait definitions for the GA engine.
//!
//! [`Individual`] and [`GaProblem`] define the contract between the
//! evolutionary loop and the problem being optimized.

use rand::Rng;

/// Fitness score. Higher is better; negative values are legal.
pub type Score = i64;

/// A candidate solution in the GA population.
///
/// Individuals carry their own score. The runner calls
/// [`GaProblem::evaluate`] and stores the result via
/// [`set_fitness`](Individual::set_fitness).
pub trait Individual: Clone + Send + Sync {
    /// Returns the last stored score.
    fn fitness(&self) -> Score;

    /// Stores a score. Called by the runner after evaluation.
    fn set_fitness(&mut self, fitness: Score);
}

/// Defines a GA optimization problem.
///
/// 1. **Initialization**: How to create random individuals
/// 2. **Evaluation**: How to score an individual
/// 3. **Crossover**: How to recombine two parents into a child
/// 4. **Mutation**: How to perturb a child
///
/// # Thread Safety
///
/// `GaProblem` must be `Send + Sync` because the runner may evaluate
/// individuals in parallel using rayon.
pub trait GaProblem: Send + Sync {
    /// The individual (solution) type for this problem.
    type Individual: Individual;

    /// Creates a random, structurally valid individual.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Scores an individual. Must be deterministic and free of side effects,
    /// since the runner may call it from several threads at once.
    fn evaluate(&self, individual: &Self::Individual) -> Score;

    /// Produces one child from two parents.
    ///
    /// The default implementation clones `parent1`.
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        _parent2: &Self::Individual,
        _rng: &mut R,
    ) -> Self::Individual {
        parent1.clone()
    }

    /// Mutates a child in place. Any mutation probability is the problem's
    /// own concern; the runner calls this for every child.
    ///
    /// The default implementation is a no-op.
    fn mutate<R: Rng>(&self, _individual: &mut Self::Individual, _rng: &mut R) {}

    /// Called at the end of each generation with the generation's best score.
    fn on_generation(&self, _generation: usize, _best_fitness: Score) {}
}
