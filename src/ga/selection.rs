//! Selection strategies for the GA.
//!
//! Selection determines which individuals are chosen as parents for
//! crossover. All strategies assume **maximization** (higher score = better).
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::types::Individual;

/// Selection strategy for choosing parents.
///
/// # Examples
///
/// ```
/// use campus_timetable::ga::Selection;
///
/// // Fitness-proportionate (the default)
/// let sel = Selection::Proportional;
///
/// // Tournament with size 3
/// let sel = Selection::Tournament(3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Selection {
    /// Fitness-proportionate (roulette wheel) selection on raw scores.
    ///
    /// When the population's score total is not positive, weighting is
    /// meaningless and every individual is equally likely. Negative scores
    /// otherwise get zero weight.
    ///
    /// # Complexity
    /// O(n) per selection (linear scan)
    #[default]
    Proportional,

    /// Tournament selection: pick `k` individuals at random, keep the best.
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament(usize),
}

impl Selection {
    /// Select a parent index from the population.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select<I: Individual, R: Rng>(&self, population: &[I], rng: &mut R) -> usize {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        match self {
            Selection::Proportional => proportional(population, rng),
            Selection::Tournament(k) => tournament(population, *k, rng),
        }
    }
}

fn proportional<I: Individual, R: Rng>(population: &[I], rng: &mut R) -> usize {
    let n = population.len();
    if n == 1 {
        return 0;
    }

    let total: i128 = population.iter().map(|ind| ind.fitness() as i128).sum();
    if total <= 0 {
        return rng.random_range(0..n);
    }

    let weights: Vec<f64> = population
        .iter()
        .map(|ind| ind.fitness().max(0) as f64)
        .collect();
    let weight_total: f64 = weights.iter().sum();

    let threshold = rng.random_range(0.0..weight_total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }

    // Floating-point fallback: last individual with any weight.
    weights.iter().rposition(|&w| w > 0.0).unwrap_or(n - 1)
}

fn tournament<I: Individual, R: Rng>(population: &[I], k: usize, rng: &mut R) -> usize {
    let k = k.max(1);
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if population[idx].fitness() > population[best_idx].fitness() {
            best_idx = idx;
        }
    }
    best_idx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::Score;
    use crate::random::create_rng;

    #[derive(Clone)]
    struct TestInd {
        fit: Score,
    }

    impl Individual for TestInd {
        fn fitness(&self) -> Score {
            self.fit
        }
        fn set_fitness(&mut self, f: Score) {
            self.fit = f;
        }
    }

    fn make_population(scores: &[Score]) -> Vec<TestInd> {
        scores.iter().map(|&f| TestInd { fit: f }).collect()
    }

    fn counts(sel: Selection, pop: &[TestInd], draws: usize) -> Vec<usize> {
        let mut rng = create_rng(42);
        let mut counts = vec![0usize; pop.len()];
        for _ in 0..draws {
            counts[sel.select(pop, &mut rng)] += 1;
        }
        counts
    }

    #[test]
    fn test_proportional_follows_weights() {
        let pop = make_population(&[100, 300, 600]);
        let c = counts(Selection::Proportional, &pop, 10_000);
        assert!(c[2] > c[1] && c[1] > c[0], "counts: {c:?}");
        assert!(c[2] > 5_000, "expected ~60% for the heaviest, got {c:?}");
    }

    #[test]
    fn test_proportional_ignores_negative_scores() {
        let pop = make_population(&[-500, 1000, -20]);
        let c = counts(Selection::Proportional, &pop, 2_000);
        assert_eq!(c[0], 0);
        assert_eq!(c[2], 0);
        assert_eq!(c[1], 2_000);
    }

    #[test]
    fn test_proportional_non_positive_total_is_uniform() {
        let pop = make_population(&[-100, 50, 20, 30]);
        let c = counts(Selection::Proportional, &pop, 10_000);
        for &n in &c {
            assert!(n > 1_500, "expected uniform, got {c:?}");
        }
    }

    #[test]
    fn test_proportional_all_zero_is_uniform() {
        let pop = make_population(&[0, 0, 0, 0]);
        let c = counts(Selection::Proportional, &pop, 10_000);
        for &n in &c {
            assert!(n > 1_500, "expected uniform, got {c:?}");
        }
    }

    #[test]
    fn test_tournament_favors_best() {
        let pop = make_population(&[10, 50, 990, 80]);
        let c = counts(Selection::Tournament(4), &pop, 10_000);
        assert!(c[2] > 6_000, "expected best >60%, got {c:?}");
    }

    #[test]
    fn test_single_individual() {
        let pop = make_population(&[5]);
        let mut rng = create_rng(42);
        assert_eq!(Selection::Proportional.select(&pop, &mut rng), 0);
        assert_eq!(Selection::Tournament(3).select(&pop, &mut rng), 0);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let pop: Vec<TestInd> = vec![];
        let mut rng = create_rng(42);
        Selection::Proportional.select(&pop, &mut rng);
    }

    #[test]
    fn test_serde_shape() {
        assert_eq!(
            serde_json::to_string(&Selection::Proportional).unwrap(),
            "\"Proportional\""
        );
        let t: Selection = serde_json::from_str(r#"{"Tournament": 5}"#).unwrap();
        assert_eq!(t, Selection::Tournament(5));
    }
}
