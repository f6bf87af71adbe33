//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop
//! and the timetable operators it drives.

use serde::{Deserialize, Serialize};

use super::selection::Selection;
use crate::error::TimetableError;

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use campus_timetable::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.max_generations, 100);
/// assert_eq!(config.elite_count, 1);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use campus_timetable::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(80)
///     .with_selection(Selection::Tournament(3))
///     .with_mutation_rate(0.2)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    /// Number of individuals in the population.
    pub population_size: usize,

    /// Number of generations to run.
    pub max_generations: usize,

    /// Selection strategy for choosing parents.
    pub selection: Selection,

    /// Number of top individuals copied unchanged into the next generation.
    pub elite_count: usize,

    /// Per-course probability that a child's lectures are reassigned (0.0–1.0).
    pub mutation_rate: f64,

    /// Random draws allowed per session before the generator gives up on it.
    pub max_attempts: usize,

    /// Whether to evaluate individuals in parallel using rayon.
    ///
    /// Has no effect when the crate is built without the `parallel` feature.
    pub parallel: bool,

    /// Random seed for reproducibility. `None` draws a fresh seed.
    pub seed: Option<u64>,

    /// Optional wall-clock limit in milliseconds.
    ///
    /// Checked at the start of each generation; on expiry the best
    /// individual of the current population is returned.
    pub time_limit_ms: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            max_generations: 100,
            selection: Selection::default(),
            elite_count: 1,
            mutation_rate: 0.1,
            max_attempts: 50,
            parallel: true,
            seed: None,
            time_limit_ms: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Sets the number of elites.
    pub fn with_elite_count(mut self, n: usize) -> Self {
        self.elite_count = n;
        self
    }

    /// Sets the per-course mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the placement attempts per session.
    pub fn with_max_attempts(mut self, n: usize) -> Self {
        self.max_attempts = n;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the wall-clock limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), TimetableError> {
        if self.population_size < 2 {
            return Err(TimetableError::Config(
                "population_size must be at least 2".into(),
            ));
        }
        if self.max_generations == 0 {
            return Err(TimetableError::Config(
                "max_generations must be at least 1".into(),
            ));
        }
        if self.elite_count == 0 {
            return Err(TimetableError::Config(
                "elite_count must be at least 1".into(),
            ));
        }
        if self.elite_count >= self.population_size {
            return Err(TimetableError::Config(
                "elite_count too high: elites fill entire population".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(TimetableError::Config(
                "mutation_rate must be within [0, 1]".into(),
            ));
        }
        if self.max_attempts == 0 {
            return Err(TimetableError::Config("max_attempts must be at least 1".into()));
        }
        if let Selection::Tournament(0) = self.selection {
            return Err(TimetableError::Config("tournament size must be at least 1".into()));
        }
        if self.time_limit_ms == Some(0) {
            return Err(TimetableError::Config(
                "time_limit_ms must be positive or None".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 50);
        assert_eq!(config.max_generations, 100);
        assert_eq!(config.selection, Selection::Proportional);
        assert_eq!(config.elite_count, 1);
        assert!((config.mutation_rate - 0.1).abs() < 1e-10);
        assert_eq!(config.max_attempts, 50);
        assert!(config.parallel);
        assert!(config.seed.is_none());
        assert!(config.time_limit_ms.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(200)
            .with_max_generations(10)
            .with_selection(Selection::Tournament(4))
            .with_elite_count(2)
            .with_mutation_rate(0.05)
            .with_max_attempts(20)
            .with_parallel(false)
            .with_seed(42)
            .with_time_limit_ms(500);

        assert_eq!(config.population_size, 200);
        assert_eq!(config.max_generations, 10);
        assert_eq!(config.selection, Selection::Tournament(4));
        assert_eq!(config.elite_count, 2);
        assert!((config.mutation_rate - 0.05).abs() < 1e-10);
        assert_eq!(config.max_attempts, 20);
        assert!(!config.parallel);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.time_limit_ms, Some(500));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_clamp_mutation_rate() {
        assert!((GaConfig::default().with_mutation_rate(2.0).mutation_rate - 1.0).abs() < 1e-10);
        assert!(GaConfig::default().with_mutation_rate(-1.0).mutation_rate.abs() < 1e-10);
    }

    #[test]
    fn test_validate_rejections() {
        let bad = [
            GaConfig::default().with_population_size(1),
            GaConfig::default().with_max_generations(0),
            GaConfig::default().with_population_size(4).with_elite_count(4),
            GaConfig::default().with_elite_count(0),
            GaConfig::default().with_max_attempts(0),
            GaConfig::default().with_selection(Selection::Tournament(0)),
            GaConfig::default().with_time_limit_ms(0),
        ];
        for config in bad {
            assert!(
                matches!(config.validate(), Err(TimetableError::Config(_))),
                "accepted {config:?}"
            );
        }
    }

    #[test]
    fn test_validate_rejects_raw_out_of_range_rate() {
        let config = GaConfig {
            mutation_rate: 1.5,
            ..GaConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: GaConfig =
            serde_json::from_str(r#"{"max_generations": 20, "seed": 7}"#).unwrap();
        assert_eq!(config.max_generations, 20);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.population_size, 50);
    }
}
