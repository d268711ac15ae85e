//! GA configuration.
//!
//! All engine constants live here so callers can tune them per request
//! or load them from a JSON document. Missing JSON fields fall back to
//! the defaults below.
//!
//! # Example
//!
//! ```
//! use u_lineup::ga::GaConfig;
//!
//! let config = GaConfig::default()
//!     .with_population_size(50)
//!     .with_max_generations(40)
//!     .with_seed(7);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use super::operators::GeneticOperators;

/// How the fitness scorer decides that an assigned player is "this" player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerIdentity {
    /// By position in the roster slice. Unique by construction.
    #[default]
    Index,
    /// By display name. Players sharing a name are indistinguishable
    /// to the scorer and credit each other's placements.
    Name,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("population size must be at least 1")]
    EmptyPopulation,
    #[error("round count must be at least 1")]
    NoRounds,
    #[error("mutation rate must be within [0, 1], got {0}")]
    MutationRate(f64),
    #[error("convergence threshold must be a number")]
    Threshold,
    #[error("invalid config document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Genetic algorithm settings for one assignment request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaConfig {
    /// Number of chromosomes per generation.
    #[serde(default = "default_population_size")]
    pub population_size: usize,

    /// Per-round mutation probability (0.0 - 1.0).
    #[serde(default = "default_mutation_rate")]
    pub mutation_rate: f64,

    /// Generation budget.
    #[serde(default = "default_max_generations")]
    pub max_generations: usize,

    /// Rounds encoded per chromosome. Only round 0 is decoded.
    #[serde(default = "default_rounds")]
    pub rounds: usize,

    /// Early-stop fitness. Tunable; not derived from the fitness range.
    #[serde(default = "default_convergence_threshold")]
    pub convergence_threshold: f64,

    /// RNG seed. `None` = thread RNG.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Identity rule used by the fitness scorer.
    #[serde(default)]
    pub identity: PlayerIdentity,

    /// Crossover and mutation strategies.
    #[serde(default)]
    pub operators: GeneticOperators,
}

fn default_population_size() -> usize { 30 }
fn default_mutation_rate() -> f64 { 0.1 }
fn default_max_generations() -> usize { 10 }
fn default_rounds() -> usize { 1 }
fn default_convergence_threshold() -> f64 { 100.0 }

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: default_population_size(),
            mutation_rate: default_mutation_rate(),
            max_generations: default_max_generations(),
            rounds: default_rounds(),
            convergence_threshold: default_convergence_threshold(),
            seed: None,
            identity: PlayerIdentity::default(),
            operators: GeneticOperators::default(),
        }
    }
}

impl GaConfig {
    /// Parses a JSON config document and validates it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Sets the per-round mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the generation budget.
    pub fn with_max_generations(mut self, generations: usize) -> Self {
        self.max_generations = generations;
        self
    }

    /// Sets the number of encoded rounds.
    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    /// Sets the early-stop fitness threshold.
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Fixes the RNG seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the scorer identity rule.
    pub fn with_identity(mut self, identity: PlayerIdentity) -> Self {
        self.identity = identity;
        self
    }

    /// Sets the crossover/mutation strategies.
    pub fn with_operators(mut self, operators: GeneticOperators) -> Self {
        self.operators = operators;
        self
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.rounds == 0 {
            return Err(ConfigError::NoRounds);
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::MutationRate(self.mutation_rate));
        }
        if self.convergence_threshold.is_nan() {
            return Err(ConfigError::Threshold);
        }
        Ok(())
    }
}
