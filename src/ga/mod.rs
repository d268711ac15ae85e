//! GA-based fair lineup assignment.
//!
//! Searches for a player → position matching that keeps players in
//! positions they ranked highly while keeping the spread of satisfaction
//! small. The search is heuristic: bounded running time, no optimality
//! guarantee.
//!
//! # Encoding
//!
//! One roster permutation per round; the first `positions.len()`
//! entries of round 0 are the lineup. See [`LineupChromosome`].
//!
//! # Submodules
//!
//! - [`fitness`]: Fairness score (mean satisfaction over spread)
//! - [`operators`]: Runtime-selectable crossover and mutation strategies
//!
//! # Reference
//! Goldberg (1989), "Genetic Algorithms in Search, Optimization, and Machine Learning"

mod chromosome;
mod config;
pub mod fitness;
pub mod operators;
mod population;
mod problem;
mod runner;

pub use chromosome::{
    LineupChromosome, order_crossover, reshuffle_mutation, round_cut_crossover, swap_mutation,
};
pub use config::{ConfigError, GaConfig, PlayerIdentity};
pub use fitness::FairnessEvaluator;
pub use population::{MAX_SELECTION_ATTEMPTS, Population};
pub use problem::LineupProblem;
pub use runner::{GaResult, GaRunner};
