//! Generation loop.
//!
//! Builds a population, then alternates [`Population::generate`] and
//! [`Population::evaluate`] until the generation budget is spent or the
//! population converges. The loop never blocks and has no other exit.

use rand::Rng;
use tracing::{info, warn};

use super::{GaConfig, LineupChromosome, LineupProblem, Population};

/// Outcome of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Winning chromosome (recorded best, else the first chromosome).
    pub best: LineupChromosome,
    /// Fitness of `best`.
    pub best_fitness: f64,
    /// Generation steps executed.
    pub generations: usize,
    /// Whether the run stopped on the convergence threshold.
    pub converged: bool,
}

/// Runs the lineup GA.
pub struct GaRunner;

impl GaRunner {
    /// Evolves a population for `problem` under `config`.
    ///
    /// Round count comes from the problem; `config` supplies the
    /// population size, mutation rate, budget, threshold and operators.
    /// The caller is expected to have validated `config`.
    pub fn run<R: Rng>(problem: &LineupProblem<'_>, config: &GaConfig, rng: &mut R) -> GaResult {
        let mut population = Population::initialize(problem, config, rng);

        for _ in 0..config.max_generations {
            population.generate(problem, rng);
            population.evaluate();
            if population.converged {
                break;
            }
        }

        if population.best.is_none() {
            warn!(
                generations = population.generation,
                "no positive-fitness chromosome recorded, using first chromosome"
            );
        }

        let best = population
            .best_or_first()
            .cloned()
            .unwrap_or_else(|| problem.create_individual(rng));
        let result = GaResult {
            best_fitness: best.fitness,
            best,
            generations: population.generation,
            converged: population.converged,
        };

        info!(
            players = problem.players.len(),
            positions = problem.positions.len(),
            generations = result.generations,
            best_fitness = result.best_fitness,
            converged = result.converged,
            "lineup search finished"
        );
        result
    }
}
