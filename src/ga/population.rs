//! Population bookkeeping and fitness-proportionate selection.
//!
//! # Selection
//!
//! Parents are drawn by rejection sampling: pick a uniform index, draw
//! `u ∈ [0, max_fitness)`, accept if `u < fitness`. Each chromosome is
//! therefore accepted with probability proportional to its fitness,
//! without building a cumulative distribution. Attempts are capped at
//! [`MAX_SELECTION_ATTEMPTS`]; exhaustion yields `None`.

use rand::Rng;
use tracing::{debug, trace};

use super::operators::GeneticOperators;
use super::{GaConfig, LineupChromosome, LineupProblem};

/// Rejection-sampling attempt cap per parent draw.
pub const MAX_SELECTION_ATTEMPTS: usize = 10_000;

/// Fixed-size working set of chromosomes evolved in place.
#[derive(Debug, Clone)]
pub struct Population {
    /// Current generation's chromosomes.
    pub chromosomes: Vec<LineupChromosome>,
    /// Completed generation steps.
    pub generation: usize,
    /// Record holder of the latest [`Population::evaluate`] scan.
    pub best: Option<LineupChromosome>,
    /// Set once the record reaches the convergence threshold.
    pub converged: bool,
    mutation_rate: f64,
    convergence_threshold: f64,
    operators: GeneticOperators,
}

impl Population {
    /// Creates `config.population_size` random chromosomes and scores them.
    pub fn initialize<R: Rng>(problem: &LineupProblem<'_>, config: &GaConfig, rng: &mut R) -> Self {
        let chromosomes = (0..config.population_size)
            .map(|_| problem.create_individual(rng))
            .collect();

        let mut population = Self {
            chromosomes,
            generation: 0,
            best: None,
            converged: false,
            mutation_rate: config.mutation_rate,
            convergence_threshold: config.convergence_threshold,
            operators: config.operators,
        };
        population.assign_fitness(problem);
        population
    }

    /// Number of chromosomes.
    pub fn len(&self) -> usize {
        self.chromosomes.len()
    }

    /// Whether the population is empty.
    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }

    /// Highest fitness in the current generation (0 when empty).
    pub fn max_fitness(&self) -> f64 {
        self.chromosomes
            .iter()
            .map(|c| c.fitness)
            .fold(0.0, f64::max)
    }

    /// Draws one chromosome with probability proportional to fitness.
    ///
    /// `max_fitness` must be the current population maximum. Returns
    /// `None` when the attempt cap is hit; with a non-positive maximum
    /// no draw can ever be accepted, so that case returns at once.
    pub fn select<R: Rng>(&self, max_fitness: f64, rng: &mut R) -> Option<&LineupChromosome> {
        if self.chromosomes.is_empty() || max_fitness.is_nan() || max_fitness <= 0.0 {
            return None;
        }
        for _ in 0..MAX_SELECTION_ATTEMPTS {
            let candidate = &self.chromosomes[rng.random_range(0..self.chromosomes.len())];
            let draw = rng.random::<f64>() * max_fitness;
            if draw < candidate.fitness {
                return Some(candidate);
            }
        }
        None
    }

    /// Breeds the next generation.
    ///
    /// Each slot gets a child of two selected parents (crossover, then
    /// mutation). If either draw fails the slot keeps a clone of the
    /// chromosome previously at that index.
    pub fn generate<R: Rng>(&mut self, problem: &LineupProblem<'_>, rng: &mut R) {
        let max_fitness = self.max_fitness();
        let mut fallbacks = 0usize;

        let next: Vec<LineupChromosome> = (0..self.chromosomes.len())
            .map(|i| {
                let parents = self
                    .select(max_fitness, rng)
                    .zip(self.select(max_fitness, rng));
                match parents {
                    Some((this, partner)) => {
                        let mut child = self.operators.crossover(this, partner, rng);
                        self.operators.mutate(&mut child, self.mutation_rate, rng);
                        child
                    }
                    None => {
                        fallbacks += 1;
                        self.chromosomes[i].clone()
                    }
                }
            })
            .collect();

        if fallbacks > 0 {
            trace!(
                generation = self.generation,
                fallbacks,
                "selection exhausted, kept previous chromosomes"
            );
        }

        self.chromosomes = next;
        self.generation += 1;
        self.assign_fitness(problem);
    }

    /// Records the generation's best chromosome and checks convergence.
    ///
    /// Only a strictly positive record replaces `best`, so an all-zero
    /// generation leaves it as it was.
    pub fn evaluate(&mut self) {
        let mut record = 0.0;
        let mut record_idx = None;
        for (i, chromosome) in self.chromosomes.iter().enumerate() {
            if chromosome.fitness > record {
                record = chromosome.fitness;
                record_idx = Some(i);
            }
        }

        if let Some(idx) = record_idx {
            self.best = Some(self.chromosomes[idx].clone());
            if record >= self.convergence_threshold {
                self.converged = true;
            }
        }
        debug!(
            generation = self.generation,
            best_fitness = record,
            converged = self.converged,
            "population evaluated"
        );
    }

    /// The recorded best, or the first chromosome if none was recorded.
    pub fn best_or_first(&self) -> Option<&LineupChromosome> {
        self.best.as_ref().or_else(|| self.chromosomes.first())
    }

    fn assign_fitness(&mut self, problem: &LineupProblem<'_>) {
        for chromosome in &mut self.chromosomes {
            chromosome.fitness = problem.evaluate(chromosome);
        }
    }
}
