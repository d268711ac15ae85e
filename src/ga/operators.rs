//! Configurable genetic operators for lineup chromosomes.
//!
//! Provides runtime-selectable crossover and mutation strategies
//! via [`GeneticOperators`].
//!
//! # Usage
//!
//! ```
//! use u_lineup::ga::operators::{GeneticOperators, CrossoverType, MutationType};
//!
//! let ops = GeneticOperators::default();
//! assert_eq!(ops.crossover_type, CrossoverType::RoundCut);
//! assert_eq!(ops.mutation_type, MutationType::Reshuffle);
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::chromosome::{
    LineupChromosome, order_crossover, reshuffle_mutation, round_cut_crossover, swap_mutation,
};

/// Crossover strategy for lineup chromosomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossoverType {
    /// Single cut point over rounds. A one-round child copies the second parent.
    #[default]
    RoundCut,
    /// Order crossover inside each round (Davis, 1985).
    Order,
}

/// Mutation strategy for lineup chromosomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationType {
    /// Replace the whole round with a fresh shuffle.
    #[default]
    Reshuffle,
    /// Swap two random positions in the round.
    Swap,
}

/// Runtime-selectable genetic operators for the lineup GA.
///
/// # Example
///
/// ```
/// use u_lineup::ga::operators::{GeneticOperators, CrossoverType, MutationType};
///
/// let ops = GeneticOperators {
///     crossover_type: CrossoverType::Order,
///     mutation_type: MutationType::Swap,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GeneticOperators {
    /// Crossover strategy.
    #[serde(default)]
    pub crossover_type: CrossoverType,
    /// Mutation strategy.
    #[serde(default)]
    pub mutation_type: MutationType,
}

impl GeneticOperators {
    /// Produces one child from two parents using the configured strategy.
    pub fn crossover<R: Rng>(
        &self,
        this: &LineupChromosome,
        partner: &LineupChromosome,
        rng: &mut R,
    ) -> LineupChromosome {
        match self.crossover_type {
            CrossoverType::RoundCut => round_cut_crossover(this, partner, rng),
            CrossoverType::Order => order_crossover(this, partner, rng),
        }
    }

    /// Mutates each round independently with probability `rate`.
    pub fn mutate<R: Rng>(&self, chromosome: &mut LineupChromosome, rate: f64, rng: &mut R) {
        match self.mutation_type {
            MutationType::Reshuffle => reshuffle_mutation(chromosome, rate, rng),
            MutationType::Swap => swap_mutation(chromosome, rate, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_default_operators() {
        let ops = GeneticOperators::default();
        assert_eq!(ops.crossover_type, CrossoverType::RoundCut);
        assert_eq!(ops.mutation_type, MutationType::Reshuffle);
    }

    #[test]
    fn test_crossover_round_cut() {
        let ops = GeneticOperators::default();
        let mut rng = SmallRng::seed_from_u64(42);
        let p1 = LineupChromosome::random(4, 4, 1, &mut rng);
        let p2 = LineupChromosome::random(4, 4, 1, &mut rng);

        let child = ops.crossover(&p1, &p2, &mut rng);
        assert_eq!(child.genes, p2.genes);
    }

    #[test]
    fn test_crossover_order() {
        let ops = GeneticOperators {
            crossover_type: CrossoverType::Order,
            mutation_type: MutationType::Reshuffle,
        };
        let mut rng = SmallRng::seed_from_u64(42);
        let p1 = LineupChromosome::random(6, 4, 1, &mut rng);
        let p2 = LineupChromosome::random(6, 4, 1, &mut rng);

        let child = ops.crossover(&p1, &p2, &mut rng);
        assert_eq!(child.rounds(), 1);
        assert!(child.is_valid(6));
    }

    #[test]
    fn test_mutation_swap() {
        let ops = GeneticOperators {
            crossover_type: CrossoverType::RoundCut,
            mutation_type: MutationType::Swap,
        };
        let mut rng = SmallRng::seed_from_u64(42);
        let mut ch = LineupChromosome::random(5, 5, 2, &mut rng);

        ops.mutate(&mut ch, 1.0, &mut rng);
        assert!(ch.is_valid(5));
    }

    #[test]
    fn test_mutation_zero_rate_is_noop() {
        let mut rng = SmallRng::seed_from_u64(42);
        let ch = LineupChromosome::random(5, 5, 3, &mut rng);

        for ops in [
            GeneticOperators::default(),
            GeneticOperators {
                crossover_type: CrossoverType::RoundCut,
                mutation_type: MutationType::Swap,
            },
        ] {
            let mut ch2 = ch.clone();
            ops.mutate(&mut ch2, 0.0, &mut rng);
            assert_eq!(ch2, ch);
        }
    }
}
