//! Lineup GA problem definition.
//!
//! Bridges the domain records (players, positions) to the GA: creates
//! chromosomes, scores them, and decodes the winner into a [`Lineup`].

use rand::Rng;

use super::LineupChromosome;
use super::config::PlayerIdentity;
use super::fitness::FairnessEvaluator;
use crate::models::{Lineup, Player, Position};

/// GA problem definition for one assignment request.
///
/// Borrows the caller's roster and position list; nothing here mutates
/// them.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use u_lineup::ga::{GaConfig, GaRunner, LineupProblem};
/// use u_lineup::models::{Player, Position};
///
/// let players = vec![
///     Player::new("p1").with_preferences(["A", "B"]),
///     Player::new("p2").with_preferences(["B", "A"]),
/// ];
/// let positions = Position::list(["A", "B"]);
/// let problem = LineupProblem::new(&players, &positions);
///
/// let mut rng = SmallRng::seed_from_u64(1);
/// let result = GaRunner::run(&problem, &GaConfig::default(), &mut rng);
/// let lineup = problem.decode(&result.best);
/// assert!(lineup.is_complete());
/// ```
#[derive(Debug, Clone)]
pub struct LineupProblem<'a> {
    /// Roster, in caller order.
    pub players: &'a [Player],
    /// Positions, in caller order.
    pub positions: &'a [Position],
    /// Rounds encoded per chromosome.
    pub rounds: usize,
    evaluator: FairnessEvaluator,
}

impl<'a> LineupProblem<'a> {
    /// Creates a single-round problem with index identity.
    pub fn new(players: &'a [Player], positions: &'a [Position]) -> Self {
        Self {
            players,
            positions,
            rounds: 1,
            evaluator: FairnessEvaluator::new(players, positions, PlayerIdentity::Index),
        }
    }

    /// Sets the number of encoded rounds (at least 1).
    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds.max(1);
        self
    }

    /// Switches the scorer's identity rule.
    pub fn with_identity(mut self, identity: PlayerIdentity) -> Self {
        self.evaluator = FairnessEvaluator::new(self.players, self.positions, identity);
        self
    }

    /// Whether there is nothing to search (no players or no positions).
    pub fn is_trivial(&self) -> bool {
        self.players.is_empty() || self.positions.is_empty()
    }

    /// Fitness evaluator bound to this problem.
    pub fn evaluator(&self) -> &FairnessEvaluator {
        &self.evaluator
    }

    /// Creates a random, unevaluated chromosome.
    pub fn create_individual<R: Rng>(&self, rng: &mut R) -> LineupChromosome {
        LineupChromosome::random(self.players.len(), self.positions.len(), self.rounds, rng)
    }

    /// Computes fitness (higher = better).
    pub fn evaluate(&self, chromosome: &LineupChromosome) -> f64 {
        self.evaluator.evaluate(chromosome)
    }

    /// Decodes round 0 into a lineup in position order.
    pub fn decode(&self, chromosome: &LineupChromosome) -> Lineup {
        let mut lineup = Lineup::new();
        for (i, position) in self.positions.iter().enumerate() {
            let player_id = chromosome
                .assigned(i)
                .and_then(|idx| self.players.get(idx))
                .map(|p| p.id.clone());
            lineup.push(position.name.clone(), player_id);
        }
        lineup
    }
}
