//! Fairness fitness.
//!
//! # Definition
//!
//! Each player scores `slot_count - rank` for every round in which they
//! hold a position they ranked (rank 0 = top choice), and nothing for
//! an unranked or missing placement. Fitness rewards a high average
//! score and penalizes spread between the happiest and least happy
//! player:
//!
//! ```text
//! fitness = mean(scores) / (distribution(scores) + 1)
//! ```
//!
//! `distribution` is the sum of differences between neighbours in the
//! descending sort, which telescopes to `max - min`.

use crate::models::{Player, Position};

use super::LineupChromosome;
use super::config::PlayerIdentity;

/// Scores chromosomes against one roster and position list.
///
/// The preference lookups are resolved once into a reward table, so
/// evaluating a chromosome is a pass over its genes.
#[derive(Debug, Clone)]
pub struct FairnessEvaluator {
    /// `rewards[player][position]` = `slot_count - rank`, 0 if unranked.
    rewards: Vec<Vec<usize>>,
    /// Display name per player (name identity only).
    names: Vec<String>,
    identity: PlayerIdentity,
    position_count: usize,
}

impl FairnessEvaluator {
    /// Builds the reward table.
    ///
    /// Ranks past the slot count would give a negative reward; they
    /// saturate to 0 so scores stay non-negative.
    pub fn new(players: &[Player], positions: &[Position], identity: PlayerIdentity) -> Self {
        let position_count = positions.len();
        let rewards = players
            .iter()
            .map(|player| {
                positions
                    .iter()
                    .map(|pos| {
                        player
                            .rank_of(&pos.name)
                            .map_or(0, |rank| position_count.saturating_sub(rank))
                    })
                    .collect()
            })
            .collect();
        let names = players.iter().map(|p| p.display_name().to_string()).collect();

        Self {
            rewards,
            names,
            identity,
            position_count,
        }
    }

    /// Reward for placing `player` at `position`.
    pub fn reward(&self, player: usize, position: usize) -> usize {
        self.rewards
            .get(player)
            .and_then(|row| row.get(position))
            .copied()
            .unwrap_or(0)
    }

    /// Per-player satisfaction, summed over all rounds.
    pub fn player_scores(&self, chromosome: &LineupChromosome) -> Vec<f64> {
        let mut scores = vec![0usize; self.rewards.len()];

        match self.identity {
            PlayerIdentity::Index => {
                for round in &chromosome.genes {
                    for (position, &player) in round.iter().take(self.position_count).enumerate()
                    {
                        scores[player] += self.reward(player, position);
                    }
                }
            }
            PlayerIdentity::Name => {
                for (player, score) in scores.iter_mut().enumerate() {
                    let name = &self.names[player];
                    for round in &chromosome.genes {
                        for (position, &occupant) in
                            round.iter().take(self.position_count).enumerate()
                        {
                            if self.names[occupant] == *name {
                                *score += self.reward(player, position);
                            }
                        }
                    }
                }
            }
        }

        scores.into_iter().map(|s| s as f64).collect()
    }

    /// Fitness of a chromosome (higher = fairer).
    pub fn evaluate(&self, chromosome: &LineupChromosome) -> f64 {
        fairness(&self.player_scores(chromosome))
    }
}

/// Arithmetic mean; 0 for an empty slice.
pub fn mean(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().sum::<f64>() / scores.len() as f64
}

/// Spread penalty: sum of adjacent differences in descending order.
///
/// Equal to `max - min`; 0 for fewer than two scores.
pub fn distribution(scores: &[f64]) -> f64 {
    let mut sorted = scores.to_vec();
    sorted.sort_by(|a, b| b.total_cmp(a));
    sorted.windows(2).map(|w| w[0] - w[1]).sum()
}

/// `mean / (distribution + 1)`.
pub fn fairness(scores: &[f64]) -> f64 {
    mean(scores) / (distribution(scores) + 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn scenario_a() -> (Vec<Player>, Vec<Position>) {
        let players = vec![
            Player::new("p1").with_name("One").with_preferences(["S1", "S2", "S3"]),
            Player::new("p2").with_name("Two").with_preferences(["S2", "S1", "S3"]),
            Player::new("p3").with_name("Three").with_preferences(["S3", "S2", "S1"]),
        ];
        (players, Position::list(["S1", "S2", "S3"]))
    }

    #[test]
    fn test_reward_table() {
        let (players, positions) = scenario_a();
        let eval = FairnessEvaluator::new(&players, &positions, PlayerIdentity::Index);
        assert_eq!(eval.reward(0, 0), 3);
        assert_eq!(eval.reward(0, 1), 2);
        assert_eq!(eval.reward(0, 2), 1);
        assert_eq!(eval.reward(2, 0), 1);
        assert_eq!(eval.reward(9, 0), 0);
    }

    #[test]
    fn test_rank_past_slot_count_saturates() {
        let players = vec![Player::new("p1").with_preferences(["X", "Y", "A"])];
        let positions = Position::list(["A"]);
        let eval = FairnessEvaluator::new(&players, &positions, PlayerIdentity::Index);
        assert_eq!(eval.reward(0, 0), 0);
    }

    #[test]
    fn test_perfect_lineup() {
        let (players, positions) = scenario_a();
        let eval = FairnessEvaluator::new(&players, &positions, PlayerIdentity::Index);
        let ch = LineupChromosome::from_genes(vec![vec![0, 1, 2]]);

        assert_eq!(eval.player_scores(&ch), vec![3.0, 3.0, 3.0]);
        assert!((eval.evaluate(&ch) - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_perfect_lineup_is_maximal() {
        let (players, positions) = scenario_a();
        let eval = FairnessEvaluator::new(&players, &positions, PlayerIdentity::Index);
        let best = eval.evaluate(&LineupChromosome::from_genes(vec![vec![0, 1, 2]]));

        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..50 {
            let ch = LineupChromosome::random(3, 3, 1, &mut rng);
            let f = eval.evaluate(&ch);
            assert!(f >= 0.0);
            assert!(f <= best);
        }
    }

    #[test]
    fn test_swapped_lineup() {
        let (players, positions) = scenario_a();
        let eval = FairnessEvaluator::new(&players, &positions, PlayerIdentity::Index);
        // S1 ← p2 (rank 1), S2 ← p1 (rank 1), S3 ← p3 (rank 0)
        let ch = LineupChromosome::from_genes(vec![vec![1, 0, 2]]);

        assert_eq!(eval.player_scores(&ch), vec![2.0, 2.0, 3.0]);
        assert!((eval.evaluate(&ch) - (7.0 / 3.0) / 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_scores_sum_over_rounds() {
        let (players, positions) = scenario_a();
        let eval = FairnessEvaluator::new(&players, &positions, PlayerIdentity::Index);
        let ch = LineupChromosome::from_genes(vec![vec![0, 1, 2], vec![1, 0, 2]]);
        assert_eq!(eval.player_scores(&ch), vec![5.0, 5.0, 6.0]);
    }

    #[test]
    fn test_unread_tail_scores_zero() {
        let (players, _) = scenario_a();
        let positions = Position::list(["S1"]);
        let eval = FairnessEvaluator::new(&players, &positions, PlayerIdentity::Index);
        let ch = LineupChromosome::from_genes(vec![vec![0, 1, 2]]);

        // Only p1 holds a position; rank 0 of 1 slot → 1
        assert_eq!(eval.player_scores(&ch), vec![1.0, 0.0, 0.0]);
        assert!((eval.evaluate(&ch) - (1.0 / 3.0) / 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_name_identity_merges_namesakes() {
        let players = vec![
            Player::new("a").with_name("Sam").with_preferences(["X"]),
            Player::new("b").with_name("Sam").with_preferences(["Y"]),
        ];
        let positions = Position::list(["X", "Y"]);
        // X ← b, Y ← a: each sits in the other's favourite
        let ch = LineupChromosome::from_genes(vec![vec![1, 0]]);

        let by_index = FairnessEvaluator::new(&players, &positions, PlayerIdentity::Index);
        assert_eq!(by_index.player_scores(&ch), vec![0.0, 0.0]);
        assert_eq!(by_index.evaluate(&ch), 0.0);

        let by_name = FairnessEvaluator::new(&players, &positions, PlayerIdentity::Name);
        assert_eq!(by_name.player_scores(&ch), vec![2.0, 2.0]);
        assert!((by_name.evaluate(&ch) - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_distribution_equals_range() {
        let cases: [&[f64]; 5] = [
            &[3.0, 1.0, 2.0],
            &[5.0, 5.0, 5.0],
            &[0.0, 9.0, 4.0, 4.0, 1.0],
            &[7.0],
            &[2.5, -1.0],
        ];
        for scores in cases {
            let max = scores.iter().cloned().fold(f64::MIN, f64::max);
            let min = scores.iter().cloned().fold(f64::MAX, f64::min);
            assert!((distribution(scores) - (max - min)).abs() < 1e-10);
        }
        assert_eq!(distribution(&[]), 0.0);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(fairness(&[]), 0.0);

        let eval = FairnessEvaluator::new(&[], &Position::list(["A"]), PlayerIdentity::Index);
        let ch = LineupChromosome::from_genes(vec![Vec::new()]);
        assert_eq!(eval.evaluate(&ch), 0.0);
    }
}
