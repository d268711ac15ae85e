//! Lineup quality metrics (KPIs).
//!
//! Computes satisfaction indicators from a finished lineup and the
//! roster it was built from, using the same reward as the GA fitness:
//! a player placed at their rank-`r` choice scores `slots - r`.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Mean satisfaction | Average player score |
//! | Spread | max(score) - min(score) |
//! | Fairness | mean / (spread + 1) |
//! | Top-choice rate | Placed players holding their rank-0 choice |
//! | Unranked placements | Placed players holding a position they did not rank |

use std::collections::HashMap;

use crate::ga::fitness::{distribution, fairness, mean};
use crate::models::{Lineup, Player};

/// Lineup performance indicators.
#[derive(Debug, Clone)]
pub struct LineupKpi {
    /// Score per player id (0 for unplaced players).
    pub satisfaction_by_player: HashMap<String, usize>,
    /// Average score across the roster.
    pub mean_satisfaction: f64,
    /// Difference between the highest and lowest score.
    pub spread: f64,
    /// `mean / (spread + 1)`; matches single-round GA fitness.
    pub fairness: f64,
    /// Positions holding a player.
    pub assigned_count: usize,
    /// Positions left empty.
    pub unassigned_count: usize,
    /// Fraction of placed players in their top choice (0.0..1.0).
    pub top_choice_rate: f64,
    /// Placed players sitting in a position they did not rank.
    pub unranked_placements: usize,
}

impl LineupKpi {
    /// Computes KPIs from a lineup and its roster.
    pub fn calculate(lineup: &Lineup, players: &[Player]) -> Self {
        let slot_count = lineup.len();
        let mut satisfaction_by_player = HashMap::new();
        let mut scores = Vec::with_capacity(players.len());
        let mut placed = 0usize;
        let mut top_choice = 0usize;
        let mut unranked = 0usize;

        for player in players {
            let score = match lineup.position_of(&player.id) {
                Some(position) => {
                    placed += 1;
                    match player.rank_of(position) {
                        Some(rank) => {
                            if rank == 0 {
                                top_choice += 1;
                            }
                            slot_count.saturating_sub(rank)
                        }
                        None => {
                            unranked += 1;
                            0
                        }
                    }
                }
                None => 0,
            };
            satisfaction_by_player.insert(player.id.clone(), score);
            scores.push(score as f64);
        }

        let top_choice_rate = if placed == 0 {
            0.0
        } else {
            top_choice as f64 / placed as f64
        };

        Self {
            satisfaction_by_player,
            mean_satisfaction: mean(&scores),
            spread: distribution(&scores),
            fairness: fairness(&scores),
            assigned_count: lineup.assigned_count(),
            unassigned_count: lineup.unassigned_count(),
            top_choice_rate,
            unranked_placements: unranked,
        }
    }

    /// Whether the lineup meets the given quality thresholds.
    pub fn meets_thresholds(&self, min_top_choice_rate: f64, max_spread: f64) -> bool {
        self.top_choice_rate >= min_top_choice_rate && self.spread <= max_spread
    }
}
