//! Top-level lineup assignment.
//!
//! # Algorithm
//!
//! 1. Empty roster or empty position list → every position unassigned,
//!    no search.
//! 2. Otherwise run the GA ([`GaRunner`]) over the roster.
//! 3. Decode round 0 of the winning chromosome in position order.
//!
//! Each call owns its population; concurrent calls share nothing but
//! whatever RNG the caller hands in.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ga::{ConfigError, GaConfig, GaRunner, LineupProblem};
use crate::models::{Lineup, Player, Position};

/// Input container for one assignment request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LineupRequest {
    /// Players to place.
    pub players: Vec<Player>,
    /// Positions to fill, in output order.
    pub positions: Vec<Position>,
}

impl LineupRequest {
    /// Creates a request.
    pub fn new(players: Vec<Player>, positions: Vec<Position>) -> Self {
        Self { players, positions }
    }

    /// Adds a player.
    pub fn with_player(mut self, player: Player) -> Self {
        self.players.push(player);
        self
    }

    /// Adds a position at the end of the position order.
    pub fn with_position(mut self, position: impl Into<Position>) -> Self {
        self.positions.push(position.into());
        self
    }
}

/// Assigns players to positions with default settings and the thread RNG.
///
/// Not reproducible between calls; use [`generate_assignment_with`] or a
/// seeded [`LineupScheduler`] for deterministic runs.
pub fn generate_assignment(players: &[Player], positions: &[Position]) -> Lineup {
    generate_assignment_with(players, positions, &GaConfig::default(), &mut rand::rng())
}

/// Assigns players to positions with an explicit config and RNG.
///
/// Never fails: out-of-range settings degrade (rounds floor at 1,
/// mutation rate clamps to `[0, 1]`) instead of erroring. Use
/// [`LineupScheduler::new`] to reject them up front.
pub fn generate_assignment_with<R: Rng>(
    players: &[Player],
    positions: &[Position],
    config: &GaConfig,
    rng: &mut R,
) -> Lineup {
    let problem = LineupProblem::new(players, positions)
        .with_rounds(config.rounds)
        .with_identity(config.identity);

    if problem.is_trivial() {
        debug!(
            players = players.len(),
            positions = positions.len(),
            "nothing to search, all positions unassigned"
        );
        return Lineup::unassigned(positions);
    }

    let result = GaRunner::run(&problem, config, rng);
    problem.decode(&result.best)
}

/// Config-validated lineup scheduler.
///
/// # Example
/// ```
/// use u_lineup::ga::GaConfig;
/// use u_lineup::models::{Player, Position};
/// use u_lineup::scheduler::{LineupRequest, LineupScheduler};
///
/// let scheduler = LineupScheduler::new(GaConfig::default().with_seed(42)).unwrap();
/// let request = LineupRequest::new(
///     vec![Player::new("p1").with_preferences(["GK"])],
///     Position::list(["GK", "DF"]),
/// );
/// let lineup = scheduler.schedule(&request);
/// assert_eq!(lineup.get("GK"), Some(Some("p1")));
/// assert_eq!(lineup.get("DF"), Some(None));
/// ```
#[derive(Debug, Clone)]
pub struct LineupScheduler {
    config: GaConfig,
}

impl LineupScheduler {
    /// Creates a scheduler after validating `config`.
    pub fn new(config: GaConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Runs one request, seeded from `config.seed` when set.
    pub fn schedule(&self, request: &LineupRequest) -> Lineup {
        let mut rng = match self.config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        };
        self.schedule_with_rng(request, &mut rng)
    }

    /// Runs one request with a caller-supplied RNG.
    pub fn schedule_with_rng<R: Rng>(&self, request: &LineupRequest, rng: &mut R) -> Lineup {
        generate_assignment_with(&request.players, &request.positions, &self.config, rng)
    }
}

impl Default for LineupScheduler {
    fn default() -> Self {
        Self {
            config: GaConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn scenario_a() -> (Vec<Player>, Vec<Position>) {
        let players = vec![
            Player::new("p1").with_preferences(["S1", "S2", "S3"]),
            Player::new("p2").with_preferences(["S2", "S1", "S3"]),
            Player::new("p3").with_preferences(["S3", "S2", "S1"]),
        ];
        (players, Position::list(["S1", "S2", "S3"]))
    }

    fn seeded() -> SmallRng {
        SmallRng::seed_from_u64(42)
    }

    #[test]
    fn test_scenario_a_all_assigned_distinct() {
        let (players, positions) = scenario_a();
        let lineup = generate_assignment(&players, &positions);

        assert_eq!(lineup.len(), 3);
        assert!(lineup.is_complete());
        let ids: HashSet<&str> = lineup.player_ids().into_iter().collect();
        assert_eq!(ids, HashSet::from(["p1", "p2", "p3"]));
    }

    #[test]
    fn test_scenario_b_surplus_positions() {
        let players = vec![
            Player::new("p1").with_preferences(["A", "B"]),
            Player::new("p2").with_preferences(["B", "A"]),
        ];
        let positions = Position::list(["A", "B", "C", "D"]);
        let lineup = generate_assignment_with(&players, &positions, &GaConfig::default(), &mut seeded());

        assert_eq!(lineup.assigned_count(), 2);
        assert_eq!(lineup.unassigned_count(), 2);
        let ids: HashSet<&str> = lineup.player_ids().into_iter().collect();
        assert_eq!(ids, HashSet::from(["p1", "p2"]));
    }

    #[test]
    fn test_scenario_c_no_players() {
        let positions = Position::list(["X", "Y"]);
        let lineup = generate_assignment(&[], &positions);

        let map = lineup.to_map();
        assert_eq!(map.len(), 2);
        assert_eq!(map["X"], None);
        assert_eq!(map["Y"], None);
    }

    #[test]
    fn test_scenario_d_unranked_player_still_placed() {
        let players = vec![Player::new("solo")];
        let positions = Position::list(["Z"]);
        let lineup = generate_assignment(&players, &positions);
        assert_eq!(lineup.get("Z"), Some(Some("solo")));
    }

    #[test]
    fn test_no_positions() {
        let (players, _) = scenario_a();
        let lineup = generate_assignment(&players, &[]);
        assert!(lineup.is_empty());
    }

    #[test]
    fn test_more_players_than_positions() {
        let (mut players, _) = scenario_a();
        players.push(Player::new("p4").with_preferences(["S1"]));
        players.push(Player::new("p5"));
        let positions = Position::list(["S1", "S2"]);

        for seed in 0..10 {
            let lineup = generate_assignment_with(
                &players,
                &positions,
                &GaConfig::default(),
                &mut SmallRng::seed_from_u64(seed),
            );
            assert!(lineup.is_complete());
            let ids = lineup.player_ids();
            let unique: HashSet<&str> = ids.iter().copied().collect();
            assert_eq!(unique.len(), ids.len());
        }
    }

    #[test]
    fn test_output_covers_input_positions_in_order() {
        let (players, positions) = scenario_a();
        let lineup = generate_assignment_with(&players, &positions, &GaConfig::default(), &mut seeded());
        let names: Vec<&str> = lineup.iter().map(|e| e.position.as_str()).collect();
        assert_eq!(names, vec!["S1", "S2", "S3"]);
    }

    #[test]
    fn test_inputs_not_mutated() {
        let (players, positions) = scenario_a();
        let players_before = players.clone();
        let positions_before = positions.clone();

        let _ = generate_assignment(&players, &positions);
        let _ = generate_assignment(&players, &positions);
        assert_eq!(players, players_before);
        assert_eq!(positions, positions_before);
    }

    #[test]
    fn test_seeded_scheduler_is_deterministic() {
        let (players, positions) = scenario_a();
        let request = LineupRequest::new(players, positions);
        let scheduler = LineupScheduler::new(GaConfig::default().with_seed(9)).unwrap();

        assert_eq!(scheduler.schedule(&request), scheduler.schedule(&request));
    }

    #[test]
    fn test_scheduler_rejects_invalid_config() {
        let err = LineupScheduler::new(GaConfig::default().with_mutation_rate(-0.1)).unwrap_err();
        assert!(matches!(err, ConfigError::MutationRate(_)));
    }

    #[test]
    fn test_unvalidated_config_degrades() {
        let (players, positions) = scenario_a();
        let config = GaConfig::default()
            .with_population_size(0)
            .with_rounds(0)
            .with_mutation_rate(3.0);
        let lineup = generate_assignment_with(&players, &positions, &config, &mut seeded());
        assert!(lineup.is_complete());
    }

    #[test]
    fn test_request_builder_and_serde() {
        let request = LineupRequest::default()
            .with_player(Player::new("p1").with_preferences(["A"]))
            .with_position("A");
        let json = serde_json::to_string(&request).unwrap();
        let back: LineupRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back.players, request.players);
        assert_eq!(back.positions, request.positions);

        let lineup = LineupScheduler::default().schedule_with_rng(&back, &mut seeded());
        assert_eq!(lineup.get("A"), Some(Some("p1")));
    }
}
