//! Fair lineup assignment for the U-Engine ecosystem.
//!
//! Places players into a fixed set of positions for one round so that
//! players mostly get positions they ranked highly and satisfaction is
//! spread evenly. The matching is found with a genetic algorithm, which
//! trades optimality for a bounded, predictable running time.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Player`, `Position`, `Lineup`
//! - **`ga`**: Chromosome, fairness fitness, selection, operators, runner
//! - **`scheduler`**: Entry points (`generate_assignment`, `LineupScheduler`) and KPIs
//! - **`validation`**: Advisory input checks (duplicate IDs/names, unknown positions)
//!
//! # Example
//!
//! ```
//! use u_lineup::models::{Player, Position};
//! use u_lineup::scheduler::generate_assignment;
//!
//! let players = vec![
//!     Player::new("p1").with_preferences(["S1", "S2"]),
//!     Player::new("p2").with_preferences(["S2", "S1"]),
//! ];
//! let positions = Position::list(["S1", "S2", "S3"]);
//!
//! let lineup = generate_assignment(&players, &positions);
//! assert_eq!(lineup.assigned_count(), 2);
//! assert_eq!(lineup.get("S3"), Some(None));
//! ```
//!
//! # References
//!
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization, and Machine Learning"

pub mod ga;
pub mod models;
pub mod scheduler;
pub mod validation;
