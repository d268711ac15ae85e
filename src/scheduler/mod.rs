//! Lineup assignment entry points and KPI evaluation.
//!
//! # Entry points
//!
//! - [`generate_assignment`]: default settings, thread RNG
//! - [`generate_assignment_with`]: explicit config and RNG
//! - [`LineupScheduler`]: validated config, optional fixed seed
//!
//! # KPI
//!
//! `LineupKpi` reports satisfaction, spread, and top-choice coverage of
//! a finished lineup.

mod assign;
mod kpi;

pub use assign::{LineupRequest, LineupScheduler, generate_assignment, generate_assignment_with};
pub use kpi::LineupKpi;
