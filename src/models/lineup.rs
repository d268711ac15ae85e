//! Lineup (solution) model.
//!
//! A lineup is the externally consumed result of one assignment request:
//! exactly one entry per input position, each holding either a player id
//! or the "unassigned" marker (`None`).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::Position;

/// Position → player assignment for a single round.
///
/// Entries are kept in the caller's position order. Serialized as a
/// list of `{ "position": .., "player_id": .. }` objects where an
/// unassigned position carries `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lineup {
    /// One entry per position, in input order.
    pub entries: Vec<LineupEntry>,
}

/// A single position and its occupant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineupEntry {
    /// Position name.
    pub position: String,
    /// Assigned player id. `None` = unassigned.
    pub player_id: Option<String>,
}

impl LineupEntry {
    /// Creates an entry.
    pub fn new(position: impl Into<String>, player_id: Option<String>) -> Self {
        Self {
            position: position.into(),
            player_id,
        }
    }

    /// Whether a player occupies this position.
    #[inline]
    pub fn is_assigned(&self) -> bool {
        self.player_id.is_some()
    }
}

impl Lineup {
    /// Creates an empty lineup.
    pub fn new() -> Self {
        Self::default()
    }

    /// A lineup marking every position unassigned.
    pub fn unassigned(positions: &[Position]) -> Self {
        Self {
            entries: positions
                .iter()
                .map(|p| LineupEntry::new(p.name.clone(), None))
                .collect(),
        }
    }

    /// Appends an entry.
    pub fn push(&mut self, position: impl Into<String>, player_id: Option<String>) {
        self.entries.push(LineupEntry::new(position, player_id));
    }

    /// Occupant of the first position with this name.
    ///
    /// Returns `None` for unknown positions and `Some(None)` for
    /// unassigned ones.
    pub fn get(&self, position: &str) -> Option<Option<&str>> {
        self.entries
            .iter()
            .find(|e| e.position == position)
            .map(|e| e.player_id.as_deref())
    }

    /// Position held by the given player, if any.
    pub fn position_of(&self, player_id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.player_id.as_deref() == Some(player_id))
            .map(|e| e.position.as_str())
    }

    /// Iterates entries in position order.
    pub fn iter(&self) -> impl Iterator<Item = &LineupEntry> {
        self.entries.iter()
    }

    /// Assigned player ids, in position order.
    pub fn player_ids(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(|e| e.player_id.as_deref())
            .collect()
    }

    /// Number of positions with a player.
    pub fn assigned_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_assigned()).count()
    }

    /// Number of unassigned positions.
    pub fn unassigned_count(&self) -> usize {
        self.entries.len() - self.assigned_count()
    }

    /// Whether every position is filled.
    pub fn is_complete(&self) -> bool {
        self.entries.iter().all(LineupEntry::is_assigned)
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the lineup has no positions.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position name → occupant map.
    ///
    /// Duplicate position names collapse to the last entry.
    pub fn to_map(&self) -> HashMap<String, Option<String>> {
        self.entries
            .iter()
            .map(|e| (e.position.clone(), e.player_id.clone()))
            .collect()
    }
}
