//! Position (slot) model.

use serde::{Deserialize, Serialize};

/// A position that holds at most one player per round.
///
/// Positions are identified purely by name. The order of the position
/// list given to the engine defines which chromosome entry maps to
/// which position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Position {
    /// Position name (matched against player preferences).
    pub name: String,
}

impl Position {
    /// Creates a position.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Builds a position list from names, preserving order.
    pub fn list<I, S>(names: I) -> Vec<Position>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().map(Position::new).collect()
    }
}

impl From<&str> for Position {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Position {
    fn from(name: String) -> Self {
        Self { name }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
