//! Player (participant) model.
//!
//! A player is a roster entry that competes for one position per round.
//! Players carry an ordered preference list of position names, most
//! preferred first.

use serde::{Deserialize, Serialize};

/// A player to be placed into a position.
///
/// Players are read-only for the duration of one assignment request;
/// the engine never reorders or mutates the caller's roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Stable player identifier (emitted in the resulting lineup).
    pub id: String,
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
    /// Preferred position names, most preferred first.
    #[serde(default, alias = "preference")]
    pub preferences: Vec<String>,
}

impl Player {
    /// Creates a player with no name and no preferences.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            preferences: Vec::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Replaces the preference list.
    pub fn with_preferences<I, S>(mut self, preferences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferences = preferences.into_iter().map(Into::into).collect();
        self
    }

    /// Appends one position to the end of the preference list.
    pub fn prefer(mut self, position: impl Into<String>) -> Self {
        self.preferences.push(position.into());
        self
    }

    /// Name used for display and for name-based identity matching.
    ///
    /// Falls back to the id when no name was given.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }

    /// 0-based rank of `position` in the preference list (0 = top choice).
    pub fn rank_of(&self, position: &str) -> Option<usize> {
        self.preferences.iter().position(|p| p == position)
    }

    /// Whether the player ranked any position at all.
    pub fn has_preferences(&self) -> bool {
        !self.preferences.is_empty()
    }
}
