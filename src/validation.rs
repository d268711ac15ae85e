//! Input validation for lineup requests.
//!
//! The engine accepts any roster and position list and always returns
//! a lineup, so these checks are advisory: they flag input that makes
//! the result less meaningful. Detects:
//! - Duplicate player IDs (the lineup would be ambiguous)
//! - Duplicate player names (namesakes are merged under name identity)
//! - Duplicate position names
//! - Preferences naming positions that are not on offer
//! - Positions ranked twice by one player

use crate::models::{Player, Position};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two players or two positions share the same identifier.
    DuplicateId,
    /// Two players share a display name.
    DuplicateName,
    /// A preference names a position that is not in the list.
    UnknownPosition,
    /// A player ranks the same position more than once.
    RepeatedPreference,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for a lineup request.
///
/// Checks:
/// 1. No duplicate position names
/// 2. No duplicate player IDs
/// 3. No duplicate player display names
/// 4. Every preference names an offered position
/// 5. No player ranks a position twice
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(players: &[Player], positions: &[Position]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut position_names = HashSet::new();
    for p in positions {
        if !position_names.insert(p.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate position: {}", p.name),
            ));
        }
    }

    let mut player_ids = HashSet::new();
    let mut player_names = HashSet::new();
    for player in players {
        if !player_ids.insert(player.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate player ID: {}", player.id),
            ));
        }
        if !player_names.insert(player.display_name()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate player name: {}", player.display_name()),
            ));
        }

        let mut ranked = HashSet::new();
        for pref in &player.preferences {
            if !ranked.insert(pref.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::RepeatedPreference,
                    format!("Player '{}' ranks '{}' more than once", player.id, pref),
                ));
            } else if !position_names.contains(pref.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownPosition,
                    format!("Player '{}' prefers unknown position '{}'", player.id, pref),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
