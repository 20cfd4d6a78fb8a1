//! Game difficulty levels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Difficulty a game session was played at.
///
/// The wire and storage form is the upper-case name (`EASY`, `NORMAL`,
/// `HARD`); parsing accepts any casing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    /// Slower obstacles
    #[serde(alias = "easy", alias = "Easy")]
    Easy,
    /// Baseline speed
    #[default]
    #[serde(alias = "normal", alias = "Normal")]
    Normal,
    /// Faster obstacles
    #[serde(alias = "hard", alias = "Hard")]
    Hard,
}

impl Difficulty {
    /// Name stored locally and sent to the remote leaderboard.
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Easy => "EASY",
            Self::Normal => "NORMAL",
            Self::Hard => "HARD",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Normal => "Normal",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

/// Returned when a string does not name a known difficulty.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown difficulty: {0}")]
pub struct ParseDifficultyError(pub String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EASY" => Ok(Self::Easy),
            "NORMAL" => Ok(Self::Normal),
            "HARD" => Ok(Self::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!(" Easy ".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert!("nightmare".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_serde_uses_wire_name() {
        let json = serde_json::to_string(&Difficulty::Normal).unwrap();
        assert_eq!(json, "\"NORMAL\"");

        let parsed: Difficulty = serde_json::from_str("\"hard\"").unwrap();
        assert_eq!(parsed, Difficulty::Hard);
    }
}
