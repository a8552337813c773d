//! Move definitions and boundary parsing

use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::error::ParseMoveError;

/// A move in Rock Paper Scissors
///
/// Order is stable: the random draw indexes into [`Move::ALL`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// All options, in draw order
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Move at `index` in draw order, wrapping past the end
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Lowercase name, also the asset name used by frontends for the move icon
    pub fn icon(&self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }

    /// The move this one defeats
    pub fn beats(&self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.icon())
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" => Ok(Move::Rock),
            "paper" => Ok(Move::Paper),
            "scissors" => Ok(Move::Scissors),
            _ => Err(ParseMoveError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("rock".parse::<Move>(), Ok(Move::Rock));
        assert_eq!(" Paper ".parse::<Move>(), Ok(Move::Paper));
        assert_eq!("SCISSORS".parse::<Move>(), Ok(Move::Scissors));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!("lizard".parse::<Move>(), Err(ParseMoveError("lizard".to_string())));
        assert!("".parse::<Move>().is_err());
    }

    #[test]
    fn test_from_index_order() {
        assert_eq!(Move::from_index(0), Move::Rock);
        assert_eq!(Move::from_index(1), Move::Paper);
        assert_eq!(Move::from_index(2), Move::Scissors);
        assert_eq!(Move::from_index(3), Move::Rock);
    }

    #[test]
    fn test_beats_is_a_cycle() {
        for m in Move::ALL {
            assert_ne!(m.beats(), m);
            assert_ne!(m.beats().beats(), m);
            assert_eq!(m.beats().beats().beats(), m);
        }
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Move::Scissors).unwrap(), "\"scissors\"");
        let m: Move = serde_json::from_str("\"paper\"").unwrap();
        assert_eq!(m, Move::Paper);
    }
}
