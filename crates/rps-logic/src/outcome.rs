//! Round and game outcomes with their display messages

use serde::{Deserialize, Serialize};
use crate::moves::Move;

pub const PAPER_MSG: &str = "Paper covers rock";
pub const ROCK_MSG: &str = "Rock crushes scissors";
pub const SCISSORS_MSG: &str = "Scissors cut paper";
pub const TIE_MSG: &str = "Tie";
/// Subtext of a tied round. The final summary uses [`TIE_MSG`] instead.
pub const EQUALITY_MSG: &str = "Try again";
pub const LOST_MSG: &str = "You Lost:(";
pub const WIN_MSG: &str = "You win :)";

/// Outcome from the player's point of view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
    Tie,
}

impl Outcome {
    /// Outcome of a whole game from the final scores
    pub fn from_scores(player_score: u32, computer_score: u32) -> Self {
        match player_score.cmp(&computer_score) {
            core::cmp::Ordering::Greater => Outcome::Win,
            core::cmp::Ordering::Less => Outcome::Lose,
            core::cmp::Ordering::Equal => Outcome::Tie,
        }
    }
}

/// Rationale shown when `winner` takes the round
pub fn rationale(winner: Move) -> &'static str {
    match winner {
        Move::Rock => ROCK_MSG,
        Move::Paper => PAPER_MSG,
        Move::Scissors => SCISSORS_MSG,
    }
}

/// A resolved round: classification plus the two lines shown for it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub outcome: Outcome,
    pub headline: &'static str,
    pub subtext: &'static str,
}

/// End-of-game summary
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub outcome: Outcome,
    pub headline: &'static str,
    pub subtext: String,
    pub player_score: u32,
    pub computer_score: u32,
}

impl Summary {
    pub fn new(player_score: u32, computer_score: u32) -> Self {
        let outcome = Outcome::from_scores(player_score, computer_score);
        let headline = match outcome {
            Outcome::Win => WIN_MSG,
            Outcome::Lose => LOST_MSG,
            Outcome::Tie => TIE_MSG,
        };
        Self {
            outcome,
            headline,
            subtext: format!("Your total score is :{}", player_score),
            player_score,
            computer_score,
        }
    }
}
