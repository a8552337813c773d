//! Game logic for Rock Paper Scissors
//!
//! A human player against a uniformly random computer over a fixed number
//! of rounds. This crate is compiled to:
//! - Native (for the terminal frontend)
//! - WASM (for the browser frontend)

mod config;
mod error;
mod moves;
mod outcome;
mod presenter;
mod random;
mod session;
mod state;

#[cfg(feature = "wasm")]
mod wasm;

pub use config::GameConfig;
pub use error::{ConfigError, ParseMoveError, PlayError, SetupError};
pub use moves::Move;
pub use outcome::{
    rationale, Outcome, Summary, Verdict, EQUALITY_MSG, LOST_MSG, PAPER_MSG, ROCK_MSG,
    SCISSORS_MSG, TIE_MSG, WIN_MSG,
};
pub use presenter::{Banner, Presenter, View, INTRO};
pub use random::{MoveSource, SeededRng};
pub use session::{Phase, RoundReport, Session};
pub use state::{GameState, Player};

/// Resolve one round from the player's point of view
pub fn resolve(player: Move, computer: Move) -> Verdict {
    let (outcome, headline, subtext) = match (player, computer) {
        (Move::Rock, Move::Rock) => (Outcome::Tie, TIE_MSG, EQUALITY_MSG),
        (Move::Rock, Move::Paper) => (Outcome::Lose, PAPER_MSG, LOST_MSG),
        (Move::Rock, Move::Scissors) => (Outcome::Win, ROCK_MSG, WIN_MSG),
        (Move::Paper, Move::Rock) => (Outcome::Win, PAPER_MSG, WIN_MSG),
        (Move::Paper, Move::Paper) => (Outcome::Tie, TIE_MSG, EQUALITY_MSG),
        (Move::Paper, Move::Scissors) => (Outcome::Lose, SCISSORS_MSG, LOST_MSG),
        (Move::Scissors, Move::Rock) => (Outcome::Lose, ROCK_MSG, LOST_MSG),
        (Move::Scissors, Move::Paper) => (Outcome::Win, SCISSORS_MSG, WIN_MSG),
        (Move::Scissors, Move::Scissors) => (Outcome::Tie, TIE_MSG, EQUALITY_MSG),
    };
    Verdict { outcome, headline, subtext }
}
