//! View model rendering
//!
//! The presenter turns a [`GameState`] snapshot into a [`View`] that a
//! frontend can draw without touching game state. It holds only its
//! display settings.

use serde::Serialize;
use crate::moves::Move;
use crate::outcome::{Summary, Verdict};
use crate::session::Phase;
use crate::state::GameState;

/// Text for the introductory overlay shown before setup
pub const INTRO: &str = "Beat the computer at Rock Paper Scissors! \
Enter your name and how many rounds to play, then pick rock, paper or scissors each round. \
Rock crushes scissors, scissors cut paper, paper covers rock.";

/// Two-line message area: a round result or the end-of-game summary
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub headline: String,
    pub subtext: String,
}

impl From<&Verdict> for Banner {
    fn from(verdict: &Verdict) -> Self {
        Self {
            headline: verdict.headline.to_string(),
            subtext: verdict.subtext.to_string(),
        }
    }
}

impl From<&Summary> for Banner {
    fn from(summary: &Summary) -> Self {
        Self {
            headline: summary.headline.to_string(),
            subtext: summary.subtext.clone(),
        }
    }
}

/// Everything a frontend needs to draw one frame
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct View {
    pub phase: Phase,
    pub overlay_visible: bool,
    pub moves_enabled: bool,
    pub player_name: Option<String>,
    pub round: u32,
    pub player_score: u32,
    pub computer_score: u32,
    pub player_moves: Vec<Move>,
    pub computer_moves: Vec<Move>,
    pub banner: Option<Banner>,
}

/// Stateless renderer parameterised by the history window
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Presenter {
    history_window: usize,
}

impl Presenter {
    pub fn new(history_window: usize) -> Self {
        Self { history_window }
    }

    pub fn render(
        &self,
        state: &GameState,
        phase: Phase,
        overlay_visible: bool,
        banner: Option<&Banner>,
    ) -> View {
        View {
            phase,
            overlay_visible,
            moves_enabled: phase == Phase::Playing,
            player_name: state.player().map(|p| p.name.clone()),
            round: state.round(),
            player_score: state.player_score(),
            computer_score: state.computer_score(),
            player_moves: state.last_player_moves(self.history_window).to_vec(),
            computer_moves: state.last_computer_moves(self.history_window).to_vec(),
            banner: banner.cloned(),
        }
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new(3)
    }
}
