//! Session controller: setup, round resolution and the game lifecycle

use core::num::{IntErrorKind, ParseIntError};
use serde::Serialize;
use crate::config::GameConfig;
use crate::error::{PlayError, SetupError};
use crate::moves::Move;
use crate::outcome::{Outcome, Summary, Verdict};
use crate::presenter::{Banner, Presenter, View};
use crate::random::{MoveSource, SeededRng};
use crate::resolve;
use crate::state::{GameState, Player};

/// Lifecycle of a session
///
/// `Setup -> Playing -> Finished`. Finished is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Phase {
    Setup,
    Playing,
    Finished,
}

/// Result of a single round
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoundReport {
    /// 1-based index of this round within the session
    pub round_number: usize,
    pub player_move: Move,
    pub computer_move: Move,
    pub verdict: Verdict,
    /// Rounds left after this one
    pub rounds_left: u32,
    /// Present exactly on the round that finishes the game
    pub summary: Option<Summary>,
}

/// One game against the computer
pub struct Session<S: MoveSource = SeededRng> {
    config: GameConfig,
    state: GameState,
    phase: Phase,
    overlay_visible: bool,
    banner: Option<Banner>,
    presenter: Presenter,
    source: S,
}

impl<S: MoveSource> Session<S> {
    /// New session in setup, intro overlay showing
    pub fn new(config: GameConfig, source: S) -> Self {
        let state = GameState::new(config.default_rounds);
        let presenter = Presenter::new(config.history_window);
        Self {
            config,
            state,
            phase: Phase::Setup,
            overlay_visible: true,
            banner: None,
            presenter,
            source,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The summary once the game is finished
    pub fn summary(&self) -> Option<Summary> {
        match self.phase {
            Phase::Finished => Some(Summary::new(self.state.player_score(), self.state.computer_score())),
            _ => None,
        }
    }

    /// Current frame for the frontend
    pub fn view(&self) -> View {
        self.presenter.render(&self.state, self.phase, self.overlay_visible, self.banner.as_ref())
    }

    /// Hide the intro overlay without starting the game
    pub fn dismiss_intro(&mut self) {
        self.overlay_visible = false;
    }

    /// Submit the setup form
    ///
    /// On error nothing changes and the session stays in setup.
    pub fn submit_setup(&mut self, name: &str, rounds: &str) -> Result<&Player, SetupError> {
        if self.phase != Phase::Setup {
            return Err(SetupError::AlreadyStarted);
        }
        let rounds = match validate_setup(name, rounds, self.config.max_rounds) {
            Ok(rounds) => rounds,
            Err(e) => {
                log::warn!("setup rejected: {}", e);
                return Err(e);
            }
        };

        self.phase = Phase::Playing;
        self.overlay_visible = false;
        self.banner = None;
        let player = self.state.add_player(name.trim(), rounds);
        log::info!("player {} ({}) starts a {} round game", player.id, player.name, rounds);
        Ok(player)
    }

    /// Play one round with the player's move
    pub fn play(&mut self, player_move: Move) -> Result<RoundReport, PlayError> {
        match self.phase {
            Phase::Setup => return Err(PlayError::NotStarted),
            Phase::Finished => {
                log::warn!("move {} ignored, game is finished", player_move);
                return Err(PlayError::Finished);
            }
            Phase::Playing => {}
        }

        let computer_move = self.source.draw();
        self.state.record_move(computer_move, player_move);

        let verdict = resolve(player_move, computer_move);
        self.state.decrement_round();
        match verdict.outcome {
            Outcome::Win => self.state.increment_player_score(),
            Outcome::Lose => self.state.increment_computer_score(),
            Outcome::Tie => {}
        }

        let round_number = self.state.rounds_played();
        log::debug!(
            "round {}: {} vs {} -> {:?} ({}-{})",
            round_number,
            player_move,
            computer_move,
            verdict.outcome,
            self.state.player_score(),
            self.state.computer_score(),
        );

        let summary = if self.state.round() == 0 {
            self.phase = Phase::Finished;
            let summary = Summary::new(self.state.player_score(), self.state.computer_score());
            log::info!("game finished: {:?} {}-{}", summary.outcome, summary.player_score, summary.computer_score);
            self.banner = Some(Banner::from(&summary));
            Some(summary)
        } else {
            self.banner = Some(Banner::from(&verdict));
            None
        };

        Ok(RoundReport {
            round_number,
            player_move,
            computer_move,
            verdict,
            rounds_left: self.state.round(),
            summary,
        })
    }

    /// Parse a move from user text, then play it
    pub fn play_str(&mut self, player_move: &str) -> Result<RoundReport, PlayError> {
        let player_move: Move = player_move.parse()?;
        self.play(player_move)
    }
}

impl Session<SeededRng> {
    /// Session with the default config and a seeded opponent
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameConfig::default(), SeededRng::from_u64(seed))
    }
}

/// Check the setup form fields and return the round count
fn validate_setup(name: &str, rounds: &str, max_rounds: u32) -> Result<u32, SetupError> {
    if name.trim().is_empty() {
        return Err(SetupError::EmptyName);
    }
    let rounds = rounds.trim();
    if rounds.is_empty() {
        return Err(SetupError::EmptyRounds);
    }
    let requested: i64 = rounds.parse().map_err(|e: ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow => SetupError::TooManyRounds { requested: u32::MAX, max: max_rounds },
        IntErrorKind::NegOverflow => SetupError::NonPositiveRounds(i64::MIN),
        _ => SetupError::InvalidRounds(rounds.to_string()),
    })?;
    if requested < 1 {
        return Err(SetupError::NonPositiveRounds(requested));
    }
    let requested = u32::try_from(requested).unwrap_or(u32::MAX);
    if requested > max_rounds {
        return Err(SetupError::TooManyRounds { requested, max: max_rounds });
    }
    Ok(requested)
}
