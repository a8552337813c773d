//! Game state: players, scores, move history and the round counter
//!
//! Mutators are crate-private; outside code reads through immutable views
//! and changes state only by driving a [`crate::Session`].

use serde::Serialize;
use crate::moves::Move;

/// A named participant. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Player {
    pub id: u32,
    pub name: String,
}

/// Scores, history and remaining rounds for one session
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameState {
    players: Vec<Player>,
    player_score: u32,
    computer_score: u32,
    player_choices: Vec<Move>,
    computer_choices: Vec<Move>,
    round: u32,
}

impl GameState {
    /// Empty state with the round counter at `default_rounds`
    pub fn new(default_rounds: u32) -> Self {
        Self {
            players: Vec::new(),
            player_score: 0,
            computer_score: 0,
            player_choices: Vec::new(),
            computer_choices: Vec::new(),
            round: default_rounds,
        }
    }

    /// Append a player with the next sequential id and set the round counter
    pub(crate) fn add_player(&mut self, name: &str, rounds: u32) -> &Player {
        let id = self.players.last().map_or(0, |p| p.id + 1);
        self.players.push(Player { id, name: name.to_string() });
        self.round = rounds;
        &self.players[self.players.len() - 1]
    }

    /// Append one round to both histories
    pub(crate) fn record_move(&mut self, computer: Move, player: Move) {
        self.computer_choices.push(computer);
        self.player_choices.push(player);
    }

    pub(crate) fn increment_player_score(&mut self) {
        self.player_score += 1;
    }

    pub(crate) fn increment_computer_score(&mut self) {
        self.computer_score += 1;
    }

    /// Saturates at zero
    pub(crate) fn decrement_round(&mut self) {
        self.round = self.round.saturating_sub(1);
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The most recently added player
    pub fn player(&self) -> Option<&Player> {
        self.players.last()
    }

    /// Moves available to both sides, in draw order
    pub fn options(&self) -> &'static [Move] {
        &Move::ALL
    }

    pub fn player_score(&self) -> u32 {
        self.player_score
    }

    pub fn computer_score(&self) -> u32 {
        self.computer_score
    }

    pub fn player_choices(&self) -> &[Move] {
        &self.player_choices
    }

    pub fn computer_choices(&self) -> &[Move] {
        &self.computer_choices
    }

    /// Rounds remaining
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn rounds_played(&self) -> usize {
        self.player_choices.len()
    }

    /// Up to `n` most recent player moves, oldest first
    pub fn last_player_moves(&self, n: usize) -> &[Move] {
        tail(&self.player_choices, n)
    }

    /// Up to `n` most recent computer moves, oldest first
    pub fn last_computer_moves(&self, n: usize) -> &[Move] {
        tail(&self.computer_choices, n)
    }
}

fn tail(moves: &[Move], n: usize) -> &[Move] {
    &moves[moves.len().saturating_sub(n)..]
}
