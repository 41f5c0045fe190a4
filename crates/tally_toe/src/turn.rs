//! Turn controller.
//!
//! [`TurnState`] is a plain value: each move consumes it and hands back
//! the next state together with a [`MoveSignal`] telling the caller what
//! happened. A finished game never outlives the call that finished it;
//! the returned state is already reset for the next game.

use super::rules::{self, Outcome};
use super::{Board, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Who starts the game after one ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StarterPolicy {
    /// The same player starts every game.
    #[default]
    Fixed,
    /// The starter alternates from game to game.
    Alternate,
}

impl StarterPolicy {
    /// Starter of the game following one started by `previous`.
    pub fn next_starter(self, previous: Player) -> Player {
        match self {
            StarterPolicy::Fixed => previous,
            StarterPolicy::Alternate => previous.opponent(),
        }
    }
}

/// What a move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSignal {
    /// Occupied or out-of-range cell; nothing changed.
    Ignored,
    /// Mark placed, turn passed to the opponent.
    Accepted,
    /// The move completed a line. `board` is the final board.
    Won {
        /// Player who completed the line.
        winner: Player,
        /// Board before the reset.
        board: Board,
    },
    /// The move filled the board without a line. `board` is the final board.
    Drawn {
        /// Board before the reset.
        board: Board,
    },
}

impl MoveSignal {
    /// True if the move ended a game.
    pub fn is_game_over(&self) -> bool {
        matches!(self, MoveSignal::Won { .. } | MoveSignal::Drawn { .. })
    }
}

/// Board plus whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct TurnState {
    /// Current board.
    board: Board,
    /// Player to move.
    active: Player,
    /// Player who started the current game.
    starter: Player,
    /// How the next starter is chosen.
    policy: StarterPolicy,
}

impl TurnState {
    /// Fresh game with `first` to move.
    #[instrument]
    pub fn new(first: Player, policy: StarterPolicy) -> Self {
        Self {
            board: Board::new(),
            active: first,
            starter: first,
            policy,
        }
    }

    /// Plays the active player's mark at `index`.
    ///
    /// Occupied and out-of-range cells return the state unchanged with
    /// [`MoveSignal::Ignored`]. A win or draw resets the board and picks the
    /// next starter by policy.
    #[instrument(skip(self), fields(player = %self.active))]
    pub fn handle_move(self, index: usize) -> (TurnState, MoveSignal) {
        let board = self.board.apply_move(index, self.active);
        if board == self.board {
            debug!(index, "Move ignored");
            return (self, MoveSignal::Ignored);
        }

        match rules::evaluate(&board) {
            Outcome::InProgress => {
                let next = TurnState {
                    board,
                    active: self.active.opponent(),
                    ..self
                };
                debug!(index, next = %next.active, "Move accepted");
                (next, MoveSignal::Accepted)
            }
            Outcome::Win(winner) => {
                info!(%winner, "Game won");
                (self.next_game(), MoveSignal::Won { winner, board })
            }
            Outcome::Draw => {
                info!("Game drawn");
                (self.next_game(), MoveSignal::Drawn { board })
            }
        }
    }

    fn next_game(self) -> TurnState {
        let starter = self.policy.next_starter(self.starter);
        TurnState {
            board: Board::reset(),
            active: starter,
            starter,
            policy: self.policy,
        }
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new(Player::X, StarterPolicy::default())
    }
}
