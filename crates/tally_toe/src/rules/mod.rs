//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Nothing here mutates state, so every
//! check can be called any number of times with the same answer.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{WINNING_COMBINATIONS, check_winner, winning_line};

use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line yet and at least one empty cell.
    InProgress,
    /// A player completed a line.
    Win(Player),
    /// Every cell is marked and no line was completed.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(*player),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// True for [`Outcome::Win`] and [`Outcome::Draw`].
    pub fn is_finished(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Evaluates the board.
///
/// A win takes precedence over a full board; the first winning
/// combination in [`WINNING_COMBINATIONS`] order decides the winner.
#[instrument]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        return Outcome::Win(winner);
    }
    if is_full(board) {
        return Outcome::Draw;
    }
    Outcome::InProgress
}
