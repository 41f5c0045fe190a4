//! Tally Toe - tic-tac-toe with a persisted running score.
//!
//! # Architecture
//!
//! - **Board**: nine cells, row-major, never overwritten until reset
//! - **Rules**: pure win/draw evaluation over the 8 winning lines
//! - **Turns**: [`TurnState`] consumed and returned by each move
//! - **Scores**: [`ScoreLedger`] loaded from and saved to a [`KeyValueStore`]
//! - **Session**: [`GameSession`] sequences a move with its side effects
//!   and drives a [`Renderer`] and a [`Notifier`]
//!
//! # Example
//!
//! ```
//! use tally_toe::{evaluate, Board, Outcome, Player};
//!
//! let board = Board::new()
//!     .apply_move(0, Player::X)
//!     .apply_move(1, Player::X)
//!     .apply_move(2, Player::X);
//! assert_eq!(evaluate(&board), Outcome::Win(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod frontend;
mod ledger;
mod position;
mod rules;
mod session;
mod store;
mod turn;
mod types;

pub use config::{ConfigError, GameConfig};
pub use frontend::{Announcement, Notifier, Renderer, Snapshot};
pub use ledger::{SCORES_KEY, ScoreLedger};
pub use position::Position;
pub use rules::{
    Outcome, WINNING_COMBINATIONS, check_winner, evaluate, is_full, winning_line,
};
pub use session::GameSession;
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
pub use turn::{MoveSignal, StarterPolicy, TurnState};
pub use types::{Board, Player, Square};

/// Alias matching the board vocabulary: a player is identified by its mark.
pub type Mark = Player;
