//! Seams to the presentation layer.
//!
//! The core never draws or prompts by itself. A front end implements
//! [`Renderer`] to be redrawn after every transition and [`Notifier`] to
//! show the end-of-game message.

use super::{Board, Player, ScoreLedger};

/// End-of-game message shown to the players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Announcement {
    /// A player completed a line.
    #[display("Congrats player {}! You're the winner", _0)]
    Win(Player),
    /// The board filled up without a line.
    #[display("Game ended in a draw!")]
    Draw,
}

/// What a renderer needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot<'a> {
    /// Board to draw.
    pub board: &'a Board,
    /// Player who moves next.
    pub active: Player,
    /// Running scores.
    pub ledger: &'a ScoreLedger,
}

/// Subscriber redrawn after each state transition.
pub trait Renderer {
    /// Draws `snapshot`.
    fn redraw(&mut self, snapshot: &Snapshot<'_>);
}

/// Blocking acknowledgment of a finished game.
pub trait Notifier {
    /// Shows `announcement` and returns once the user has seen it.
    fn announce(&mut self, announcement: &Announcement);
}

impl<T: Renderer + ?Sized> Renderer for &mut T {
    fn redraw(&mut self, snapshot: &Snapshot<'_>) {
        (**self).redraw(snapshot);
    }
}

impl<T: Notifier + ?Sized> Notifier for &mut T {
    fn announce(&mut self, announcement: &Announcement) {
        (**self).announce(announcement);
    }
}
