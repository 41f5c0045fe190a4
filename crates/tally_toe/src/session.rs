//! One interactive session: turns, scores and the front end wired together.

use super::config::GameConfig;
use super::frontend::{Announcement, Notifier, Renderer, Snapshot};
use super::ledger::ScoreLedger;
use super::store::{KeyValueStore, StoreError};
use super::turn::{MoveSignal, TurnState};
use super::{Board, Player};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// A game session.
///
/// Each call to [`GameSession::play`] runs one move to completion: the
/// turn controller, the score update and save, and every redraw and
/// announcement happen before it returns.
#[derive(Debug)]
pub struct GameSession<S, F> {
    state: TurnState,
    ledger: ScoreLedger,
    store: S,
    frontend: F,
    announce_delay: Duration,
}

impl<S, F> GameSession<S, F>
where
    S: KeyValueStore,
    F: Renderer + Notifier,
{
    /// Starts a session, loading scores from `store` and drawing the first frame.
    #[instrument(skip_all)]
    pub fn new(store: S, frontend: F, config: &GameConfig) -> Self {
        let ledger = ScoreLedger::load(&store);
        let mut session = Self {
            state: TurnState::new(*config.first_player(), *config.starter_policy()),
            ledger,
            store,
            frontend,
            announce_delay: config.announce_delay(),
        };
        info!(
            first = %config.first_player(),
            policy = ?config.starter_policy(),
            "Session started"
        );
        session.redraw_current();
        session
    }

    /// Plays the active player's mark at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if saving the scores after a win fails. The
    /// win is still drawn and announced, and the in-memory scores and board
    /// are already updated at that point.
    #[instrument(skip(self))]
    pub fn play(&mut self, index: usize) -> Result<MoveSignal, StoreError> {
        let mover = *self.state.active();
        let (next, signal) = self.state.handle_move(index);
        self.state = next;

        match signal {
            MoveSignal::Ignored => {}
            MoveSignal::Accepted => self.redraw_current(),
            MoveSignal::Won { winner, board } => {
                self.ledger = self.ledger.record_win(winner);
                let saved = self.ledger.save(&mut self.store);
                if let Err(e) = &saved {
                    warn!(error = %e, "Failed to save scores");
                }
                self.finish(&board, mover, Announcement::Win(winner));
                saved?;
            }
            MoveSignal::Drawn { board } => {
                self.finish(&board, mover, Announcement::Draw);
            }
        }

        Ok(signal)
    }

    /// Current turn state.
    pub fn state(&self) -> &TurnState {
        &self.state
    }

    /// Current scores.
    pub fn ledger(&self) -> &ScoreLedger {
        &self.ledger
    }

    /// Backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Front end.
    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    /// Mutable front end, for reading input between moves.
    pub fn frontend_mut(&mut self) -> &mut F {
        &mut self.frontend
    }

    /// Consumes the session, returning the store and the front end.
    pub fn into_parts(self) -> (S, F) {
        (self.store, self.frontend)
    }

    fn finish(&mut self, final_board: &Board, last_mover: Player, announcement: Announcement) {
        self.frontend.redraw(&Snapshot {
            board: final_board,
            active: last_mover,
            ledger: &self.ledger,
        });
        if !self.announce_delay.is_zero() {
            debug!(delay_ms = self.announce_delay.as_millis() as u64, "Pausing before announcement");
            std::thread::sleep(self.announce_delay);
        }
        self.frontend.announce(&announcement);
        self.redraw_current();
    }

    fn redraw_current(&mut self) {
        self.frontend.redraw(&Snapshot {
            board: self.state.board(),
            active: *self.state.active(),
            ledger: &self.ledger,
        });
    }
}
