//! Persisted win counts per player.

use super::Player;
use super::store::{KeyValueStore, StoreError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Store key holding the serialized ledger.
pub const SCORES_KEY: &str = "scores";

/// Win count per player.
///
/// Serializes as `{"X": n, "O": n}`. A missing entry reads as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreLedger {
    #[serde(rename = "X")]
    x: u32,
    #[serde(rename = "O")]
    o: u32,
}

impl ScoreLedger {
    /// Ledger with no wins for either player.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Wins recorded for `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Wins across both players.
    pub fn total(&self) -> u32 {
        self.x.saturating_add(self.o)
    }

    /// Returns the ledger with one more win for `player`.
    #[must_use]
    #[instrument]
    pub fn record_win(self, player: Player) -> Self {
        let mut next = self;
        match player {
            Player::X => next.x = next.x.saturating_add(1),
            Player::O => next.o = next.o.saturating_add(1),
        }
        debug!(x = next.x, o = next.o, "Win recorded");
        next
    }

    /// Loads the ledger from `store`.
    ///
    /// Missing, unreadable or malformed data yields the zero ledger.
    #[instrument(skip(store))]
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        let raw = match store.get(SCORES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No stored scores, starting from zero");
                return Self::zero();
            }
            Err(e) => {
                warn!(error = %e, "Failed to read scores, starting from zero");
                return Self::zero();
            }
        };

        match Self::parse(&raw) {
            Ok(ledger) => {
                info!(x = ledger.x, o = ledger.o, "Scores loaded");
                ledger
            }
            Err(e) => {
                warn!(error = %e, "Stored scores are malformed, starting from zero");
                Self::zero()
            }
        }
    }

    /// Parses a stored blob. Only a JSON object keyed by mark is accepted.
    fn parse(raw: &str) -> Result<Self, StoreError> {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        if !value.is_object() {
            return Err(StoreError::new("Scores are not a JSON object"));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Writes the full ledger to `store`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if encoding or the store write fails.
    #[instrument(skip(store))]
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> Result<(), StoreError> {
        let raw = serde_json::to_string(self)?;
        store.set(SCORES_KEY, raw)?;
        debug!("Scores saved");
        Ok(())
    }
}
