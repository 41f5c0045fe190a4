//! Full-board check.

use super::super::Board;
use tracing::instrument;

/// True once no cell is left empty.
///
/// [`super::evaluate`] reports a draw for a full board only after every
/// winning line has been ruled out.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.marked() == board.squares().len()
}
