//! Full-board detection.

use crate::board::Board;
use crate::types::Square;

/// Checks if the board is full (all squares occupied).
///
/// A full board after a non-winning move is a tie.
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}
