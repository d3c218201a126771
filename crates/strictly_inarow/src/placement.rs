//! Mode-specific move enumeration and landing rules.
//!
//! Everything that differs between free and gravity boards lives here;
//! the board's win and full checks never look at the mode.

use crate::board::Board;
use crate::config::PlacementMode;
use crate::error::PlaceError;
use crate::types::{LegalMove, Move, Position};

impl PlacementMode {
    /// Enumerates legal moves in tie-break order.
    pub(crate) fn legal_moves(self, board: &Board) -> Vec<LegalMove> {
        match self {
            PlacementMode::Free => (0..board.cols())
                .flat_map(|col| (0..board.rows()).map(move |row| Position::new(row, col)))
                .filter(|&pos| board.is_empty(pos))
                .map(|target| LegalMove {
                    action: Move::Cell(target),
                    target,
                })
                .collect(),
            PlacementMode::Gravity => (0..board.cols())
                .filter_map(|col| landing_row(board, col).map(|row| Position::new(row, col)))
                .map(|target| LegalMove {
                    action: Move::Drop(target.col),
                    target,
                })
                .collect(),
        }
    }

    /// Resolves a move to the cell it would occupy, checking legality.
    pub(crate) fn resolve(self, board: &Board, action: Move) -> Result<Position, PlaceError> {
        match (self, action) {
            (PlacementMode::Free, Move::Cell(pos)) => match board.get(pos) {
                None => Err(PlaceError::OutOfBounds(pos)),
                Some(sq) if !sq.is_empty() => Err(PlaceError::CellOccupied(pos)),
                Some(_) => Ok(pos),
            },
            (PlacementMode::Gravity, Move::Drop(col)) => {
                if col >= board.cols() {
                    return Err(PlaceError::OutOfBounds(Position::new(0, col)));
                }
                landing_row(board, col)
                    .map(|row| Position::new(row, col))
                    .ok_or(PlaceError::ColumnFull(col))
            }
            _ => Err(PlaceError::WrongMoveKind),
        }
    }
}

/// First empty row scanning the column from the bottom up.
fn landing_row(board: &Board, col: usize) -> Option<usize> {
    (0..board.rows())
        .rev()
        .find(|&row| board.is_empty(Position::new(row, col)))
}
