//! Win detection by bounded directional scanning.
//!
//! For each of the four axes through a cell, a segment is built from the
//! candidate symbol at the centre plus up to `win_length - 1` occupied
//! neighbours on each side, stopping early at the board edge or an empty
//! square. Neighbours of any symbol are included. The axis wins if the
//! segment holds `win_length` consecutive identical symbols.
//!
//! Cost is O(win_length) per axis and independent of board size.

use crate::board::Board;
use crate::types::{Position, Square, Symbol};

/// Row/column steps for horizontal, vertical, diagonal ↘ and diagonal ↙.
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Checks if placing `symbol` at `at` would complete a winning run.
///
/// The square at `at` is read as `symbol` regardless of its content;
/// every other square is read from the board. Returns `false` for
/// positions off the board.
pub fn has_victory(board: &Board, at: Position, symbol: Symbol) -> bool {
    if board.get(at).is_none() {
        return false;
    }
    let win_length = board.win_length();
    AXES.iter()
        .any(|&step| contains_run(&segment(board, at, symbol, step), win_length))
}

/// Builds the ordered segment through `at` along one axis.
fn segment(board: &Board, at: Position, symbol: Symbol, (dr, dc): (isize, isize)) -> Vec<Symbol> {
    let reach = board.win_length() - 1;
    let before = walk(board, at, (-dr, -dc), reach);
    let after = walk(board, at, (dr, dc), reach);

    let mut segment = Vec::with_capacity(before.len() + 1 + after.len());
    segment.extend(before.into_iter().rev());
    segment.push(symbol);
    segment.extend(after);
    segment
}

/// Collects up to `reach` occupied squares stepping away from `from`.
fn walk(board: &Board, from: Position, (dr, dc): (isize, isize), reach: usize) -> Vec<Symbol> {
    let mut found = Vec::with_capacity(reach);
    let mut pos = from;
    for _ in 0..reach {
        let Some(next) = offset(pos, dr, dc) else {
            break;
        };
        match board.get(next) {
            Some(Square::Occupied(symbol)) => {
                found.push(symbol);
                pos = next;
            }
            Some(Square::Empty) | None => break,
        }
    }
    found
}

fn offset(pos: Position, dr: isize, dc: isize) -> Option<Position> {
    Some(Position::new(
        pos.row.checked_add_signed(dr)?,
        pos.col.checked_add_signed(dc)?,
    ))
}

fn contains_run(segment: &[Symbol], win_length: usize) -> bool {
    segment
        .windows(win_length)
        .any(|window| window.iter().all(|s| *s == window[0]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlacementMode;
    use crate::types::Move;

    fn sym(c: char) -> Symbol {
        Symbol::new(c).unwrap()
    }

    /// Builds a free board from rows of text; `.` is empty.
    fn board_from(rows: &[&str], win_length: usize) -> Board {
        let mut board = Board::new(
            rows.len(),
            rows[0].chars().count(),
            win_length,
            PlacementMode::Free,
        )
        .unwrap();
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                if ch != '.' {
                    board.place(Move::Cell(Position::new(r, c)), sym(ch)).unwrap();
                }
            }
        }
        board
    }

    #[test]
    fn test_horizontal_completion() {
        let board = board_from(&["XX.", "...", "..."], 3);
        assert!(has_victory(&board, Position::new(0, 2), sym('X')));
        assert!(!has_victory(&board, Position::new(0, 2), sym('O')));
    }

    #[test]
    fn test_vertical_completion() {
        let board = board_from(&["O..", "O..", "..."], 3);
        assert!(has_victory(&board, Position::new(2, 0), sym('O')));
    }

    #[test]
    fn test_diagonal_down_right() {
        let board = board_from(&["X...", ".X..", "....", "...."], 3);
        assert!(has_victory(&board, Position::new(2, 2), sym('X')));
    }

    #[test]
    fn test_diagonal_down_left() {
        let board = board_from(&["...X", "..X.", "....", "...."], 3);
        assert!(has_victory(&board, Position::new(2, 1), sym('X')));
    }

    #[test]
    fn test_gap_in_the_middle() {
        let board = board_from(&["X.XX."], 4);
        assert!(has_victory(&board, Position::new(0, 1), sym('X')));
        assert!(!has_victory(&board, Position::new(0, 4), sym('X')));
    }

    #[test]
    fn test_opponent_neighbour_does_not_stop_scan_but_breaks_run() {
        let board = board_from(&["OX.XX"], 4);
        assert!(!has_victory(&board, Position::new(0, 2), sym('O')));
        assert!(has_victory(&board, Position::new(0, 2), sym('X')));
    }

    #[test]
    fn test_empty_square_stops_scan() {
        let board = board_from(&["XX.X.X"], 4);
        assert!(!has_victory(&board, Position::new(0, 4), sym('X')));
        assert!(has_victory(&board, Position::new(0, 2), sym('X')));
    }

    #[test]
    fn test_corner_and_edge_cells() {
        let board = board_from(&["..X", ".X.", "..."], 3);
        assert!(has_victory(&board, Position::new(2, 0), sym('X')));
        assert!(!has_victory(&board, Position::new(2, 2), sym('X')));
    }

    #[test]
    fn test_run_longer_than_win_length() {
        let board = board_from(&["XX.XX"], 3);
        assert!(has_victory(&board, Position::new(0, 2), sym('X')));
    }

    #[test]
    fn test_speculative_check_ignores_current_square() {
        let board = board_from(&["XXO", "...", "..."], 3);
        // The O at (0, 2) is read as the hypothetical X.
        assert!(has_victory(&board, Position::new(0, 2), sym('X')));
        assert_eq!(board.get(Position::new(0, 2)), Some(Square::Occupied(sym('O'))));
    }

    #[test]
    fn test_off_board_is_false() {
        let board = board_from(&["XX.", "...", "..."], 3);
        assert!(!has_victory(&board, Position::new(0, 3), sym('X')));
    }
}
