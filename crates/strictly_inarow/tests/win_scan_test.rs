//! Tests for speculative win detection across board shapes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strictly_inarow::{Board, Move, PlacementMode, Position, Square, Symbol};

fn sym(c: char) -> Symbol {
    Symbol::new(c).unwrap()
}

/// Straightforward reference: count `symbol` runs through `at` on all four axes.
fn naive_victory(board: &Board, at: Position, symbol: Symbol) -> bool {
    let read = |r: isize, c: isize| -> Option<Symbol> {
        if r < 0 || c < 0 {
            return None;
        }
        let pos = Position::new(r as usize, c as usize);
        if pos == at {
            return Some(symbol);
        }
        board.get(pos).and_then(Square::symbol)
    };
    [(0, 1), (1, 0), (1, 1), (1, -1)].iter().any(|&(dr, dc)| {
        let (r0, c0) = (at.row as isize, at.col as isize);
        let mut run = 1;
        for sign in [-1, 1] {
            let mut k = 1;
            while read(r0 + sign * dr * k, c0 + sign * dc * k) == Some(symbol) {
                run += 1;
                k += 1;
            }
        }
        run >= board.win_length()
    })
}

fn random_board(rng: &mut StdRng) -> Board {
    let rows = rng.random_range(3..=7);
    let cols = rng.random_range(3..=7);
    let win_length = rng.random_range(3..=rows.max(cols));
    let mut board = Board::new(rows, cols, win_length, PlacementMode::Free).unwrap();
    let density = rng.random_range(0.2..0.9);
    for row in 0..rows {
        for col in 0..cols {
            if rng.random_bool(density) {
                let symbol = if rng.random_bool(0.5) { sym('X') } else { sym('O') };
                board.place(Move::Cell(Position::new(row, col)), symbol).unwrap();
            }
        }
    }
    board
}

#[test]
fn test_three_by_three_row_completion() {
    let mut board = Board::new(3, 3, 3, PlacementMode::Free).unwrap();
    board.place(Move::Cell(Position::new(0, 0)), sym('X')).unwrap();
    board.place(Move::Cell(Position::new(0, 1)), sym('X')).unwrap();
    assert!(board.has_victory(Position::new(0, 2), sym('X')));
}

#[test]
fn test_connect_four_vertical_completion() {
    let mut board = Board::new(6, 7, 4, PlacementMode::Gravity).unwrap();
    for expected_row in [5, 4, 3] {
        let landed = board.place(Move::Drop(3), sym('O')).unwrap();
        assert_eq!(landed, Position::new(expected_row, 3));
    }
    let next = board
        .legal_moves()
        .into_iter()
        .find(|m| m.action == Move::Drop(3))
        .unwrap();
    assert_eq!(next.target, Position::new(2, 3));
    assert!(board.has_victory(Position::new(2, 3), sym('O')));
    assert!(!board.has_victory(Position::new(2, 3), sym('X')));
}

#[test]
fn test_matches_reference_on_random_boards() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..300 {
        let board = random_board(&mut rng);
        for row in 0..board.rows() {
            for col in 0..board.cols() {
                let at = Position::new(row, col);
                for symbol in [sym('X'), sym('O')] {
                    assert_eq!(
                        board.has_victory(at, symbol),
                        naive_victory(&board, at, symbol),
                        "mismatch at {at} for {symbol} on {board:?}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_speculation_never_mutates() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..50 {
        let board = random_board(&mut rng);
        let before = board.clone();
        let legal = board.legal_moves();
        for m in &legal {
            board.has_victory(m.target, sym('X'));
            board.has_victory(m.target, sym('O'));
        }
        assert_eq!(board, before);
        assert_eq!(board.legal_moves(), legal);
    }
}
