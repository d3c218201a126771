//! Plain-text board rendering.

use strictly_inarow::{Board, PlacementMode, Square};

/// Width of the `=` line that sets off announcements.
pub const SEPARATOR_WIDTH: usize = 42;

/// A separator line, optionally followed by a message on the next line.
pub fn separator(message: Option<&str>) -> String {
    let line = "=".repeat(SEPARATOR_WIDTH);
    match message {
        Some(message) => format!("{}\n{}", line, message),
        None => line,
    }
}

/// Renders the board with gridlines and one-based indices.
///
/// Free boards label each row on the right; gravity boards only label
/// columns since a drop names a column alone.
pub fn render(board: &Board) -> String {
    let lines: Vec<String> = (0..board.rows())
        .map(|row| {
            let cells: Vec<String> = board
                .row(row)
                .map(|square| match square {
                    Square::Empty => " ".to_string(),
                    Square::Occupied(symbol) => symbol.to_string(),
                })
                .collect();
            match board.mode() {
                PlacementMode::Free => format!("{}\t{}\n", cells.join(" | "), row + 1),
                PlacementMode::Gravity => format!("{}\n", cells.join(" | ")),
            }
        })
        .collect();

    let segments = vec!["---"; board.cols()].join("+");
    let gridline = format!("{}\n", &segments[1..segments.len() - 1]);
    let column_indices: Vec<String> = (1..=board.cols()).map(|c| c.to_string()).collect();

    format!("\n{}\n{}", lines.join(&gridline), column_indices.join("   "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_inarow::{Move, Position, Symbol};

    #[test]
    fn test_separator() {
        assert_eq!(separator(None).len(), 42);
        assert_eq!(separator(Some("Ada's turn")), format!("{}\nAda's turn", "=".repeat(42)));
    }

    #[test]
    fn test_render_free_board() {
        let mut board = Board::new(3, 3, 3, PlacementMode::Free).unwrap();
        board
            .place(Move::Cell(Position::new(0, 0)), Symbol::new('X').unwrap())
            .unwrap();
        board
            .place(Move::Cell(Position::new(1, 1)), Symbol::new('O').unwrap())
            .unwrap();
        let expected = "\nX |   |  \t1\n--+---+--\n  | O |  \t2\n--+---+--\n  |   |  \t3\n\n1   2   3";
        assert_eq!(render(&board), expected);
    }

    #[test]
    fn test_render_gravity_board_has_no_row_labels() {
        let mut board = Board::new(2, 3, 3, PlacementMode::Gravity).unwrap();
        board.place(Move::Drop(1), Symbol::new('#').unwrap()).unwrap();
        let expected = "\n  |   |  \n--+---+--\n  | # |  \n\n1   2   3";
        assert_eq!(render(&board), expected);
    }
}
