//! Core domain types: symbols, squares, positions and moves.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player's mark on the board.
///
/// Any single printable, non-whitespace character.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[serde(try_from = "char", into = "char")]
pub struct Symbol(char);

impl Symbol {
    /// Creates a symbol, rejecting whitespace and control characters.
    #[instrument]
    pub fn new(c: char) -> Option<Self> {
        if c.is_whitespace() || c.is_control() {
            None
        } else {
            Some(Self(c))
        }
    }

    /// Returns the underlying character.
    pub fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Symbol {
    type Error = String;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Symbol::new(c).ok_or_else(|| format!("{:?} cannot be used as a symbol", c))
    }
}

impl From<Symbol> for char {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player's symbol.
    Occupied(Symbol),
}

impl Square {
    /// Returns the symbol in this square, if any.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Square::Empty => None,
            Square::Occupied(symbol) => Some(symbol),
        }
    }

    /// Checks if the square is empty.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }
}

/// A concrete cell address, zero-based, row 0 at the top.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("({}, {})", row, col)]
pub struct Position {
    /// Row index (0 is the top row).
    pub row: usize,
    /// Column index (0 is the leftmost column).
    pub col: usize,
}

impl Position {
    /// Creates a new position.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A move as a player expresses it.
///
/// Free boards take an exact cell; gravity boards take only a column and
/// the board decides the landing row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Place at an exact cell.
    Cell(Position),
    /// Drop into a column.
    Drop(usize),
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Cell(pos) => write!(f, "cell {}", pos),
            Move::Drop(col) => write!(f, "column {}", col),
        }
    }
}

/// A legal move paired with the cell it would occupy.
///
/// The target lets lookahead evaluate a move without placing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LegalMove {
    /// The move to hand to [`crate::Board::place`].
    pub action: Move,
    /// The cell the move would occupy.
    pub target: Position,
}
