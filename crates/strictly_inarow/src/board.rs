//! The grid: storage, placement and the win/full predicates.

use crate::config::{BoardConfig, PlacementMode};
use crate::error::{ConfigError, PlaceError};
use crate::rules;
use crate::types::{LegalMove, Move, Position, Square, Symbol};
use tracing::{debug, instrument};

/// A rows × cols grid of squares with a fixed win length and placement mode.
///
/// Cells are only written through [`Board::place`] and only cleared by
/// [`Board::reset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    config: BoardConfig,
    /// Squares in row-major order.
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty board.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the dimensions or win length are out of range.
    #[instrument]
    pub fn new(
        rows: usize,
        cols: usize,
        win_length: usize,
        mode: PlacementMode,
    ) -> Result<Self, ConfigError> {
        BoardConfig::new(rows, cols, win_length, mode).map(Self::from_config)
    }

    /// Creates an empty board from an already validated configuration.
    #[instrument]
    pub fn from_config(config: BoardConfig) -> Self {
        Self {
            config,
            squares: vec![Square::Empty; config.rows() * config.cols()],
        }
    }

    /// Clears every square for a new round.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares.fill(Square::Empty);
        debug!("Board reset");
    }

    /// Board configuration.
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.config.rows()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.config.cols()
    }

    /// Length of the run needed to win.
    pub fn win_length(&self) -> usize {
        self.config.win_length()
    }

    /// Placement mode.
    pub fn mode(&self) -> PlacementMode {
        self.config.mode()
    }

    /// Gets the square at a position, or `None` if out of bounds.
    pub fn get(&self, pos: Position) -> Option<Square> {
        self.index(pos).map(|i| self.squares[i])
    }

    /// Checks if a position is on the board and empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Iterates the squares of one row, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Square> + '_ {
        let cols = self.cols();
        self.squares.iter().skip(row * cols).take(cols).copied()
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Moves available in the current position, in tie-break order.
    ///
    /// Free boards list every empty cell column by column, top to bottom
    /// within a column. Gravity boards list, per column left to right, the
    /// cell the next drop would land in.
    #[instrument(skip(self))]
    pub fn legal_moves(&self) -> Vec<LegalMove> {
        self.mode().legal_moves(self)
    }

    /// Applies `symbol` and returns the cell it occupies.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError`] if the move is not currently legal. The board
    /// is left unchanged in that case.
    #[instrument(skip(self), fields(mode = %self.mode()))]
    pub fn place(&mut self, action: Move, symbol: Symbol) -> Result<Position, PlaceError> {
        let target = self.mode().resolve(self, action)?;
        let index = self.index(target).ok_or(PlaceError::OutOfBounds(target))?;
        self.squares[index] = Square::Occupied(symbol);
        debug!(%target, %symbol, "Symbol placed");
        Ok(target)
    }

    /// Checks if no square is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Checks if `symbol` at `pos` would complete a winning run.
    ///
    /// Speculative: the square at `pos` is treated as holding `symbol`
    /// whatever it currently holds, and the board is never written.
    pub fn has_victory(&self, pos: Position, symbol: Symbol) -> bool {
        rules::has_victory(self, pos, symbol)
    }

    /// Distinct symbols on the board in row-major order of first appearance.
    pub fn symbols(&self) -> Vec<Symbol> {
        let mut seen = Vec::new();
        for symbol in self.squares.iter().filter_map(|sq| sq.symbol()) {
            if !seen.contains(&symbol) {
                seen.push(symbol);
            }
        }
        seen
    }

    fn index(&self, pos: Position) -> Option<usize> {
        (pos.row < self.rows() && pos.col < self.cols()).then(|| pos.row * self.cols() + pos.col)
    }
}
