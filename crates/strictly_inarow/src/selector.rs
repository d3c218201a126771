//! Move selection for local and computer players.
//!
//! Computer play is strictly one-ply: it looks at the immediate next move
//! only, never at forks or longer combinations.

use crate::board::Board;
use crate::engine::GameConsole;
use crate::error::EngineError;
use crate::player::{Player, PlayerKind, Skill};
use crate::types::{LegalMove, Move, Symbol};
use rand::Rng;
use tracing::{debug, instrument};

/// Decides a player's next move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSelector {
    /// Asks the console, which keeps asking until it gets a legal move.
    Local,
    /// Picks a move itself.
    Computer(Skill),
}

impl From<PlayerKind> for MoveSelector {
    fn from(kind: PlayerKind) -> Self {
        match kind {
            PlayerKind::Local => MoveSelector::Local,
            PlayerKind::Computer(skill) => MoveSelector::Computer(skill),
        }
    }
}

impl MoveSelector {
    /// Produces a legal move for `player` on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoLegalMoves`] on a full board and
    /// [`EngineError::Console`] if a local player's input fails.
    #[instrument(skip(self, board, console, rng), fields(player = %player.name()))]
    pub fn select_move<C, R>(
        &self,
        board: &Board,
        player: &Player,
        console: &mut C,
        rng: &mut R,
    ) -> Result<Move, EngineError>
    where
        C: GameConsole + ?Sized,
        R: Rng,
    {
        let legal = board.legal_moves();
        if legal.is_empty() {
            return Err(EngineError::NoLegalMoves);
        }
        let chosen = match self {
            MoveSelector::Local => return Ok(console.request_move(board, player, &legal)?),
            MoveSelector::Computer(Skill::Basic) => random_move(&legal, rng),
            MoveSelector::Computer(Skill::Strategic) => {
                strategic_move(board, *player.symbol(), &legal, rng)
            }
        };
        debug!(action = %chosen.action, target = %chosen.target, "Computer chose move");
        Ok(chosen.action)
    }
}

/// Win if possible, else block, else random.
///
/// `legal` must be non-empty.
#[instrument(skip(board, legal, rng))]
pub fn strategic_move<R: Rng>(
    board: &Board,
    own: Symbol,
    legal: &[LegalMove],
    rng: &mut R,
) -> LegalMove {
    if let Some(win) = winning_move(board, own, legal) {
        debug!(target = %win.target, "Taking winning move");
        return win;
    }
    if let Some(block) = blocking_move(board, own, legal) {
        debug!(target = %block.target, "Blocking opponent");
        return block;
    }
    random_move(legal, rng)
}

/// First legal move, in enumeration order, that wins for `symbol`.
pub fn winning_move(board: &Board, symbol: Symbol, legal: &[LegalMove]) -> Option<LegalMove> {
    legal
        .iter()
        .copied()
        .find(|m| board.has_victory(m.target, symbol))
}

/// First legal move that would complete a run for any other symbol.
///
/// Moves are tried in enumeration order; for each move, opponent symbols
/// are tried in the order they first appear on the board.
pub fn blocking_move(board: &Board, own: Symbol, legal: &[LegalMove]) -> Option<LegalMove> {
    let opponents: Vec<Symbol> = board.symbols().into_iter().filter(|s| *s != own).collect();
    legal.iter().copied().find(|m| {
        opponents
            .iter()
            .any(|&opponent| board.has_victory(m.target, opponent))
    })
}

/// Uniformly random legal move.
///
/// `legal` must be non-empty.
pub fn random_move<R: Rng>(legal: &[LegalMove], rng: &mut R) -> LegalMove {
    legal[rng.random_range(0..legal.len())]
}
