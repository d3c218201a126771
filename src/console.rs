//! Terminal side of the game: local move prompts, board display, results.

use crate::prompt::{Constraint, PromptError, Prompter};
use crate::render::{render, separator};
use std::io::{BufRead, Write};
use strictly_inarow::{
    Board, ConsoleError, GameConsole, GameEvent, LegalMove, Move, PlacementMode, Player, Position,
};
use tracing::{debug, instrument};

const ROW_PROMPT: &str = "Enter the row you would like to select: ";
const COLUMN_PROMPT: &str = "Enter the column you would like to select: ";
const PLAY_AGAIN_PROMPT: &str = "Would you like to play again (yes or no)? ";
const END_MESSAGE: &str = "Thanks for playing!";

/// Console that prompts local players and prints the game as it goes.
#[derive(Debug)]
pub struct TerminalConsole<R, W> {
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    /// Wraps a prompter.
    pub fn new(prompter: Prompter<R, W>) -> Self {
        Self { prompter }
    }

    /// Returns the prompter, e.g. to inspect a test transcript.
    pub fn into_inner(self) -> Prompter<R, W> {
        self.prompter
    }

    /// Asks for a row and column until they name a legal cell.
    #[instrument(skip(self, board, legal))]
    fn request_cell(&mut self, board: &Board, legal: &[LegalMove]) -> Result<Move, PromptError> {
        loop {
            let row: usize = self
                .prompter
                .validate(ROW_PROMPT, &Constraint::Range(1..=board.rows()))?;
            let col: usize = self
                .prompter
                .validate(COLUMN_PROMPT, &Constraint::Range(1..=board.cols()))?;
            let wanted = Position::new(row - 1, col - 1);
            if let Some(chosen) = legal.iter().find(|m| m.target == wanted) {
                return Ok(chosen.action);
            }
            debug!(%wanted, "Occupied cell selected");
            self.prompter.say("The cell you selected is occupied.")?;
        }
    }

    /// Asks for a column among those that still have room.
    #[instrument(skip(self, legal))]
    fn request_column(&mut self, legal: &[LegalMove]) -> Result<Move, PromptError> {
        let open: Vec<usize> = legal.iter().map(|m| m.target.col + 1).collect();
        let col: usize = self
            .prompter
            .validate(COLUMN_PROMPT, &Constraint::OneOf(open))?;
        Ok(Move::Drop(col - 1))
    }

    fn show_records(&mut self, players: &[Player; 2]) -> Result<(), PromptError> {
        for player in players {
            let record = player.record();
            self.prompter.say(&separator(Some(&format!(
                "{}'s statistics",
                player.name()
            ))))?;
            self.prompter.say(&format!("Wins: {}", record.wins()))?;
            self.prompter.say(&format!("Losses: {}", record.losses()))?;
            self.prompter
                .say(&format!("Total games: {}", record.total_games()))?;
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> GameConsole for TerminalConsole<R, W> {
    fn request_move(
        &mut self,
        board: &Board,
        _player: &Player,
        legal: &[LegalMove],
    ) -> Result<Move, ConsoleError> {
        let chosen = match board.mode() {
            PlacementMode::Free => self.request_cell(board, legal)?,
            PlacementMode::Gravity => self.request_column(legal)?,
        };
        Ok(chosen)
    }

    fn notify(&mut self, event: GameEvent<'_>) -> Result<(), ConsoleError> {
        match event {
            GameEvent::RoundStarted { board, .. } => self.prompter.say(&render(board))?,
            GameEvent::TurnStarted { player } => self
                .prompter
                .say(&separator(Some(&format!("{}'s turn", player.name()))))?,
            GameEvent::MovePlayed { board, .. } => self.prompter.say(&render(board))?,
            GameEvent::RoundWon { winner } => self
                .prompter
                .say(&separator(Some(&format!("{} wins!", winner.name()))))?,
            GameEvent::RoundTied => self.prompter.say(&separator(Some("Game ends in a tie!")))?,
            GameEvent::RecordsUpdated { players } => self.show_records(players)?,
            GameEvent::SessionEnded { .. } => self.prompter.say(&separator(Some(END_MESSAGE)))?,
        }
        Ok(())
    }

    fn play_again(&mut self) -> Result<bool, ConsoleError> {
        let prompt = format!("{}\n", separator(None)) + PLAY_AGAIN_PROMPT;
        let choices = Constraint::OneOf(vec!["yes".to_string(), "no".to_string()]);
        let answer: String = self
            .prompter
            .validate_with(&prompt, &choices, |raw| raw.trim().to_lowercase())?;
        Ok(answer == "yes")
    }
}
