//! Interactive session setup: board shape, players and computer opponent.

use crate::prompt::{Constraint, PromptError, Prompter};
use std::io::{BufRead, Write};
use strictly_inarow::{
    BoardConfig, GameConfig, MAX_DIMENSION, MIN_DIMENSION, MIN_WIN_LENGTH, PlacementMode,
    PlayerSpec, Preset, Skill, Symbol,
};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

const CUSTOM_BOARD: &str = "custom";
const PLAYER_COUNT_PROMPT: &str = "How many local players will be playing (1 or 2)? ";
const NAME_PROMPT: &str = "What would you like your name to be? ";
const DIFFICULTY_PROMPT: &str = "What difficulty would you like to choose (1 or 2)? ";

/// Asks for everything a session needs.
///
/// With `preset` set the board question is skipped. With one local player
/// the second seat goes to a computer player of the chosen difficulty.
///
/// # Errors
///
/// Returns [`PromptError::Closed`] if input ends before setup completes,
/// or [`PromptError::Io`] on console failure.
#[instrument(skip(prompter))]
pub fn configure<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    preset: Option<Preset>,
) -> Result<GameConfig, PromptError> {
    let board = match preset {
        Some(preset) => preset.board_config(),
        None => choose_board(prompter)?,
    };

    let local_count: usize = prompter.validate(PLAYER_COUNT_PROMPT, &Constraint::OneOf(vec![1, 2]))?;
    let first = ask_local(prompter, 1, None)?;
    let second = if local_count == 2 {
        ask_local(prompter, 2, Some(&first))?
    } else {
        ask_computer(prompter, &first)?
    };

    let config = GameConfig::new(board, [first, second])?;
    info!(
        rows = board.rows(),
        cols = board.cols(),
        win_length = board.win_length(),
        local_count,
        "Session configured"
    );
    Ok(config)
}

fn choose_board<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<BoardConfig, PromptError> {
    let mut choices = vec![CUSTOM_BOARD.to_string()];
    choices.extend(Preset::iter().map(|preset| preset.to_string()));
    let prompt = format!(
        "Which board would you like to play ({})? ",
        choices.join(", ")
    );
    let answer: String =
        prompter.validate_with(&prompt, &Constraint::OneOf(choices), |raw| {
            raw.trim().to_lowercase()
        })?;
    match answer.parse::<Preset>() {
        Ok(preset) => Ok(preset.board_config()),
        Err(_) => custom_board(prompter),
    }
}

fn custom_board<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<BoardConfig, PromptError> {
    let sizes = Constraint::Range(MIN_DIMENSION..=MAX_DIMENSION);
    loop {
        let rows: usize = prompter.validate(
            &format!(
                "What height would you like your board to be ({} to {})? ",
                MIN_DIMENSION, MAX_DIMENSION
            ),
            &sizes,
        )?;
        let cols: usize = prompter.validate(
            &format!(
                "What width would you like your board to be ({} to {})? ",
                MIN_DIMENSION, MAX_DIMENSION
            ),
            &sizes,
        )?;
        let longest = rows.max(cols);
        if longest < MIN_WIN_LENGTH {
            debug!(rows, cols, "Board too small for any winning run");
            prompter.say(&format!(
                "The board must be at least {} cells high or wide.",
                MIN_WIN_LENGTH
            ))?;
            continue;
        }
        let win_length: usize = prompter.validate(
            &format!(
                "How many in a row are needed to win ({} to {})? ",
                MIN_WIN_LENGTH, longest
            ),
            &Constraint::Range(MIN_WIN_LENGTH..=longest),
        )?;
        let gravity: String = prompter.validate_with(
            "Should pieces drop to the bottom of each column (yes or no)? ",
            &Constraint::OneOf(vec!["yes".to_string(), "no".to_string()]),
            |raw| raw.trim().to_lowercase(),
        )?;
        let mode = if gravity == "yes" {
            PlacementMode::Gravity
        } else {
            PlacementMode::Free
        };
        return BoardConfig::new(rows, cols, win_length, mode).map_err(PromptError::from);
    }
}

fn ask_local<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    seat: usize,
    other: Option<&PlayerSpec>,
) -> Result<PlayerSpec, PromptError> {
    let prompt = format!("Player {}: {}", seat, NAME_PROMPT);
    let name = loop {
        let name: String = prompter.validate(&prompt, &Constraint::Any)?;
        if name.is_empty() {
            prompter.say("Name must not be empty.")?;
        } else if Skill::is_reserved(&name) {
            prompter.say(&format!("{} is reserved for computer players.", name))?;
        } else if other.is_some_and(|o| o.name().eq_ignore_ascii_case(&name)) {
            prompter.say(&format!("{} is already taken.", name))?;
        } else {
            break name;
        }
    };
    prompter.say(&format!("Player {} is now {}.", seat, name))?;

    let symbol = ask_symbol(
        prompter,
        &format!("What symbol would you like {} to use? ", name),
        other.map(|o| *o.symbol()),
    )?;
    Ok(PlayerSpec::local(name, symbol))
}

fn ask_computer<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    opponent: &PlayerSpec,
) -> Result<PlayerSpec, PromptError> {
    let level: u8 = prompter.validate(DIFFICULTY_PROMPT, &Constraint::OneOf(vec![1, 2]))?;
    let skill = if level == 1 {
        Skill::Basic
    } else {
        Skill::Strategic
    };
    let symbol = ask_symbol(
        prompter,
        &format!("What symbol should {} use? ", skill.computer_name()),
        Some(*opponent.symbol()),
    )?;
    prompter.say(&format!("Player 2 is now {}.", skill.computer_name()))?;
    Ok(PlayerSpec::computer(skill, symbol))
}

fn ask_symbol<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    prompt: &str,
    taken: Option<Symbol>,
) -> Result<Symbol, PromptError> {
    loop {
        let c: char = prompter.validate(prompt, &Constraint::Any)?;
        match Symbol::new(c) {
            None => prompter.say("That symbol cannot be used.")?,
            Some(symbol) if Some(symbol) == taken => {
                prompter.say(&format!("{} is already taken.", symbol))?
            }
            Some(symbol) => return Ok(symbol),
        }
    }
}
