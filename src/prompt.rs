//! Type- and range-checked console input.
//!
//! [`Prompter::validate`] keeps asking until the input parses and satisfies
//! its [`Constraint`], printing a specific diagnostic after each bad
//! answer. A constraint that nothing could satisfy (an empty choice list,
//! a minimum above the maximum) is a setup defect and fails immediately.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::ops::RangeInclusive;
use std::str::FromStr;
use strictly_inarow::{ConfigError, ConsoleError};
use tracing::{debug, instrument, warn};

/// What an accepted value must satisfy.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint<T> {
    /// Any value of the right type.
    Any,
    /// One of an explicit list.
    OneOf(Vec<T>),
    /// Within a contiguous inclusive range.
    Range(RangeInclusive<T>),
    /// At least this value.
    AtLeast(T),
    /// At most this value.
    AtMost(T),
    /// At least `min` and at most `max`.
    Between {
        /// Smallest accepted value.
        min: T,
        /// Largest accepted value.
        max: T,
    },
}

impl<T: PartialOrd + Display> Constraint<T> {
    /// Rejects constraints no input could satisfy.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::EmptyChoices`] for an empty list or range and
    /// [`PromptError::InvertedBounds`] when `min > max`.
    #[instrument(skip(self))]
    pub fn check(&self) -> Result<(), PromptError> {
        match self {
            Constraint::OneOf(choices) if choices.is_empty() => Err(PromptError::EmptyChoices),
            Constraint::Range(range) if range.is_empty() => Err(PromptError::EmptyChoices),
            Constraint::Between { min, max } if min > max => Err(PromptError::InvertedBounds {
                min: min.to_string(),
                max: max.to_string(),
            }),
            _ => Ok(()),
        }
    }

    /// Explains why `value` is rejected, or `None` if it is accepted.
    pub fn diagnose(&self, value: &T) -> Option<String> {
        match self {
            Constraint::Any => None,
            Constraint::OneOf(choices) => {
                (!choices.contains(value)).then(|| format!("Input must be {}.", list(choices)))
            }
            Constraint::Range(range) => (!range.contains(value)).then(|| {
                format!("Input must be between {} and {}.", range.start(), range.end())
            }),
            Constraint::AtLeast(min) => below(value, min),
            Constraint::AtMost(max) => above(value, max),
            Constraint::Between { min, max } => below(value, min).or_else(|| above(value, max)),
        }
    }
}

fn below<T: PartialOrd + Display>(value: &T, min: &T) -> Option<String> {
    (value < min).then(|| format!("Input must be greater than or equal to {}.", min))
}

fn above<T: PartialOrd + Display>(value: &T, max: &T) -> Option<String> {
    (value > max).then(|| format!("Input must be less than or equal to {}.", max))
}

/// "a or b" for two choices, "a, b, or c" for more.
fn list<T: Display>(choices: &[T]) -> String {
    let mut elements: Vec<String> = choices.iter().map(ToString::to_string).collect();
    if elements.len() < 3 {
        return elements.join(" or ");
    }
    if let Some(last) = elements.last_mut() {
        *last = format!("or {}", last);
    }
    elements.join(", ")
}

/// Short type name for diagnostics, e.g. `usize` or `char`.
fn type_label<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

/// Prompting failures.
#[derive(Debug, Clone, derive_more::Display)]
pub enum PromptError {
    /// A choice list or range with nothing in it.
    #[display("Constraint has no acceptable values")]
    EmptyChoices,

    /// A minimum greater than the maximum.
    #[display("Minimum {} is greater than maximum {}", min, max)]
    InvertedBounds {
        /// Offending minimum.
        min: String,
        /// Offending maximum.
        max: String,
    },

    /// Input reached end of file.
    #[display("Input closed before a valid answer was given")]
    Closed,

    /// Reading or writing the console failed.
    #[display("Console I/O failed: {}", _0)]
    Io(String),

    /// The answers did not form a valid game.
    #[display("{}", _0)]
    Config(ConfigError),
}

impl std::error::Error for PromptError {}

impl From<std::io::Error> for PromptError {
    fn from(err: std::io::Error) -> Self {
        PromptError::Io(err.to_string())
    }
}

impl From<ConfigError> for PromptError {
    fn from(err: ConfigError) -> Self {
        PromptError::Config(err)
    }
}

impl From<PromptError> for ConsoleError {
    #[track_caller]
    fn from(err: PromptError) -> Self {
        ConsoleError::new(err.to_string())
    }
}

/// Line-oriented prompt over any reader and writer.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the prompter, returning its reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Writes a line of text.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::Io`] if the write fails.
    pub fn say(&mut self, text: &str) -> Result<(), PromptError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Asks until the trimmed answer parses as `T` and meets `constraint`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error straight away for an unsatisfiable
    /// constraint, [`PromptError::Closed`] on end of input and
    /// [`PromptError::Io`] on I/O failure.
    pub fn validate<T>(&mut self, prompt: &str, constraint: &Constraint<T>) -> Result<T, PromptError>
    where
        T: FromStr + PartialOrd + Display,
    {
        self.validate_with(prompt, constraint, |raw| raw.trim().to_string())
    }

    /// Like [`Prompter::validate`], normalizing the raw line before parsing.
    ///
    /// # Errors
    ///
    /// See [`Prompter::validate`].
    #[instrument(skip(self, constraint, normalize))]
    pub fn validate_with<T, F>(
        &mut self,
        prompt: &str,
        constraint: &Constraint<T>,
        normalize: F,
    ) -> Result<T, PromptError>
    where
        T: FromStr + PartialOrd + Display,
        F: Fn(&str) -> String,
    {
        constraint.check()?;
        loop {
            let raw = self.read_line(prompt)?;
            let Ok(value) = normalize(&raw).parse::<T>() else {
                debug!(input = %raw.trim_end(), "Input failed to parse");
                self.say(&format!("Input type must be {}.", type_label::<T>()))?;
                continue;
            };
            match constraint.diagnose(&value) {
                Some(message) => {
                    debug!(%value, "Input rejected by constraint");
                    self.say(&message)?;
                }
                None => return Ok(value),
            }
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            warn!("Input closed while prompting");
            return Err(PromptError::Closed);
        }
        Ok(line)
    }
}
