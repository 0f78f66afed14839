//! Move notation: `<row>,<col>=<direction>`, e.g. `A,5=L` or `b,2 = d`.

use super::{Command, Coord, Direction};
use derive_more::{Display, Error};
use tracing::instrument;

/// Input that stops the game and saves the board.
pub const INTERRUPT_SENTINEL: &str = "0,0=E";

/// Text that is not a move or the interrupt command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid input format {input:?}: {reason}. Use row,column=direction (e.g., A,5=L)")]
pub struct ParseError {
    /// The rejected text, trimmed.
    pub input: String,
    /// What was wrong with it.
    pub reason: String,
}

impl ParseError {
    fn new(input: &str, reason: impl Into<String>) -> Self {
        Self {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Parses one line of player input.
///
/// The interrupt sentinel is recognised before any coordinate parsing.
/// Rows are `A`-`E`, columns `1`-`5`, directions `L`, `R`, `U`, `D`; letters
/// are case-insensitive and spaces are allowed around `=` and after `,`.
#[instrument]
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let input = line.trim();
    if input.eq_ignore_ascii_case(INTERRUPT_SENTINEL) {
        return Ok(Command::Interrupt);
    }

    let (square, direction) = input
        .split_once('=')
        .ok_or_else(|| ParseError::new(input, "missing '='"))?;
    let (row, col) = square
        .split_once(',')
        .ok_or_else(|| ParseError::new(input, "missing ',' between row and column"))?;

    let row = single_char(row.trim())
        .and_then(|c| ('A'..='E').contains(&c.to_ascii_uppercase()).then_some(c))
        .map(|c| (c.to_ascii_uppercase() as u8 - b'A') as usize)
        .ok_or_else(|| ParseError::new(input, "row must be a letter A-E"))?;
    let col = single_char(col.trim())
        .and_then(|c| c.to_digit(10))
        .filter(|d| (1..=5).contains(d))
        .map(|d| (d - 1) as usize)
        .ok_or_else(|| ParseError::new(input, "column must be a digit 1-5"))?;
    let direction = single_char(direction.trim())
        .and_then(Direction::from_letter)
        .ok_or_else(|| ParseError::new(input, "direction must be one of L, R, U, D"))?;

    let origin =
        Coord::new(row, col).map_err(|e| ParseError::new(input, e.to_string()))?;
    Ok(Command::Move { origin, direction })
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
