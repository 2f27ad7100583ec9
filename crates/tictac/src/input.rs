//! Keyboard input for human players.
//!
//! People count rows and columns from 1; the engine counts from 0. Anything
//! that is not a whole number in range is reported and asked for again.
//! Running out of input is an error, since the game cannot continue.

use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use std::ops::RangeInclusive;
use tictac_engine::{Board, Coordinate, Mark};
use tracing::{debug, instrument};

/// Accepted one-based range for rows and columns.
pub const ENTRY_RANGE: RangeInclusive<usize> = 1..=Board::ROWS;

/// Parses one entry, returning the value only if it is inside `range`.
pub fn parse_entry(text: &str, range: &RangeInclusive<usize>) -> Option<usize> {
    text.trim()
        .parse::<usize>()
        .ok()
        .filter(|value| range.contains(value))
}

/// Prompts until a number in `range` is entered.
///
/// # Errors
///
/// Fails when input ends or either stream reports an I/O error.
#[instrument(skip(input, output))]
pub fn read_integer<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    range: RangeInclusive<usize>,
) -> Result<usize> {
    let mut line = String::new();
    loop {
        write!(output, "{prompt} ").context("Failed to write prompt")?;
        output.flush().context("Failed to flush prompt")?;

        line.clear();
        let read = input.read_line(&mut line).context("Failed to read input")?;
        if read == 0 {
            bail!("Input ended while waiting for {prompt}");
        }

        match parse_entry(&line, &range) {
            Some(value) => return Ok(value),
            None => {
                debug!(entry = line.trim(), "Invalid entry");
                writeln!(
                    output,
                    "Please enter a number from {} to {}.",
                    range.start(),
                    range.end()
                )
                .context("Failed to write retry message")?;
            }
        }
    }
}

/// Asks the player holding `mark` for a row and a column.
///
/// Returns the zero-based coordinate. Whether the cell is free is the
/// orchestrator's call, not this function's.
#[instrument(skip(input, output))]
pub fn read_coordinate<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    mark: Mark,
) -> Result<Coordinate> {
    writeln!(output, "Player {mark}, choose your move.").context("Failed to write prompt")?;
    let row = read_integer(input, output, "Row (1-3):", ENTRY_RANGE)?;
    let column = read_integer(input, output, "Column (1-3):", ENTRY_RANGE)?;
    Ok(Coordinate::new(row - 1, column - 1))
}
