//! The turn loop that drives one or more games over a text terminal.

use crate::input::read_coordinate;
use crate::render::render;
use crate::tally::Tally;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::time::Duration;
use tictac_engine::{Coordinate, GameStatus, Mark, MoveError, MoveRequest, Orchestrator, Seat};
use tracing::{info, instrument, warn};

/// A run of games between two seats, reading moves from `input` and
/// writing the board and announcements to `output`.
pub struct Session<R, W> {
    game: Orchestrator,
    input: R,
    output: W,
    tally: Tally,
    delay: Duration,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session with no pause between games.
    pub fn new(seat_x: Seat, seat_o: Seat, input: R, output: W) -> Self {
        Self {
            game: Orchestrator::new(seat_x, seat_o),
            input,
            output,
            tally: Tally::default(),
            delay: Duration::ZERO,
        }
    }

    /// Sets the pause between games. Ignored when a human is seated.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Score so far.
    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    /// The underlying game.
    pub fn game(&self) -> &Orchestrator {
        &self.game
    }

    /// Consumes the session, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    fn has_human(&self) -> bool {
        [Mark::X, Mark::O]
            .into_iter()
            .filter_map(|mark| self.game.seat(mark))
            .any(Seat::is_human)
    }

    /// Plays `games` games in a row and returns the final tally.
    #[instrument(skip(self))]
    pub fn run(&mut self, games: u32) -> Result<Tally> {
        let pause = !self.has_human() && !self.delay.is_zero();
        for number in 0..games {
            if number > 0 && pause {
                std::thread::sleep(self.delay);
            }
            self.play_game()
                .with_context(|| format!("Game {} of {} failed", number + 1, games))?;
        }
        info!(tally = %self.tally, "Session finished");
        Ok(self.tally)
    }

    /// Plays one game from an empty board to a result.
    ///
    /// # Errors
    ///
    /// Fails on I/O errors, when a human's input ends, or when a computer
    /// declines to move on an undecided board.
    #[instrument(skip(self))]
    pub fn play_game(&mut self) -> Result<GameStatus> {
        self.game.reset();
        loop {
            let board = render(self.game.board())?;
            writeln!(self.output, "{board}").context("Failed to write board")?;

            let status = self.game.status();
            if status.is_over() {
                self.finish(status)?;
                return Ok(status);
            }

            let mark = self.game.turn();
            let Coordinate { row, column } = match self.game.request_move() {
                MoveRequest::Selected(coordinate) => {
                    writeln!(
                        self.output,
                        "Player {mark} takes row {}, column {}.",
                        coordinate.row + 1,
                        coordinate.column + 1
                    )
                    .context("Failed to write move")?;
                    coordinate
                }
                MoveRequest::Declined => return Err(MoveError::Declined(mark).into()),
                MoveRequest::Unassigned => read_coordinate(&mut self.input, &mut self.output, mark)?,
            };

            match self.game.place_mark(row, column) {
                Ok(_) => {}
                Err(rejected @ (MoveError::CellOccupied { .. } | MoveError::OutOfRange(_))) => {
                    warn!(%rejected, "Move rejected, asking again");
                    writeln!(self.output, "That move is not allowed: {rejected}.")
                        .context("Failed to write rejection")?;
                }
                Err(other) => return Err(other.into()),
            }
        }
    }

    fn finish(&mut self, status: GameStatus) -> Result<()> {
        self.tally.record(status);
        let announced = match status.winner() {
            Some(mark) => writeln!(self.output, "The winner is {mark}."),
            None => writeln!(self.output, "The game is a tie."),
        };
        announced.context("Failed to write result")?;
        writeln!(self.output, "{}", self.tally).context("Failed to write tally")?;
        info!(%status, moves = self.game.history().len(), "Game finished");
        Ok(())
    }
}
