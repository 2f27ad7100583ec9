//! Tictac - terminal front end for the tic-tac-toe engine.
//!
//! # Architecture
//!
//! - **Config**: `tictac.toml` plus command-line overrides
//! - **Render**: box-drawing board text
//! - **Input**: one-based row/column prompts for human seats
//! - **Session**: the turn loop, announcements and running tally
//! - **Simulate**: headless computer-vs-computer batches

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod input;
mod render;
mod session;
mod simulate;
mod tally;

pub use config::{ConfigError, DEFAULT_CONFIG_FILE, PlayerKind, SessionConfig, seat_seed};
pub use input::{ENTRY_RANGE, parse_entry, read_coordinate, read_integer};
pub use render::{mark_symbol, render};
pub use session::Session;
pub use simulate::{SimulationReport, simulate};
pub use tally::Tally;
