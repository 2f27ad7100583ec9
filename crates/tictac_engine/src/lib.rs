//! Tic-tac-toe engine: board, line tables and heuristic computer players.
//!
//! # Architecture
//!
//! - **Lines**: the 8 winning lines and the 48 ordered move templates
//! - **Board**: 3x3 grid, coordinate mapping, win/tie detection
//! - **Strategy**: win/block, center, frequency and random heuristics
//!   composed into `random`, `simple` and `advanced` tiers
//! - **Orchestrator**: turn alternation and guarded placement
//!
//! # Example
//!
//! ```
//! use tictac_engine::{GameStatus, Orchestrator, Seat, Tier};
//!
//! let mut game = Orchestrator::new(Seat::seeded(Tier::Advanced, 1), Seat::seeded(Tier::Advanced, 2));
//! assert_eq!(game.play_out(), Ok(GameStatus::Tie));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
pub mod invariants;
pub mod lines;
mod orchestrator;
pub mod strategy;
mod types;

pub use action::{Move, MoveError};
pub use board::{Board, BoardError};
pub use orchestrator::{MoveRequest, Orchestrator, Seat};
pub use strategy::{Heuristic, StrategyChain, Tier};
pub use types::{Coordinate, GameStatus, Mark};
