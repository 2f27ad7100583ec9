//! Headless computer-vs-computer runs.

use crate::config::seat_seed;
use crate::tally::Tally;
use derive_getters::Getters;
use derive_more::Display;
use serde::Serialize;
use tictac_engine::{Mark, MoveError, Orchestrator, Seat, Tier};
use tracing::{info, instrument};

/// Outcome of a batch of games.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Display)]
#[display("{x} (X) vs {o} (O) over {games} games: {tally}")]
pub struct SimulationReport {
    /// Tier playing X.
    x: Tier,
    /// Tier playing O.
    o: Tier,
    /// Games played.
    games: u32,
    /// Seed the run started from, if any.
    seed: Option<u64>,
    /// Results.
    tally: Tally,
}

/// Plays `games` games between two tiers, reusing the same seats so each
/// chain's random source carries on from game to game.
///
/// # Errors
///
/// Returns the first `MoveError` a game raises; none is expected from the
/// built-in tiers.
#[instrument]
pub fn simulate(x: Tier, o: Tier, games: u32, seed: Option<u64>) -> Result<SimulationReport, MoveError> {
    let seat = |tier, mark| match seat_seed(seed, mark) {
        Some(seed) => Seat::seeded(tier, seed),
        None => Seat::computer(tier),
    };
    let mut game = Orchestrator::new(seat(x, Mark::X), seat(o, Mark::O));
    let mut tally = Tally::default();

    for _ in 0..games {
        game.reset();
        tally.record(game.play_out()?);
    }

    info!(%tally, "Simulation complete");
    Ok(SimulationReport {
        x,
        o,
        games,
        seed,
        tally,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_every_game() {
        let report = simulate(Tier::Random, Tier::Simple, 50, Some(3)).unwrap();
        assert_eq!(report.tally().games(), 50);
        assert_eq!(*report.games(), 50);
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let first = simulate(Tier::Random, Tier::Random, 30, Some(11)).unwrap();
        let second = simulate(Tier::Random, Tier::Random, 30, Some(11)).unwrap();
        assert_eq!(first, second);
    }
}
