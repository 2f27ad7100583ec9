//! End-to-end games between computer tiers.

use tictac_engine::{
    Board, GameStatus, Mark, MoveError, MoveRequest, Orchestrator, Seat, Tier,
    invariants::{InvariantSet, TurnInvariants},
};

fn play(x: Tier, o: Tier, seed: u64) -> (GameStatus, Orchestrator) {
    let mut game = Orchestrator::new(Seat::seeded(x, seed), Seat::seeded(o, seed ^ 0x5eed));
    let status = game.play_out().unwrap();
    (status, game)
}

#[test]
fn test_random_games_always_finish() {
    for seed in 0..200 {
        let (status, game) = play(Tier::Random, Tier::Random, seed);
        assert!(status.is_over());
        assert!(game.history().len() >= 5 && game.history().len() <= 9);
        assert!(TurnInvariants::check_all(&game).is_ok());
    }
}

#[test]
fn test_no_tenth_move() {
    for seed in 0..50 {
        let (status, mut game) = play(Tier::Random, Tier::Random, seed);
        if game.board().is_full() {
            assert_eq!(game.request_move(), MoveRequest::Declined);
        }
        for row in 0..3 {
            for column in 0..3 {
                assert_eq!(game.place_mark(row, column), Err(MoveError::GameOver(status)));
            }
        }
        assert!(game.history().len() <= 9);
    }
}

#[test]
fn test_advanced_mirror_match_is_a_tie() {
    for seed in 0..20 {
        let (status, game) = play(Tier::Advanced, Tier::Advanced, seed);
        assert_eq!(status, GameStatus::Tie);
        let expected: Board = "OOX XXO OXX".parse().unwrap();
        assert_eq!(game.board(), &expected);
    }
}

#[test]
fn test_advanced_rarely_loses_to_random() {
    const GAMES: u64 = 400;
    let mut unbeaten = 0;
    for seed in 0..GAMES {
        let (as_x, _) = play(Tier::Advanced, Tier::Random, seed);
        if as_x.winner() != Some(Mark::O) {
            unbeaten += 1;
        }
        let (as_o, _) = play(Tier::Random, Tier::Advanced, seed);
        if as_o.winner() != Some(Mark::X) {
            unbeaten += 1;
        }
    }
    let rate = unbeaten as f64 / (2 * GAMES) as f64;
    assert!(rate > 0.9, "advanced unbeaten in only {:.1}% of games", rate * 100.0);
}

#[test]
fn test_advanced_never_loses_as_x_to_simple() {
    for seed in 0..100 {
        let (status, _) = play(Tier::Advanced, Tier::Simple, seed);
        assert_ne!(status, GameStatus::Won(Mark::O));
    }
}

#[test]
fn test_reset_between_games() {
    let mut game = Orchestrator::new(Seat::seeded(Tier::Simple, 1), Seat::seeded(Tier::Random, 2));
    for _ in 0..5 {
        game.reset();
        assert_eq!(game.turn(), Mark::X);
        assert_eq!(game.status(), GameStatus::Undetermined);
        assert!(game.play_out().unwrap().is_over());
    }
}
