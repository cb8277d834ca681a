//! Computer opponent strength and determinism.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;
use tictactoe_ai::{Challenger, run_simulation};
use tictactoe_core::{
    Board, Difficulty, Mark, Outcome, apply_move, available_moves, new_game, opponent_move,
};

/// Walks every human move sequence against a Hard opponent.
fn explore(board: Board, rng: &mut StdRng, games: &mut u32) {
    for index in available_moves(&board) {
        let after_player = apply_move(&board, index, Mark::Player).expect("available move");
        assert_ne!(after_player.outcome(), Outcome::PlayerWin, "Hard lost:\n{}", after_player);
        if after_player.outcome().is_over() {
            *games += 1;
            continue;
        }

        let reply = opponent_move(&after_player, Difficulty::Hard, rng).expect("empty cells remain");
        let after_opponent = apply_move(&after_player, reply, Mark::Opponent).expect("legal reply");
        if after_opponent.outcome().is_over() {
            *games += 1;
        } else {
            explore(after_opponent, rng, games);
        }
    }
}

#[test]
fn test_hard_never_loses_exhaustive() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut games = 0;
    explore(new_game(), &mut rng, &mut games);
    assert!(games > 0);
}

#[test]
fn test_hard_never_loses_to_random_play() {
    let report = run_simulation(50, Difficulty::Hard, Challenger::Random, 11).unwrap();
    assert_eq!(*report.tally.wins(), 0);
    assert_eq!(report.tally.total(), 50);
}

#[test]
fn test_hard_is_deterministic() {
    let board = apply_move(&new_game(), 0, Mark::Player).unwrap();
    let first = opponent_move(&board, Difficulty::Hard, &mut StdRng::seed_from_u64(1));
    for seed in 2..20 {
        let again = opponent_move(&board, Difficulty::Hard, &mut StdRng::seed_from_u64(seed));
        assert_eq!(again, first);
    }
    assert_eq!(first, Some(4));
}

#[test]
fn test_every_difficulty_returns_legal_move() {
    let board = apply_move(&new_game(), 4, Mark::Player).unwrap();
    let board = apply_move(&board, 0, Mark::Opponent).unwrap();
    let legal = available_moves(&board);

    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let index = opponent_move(&board, difficulty, &mut rng).expect("board not full");
            assert!(legal.contains(&index), "{:?} chose {}", difficulty, index);
        }
    }
}

#[test]
fn test_easy_varies_across_seeds() {
    let board = new_game();
    let chosen: HashSet<usize> = (0..50)
        .filter_map(|seed| opponent_move(&board, Difficulty::Easy, &mut StdRng::seed_from_u64(seed)))
        .collect();
    assert!(chosen.len() > 1);
}

#[test]
fn test_at_most_one_winner_in_random_games() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..100 {
        let mut board = new_game();
        let mut mark = Mark::Player;
        while !board.outcome().is_over() {
            let index = opponent_move(&board, Difficulty::Easy, &mut rng).expect("board not full");
            board = apply_move(&board, index, mark).unwrap();
            mark = mark.other();
        }
        if let Some(winner) = board.winner() {
            let loser = winner.other();
            let loser_lines = tictactoe_core::LINES
                .iter()
                .filter(|line| {
                    line.iter()
                        .all(|&i| board.get(i) == Some(tictactoe_core::Cell::Occupied(loser)))
                })
                .count();
            assert_eq!(loser_lines, 0);
        }
    }
}
