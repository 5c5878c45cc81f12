//! Search core tests against a plain minimax reference.

use shakmaty::{Chess, Color, Position};

use crate::eval::evaluate;
use crate::rules::{apply_move, decode_position, encode_position, outcome, GameOutcome};
use crate::search::{NullLogger, Score, SearchState, MAX_VAL};

const POSITIONS: [&str; 5] = [
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "rnbqkb1r/pp1p1ppp/2p5/4P3/2B5/8/PPP1NnPP/RNBQK2R b KQkq - 0 6",
];

fn position(fen: &str) -> Chess {
    decode_position(fen).expect("valid fen")
}

/// Minimax without pruning or ordering.
fn reference(position: &Chess, depth: u32, maximizing: bool) -> Score {
    if depth == 0 {
        return evaluate(position);
    }
    let moves = position.legal_moves();
    if moves.is_empty() {
        return match outcome(position) {
            GameOutcome::Win(Color::White) => MAX_VAL,
            GameOutcome::Win(Color::Black) => -MAX_VAL,
            _ => 0,
        };
    }
    let children = moves
        .iter()
        .map(|mv| reference(&apply_move(position, mv), depth - 1, !maximizing));
    if maximizing {
        children.max().unwrap_or(-MAX_VAL)
    } else {
        children.min().unwrap_or(MAX_VAL)
    }
}

#[test]
fn search_leaves_position_untouched() {
    for fen in POSITIONS {
        for depth in 1..=3 {
            let mut state = SearchState::new(position(fen));
            let maximizing = state.position().turn() == Color::White;
            state.minimax(depth, None, -MAX_VAL, MAX_VAL, maximizing);
            assert_eq!(encode_position(state.position()), fen, "depth {depth}");
            assert_eq!(state.stack_depth(), 0);
        }
    }
}

#[test]
fn depth_one_counts_every_root_child() {
    for fen in POSITIONS {
        let pos = position(fen);
        let expected = pos.legal_moves().len() as u64;
        let mut state = SearchState::new(pos);
        let maximizing = state.position().turn() == Color::White;
        state.minimax(1, None, -MAX_VAL, MAX_VAL, maximizing);
        assert_eq!(state.leaves_explored(), expected, "{fen}");
    }
}

#[test]
fn pruning_never_exceeds_the_full_tree() {
    let pos = position(POSITIONS[1]);
    let full: u64 = pos
        .legal_moves()
        .iter()
        .map(|mv| apply_move(&pos, mv).legal_moves().len() as u64 + 1)
        .sum();
    let mut state = SearchState::new(pos);
    state.minimax(2, None, -MAX_VAL, MAX_VAL, true);
    assert!(state.leaves_explored() <= full);
    assert!(state.leaves_explored() > 0);
}

#[test]
fn alpha_beta_matches_plain_minimax() {
    for fen in POSITIONS {
        let pos = position(fen);
        let maximizing = pos.turn() == Color::White;
        for depth in 1..=2 {
            let expected = reference(&pos, depth, maximizing);
            let mut state = SearchState::new(pos.clone());
            let node = state.minimax(depth, None, -MAX_VAL, MAX_VAL, maximizing);
            assert_eq!(node.score, expected, "{fen} depth {depth}");
        }
    }
}

#[test]
fn alpha_beta_matches_plain_minimax_at_depth_three() {
    let pos = position(POSITIONS[3]);
    let expected = reference(&pos, 3, true);
    let mut state = SearchState::new(pos);
    assert_eq!(state.minimax(3, None, -MAX_VAL, MAX_VAL, true).score, expected);
}

#[test]
fn terminal_nodes_score_by_outcome() {
    // White is checkmated
    let mated = position("rnb1kbnr/pppp1ppp/4p3/8/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 0 1");
    let mut state = SearchState::new(mated.clone());
    assert_eq!(state.minimax(2, None, -MAX_VAL, MAX_VAL, true).score, -MAX_VAL);
    assert_eq!(state.leaves_explored(), 0);

    // With no plies left the evaluator decides
    assert_eq!(
        state.minimax(0, None, -MAX_VAL, MAX_VAL, true).score,
        evaluate(&mated)
    );

    let stalemate = position("k7/8/1QK5/8/8/8/8/8 b - - 0 1");
    let mut state = SearchState::new(stalemate);
    assert_eq!(state.minimax(1, None, -MAX_VAL, MAX_VAL, false).score, 0);
}

#[test]
fn principal_line_replays_legally() {
    let pos = position(POSITIONS[2]);
    let mut state = SearchState::new(pos.clone());
    let result = state.search(3, true, &NullLogger).expect("moves available");
    assert_eq!(result.line.best_move(), Some(&result.best_move));
    assert_eq!(result.line.len(), 3);

    let mut replay = pos;
    for mv in result.line.from_root() {
        assert!(replay.is_legal(mv), "illegal pv move {mv}");
        replay = apply_move(&replay, mv);
    }
}

#[test]
fn iterations_accumulate_leaves() {
    let mut single = SearchState::new(Chess::default());
    single.minimax(2, None, -MAX_VAL, MAX_VAL, true);
    let depth_two = single.leaves_explored();

    let mut state = SearchState::new(Chess::default());
    state.search(2, true, &NullLogger).expect("moves available");
    assert_eq!(state.leaves_explored(), 20 + depth_two);
}
