//! Property-based tests using proptest.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shakmaty::{Chess, Color, Position};

use crate::eval::{evaluate, EvalBreakdown};
use crate::rules::{apply_move, encode_position};
use crate::search::{order_moves, priority, SearchState, MAX_VAL};

/// Play up to `plies` random legal moves from the start position.
fn random_walk(seed: u64, plies: usize) -> Chess {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut position = Chess::default();
    for _ in 0..plies {
        let moves = position.legal_moves();
        if moves.is_empty() {
            break;
        }
        let idx = rng.gen_range(0..moves.len());
        position = apply_move(&position, &moves[idx]);
    }
    position
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Property: static evaluation stays strictly inside the mate sentinel
    #[test]
    fn prop_eval_within_bounds(seed in any::<u64>(), plies in 0..60usize) {
        let position = random_walk(seed, plies);
        let score = evaluate(&position);
        prop_assert!(score.abs() < MAX_VAL);
        prop_assert_eq!(EvalBreakdown::of(&position).total(), score);
    }

    /// Property: a search returns with the position and stack as it found them
    #[test]
    fn prop_search_restores_position(seed in any::<u64>(), plies in 0..40usize, depth in 1..=2u32) {
        let position = random_walk(seed, plies);
        let before = encode_position(&position);
        let maximizing = position.turn() == Color::White;

        let mut state = SearchState::new(position);
        state.minimax(depth, None, -MAX_VAL, MAX_VAL, maximizing);

        prop_assert_eq!(encode_position(state.position()), before);
        prop_assert_eq!(state.stack_depth(), 0);
    }

    /// Property: ordering is a stable sort by descending priority
    #[test]
    fn prop_ordering_is_stable(seed in any::<u64>(), plies in 0..40usize) {
        let position = random_walk(seed, plies);
        let generated = position.legal_moves();
        let mut ordered = generated.clone();
        order_moves(&mut ordered, &position);

        prop_assert_eq!(ordered.len(), generated.len());
        for pair in ordered.windows(2) {
            let (a, b) = (priority(&pair[0], &position), priority(&pair[1], &position));
            prop_assert!(a >= b);
            if a == b {
                let ia = generated.iter().position(|m| *m == pair[0]);
                let ib = generated.iter().position(|m| *m == pair[1]);
                prop_assert!(ia < ib);
            }
        }
    }
}
