//! Property tests over random move sequences.

use hanoi_core::{PegIndex, PuzzleState};
use proptest::prelude::*;

fn peg() -> impl Strategy<Value = PegIndex> {
    prop::sample::select(PegIndex::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Every disk stays on exactly one peg and every peg stays descending.
    #[test]
    fn prop_invariants_hold_after_any_moves(
        disk_count in 1u32..=6,
        moves in prop::collection::vec((peg(), peg()), 0..200)
    ) {
        let mut state = PuzzleState::new(disk_count).unwrap();
        for (source, target) in moves {
            state.apply_move(source, target);
            prop_assert!(state.check_invariants().is_ok());
            let total: usize = state.pegs().iter().map(|peg| peg.len()).sum();
            prop_assert_eq!(total, disk_count as usize);
        }
    }

    /// A move `is_legal_move` calls illegal changes nothing.
    #[test]
    fn prop_rejected_moves_are_no_ops(
        disk_count in 2u32..=5,
        moves in prop::collection::vec((peg(), peg()), 0..120)
    ) {
        let mut state = PuzzleState::new(disk_count).unwrap();
        for (source, target) in moves {
            let legal = state.is_legal_move(source, target) && !state.is_solved();
            let before = state.clone();
            let outcome = state.apply_move(source, target);
            prop_assert_eq!(outcome.applied(), legal);
            if legal {
                prop_assert_eq!(state.move_count(), before.move_count() + 1);
            } else {
                prop_assert_eq!(&state, &before);
            }
        }
    }

    /// Solved exactly when the goal peg holds every disk.
    #[test]
    fn prop_solved_iff_goal_peg_full(
        disk_count in 1u32..=4,
        moves in prop::collection::vec((peg(), peg()), 0..300)
    ) {
        let mut state = PuzzleState::new(disk_count).unwrap();
        for (source, target) in moves {
            state.apply_move(source, target);
            let goal_full = state.peg(PegIndex::GOAL).len() == disk_count as usize;
            let others_empty = state.peg(PegIndex::Left).is_empty()
                && state.peg(PegIndex::Middle).is_empty();
            prop_assert_eq!(state.is_solved(), goal_full);
            prop_assert_eq!(goal_full, others_empty);
        }
    }
}
