//! Property tests over arbitrary round histories.

use proptest::prelude::*;

use baccarat_roads::{RoadEngine, RoundOutcome, Winner};

fn any_outcome() -> impl Strategy<Value = RoundOutcome> {
    (
        prop_oneof![
            Just(Winner::Player),
            Just(Winner::Banker),
            Just(Winner::Tie)
        ],
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(winner, player_pair, banker_pair, player_natural, banker_natural, is_super_six)| {
                RoundOutcome {
                    winner,
                    player_pair,
                    banker_pair,
                    player_natural,
                    banker_natural,
                    is_super_six,
                }
            },
        )
}

fn any_history() -> impl Strategy<Value = Vec<RoundOutcome>> {
    prop::collection::vec(any_outcome(), 0..200)
}

proptest! {
    /// Every round gets exactly one bead-plate cell, ties included.
    #[test]
    fn bead_plate_count_matches_history(history in any_history()) {
        let state = RoadEngine::default().derive(&history);
        prop_assert_eq!(state.bead_plate.len(), history.len());
    }

    /// Streak count equals the number of maximal same-winner non-tie runs.
    #[test]
    fn streak_count_matches_runs(history in any_history()) {
        let mut runs = 0usize;
        let mut prev: Option<Winner> = None;
        for outcome in &history {
            if outcome.winner.is_tie() {
                continue;
            }
            if prev != Some(outcome.winner) {
                runs += 1;
                prev = Some(outcome.winner);
            }
        }

        let state = RoadEngine::default().derive(&history);
        prop_assert_eq!(state.big_road.len(), runs);
    }

    /// Big Road cells equal the non-tie rounds, and the layout never holds
    /// more cells than the streaks do (collision drops may hold fewer).
    #[test]
    fn big_road_cells_match_non_tie_rounds(history in any_history()) {
        let non_ties = history.iter().filter(|o| !o.winner.is_tie()).count();

        let state = RoadEngine::default().derive(&history);
        let cells: usize = state.big_road.iter().map(|s| s.len()).sum();
        prop_assert_eq!(cells, non_ties);
        prop_assert!(state.big_road_layout.len() <= cells);
    }

    /// Deriving twice yields byte-identical serialized state.
    #[test]
    fn derivation_is_deterministic(history in any_history()) {
        let engine = RoadEngine::default();
        let a = bincode::serialize(&engine.derive(&history)).unwrap();
        let b = bincode::serialize(&engine.derive(&history)).unwrap();
        prop_assert_eq!(a, b);
    }

    /// Tempo layouts never place more cells than tempo values exist, and
    /// every road's flat sequence is recomputable from the same streaks.
    #[test]
    fn tempo_layout_never_exceeds_values(history in any_history()) {
        let state = RoadEngine::default().derive(&history);
        for road in [&state.big_eye_boy, &state.small_road, &state.cockroach_pig] {
            prop_assert!(road.layout.len() <= road.values.len());
        }
    }

    /// Stats totals track the history length.
    #[test]
    fn stats_round_total_matches_history(history in any_history()) {
        let state = RoadEngine::default().derive(&history);
        prop_assert_eq!(state.stats.rounds() as usize, history.len());
    }

    /// Trailing-tie counts on streaks never exceed the ties in the history.
    #[test]
    fn tie_counts_bounded_by_history(history in any_history()) {
        let ties = history.iter().filter(|o| o.winner.is_tie()).count() as u32;

        let state = RoadEngine::default().derive(&history);
        let attributed: u32 = state
            .big_road
            .iter()
            .flat_map(|s| s.cells.iter().map(|c| c.tie_count))
            .chain(state.big_road.iter().map(|s| s.tie_count_at_end))
            .sum();
        prop_assert!(attributed <= 2 * ties);
    }
}
