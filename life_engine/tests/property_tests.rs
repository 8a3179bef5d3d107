//! Property-based tests for the simulation engine.
//!
//! These use proptest to check that stepping is deterministic, synchronous,
//! and confined to the grid across many random seeds.

use life_engine::{Coord, GridState, SimulationEngine, count_live_neighbors, next_alive};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_grid()(columns in 1usize..16, rows in 1usize..16)
        (cells in proptest::collection::vec(any::<bool>(), columns * rows),
         columns in Just(columns),
         rows in Just(rows)) -> GridState
    {
        let live = cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(|(i, _)| Coord::new(i % columns, i / columns));
        GridState::new(columns, rows, live).unwrap()
    }
}

/// Reference step that reads neighbors with signed arithmetic.
fn reference_step(state: &GridState) -> GridState {
    let (columns, rows) = state.dimensions();
    let alive = |c: i64, r: i64| {
        c >= 0 && r >= 0 && state.get(Coord::new(c as usize, r as usize)) == Some(true)
    };
    let mut live = Vec::new();
    for r in 0..rows as i64 {
        for c in 0..columns as i64 {
            let mut n = 0;
            for dr in -1..=1 {
                for dc in -1..=1 {
                    if (dc, dr) != (0, 0) && alive(c + dc, r + dr) {
                        n += 1;
                    }
                }
            }
            let next = matches!((alive(c, r), n), (true, 2) | (true, 3) | (false, 3));
            if next {
                live.push(Coord::new(c as usize, r as usize));
            }
        }
    }
    GridState::new(columns, rows, live).unwrap()
}

proptest! {
    #[test]
    fn stepping_is_deterministic(state in arbitrary_grid(), steps in 0u64..8) {
        let mut a = SimulationEngine::from_state(state.clone());
        let mut b = SimulationEngine::from_state(state);
        for _ in 0..steps {
            prop_assert_eq!(a.step().to_string(), b.step().to_string());
        }
        prop_assert_eq!(a.generation(), steps);
    }

    #[test]
    fn step_matches_reference(state in arbitrary_grid()) {
        let expected = reference_step(&state);
        let mut engine = SimulationEngine::from_state(state);
        prop_assert_eq!(&*engine.step(), &expected);
    }

    #[test]
    fn step_keeps_dimensions(state in arbitrary_grid()) {
        let dims = state.dimensions();
        let mut engine = SimulationEngine::from_state(state);
        prop_assert_eq!(engine.step().dimensions(), dims);
    }

    #[test]
    fn neighbor_count_in_range(state in arbitrary_grid()) {
        for (coord, alive) in state.cells() {
            let n = count_live_neighbors(&state, coord);
            prop_assert!(n <= 8);
            prop_assert_eq!(state.get(coord), Some(alive));
        }
    }

    #[test]
    fn cells_outside_are_absent(state in arbitrary_grid(), extra in 0usize..4) {
        let (columns, rows) = state.dimensions();
        prop_assert_eq!(state.get(Coord::new(columns + extra, 0)), None);
        prop_assert_eq!(state.get(Coord::new(0, rows + extra)), None);
    }

    #[test]
    fn rule_only_births_on_three(n in 0u8..=8) {
        prop_assert_eq!(next_alive(false, n), n == 3);
        prop_assert_eq!(next_alive(true, n), n == 2 || n == 3);
    }
}

#[tokio::test]
async fn concurrent_step_matches_sequential_on_soup() {
    let seed = life_engine::random_soup(31, 19, 2024);
    let mut sequential = SimulationEngine::new(31, 19, seed.clone()).unwrap();
    let mut concurrent = SimulationEngine::new(31, 19, seed).unwrap();
    for _ in 0..20 {
        assert_eq!(concurrent.step_concurrent().await, sequential.step());
    }
}
