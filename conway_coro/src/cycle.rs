// cycle.rs - Spots repeating generations from a short ring of grid hashes

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use life_engine::GridState;

const HISTORY: usize = 10;

#[derive(Debug, Default)]
pub struct CycleDetector {
    history: [u64; HISTORY],
    count: usize,
}

impl CycleDetector {
    /// Records `grid` and reports whether it matches one of the last
    /// `HISTORY` recorded generations.
    pub fn observe(&mut self, grid: &GridState) -> bool {
        let hash = hash_grid(grid);
        let filled = self.count.min(HISTORY);
        if self.history[..filled].contains(&hash) {
            return true;
        }
        self.history[self.count % HISTORY] = hash;
        self.count += 1;
        false
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn hash_grid(grid: &GridState) -> u64 {
    let mut hasher = DefaultHasher::new();
    grid.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use life_engine::{Coord, SimulationEngine, patterns};

    #[test]
    fn blinker_repeats_after_two() {
        let mut engine =
            SimulationEngine::new(5, 5, patterns::BLINKER.at(Coord::new(1, 2))).unwrap();
        let mut cycles = CycleDetector::default();
        assert!(!cycles.observe(engine.current()));
        assert!(!cycles.observe(&engine.step()));
        assert!(cycles.observe(&engine.step()));
    }

    #[test]
    fn glider_in_open_space_is_not_a_cycle() {
        let mut engine =
            SimulationEngine::new(30, 30, patterns::GLIDER.at(Coord::new(0, 0))).unwrap();
        let mut cycles = CycleDetector::default();
        assert!(!cycles.observe(engine.current()));
        for _ in 0..20 {
            assert!(!cycles.observe(&engine.step()));
        }
    }

    #[test]
    fn empty_history_never_matches() {
        // a fresh ring holds zeroed slots, which must not count as history
        let grid = GridState::dead(3, 3).unwrap();
        let mut cycles = CycleDetector::default();
        assert!(!cycles.observe(&grid));
        cycles.reset();
        assert!(!cycles.observe(&grid));
        assert!(cycles.observe(&grid));
    }
}
