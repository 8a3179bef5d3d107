// concurrent.rs - Row coroutines: one tokio task per grid row
//
// Each task reads the same frozen `Arc<GridState>` and returns its finished
// row; the engine publishes only after every row has come back.

use std::sync::Arc;

use tracing::trace;

use crate::engine::{SimulationEngine, next_cell};
use crate::grid::{Coord, GridState};

/// Computes one row of the next generation, yielding between cells.
async fn process_row(row: usize, snapshot: Arc<GridState>) -> (usize, Vec<bool>) {
    let columns = snapshot.columns();
    let mut cells = Vec::with_capacity(columns);
    for column in 0..columns {
        cells.push(next_cell(&snapshot, Coord::new(column, row)));
        tokio::task::yield_now().await; // Cooperative yielding
    }
    (row, cells)
}

impl SimulationEngine {
    /// Advances one generation with every row evaluated as its own task.
    ///
    /// Produces exactly the generation [`SimulationEngine::step`] would. Must be
    /// called from within a tokio runtime. A panic inside a row task is
    /// resumed on the caller.
    pub async fn step_concurrent(&mut self) -> Arc<GridState> {
        let snapshot = self.snapshot();
        let (columns, rows) = snapshot.dimensions();

        let handles: Vec<_> = (0..rows)
            .map(|row| tokio::spawn(process_row(row, Arc::clone(&snapshot))))
            .collect();

        let mut finished = vec![Vec::new(); rows];
        for handle in handles {
            let (row, cells) = match handle.await {
                Ok(result) => result,
                Err(err) => std::panic::resume_unwind(err.into_panic()),
            };
            finished[row] = cells;
        }
        trace!(rows, "all row tasks finished");

        // Release our handle so the retired buffer can be recycled on publish.
        drop(snapshot);

        let mut next = self.take_scratch();
        for cells in finished {
            next.extend_from_slice(&cells);
        }
        self.publish(GridState::from_cells(columns, rows, next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns;

    #[tokio::test]
    async fn matches_sequential_step() {
        let seed = patterns::random_soup(23, 17, 7);
        let mut sequential = SimulationEngine::new(23, 17, seed.clone()).unwrap();
        let mut concurrent = SimulationEngine::new(23, 17, seed).unwrap();

        for _ in 0..12 {
            let expected = sequential.step();
            let actual = concurrent.step_concurrent().await;
            assert_eq!(*actual, *expected);
        }
        assert_eq!(concurrent.generation(), 12);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn blinker_on_worker_threads() {
        let mut engine = SimulationEngine::new(5, 5, [(1, 2), (2, 2), (3, 2)]).unwrap();
        let vertical = engine.step_concurrent().await;
        assert_eq!(
            vertical.live_cells().collect::<Vec<_>>(),
            vec![Coord::new(2, 1), Coord::new(2, 2), Coord::new(2, 3)]
        );
        let horizontal = engine.step_concurrent().await;
        assert_eq!(
            horizontal.live_cells().collect::<Vec<_>>(),
            vec![Coord::new(1, 2), Coord::new(2, 2), Coord::new(3, 2)]
        );
    }
}
