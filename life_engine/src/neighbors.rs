// neighbors.rs - Live neighbor counting with hard grid edges

use crate::grid::{Coord, GridState};

/// Neighbor offsets as (column, row) deltas.
const OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// Counts the live cells among the up-to-8 neighbors of `coord`.
///
/// Neighbors that fall outside the grid are skipped; there is no wraparound.
pub fn count_live_neighbors(state: &GridState, coord: Coord) -> u8 {
    let mut count = 0;
    for &(dc, dr) in &OFFSETS {
        let (Some(column), Some(row)) = (
            coord.column.checked_add_signed(dc),
            coord.row.checked_add_signed(dr),
        ) else {
            continue;
        };
        if state.get(Coord::new(column, row)) == Some(true) {
            count += 1;
        }
    }
    count
}
