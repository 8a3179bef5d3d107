// grid.rs - Grid types for Conway's Game of Life

use crate::error::LifeError;

/// A cell position, 0-indexed from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub column: usize,
    pub row: usize,
}

impl Coord {
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((column, row): (usize, usize)) -> Self {
        Self { column, row }
    }
}

/// One generation of the automaton: which cells of a fixed-size grid are alive.
///
/// A `GridState` is never mutated once built. Two states compare equal exactly
/// when their dimensions and alive sets match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GridState {
    columns: usize,
    rows: usize,
    cells: Vec<bool>, // row-major, columns * rows entries
}

impl GridState {
    /// Builds a grid where exactly the given cells are alive.
    ///
    /// Fails with [`LifeError::InvalidDimensions`] if either dimension is zero or
    /// the grid is too large to allocate, and with [`LifeError::InvalidSeed`]
    /// for the first seed outside the grid.
    pub fn new<I, C>(columns: usize, rows: usize, live: I) -> Result<Self, LifeError>
    where
        I: IntoIterator<Item = C>,
        C: Into<Coord>,
    {
        let mut state = Self::dead(columns, rows)?;
        for coord in live {
            let coord = coord.into();
            let index = state.index_of(coord).ok_or(LifeError::InvalidSeed {
                column: coord.column,
                row: coord.row,
                columns,
                rows,
            })?;
            state.cells[index] = true;
        }
        Ok(state)
    }

    /// An all-dead grid.
    pub fn dead(columns: usize, rows: usize) -> Result<Self, LifeError> {
        let invalid = LifeError::InvalidDimensions { columns, rows };
        if columns == 0 || rows == 0 {
            return Err(invalid);
        }
        let size = columns.checked_mul(rows).ok_or(invalid.clone())?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(size).map_err(|_| invalid)?;
        cells.resize(size, false);
        Ok(Self { columns, rows, cells })
    }

    /// Wraps a finished buffer. Callers guarantee the length and non-zero sizes.
    pub(crate) fn from_cells(columns: usize, rows: usize, cells: Vec<bool>) -> Self {
        debug_assert!(columns > 0 && rows > 0);
        debug_assert_eq!(cells.len(), columns * rows);
        Self { columns, rows, cells }
    }

    pub(crate) fn into_cells(self) -> Vec<bool> {
        self.cells
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.columns, self.rows)
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.column < self.columns && coord.row < self.rows
    }

    /// Whether the cell is alive, or `None` if no such cell exists.
    pub fn get(&self, coord: Coord) -> Option<bool> {
        self.index_of(coord).map(|index| self.cells[index])
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn is_extinct(&self) -> bool {
        !self.cells.contains(&true)
    }

    /// Every cell with its state, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, bool)> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, &alive)| (Coord::new(index % columns, index / columns), alive))
    }

    /// Live cells in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells().filter_map(|(coord, alive)| alive.then_some(coord))
    }

    /// One row of the grid, left to right.
    pub fn row(&self, row: usize) -> Option<&[bool]> {
        (row < self.rows).then(|| &self.cells[row * self.columns..(row + 1) * self.columns])
    }

    fn index_of(&self, coord: Coord) -> Option<usize> {
        self.contains(coord)
            .then_some(coord.row * self.columns + coord.column)
    }
}
