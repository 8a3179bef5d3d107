// patterns.rs - Named seed patterns and pseudo-random soups

use crate::grid::Coord;

/// A named pattern as (column, row) offsets from its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    pub fn width(&self) -> usize {
        self.cells.iter().map(|&(c, _)| c + 1).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.cells.iter().map(|&(_, r)| r + 1).max().unwrap_or(0)
    }

    /// Absolute cells with the pattern's top-left corner at `origin`.
    pub fn at(&self, origin: Coord) -> Vec<Coord> {
        self.cells
            .iter()
            .map(|&(c, r)| Coord::new(origin.column + c, origin.row + r))
            .collect()
    }

    /// Absolute cells with the pattern centered on a `columns` x `rows` grid.
    ///
    /// A pattern larger than the grid is pinned to the top-left corner and its
    /// overflowing cells are left for grid construction to reject.
    pub fn centered(&self, columns: usize, rows: usize) -> Vec<Coord> {
        let origin = Coord::new(
            columns.saturating_sub(self.width()).div_ceil(2),
            rows.saturating_sub(self.height()).div_ceil(2),
        );
        self.at(origin)
    }
}

pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
};

pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (1, 0), (2, 0)],
};

pub const TOAD: Pattern = Pattern {
    name: "Toad",
    cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
};

pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
};

pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
};

pub const PULSAR: Pattern = Pattern {
    name: "Pulsar",
    cells: &[
        // Top half
        (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
        (0, 2), (5, 2), (7, 2), (12, 2),
        (0, 3), (5, 3), (7, 3), (12, 3),
        (0, 4), (5, 4), (7, 4), (12, 4),
        (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
        // Bottom half (mirrored)
        (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
        (0, 8), (5, 8), (7, 8), (12, 8),
        (0, 9), (5, 9), (7, 9), (12, 9),
        (0, 10), (5, 10), (7, 10), (12, 10),
        (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
    ],
};

/// .#.
/// ###
/// #..
pub const R_PENTOMINO: Pattern = Pattern {
    name: "R-pentomino",
    cells: &[(1, 0), (0, 1), (1, 1), (2, 1), (0, 2)],
};

pub const GOSPER_GLIDER_GUN: Pattern = Pattern {
    name: "Gosper Glider Gun",
    cells: &[
        (24, 0),
        (22, 1), (24, 1),
        (12, 2), (13, 2), (20, 2), (21, 2), (34, 2), (35, 2),
        (11, 3), (15, 3), (20, 3), (21, 3), (34, 3), (35, 3),
        (0, 4), (1, 4), (10, 4), (16, 4), (20, 4), (21, 4),
        (0, 5), (1, 5), (10, 5), (14, 5), (16, 5), (17, 5), (22, 5), (24, 5),
        (10, 6), (16, 6), (24, 6),
        (11, 7), (15, 7),
        (12, 8), (13, 8),
    ],
};

pub const PATTERNS: &[Pattern] = &[
    R_PENTOMINO,
    GLIDER,
    BLINKER,
    TOAD,
    BEACON,
    BLOCK,
    PULSAR,
    GOSPER_GLIDER_GUN,
];

/// Looks a pattern up by name, ignoring case.
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Deterministic soup with roughly a third of the cells alive.
///
/// The same seed gives the same soup on every platform and toolchain.
pub fn random_soup(columns: usize, rows: usize, seed_value: u64) -> Vec<Coord> {
    // Simple pseudo-random generator
    let mut seed = mix(seed_value);

    let mut live = Vec::new();
    for row in 0..rows {
        for column in 0..columns {
            seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
            if seed % 3 == 0 {
                live.push(Coord::new(column, row));
            }
        }
    }
    live
}

/// SplitMix64 finalizer, so neighboring seeds start far apart.
fn mix(value: u64) -> u64 {
    let mut z = value.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
