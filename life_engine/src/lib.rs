// lib.rs - Simulation engine for Conway's Game of Life
//
// The engine owns the current generation and produces each new one from a
// single frozen snapshot. Rendering shells only ever see `Arc<GridState>`.

pub mod concurrent;
pub mod engine;
pub mod error;
pub mod grid;
pub mod neighbors;
pub mod patterns;
pub mod rules;
pub mod text;

pub use engine::SimulationEngine;
pub use error::LifeError;
pub use grid::{Coord, GridState};
pub use neighbors::count_live_neighbors;
pub use patterns::{PATTERNS, Pattern, random_soup};
pub use rules::next_alive;
