//! Perfect maze carving and solving on a rectangular wall grid.
//!
//! [`Maze`] is the entry point: [`Maze::generate`] carves a spanning tree with a
//! randomized backtracker and [`Maze::solve`] marks a path from the top left to the
//! bottom right cell with a randomized depth-first search. Every random choice comes
//! from a caller supplied [`RandomSource`].

pub mod error;
pub mod generators;
pub mod grids;
pub mod maze;
pub mod random;
pub mod solvers;

#[cfg(test)]
mod test_helpers;

pub use error::{MazeError, Result};
pub use grids::wall_grid::{WallGrid, DEFAULT_DIMS};
pub use grids::{Dimensions, Direction, Position};
pub use maze::Maze;
pub use random::RandomSource;
pub use solvers::SolveOutcome;
