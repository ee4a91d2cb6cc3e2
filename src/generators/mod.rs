pub mod backtracker;

use crate::error::Result;
use crate::grids::wall_grid::WallGrid;
use crate::random::RandomSource;

/// Carves passages into a fully walled [`WallGrid`].
///
/// Generation can be driven one step at a time so a caller can show progress between
/// steps, or run to completion with [`Generator::generate_maze`].
pub trait Generator {
    fn step_generation(&mut self, grid: &mut WallGrid, rng: &mut dyn RandomSource) -> Result<()>;

    fn generate_maze(&mut self, grid: &mut WallGrid, rng: &mut dyn RandomSource) -> Result<()> {
        while !self.is_done() {
            self.step_generation(grid, rng)?;
        }
        Ok(())
    }

    fn is_done(&self) -> bool;
}
