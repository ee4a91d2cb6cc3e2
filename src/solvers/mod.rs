pub mod depth_first;

use crate::error::Result;
use crate::grids::wall_grid::WallGrid;
use crate::random::RandomSource;

/// How a search ended. Every finished search reports one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveOutcome {
    Found,
    NotFound,
}

/// Searches the passages of a [`WallGrid`] and marks the path it finds as solution.
pub trait Solver {
    /// Advances the search by one step, `Some` once it has finished.
    fn step_solve(
        &mut self,
        grid: &mut WallGrid,
        rng: &mut dyn RandomSource,
    ) -> Result<Option<SolveOutcome>>;

    fn solve_maze(
        &mut self,
        grid: &mut WallGrid,
        rng: &mut dyn RandomSource,
    ) -> Result<SolveOutcome> {
        loop {
            if let Some(outcome) = self.step_solve(grid, rng)? {
                return Ok(outcome);
            }
        }
    }

    fn outcome(&self) -> Option<SolveOutcome>;
}
