use log::{info, trace};

use crate::error::{MazeError, Result};
use crate::generators::backtracker::Backtracker;
use crate::generators::Generator;
use crate::grids::wall_grid::WallGrid;
use crate::grids::{Dimensions, Position};
use crate::random::RandomSource;
use crate::solvers::depth_first::DepthFirst;
use crate::solvers::{SolveOutcome, Solver};

/// A maze and the commands a front end drives it with.
///
/// Reads go through [`Maze::grid`]; only the commands below mutate it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Maze {
    grid: WallGrid,
}

impl Maze {
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        Ok(Self {
            grid: WallGrid::with_dims(rows, columns)?,
        })
    }

    pub fn initialize(&mut self, rows: usize, columns: usize) -> Result<()> {
        self.grid.initialize(rows, columns)
    }

    pub fn grid(&self) -> &WallGrid {
        &self.grid
    }

    pub fn dims(&self) -> Dimensions {
        self.grid.dims()
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn columns(&self) -> usize {
        self.grid.columns()
    }

    /// Carves a fresh perfect maze from the top left cell. Any previous walls and
    /// visited markers are discarded first.
    /// Solution marks from an earlier `solve` are discarded too, they describe a maze
    /// that no longer exists.
    pub fn generate(&mut self, rng: &mut dyn RandomSource) -> Result<()> {
        let Dimensions { rows, columns } = self.dims();
        self.grid.initialize(rows, columns)?;

        let mut generator = Backtracker::new(self.dims());
        generator.generate_maze(&mut self.grid, rng)?;

        info!(
            "generated {}x{} maze, {} walls carved",
            rows,
            columns,
            generator.carved()
        );
        trace!("\n{}", self.grid);
        Ok(())
    }

    /// Finds a path from the top left to the bottom right cell and marks it.
    /// Returns the path, origin first.
    pub fn solve(&mut self, rng: &mut dyn RandomSource) -> Result<Vec<Position>> {
        let mut solver = DepthFirst::new(self.dims());

        match solver.solve_maze(&mut self.grid, rng)? {
            SolveOutcome::Found => {
                info!("solved maze, path of {} cells", solver.path().len());
                trace!("\n{}", self.grid);
                Ok(solver.path().to_vec())
            }
            SolveOutcome::NotFound => Err(MazeError::NoPathFound {
                from: solver.origin(),
                to: solver.destination(),
            }),
        }
    }
}
