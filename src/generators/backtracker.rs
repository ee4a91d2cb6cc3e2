use log::{debug, trace};

use crate::error::Result;
use crate::generators::Generator;
use crate::grids::wall_grid::WallGrid;
use crate::grids::{Dimensions, Direction, Position};
use crate::random::{pick, RandomSource};

/// Recursive backtracker, run on an explicit stack.
///
/// Each step either carves from the cell on top of the stack into a random unvisited
/// neighbor, or pops that cell once it has none left. A cell is only ever entered while
/// unvisited, so the carved passages form a spanning tree.
pub struct Backtracker {
    origin: Position,
    stack: Vec<Position>,
    carved: usize,
    started: bool,
    done: bool,
}

impl Backtracker {
    pub fn new(dims: Dimensions) -> Self {
        Self::from_origin(Position::ORIGIN, dims)
    }

    pub fn from_origin(origin: Position, dims: Dimensions) -> Self {
        Self {
            origin,
            stack: Vec::with_capacity(dims.cell_count()),
            carved: 0,
            started: false,
            done: false,
        }
    }

    /// walls removed so far
    pub fn carved(&self) -> usize {
        self.carved
    }

    /// cell currently being carved from
    pub fn cursor(&self) -> Option<Position> {
        self.stack.last().copied()
    }

    fn candidates(grid: &WallGrid, pos: Position) -> Result<Vec<Direction>> {
        let mut directions = Vec::with_capacity(4);
        for (neighbor, dir) in grid.neighborhood_of(pos) {
            if !grid.is_visited(neighbor)? {
                directions.push(dir);
            }
        }
        Ok(directions)
    }
}

impl Generator for Backtracker {
    fn step_generation(&mut self, grid: &mut WallGrid, rng: &mut dyn RandomSource) -> Result<()> {
        if self.done {
            return Ok(());
        }

        if !self.started {
            // reject a bad origin while the grid is still untouched
            grid.is_visited(self.origin)?;
            grid.clear_visited();
            grid.mark_visited(self.origin)?;
            self.stack.push(self.origin);
            self.started = true;
            return Ok(());
        }

        let current = match self.stack.last() {
            Some(&current) => current,
            None => {
                self.done = true;
                return Ok(());
            }
        };

        let candidates = Self::candidates(grid, current)?;
        match pick(rng, &candidates) {
            Some(dir) => {
                grid.remove_wall(dir, current)?;
                let next = dir.adjacent(current);
                grid.mark_visited(next)?;
                self.stack.push(next);
                self.carved += 1;
                trace!("carved {:?} from {} into {}", dir, current, next);
            }
            None => {
                self.stack.pop();
                trace!("backtracking from {}", current);
                if self.stack.is_empty() {
                    self.done = true;
                    debug!(
                        "generation from {} finished, {} walls carved",
                        self.origin, self.carved
                    );
                }
            }
        }

        Ok(())
    }

    fn is_done(&self) -> bool {
        self.done
    }
}
