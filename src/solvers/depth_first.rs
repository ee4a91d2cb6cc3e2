use log::{debug, trace};

use crate::error::Result;
use crate::grids::wall_grid::WallGrid;
use crate::grids::{Dimensions, Direction, Position};
use crate::random::{pick, RandomSource};
use crate::solvers::{SolveOutcome, Solver};

/// Randomized depth-first search on an explicit stack.
///
/// The stack always holds the walk from the origin to the cell being explored, so
/// once the destination is reached every cell still on it is part of the path. Cells
/// abandoned as dead ends stay visited but are never marked as solution.
pub struct DepthFirst {
    origin: Position,
    destination: Position,
    stack: Vec<Position>,
    path: Vec<Position>,
    started: bool,
    outcome: Option<SolveOutcome>,
}

impl DepthFirst {
    /// Top left to bottom right.
    pub fn new(dims: Dimensions) -> Self {
        Self::between(Position::ORIGIN, dims.last_cell(), dims)
    }

    pub fn between(origin: Position, destination: Position, dims: Dimensions) -> Self {
        Self {
            origin,
            destination,
            stack: Vec::with_capacity(dims.cell_count()),
            path: Vec::new(),
            started: false,
            outcome: None,
        }
    }

    pub fn origin(&self) -> Position {
        self.origin
    }

    pub fn destination(&self) -> Position {
        self.destination
    }

    /// The path found, origin first. Empty until the search has succeeded.
    pub fn path(&self) -> &[Position] {
        &self.path
    }

    /// cell currently being explored
    pub fn cursor(&self) -> Option<Position> {
        self.stack.last().copied()
    }

    fn candidates(grid: &WallGrid, pos: Position) -> Result<Vec<Direction>> {
        let mut directions = Vec::with_capacity(4);
        for (neighbor, dir) in grid.neighborhood_of(pos) {
            if !grid.wall_present(dir, pos)? && !grid.is_visited(neighbor)? {
                directions.push(dir);
            }
        }
        Ok(directions)
    }

    fn finish(&mut self, outcome: SolveOutcome) -> Option<SolveOutcome> {
        debug!(
            "search from {} to {} finished: {:?}, path length {}",
            self.origin,
            self.destination,
            outcome,
            self.path.len()
        );
        self.outcome = Some(outcome);
        self.outcome
    }
}

impl Solver for DepthFirst {
    fn step_solve(
        &mut self,
        grid: &mut WallGrid,
        rng: &mut dyn RandomSource,
    ) -> Result<Option<SolveOutcome>> {
        if self.outcome.is_some() {
            return Ok(self.outcome);
        }

        if !self.started {
            // fail on bad endpoints before touching anything else
            grid.is_visited(self.origin)?;
            grid.is_visited(self.destination)?;
            grid.clear_visited();
            grid.mark_visited(self.origin)?;
            self.stack.push(self.origin);
            self.started = true;
            return Ok(None);
        }

        if grid.is_visited(self.destination)? {
            // unwind, each frame on the way back is part of the path
            for &cell in self.stack.iter() {
                grid.mark_solution(cell)?;
            }
            self.path = std::mem::take(&mut self.stack);
            return Ok(self.finish(SolveOutcome::Found));
        }

        let current = match self.stack.last() {
            Some(&current) => current,
            None => return Ok(self.finish(SolveOutcome::NotFound)),
        };

        let candidates = Self::candidates(grid, current)?;
        match pick(rng, &candidates) {
            Some(dir) => {
                let next = dir.adjacent(current);
                grid.mark_visited(next)?;
                self.stack.push(next);
                trace!("exploring {:?} from {} into {}", dir, current, next);
            }
            None => {
                self.stack.pop();
                trace!("dead end at {}", current);
                if self.stack.is_empty() {
                    return Ok(self.finish(SolveOutcome::NotFound));
                }
            }
        }

        Ok(None)
    }

    fn outcome(&self) -> Option<SolveOutcome> {
        self.outcome
    }
}
