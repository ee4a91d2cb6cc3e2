use std::fmt;

use log::debug;

use crate::error::{MazeError, Result};
use crate::grids::{Axis, Dimensions, Direction, Neighborhood, Position};

pub const DEFAULT_DIMS: (usize, usize) = (20, 25);

const SOLID: &str = "██";
const OPEN: &str = "  ";
const SOLUTION: &str = "()";
const EXPLORED: &str = " .";

/// Wall layout of a rectangular maze plus the per-cell markers the algorithms leave
/// behind.
///
/// Every wall segment is stored exactly once: `vertical` is `rows x (columns + 1)` and
/// holds the wall on the west side of each cell (the last column being the east
/// border), `horizontal` is `(rows + 1) x columns` and holds the wall on the north
/// side of each cell (the last row being the south border).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallGrid {
    dims: Dimensions,

    vertical: Vec<bool>,
    horizontal: Vec<bool>,

    visited: Vec<bool>,
    solution: Vec<bool>,
}

impl Default for WallGrid {
    fn default() -> Self {
        Self::filled(Dimensions {
            rows: DEFAULT_DIMS.0,
            columns: DEFAULT_DIMS.1,
        })
    }
}

impl WallGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dims(rows: usize, columns: usize) -> Result<Self> {
        let dims = Self::checked_dims(rows, columns)?;
        Ok(Self::filled(dims))
    }

    /// Resets every wall to present and every marker to unset. The grid is left
    /// untouched when the dimensions are rejected.
    pub fn initialize(&mut self, rows: usize, columns: usize) -> Result<()> {
        let dims = Self::checked_dims(rows, columns)?;
        *self = Self::filled(dims);
        debug!("initialized {}x{} wall grid", rows, columns);
        Ok(())
    }

    fn checked_dims(rows: usize, columns: usize) -> Result<Dimensions> {
        if rows == 0 || columns == 0 {
            return Err(MazeError::InvalidDimension { rows, columns });
        }
        Ok(Dimensions { rows, columns })
    }

    fn filled(dims: Dimensions) -> Self {
        let Dimensions { rows, columns } = dims;
        Self {
            dims,
            vertical: vec![true; rows * (columns + 1)],
            horizontal: vec![true; (rows + 1) * columns],
            visited: vec![false; rows * columns],
            solution: vec![false; rows * columns],
        }
    }

    #[inline]
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.dims.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.dims.columns
    }

    #[inline]
    pub fn in_map(&self, pos: Position) -> bool {
        self.dims.contains(pos)
    }

    /// Pure coordinate arithmetic, the result may be off the map.
    #[inline]
    pub fn adjacent(&self, dir: Direction, pos: Position) -> Position {
        dir.adjacent(pos)
    }

    pub fn neighborhood_of(&self, pos: Position) -> Neighborhood {
        Neighborhood::new(pos, self.dims)
    }

    fn index_of(&self, pos: Position) -> Result<usize> {
        if !self.in_map(pos) {
            return Err(MazeError::OutOfBounds {
                position: pos,
                dims: self.dims,
            });
        }
        Ok((self.dims.columns * pos.row as usize) + pos.col as usize)
    }

    fn wall_index_of(&self, dir: Direction, pos: Position) -> Result<(Axis, usize)> {
        // validates pos, the wall itself may be on the border
        self.index_of(pos)?;

        let (axis, row, col) = dir.wall_of(pos);
        let index = match axis {
            Axis::Vertical => (self.dims.columns + 1) * row + col,
            Axis::Horizontal => self.dims.columns * row + col,
        };
        Ok((axis, index))
    }

    pub fn is_visited(&self, pos: Position) -> Result<bool> {
        let index = self.index_of(pos)?;
        Ok(self.visited[index])
    }

    pub fn mark_visited(&mut self, pos: Position) -> Result<()> {
        let index = self.index_of(pos)?;
        self.visited[index] = true;
        Ok(())
    }

    pub fn clear_visited(&mut self) {
        self.visited.iter_mut().for_each(|cell| *cell = false);
    }

    pub fn is_solution_marked(&self, pos: Position) -> Result<bool> {
        let index = self.index_of(pos)?;
        Ok(self.solution[index])
    }

    pub fn mark_solution(&mut self, pos: Position) -> Result<()> {
        let index = self.index_of(pos)?;
        self.solution[index] = true;
        Ok(())
    }

    pub fn clear_solution(&mut self) {
        self.solution.iter_mut().for_each(|cell| *cell = false);
    }

    pub fn wall_present(&self, dir: Direction, pos: Position) -> Result<bool> {
        let (axis, index) = self.wall_index_of(dir, pos)?;
        Ok(match axis {
            Axis::Vertical => self.vertical[index],
            Axis::Horizontal => self.horizontal[index],
        })
    }

    /// Clears the wall on `dir` side of `pos`, a no-op if it is already gone.
    pub fn remove_wall(&mut self, dir: Direction, pos: Position) -> Result<()> {
        let (axis, index) = self.wall_index_of(dir, pos)?;
        match axis {
            Axis::Vertical => self.vertical[index] = false,
            Axis::Horizontal => self.horizontal[index] = false,
        }
        Ok(())
    }

    pub fn removed_wall_count(&self) -> usize {
        self.vertical
            .iter()
            .chain(self.horizontal.iter())
            .filter(|&&wall| !wall)
            .count()
    }

    fn vertical_at(&self, row: usize, col: usize) -> bool {
        self.vertical[(self.dims.columns + 1) * row + col]
    }

    fn horizontal_at(&self, row: usize, col: usize) -> bool {
        self.horizontal[self.dims.columns * row + col]
    }

    fn block_at(&self, row: usize, col: usize) -> &'static str {
        match (row % 2 == 1, col % 2 == 1) {
            // pillar
            (false, false) => SOLID,
            (false, true) if self.horizontal_at(row / 2, col / 2) => SOLID,
            (true, false) if self.vertical_at(row / 2, col / 2) => SOLID,
            (true, true) => {
                let index = self.dims.columns * (row / 2) + col / 2;
                if self.solution[index] {
                    SOLUTION
                } else if self.visited[index] {
                    EXPLORED
                } else {
                    OPEN
                }
            }
            _ => OPEN,
        }
    }
}

/// Block view of the maze: one two-character block per pillar, wall slot and cell.
impl fmt::Display for WallGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let block_rows = self.dims.rows * 2 + 1;
        let block_cols = self.dims.columns * 2 + 1;

        for row in 0..block_rows {
            for col in 0..block_cols {
                f.write_str(self.block_at(row, col))?;
            }
            if row + 1 < block_rows {
                writeln!(f)?;
            }
        }

        Ok(())
    }
}
