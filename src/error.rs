use std::fmt;

use crate::grids::{Dimensions, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// A maze needs at least one row and one column.
    InvalidDimension { rows: usize, columns: usize },
    OutOfBounds { position: Position, dims: Dimensions },
    /// The search exhausted every branch reachable from `from`.
    NoPathFound { from: Position, to: Position },
}

pub type Result<T> = std::result::Result<T, MazeError>;

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::InvalidDimension { rows, columns } => write!(
                f,
                "invalid maze dimensions {}x{}, both must be at least 1",
                rows, columns
            ),
            MazeError::OutOfBounds { position, dims } => write!(
                f,
                "position {} is outside the {}x{} grid",
                position, dims.rows, dims.columns
            ),
            MazeError::NoPathFound { from, to } => {
                write!(f, "no path from {} to {}", from, to)
            }
        }
    }
}

impl std::error::Error for MazeError {}
