pub mod wall_grid;

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub rows: usize,
    pub columns: usize,
}

impl Dimensions {
    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && (pos.row as usize) < self.rows
            && (pos.col as usize) < self.columns
    }

    /// bottom right cell, where solving ends
    pub fn last_cell(&self) -> Position {
        Position::new(self.rows as isize - 1, self.columns as isize - 1)
    }
}

/// Cell coordinates. Signed so the neighbor of a border cell can still be computed
/// and then rejected by a bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: isize,
    pub col: isize,
}

impl Position {
    pub const ORIGIN: Position = Position { row: 0, col: 0 };

    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row as isize, col as isize)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Which of the two wall grids a segment lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// walls running east-west, separating a cell from its north/south neighbor
    Horizontal,
    /// walls running north-south, separating a cell from its east/west neighbor
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North = 0,
    South = 1,
    East = 2,
    West = 3,
}

struct Heading {
    delta: (isize, isize),
    axis: Axis,
    // where the controlled wall sits relative to the cell, in its own grid
    wall_offset: (isize, isize),
}

static HEADINGS: [Heading; 4] = [
    Heading {
        delta: (-1, 0),
        axis: Axis::Horizontal,
        wall_offset: (0, 0),
    },
    Heading {
        delta: (1, 0),
        axis: Axis::Horizontal,
        wall_offset: (1, 0),
    },
    Heading {
        delta: (0, 1),
        axis: Axis::Vertical,
        wall_offset: (0, 1),
    },
    Heading {
        delta: (0, -1),
        axis: Axis::Vertical,
        wall_offset: (0, 0),
    },
];

impl Direction {
    /// Enumeration order used by every candidate search.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    #[inline]
    fn heading(self) -> &'static Heading {
        &HEADINGS[self as usize]
    }

    pub fn delta(self) -> (isize, isize) {
        self.heading().delta
    }

    pub fn adjacent(self, pos: Position) -> Position {
        let (d_row, d_col) = self.delta();
        Position::new(pos.row + d_row, pos.col + d_col)
    }

    /// Coordinates of the wall this direction controls for `pos`, within the grid
    /// named by the returned axis.
    pub fn wall_of(self, pos: Position) -> (Axis, usize, usize) {
        let heading = self.heading();
        let row = pos.row + heading.wall_offset.0;
        let col = pos.col + heading.wall_offset.1;
        (heading.axis, row as usize, col as usize)
    }
}

impl std::ops::Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Self::Output {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

/// In-map neighbors of a cell, yielded in [`Direction::ALL`] order.
#[derive(Debug, Clone, Copy)]
pub struct Neighborhood {
    origin: Position,
    dims: Dimensions,

    counter: usize,
}

impl Neighborhood {
    pub fn new(origin: Position, dims: Dimensions) -> Self {
        Self {
            origin,
            dims,
            counter: 0,
        }
    }
}

impl Iterator for Neighborhood {
    type Item = (Position, Direction);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&dir) = Direction::ALL.get(self.counter) {
            self.counter += 1;

            let neighbor = dir.adjacent(self.origin);
            if self.dims.contains(neighbor) {
                return Some((neighbor, dir));
            }
        }

        None
    }
}

#[cfg(test)]
mod test_directions {
    use super::*;

    #[test]
    fn adjacent_is_undone_by_opposite() {
        let pos = Position::new(3, 7);
        for &dir in Direction::ALL.iter() {
            assert_eq!((-dir).adjacent(dir.adjacent(pos)), pos);
            assert_eq!(-(-dir), dir);
        }
    }

    #[test]
    fn opposite_directions_share_a_wall() {
        let pos = Position::new(2, 2);
        for &dir in Direction::ALL.iter() {
            let neighbor = dir.adjacent(pos);
            assert_eq!(dir.wall_of(pos), (-dir).wall_of(neighbor));
        }
    }

    #[test]
    fn wall_table_matches_layout() {
        let pos = Position::new(4, 5);
        assert_eq!(Direction::North.wall_of(pos), (Axis::Horizontal, 4, 5));
        assert_eq!(Direction::South.wall_of(pos), (Axis::Horizontal, 5, 5));
        assert_eq!(Direction::East.wall_of(pos), (Axis::Vertical, 4, 6));
        assert_eq!(Direction::West.wall_of(pos), (Axis::Vertical, 4, 5));
    }

    #[test]
    fn neighborhood_skips_cells_off_the_map() {
        let dims = Dimensions {
            rows: 3,
            columns: 3,
        };

        let corner: Vec<_> = Neighborhood::new(Position::ORIGIN, dims).collect();
        assert_eq!(
            corner,
            vec![
                (Position::new(1, 0), Direction::South),
                (Position::new(0, 1), Direction::East),
            ]
        );

        let center: Vec<_> = Neighborhood::new(Position::new(1, 1), dims)
            .map(|(_, dir)| dir)
            .collect();
        assert_eq!(center, Direction::ALL.to_vec());

        let single = Dimensions {
            rows: 1,
            columns: 1,
        };
        assert_eq!(Neighborhood::new(Position::ORIGIN, single).count(), 0);
    }

    #[test]
    fn contains_rejects_negative_and_overflowing() {
        let dims = Dimensions {
            rows: 2,
            columns: 4,
        };
        assert!(dims.contains(Position::new(1, 3)));
        assert!(!dims.contains(Position::new(-1, 0)));
        assert!(!dims.contains(Position::new(0, -1)));
        assert!(!dims.contains(Position::new(2, 0)));
        assert!(!dims.contains(Position::new(0, 4)));
        assert_eq!(dims.last_cell(), Position::new(1, 3));
    }
}
