use std::collections::VecDeque;

use crate::grids::wall_grid::WallGrid;
use crate::grids::Position;

fn all_cells(grid: &WallGrid) -> impl Iterator<Item = Position> {
    let columns = grid.columns();
    (0..grid.rows() * columns).map(move |i| Position::from((i / columns, i % columns)))
}

/// Cells reachable from the origin by walking through removed walls.
pub fn reachable_from_origin(grid: &WallGrid) -> usize {
    let mut seen = vec![false; grid.rows() * grid.columns()];
    let index = |pos: Position| pos.row as usize * grid.columns() + pos.col as usize;
    let mut queue = VecDeque::new();
    let mut count = 0;

    seen[0] = true;
    queue.push_back(Position::ORIGIN);

    while let Some(pos) = queue.pop_front() {
        count += 1;
        for (neighbor, dir) in grid.neighborhood_of(pos) {
            if grid.wall_present(dir, pos).unwrap() || seen[index(neighbor)] {
                continue;
            }
            seen[index(neighbor)] = true;
            queue.push_back(neighbor);
        }
    }

    count
}

/// n - 1 open walls that connect all n cells can only be a spanning tree.
pub fn assert_perfect(grid: &WallGrid) {
    let cells = grid.rows() * grid.columns();

    assert_eq!(
        grid.removed_wall_count(),
        cells - 1,
        "a perfect maze opens exactly one wall fewer than it has cells:\n{}",
        grid
    );
    assert_eq!(
        reachable_from_origin(grid),
        cells,
        "every cell should be reachable:\n{}",
        grid
    );
}

/// `path` runs from the origin to the last cell through open walls without repeats,
/// and is exactly the set of cells marked as solution.
pub fn assert_solution_path(grid: &WallGrid, path: &[Position]) {
    assert_eq!(path.first(), Some(&Position::ORIGIN));
    assert_eq!(path.last(), Some(&grid.dims().last_cell()));

    for step in path.windows(2) {
        let (from, to) = (step[0], step[1]);
        let (dir, _) = grid
            .neighborhood_of(from)
            .map(|(neighbor, dir)| (dir, neighbor))
            .find(|&(_, neighbor)| neighbor == to)
            .unwrap_or_else(|| panic!("{} and {} are not adjacent", from, to));
        assert!(
            !grid.wall_present(dir, from).unwrap(),
            "wall between {} and {}",
            from,
            to
        );
    }

    for (i, pos) in path.iter().enumerate() {
        assert!(!path[i + 1..].contains(pos), "{} repeats in the path", pos);
    }

    for pos in all_cells(grid) {
        assert_eq!(
            grid.is_solution_marked(pos).unwrap(),
            path.contains(&pos),
            "solution marker mismatch at {}:\n{}",
            pos,
            grid
        );
    }
}
