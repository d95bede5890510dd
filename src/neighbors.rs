use crate::grid::{Cell, Grid, Position};

/// Relative (row, col) offsets in expansion order: up, right, down,
/// down-right, left, up-left.
pub const MOVES: [(isize, isize); 6] = [
    (-1, 0),
    (0, 1),
    (1, 0),
    (1, 1),
    (0, -1),
    (-1, -1),
];

/// Traversable cells adjacent to `pos`, in `MOVES` order.
pub fn neighbors(grid: &Grid, pos: Position) -> Vec<Position> {
    let mut result = Vec::with_capacity(MOVES.len());
    let (row, col) = (pos.row as isize, pos.col as isize);

    for (dr, dc) in MOVES {
        let (nr, nc) = (row + dr, col + dc);
        if !grid.in_bounds(nr, nc) {
            continue;
        }
        let next = Position::new(nr as usize, nc as usize);
        if grid.get(next) != Cell::Wall {
            result.push(next);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_cell_yields_all_six_in_order() {
        let grid = Grid::with_walls(&[], Position::new(0, 0), Position::new(9, 9));
        let got = neighbors(&grid, Position::new(5, 5));
        assert_eq!(
            got,
            vec![
                Position::new(4, 5),
                Position::new(5, 6),
                Position::new(6, 5),
                Position::new(6, 6),
                Position::new(5, 4),
                Position::new(4, 4),
            ]
        );
    }

    #[test]
    fn corner_cells_are_clipped() {
        let grid = Grid::with_walls(&[], Position::new(0, 0), Position::new(9, 9));
        assert_eq!(
            neighbors(&grid, Position::new(0, 0)),
            vec![Position::new(0, 1), Position::new(1, 0), Position::new(1, 1)]
        );
        assert_eq!(
            neighbors(&grid, Position::new(9, 9)),
            vec![Position::new(8, 9), Position::new(9, 8), Position::new(8, 8)]
        );
    }

    #[test]
    fn walls_are_skipped() {
        let grid = Grid::standard();
        // (4,6): left neighbour (4,5) and up-left (3,5) are wall.
        assert_eq!(
            neighbors(&grid, Position::new(4, 6)),
            vec![
                Position::new(3, 6),
                Position::new(4, 7),
                Position::new(5, 6),
                Position::new(5, 7),
            ]
        );
    }

    #[test]
    fn start_and_target_are_traversable() {
        let grid = Grid::standard();
        assert!(neighbors(&grid, Position::new(3, 7)).contains(&grid.start));
        assert!(neighbors(&grid, Position::new(7, 2)).contains(&grid.target));
    }
}
