use std::fmt;

pub const ROWS: usize = 10;
pub const COLS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Wall,
    Start,
    Target,
    Frontier,
    Explored,
    Path,
}

impl Cell {
    /// Text shown inside the cell when the grid is drawn.
    pub fn glyph(self) -> &'static str {
        match self {
            Cell::Wall => "-1",
            Cell::Start => "S",
            Cell::Target => "T",
            _ => "0",
        }
    }
}

/// The fixed 10x10 search board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<Vec<Cell>>,
    pub start: Position,
    pub target: Position,
}

impl Grid {
    /// The layout every menu run starts from: a vertical wall in column 5
    /// covering rows 1 through 6, start at (4, 7) and target at (6, 1).
    pub fn standard() -> Self {
        let walls: Vec<Position> = (1..7).map(|row| Position::new(row, 5)).collect();
        Grid::with_walls(&walls, Position::new(4, 7), Position::new(6, 1))
    }

    /// Build a board of the standard size with an arbitrary wall set.
    ///
    /// Panics if any coordinate is out of bounds, if start equals target, or
    /// if a wall sits on the start or target cell.
    pub fn with_walls(walls: &[Position], start: Position, target: Position) -> Self {
        let mut cells = vec![vec![Cell::Empty; COLS]; ROWS];
        let grid_bounds = |p: Position| p.row < ROWS && p.col < COLS;

        assert!(grid_bounds(start), "start {} is outside the grid", start);
        assert!(grid_bounds(target), "target {} is outside the grid", target);
        assert_ne!(start, target, "start and target must differ");

        for &wall in walls {
            assert!(grid_bounds(wall), "wall {} is outside the grid", wall);
            assert!(
                wall != start && wall != target,
                "wall {} overlaps start or target",
                wall
            );
            cells[wall.row][wall.col] = Cell::Wall;
        }

        cells[start.row][start.col] = Cell::Start;
        cells[target.row][target.col] = Cell::Target;

        Grid {
            rows: ROWS,
            cols: COLS,
            cells,
            start,
            target,
        }
    }

    /// A fresh copy holding only walls, start and target.
    pub fn reset_to_layout(&self) -> Self {
        let mut fresh = self.clone();
        for row in fresh.cells.iter_mut() {
            for cell in row.iter_mut() {
                if !matches!(cell, Cell::Wall | Cell::Start | Cell::Target) {
                    *cell = Cell::Empty;
                }
            }
        }
        fresh
    }

    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row][pos.col]
    }

    /// Change the kind of a cell. Start and target cells keep their kind.
    pub fn mark(&mut self, pos: Position, cell: Cell) {
        if pos == self.start || pos == self.target {
            return;
        }
        self.cells[pos.row][pos.col] = cell;
    }

    /// Mark a freshly discovered cell as frontier, but only if nothing else
    /// has claimed it yet.
    pub fn mark_frontier(&mut self, pos: Position) {
        if self.get(pos) == Cell::Empty {
            self.cells[pos.row][pos.col] = Cell::Frontier;
        }
    }

    pub fn count(&self, kind: Cell) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == kind)
            .count()
    }

    pub fn positions_of(&self, kind: Cell) -> Vec<Position> {
        let mut found = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == kind {
                    found.push(Position::new(row, col));
                }
            }
        }
        found
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.cols {
            write!(f, "{:>3}", col)?;
        }
        writeln!(f)?;

        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{:2} ", row)?;
            for cell in cells {
                write!(f, "{:>3}", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
