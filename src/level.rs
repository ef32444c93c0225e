use crate::components::{Pos, GRID_SIZE};
use crate::error::MazeError;

/// Built-in layout. `'1'` is a wall, `'0'` is open floor.
pub const DEFAULT_LAYOUT: [&str; 11] = [
    "11111111111111111111111111",
    "10000000000000000000000001",
    "10111011101110111011101101",
    "10101010101010101010101001",
    "10111011101110111011101101",
    "10000000000000000000000001",
    "10111011101110111011101101",
    "10000000000000000000000001",
    "10111011101110111011101101",
    "10000000000000000000000001",
    "11111111111111111111111111",
];

pub const PLAYER_START: (i32, i32) = (1, 1);
pub const GHOST_START: (i32, i32) = (10, 9);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Open,
}

/// Immutable wall map. Every cell on the outer ring is a wall, so no legal
/// step can leave the grid.
#[derive(Clone, Debug)]
pub struct Maze {
    cols: usize,
    rows: usize,
    grid: Vec<Vec<Tile>>,
}

impl Maze {
    pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<Self, MazeError> {
        let first = lines.first().ok_or(MazeError::Empty)?;
        let cols = first.as_ref().chars().count();
        if cols == 0 {
            return Err(MazeError::Empty);
        }

        let mut grid = Vec::with_capacity(lines.len());
        for (row, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != cols {
                return Err(MazeError::RaggedRow {
                    row,
                    expected: cols,
                    found,
                });
            }
            let mut tiles = Vec::with_capacity(cols);
            for (col, ch) in line.chars().enumerate() {
                let tile = match ch {
                    '1' => Tile::Wall,
                    '0' => Tile::Open,
                    found => return Err(MazeError::InvalidCell { col, row, found }),
                };
                tiles.push(tile);
            }
            grid.push(tiles);
        }

        let rows = grid.len();
        for (row, tiles) in grid.iter().enumerate() {
            for (col, tile) in tiles.iter().enumerate() {
                let on_ring = row == 0 || row == rows - 1 || col == 0 || col == cols - 1;
                if on_ring && *tile == Tile::Open {
                    return Err(MazeError::OpenBorder { col, row });
                }
            }
        }

        Ok(Self { cols, rows, grid })
    }

    /// Parses an asset file: one row per line, blank lines ignored.
    pub fn from_text(text: &str) -> Result<Self, MazeError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        Self::parse(lines.as_slice())
    }

    pub fn builtin() -> Self {
        match Self::parse(&DEFAULT_LAYOUT) {
            Ok(maze) => maze,
            Err(err) => unreachable!("built-in layout is valid: {err}"),
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn contains_cell(&self, col: i32, row: i32) -> bool {
        col >= 0 && row >= 0 && (col as usize) < self.cols && (row as usize) < self.rows
    }

    /// Panics when `(col, row)` is outside the grid; callers must never ask.
    pub fn is_wall(&self, col: usize, row: usize) -> bool {
        assert!(
            col < self.cols && row < self.rows,
            "grid query ({col}, {row}) outside {}x{} maze",
            self.cols,
            self.rows
        );
        self.grid[row][col] == Tile::Wall
    }

    /// Collision oracle: floor-divides the pixel position into a cell and
    /// reports whether that cell is a wall.
    pub fn collides_with_wall(&self, pos: Pos) -> bool {
        let col = pos.x.div_euclid(GRID_SIZE);
        let row = pos.y.div_euclid(GRID_SIZE);
        assert!(
            col >= 0 && row >= 0,
            "position ({}, {}) lies left of or above the maze",
            pos.x,
            pos.y
        );
        self.is_wall(col as usize, row as usize)
    }

    /// Wall cells in row-major order, as `(col, row)`.
    pub fn walls(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells().filter(move |&(col, row)| self.grid[row][col] == Tile::Wall)
    }

    /// Open cells in row-major order, as `(col, row)`.
    pub fn open_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells().filter(move |&(col, row)| self.grid[row][col] == Tile::Open)
    }

    fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| (col, row)))
    }
}
