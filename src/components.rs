/// Side length of one maze cell in pixels.
pub const GRID_SIZE: i32 = 20;

/// Score awarded for each pellet eaten.
pub const PELLET_REWARD: u32 = 10;

/// Pixel-space position of an agent or pellet (top-left corner of its box).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Top-left pixel of grid cell `(col, row)`.
    pub const fn from_cell(col: i32, row: i32) -> Self {
        Self {
            x: col * GRID_SIZE,
            y: row * GRID_SIZE,
        }
    }

    pub fn step(self, dir: Dir, speed: i32) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx * speed,
            y: self.y + dy * speed,
        }
    }

    pub fn manhattan(self, other: Pos) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    pub fn bounds(self) -> Bounds {
        Bounds {
            origin: self,
            size: GRID_SIZE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    /// Evaluation order for the ghost; earlier entries win ties.
    pub const ALL: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Dir::Up => (0, -1),
            Dir::Down => (0, 1),
            Dir::Left => (-1, 0),
            Dir::Right => (1, 0),
        }
    }
}

/// Square box anchored at `origin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub origin: Pos,
    pub size: i32,
}

impl Bounds {
    /// Strict overlap: boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.origin.x < other.origin.x + other.size
            && other.origin.x < self.origin.x + self.size
            && self.origin.y < other.origin.y + other.size
            && other.origin.y < self.origin.y + self.size
    }
}
