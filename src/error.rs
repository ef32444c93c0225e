use thiserror::Error;

/// Problems found while loading a maze layout.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze layout has no rows")]
    Empty,

    #[error("maze row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("maze cell ({col}, {row}) is {found:?}, expected '0' or '1'")]
    InvalidCell { col: usize, row: usize, found: char },

    #[error("maze cell ({col}, {row}) is open but lies on the outer ring")]
    OpenBorder { col: usize, row: usize },
}

/// Problems with where a round places its agents.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("{agent} spawn ({col}, {row}) is outside the {cols}x{rows} maze")]
    OutOfBounds {
        agent: &'static str,
        col: i32,
        row: i32,
        cols: usize,
        rows: usize,
    },

    #[error("{agent} spawn ({col}, {row}) is a wall")]
    Blocked {
        agent: &'static str,
        col: i32,
        row: i32,
    },
}
