use std::str::FromStr;

use tracing::trace;

use crate::components::{Dir, Pos, GRID_SIZE};
use crate::level::Maze;

/// How far the ghost travels per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GhostPace {
    /// One whole cell, same as the player. Keeps the ghost grid-aligned,
    /// but a player stepping into the ghost's cell swaps past it unharmed.
    Full,
    /// Half a cell. The ghost can sit between two cells; the collision
    /// oracle only looks at the cell holding its top-left corner.
    #[default]
    Half,
}

impl GhostPace {
    pub fn speed(self) -> i32 {
        match self {
            GhostPace::Full => GRID_SIZE,
            GhostPace::Half => GRID_SIZE / 2,
        }
    }
}

impl FromStr for GhostPace {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(GhostPace::Full),
            "half" => Ok(GhostPace::Half),
            other => Err(format!("unknown ghost pace {other:?}")),
        }
    }
}

/// The pursuer. Holds no heading between ticks; every tick it re-picks the
/// legal step that lands closest to its target.
#[derive(Clone, Debug)]
pub struct Ghost {
    pub pos: Pos,
    pub speed: i32,
}

impl Ghost {
    pub fn new(pos: Pos, pace: GhostPace) -> Self {
        Self {
            pos,
            speed: pace.speed(),
        }
    }

    /// One-step greedy lookahead. Candidates are tried in `Dir::ALL` order and
    /// only a strictly shorter Manhattan distance replaces the current best,
    /// so ties go to the earlier direction. `None` when walled in.
    pub fn choose_direction(&self, maze: &Maze, target: Pos) -> Option<Dir> {
        let mut best: Option<(Dir, i32)> = None;
        for dir in Dir::ALL {
            let next = self.pos.step(dir, self.speed);
            if maze.collides_with_wall(next) {
                continue;
            }
            let dist = next.manhattan(target);
            match best {
                Some((_, best_dist)) if dist >= best_dist => {}
                _ => best = Some((dir, dist)),
            }
        }
        best.map(|(dir, _)| dir)
    }

    /// Moves one step toward `target` and returns the direction taken.
    pub fn tick(&mut self, maze: &Maze, target: Pos) -> Option<Dir> {
        let dir = self.choose_direction(maze, target);
        if let Some(dir) = dir {
            self.pos = self.pos.step(dir, self.speed);
        }
        trace!(?dir, x = self.pos.x, y = self.pos.y, "ghost step");
        dir
    }
}
