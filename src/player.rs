use tracing::debug;

use crate::components::{Dir, Pos, GRID_SIZE};
use crate::level::Maze;

/// The player-controlled agent. Once a direction is set it keeps moving that
/// way every tick until the input changes it.
#[derive(Clone, Debug)]
pub struct Player {
    pub pos: Pos,
    pub dir: Option<Dir>,
    pub speed: i32,
}

impl Player {
    pub fn new(pos: Pos) -> Self {
        Self {
            pos,
            dir: None,
            speed: GRID_SIZE,
        }
    }

    pub fn set_direction(&mut self, dir: Dir) {
        self.dir = Some(dir);
    }

    /// Advances one step. A step into a wall is dropped and the position and
    /// direction stay as they were.
    pub fn tick(&mut self, maze: &Maze) {
        let Some(dir) = self.dir else {
            return;
        };
        let next = self.pos.step(dir, self.speed);
        if maze.collides_with_wall(next) {
            debug!(?dir, x = self.pos.x, y = self.pos.y, "player blocked");
            return;
        }
        self.pos = next;
    }
}
