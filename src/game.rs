use tracing::{debug, info};

use crate::components::{Dir, Pos, PELLET_REWARD};
use crate::error::SetupError;
use crate::ghost::{Ghost, GhostPace};
use crate::level::{Maze, GHOST_START, PLAYER_START};
use crate::pellets::PelletField;
use crate::player::Player;

pub const GAME_OVER_MESSAGE: &str = "Game Over";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundState {
    Running,
    GameOver,
}

/// Grid cells where the agents start a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Spawns {
    pub player: (i32, i32),
    pub ghost: (i32, i32),
}

impl Default for Spawns {
    fn default() -> Self {
        Self {
            player: PLAYER_START,
            ghost: GHOST_START,
        }
    }
}

/// Everything the renderer needs after a tick.
pub struct Frame<'a> {
    pub maze: &'a Maze,
    pub player: Pos,
    pub ghost: Pos,
    pub pellets: &'a PelletField,
    pub score: u32,
    pub game_over: bool,
    pub message: Option<&'static str>,
}

/// Owns one round: the maze, both agents, the pellets and the score.
pub struct Game {
    maze: Maze,
    player: Player,
    ghost: Ghost,
    pellets: PelletField,
    score: u32,
    state: RoundState,
    pending: Option<Dir>,
    ticks: u64,
}

impl Game {
    pub fn new(maze: Maze, spawns: Spawns, pace: GhostPace) -> Result<Self, SetupError> {
        let pellets = PelletField::from_maze(&maze);
        Self::with_pellets(maze, spawns, pace, pellets)
    }

    /// Like [`Game::new`] but with a caller-built pellet field.
    pub fn with_pellets(
        maze: Maze,
        spawns: Spawns,
        pace: GhostPace,
        pellets: PelletField,
    ) -> Result<Self, SetupError> {
        let player = check_spawn(&maze, "player", spawns.player)?;
        let ghost = check_spawn(&maze, "ghost", spawns.ghost)?;
        info!(
            cols = maze.cols(),
            rows = maze.rows(),
            pellets = pellets.len(),
            ?pace,
            "round start"
        );
        Ok(Self {
            player: Player::new(player),
            ghost: Ghost::new(ghost, pace),
            maze,
            pellets,
            score: 0,
            state: RoundState::Running,
            pending: None,
            ticks: 0,
        })
    }

    /// Buffers a direction; the latest one wins and is applied next tick.
    pub fn queue_direction(&mut self, dir: Dir) {
        self.pending = Some(dir);
    }

    /// Runs one simulation step. Once the round is over this does nothing.
    pub fn tick(&mut self) -> RoundState {
        if self.state == RoundState::GameOver {
            return self.state;
        }
        self.ticks += 1;

        if let Some(dir) = self.pending.take() {
            self.player.set_direction(dir);
        }
        self.player.tick(&self.maze);
        self.ghost.tick(&self.maze, self.player.pos);

        let eaten = self.pellets.collect(self.player.pos.bounds());
        if eaten > 0 {
            self.score += PELLET_REWARD * eaten as u32;
            debug!(eaten, score = self.score, left = self.pellets.len(), "pellets eaten");
        }

        if self.player.pos.bounds().overlaps(&self.ghost.pos.bounds()) {
            self.state = RoundState::GameOver;
            info!(score = self.score, ticks = self.ticks, "game over");
        }
        self.state
    }

    pub fn frame(&self) -> Frame<'_> {
        let game_over = self.state == RoundState::GameOver;
        Frame {
            maze: &self.maze,
            player: self.player.pos,
            ghost: self.ghost.pos,
            pellets: &self.pellets,
            score: self.score,
            game_over,
            message: game_over.then_some(GAME_OVER_MESSAGE),
        }
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn ghost(&self) -> &Ghost {
        &self.ghost
    }

    pub fn pellets(&self) -> &PelletField {
        &self.pellets
    }
}

fn check_spawn(
    maze: &Maze,
    agent: &'static str,
    (col, row): (i32, i32),
) -> Result<Pos, SetupError> {
    if !maze.contains_cell(col, row) {
        return Err(SetupError::OutOfBounds {
            agent,
            col,
            row,
            cols: maze.cols(),
            rows: maze.rows(),
        });
    }
    if maze.is_wall(col as usize, row as usize) {
        return Err(SetupError::Blocked { agent, col, row });
    }
    Ok(Pos::from_cell(col, row))
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    use super::*;

    fn corridor() -> Maze {
        Maze::parse(&["1111111", "1000001", "1111111"]).unwrap()
    }

    #[test]
    fn rejects_bad_spawns() {
        let blocked = Spawns {
            player: (0, 0),
            ghost: (2, 1),
        };
        assert_eq!(
            Game::new(corridor(), blocked, GhostPace::Full).err(),
            Some(SetupError::Blocked {
                agent: "player",
                col: 0,
                row: 0
            })
        );
        let outside = Spawns {
            player: (1, 1),
            ghost: (7, 1),
        };
        assert!(matches!(
            Game::new(corridor(), outside, GhostPace::Full),
            Err(SetupError::OutOfBounds { agent: "ghost", .. })
        ));
    }

    #[test]
    fn ghost_meeting_player_ends_round() {
        let spawns = Spawns {
            player: (1, 1),
            ghost: (4, 1),
        };
        let mut game = Game::new(corridor(), spawns, GhostPace::Full).unwrap();
        // Player eats its start pellet on the first tick while the ghost closes in.
        assert_eq!(game.tick(), RoundState::Running);
        assert_eq!(game.ghost().pos, Pos::from_cell(3, 1));
        assert_eq!(game.score(), PELLET_REWARD);
        assert_eq!(game.tick(), RoundState::Running);
        assert_eq!(game.tick(), RoundState::GameOver);
        assert_eq!(game.ghost().pos, game.player().pos);

        let frame = game.frame();
        assert!(frame.game_over);
        assert_eq!(frame.message, Some(GAME_OVER_MESSAGE));
    }

    #[test]
    fn game_over_is_terminal() {
        let spawns = Spawns {
            player: (1, 1),
            ghost: (2, 1),
        };
        let mut game = Game::new(corridor(), spawns, GhostPace::Full).unwrap();
        assert_eq!(game.tick(), RoundState::GameOver);
        let (score, ticks) = (game.score(), game.ticks());
        game.queue_direction(Dir::Right);
        for _ in 0..3 {
            assert_eq!(game.tick(), RoundState::GameOver);
        }
        assert_eq!(game.score(), score);
        assert_eq!(game.ticks(), ticks);
        assert_eq!(game.player().pos, Pos::from_cell(1, 1));
    }

    #[test]
    fn latest_queued_direction_wins() {
        let mut game = Game::new(Maze::builtin(), Spawns::default(), GhostPace::Full).unwrap();
        game.queue_direction(Dir::Up);
        game.queue_direction(Dir::Right);
        game.tick();
        assert_eq!(game.player().pos, Pos::from_cell(2, 1));
        assert_eq!(game.player().dir, Some(Dir::Right));
    }

    #[test]
    fn head_on_move_into_half_pace_ghost_ends_round() {
        let spawns = Spawns {
            player: (1, 1),
            ghost: (2, 1),
        };
        let mut game = Game::new(Maze::builtin(), spawns, GhostPace::Half).unwrap();
        game.queue_direction(Dir::Right);
        assert_eq!(game.tick(), RoundState::GameOver);
        assert_eq!(game.player().pos, Pos::new(40, 20));
        assert_eq!(game.ghost().pos, Pos::new(40, 30));
    }

    #[test]
    fn head_on_move_into_full_pace_ghost_slips_past() {
        // Both agents move a whole cell, so the ghost steps off the cell the
        // player just entered and the boxes never overlap.
        let spawns = Spawns {
            player: (1, 1),
            ghost: (2, 1),
        };
        let mut game = Game::new(Maze::builtin(), spawns, GhostPace::Full).unwrap();
        game.queue_direction(Dir::Right);
        assert_eq!(game.tick(), RoundState::Running);
        assert_eq!(game.ghost().pos, Pos::new(20, 20));
        assert_eq!(game.tick(), RoundState::Running);
        assert_eq!(game.ghost().pos, Pos::new(40, 20));
        assert_eq!(game.player().pos, Pos::new(60, 20));
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn round_start_logs_the_supplied_pellet_count() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let spawns = Spawns {
            player: (1, 1),
            ghost: (4, 1),
        };
        let pellets = PelletField::from_positions([Pos::new(40, 20)]);
        tracing::subscriber::with_default(subscriber, || {
            Game::with_pellets(corridor(), spawns, GhostPace::Half, pellets).unwrap()
        });

        let logged = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        let starts: Vec<&str> = logged.lines().filter(|l| l.contains("round start")).collect();
        assert_eq!(starts.len(), 1, "{logged}");
        assert!(starts[0].contains("pellets=1"), "{logged}");
    }
}
