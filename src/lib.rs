//! Single-screen maze chase: a player eats pellets while one ghost closes in
//! with a one-step greedy pursuit.
//!
//! The simulation core (`level`, `player`, `ghost`, `pellets`, `game`) never
//! touches the terminal. `input` and `render` are the crossterm collaborators
//! driven by the `pacman` binary.

pub mod components;
pub mod config;
pub mod error;
pub mod game;
pub mod ghost;
pub mod input;
pub mod level;
pub mod logging;
pub mod pellets;
pub mod player;
pub mod render;
pub mod terminal;

pub use components::{Bounds, Dir, Pos, GRID_SIZE, PELLET_REWARD};
pub use error::{MazeError, SetupError};
pub use game::{Frame, Game, RoundState, Spawns};
pub use ghost::{Ghost, GhostPace};
pub use level::Maze;
pub use pellets::PelletField;
pub use player::Player;
