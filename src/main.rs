use std::fs;
use std::io::{self, Stdout};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::info;

use pacman_chase::config::{self, Config};
use pacman_chase::game::Spawns;
use pacman_chase::input::{self, InputEvent};
use pacman_chase::render::Renderer;
use pacman_chase::terminal::{self, TerminalGuard};
use pacman_chase::{logging, Game, Maze, RoundState};

/// How long the game-over screen stays up before the process exits.
const GAME_OVER_HOLD: Duration = Duration::from_secs(2);

fn main() -> Result<()> {
    if let Some(path) = config::log_path_from_env() {
        logging::init(&path)?;
    }
    let config = Config::from_env();

    let maze = match &config.maze_path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read maze {}", path.display()))?;
            Maze::from_text(&text).with_context(|| format!("invalid maze {}", path.display()))?
        }
        None => Maze::builtin(),
    };
    let game = Game::new(maze, Spawns::default(), config.ghost_pace)
        .context("failed to set up round")?;

    terminal::install_panic_hook();
    let mut guard =
        TerminalGuard::enter(io::stdout(), true).context("failed to set up terminal")?;
    run(guard.writer(), game, &config)?;
    Ok(())
}

fn run(stdout: &mut Stdout, mut game: Game, config: &Config) -> io::Result<()> {
    let mut renderer = Renderer::new(stdout);
    renderer.draw(&game.frame())?;

    loop {
        let frame_start = Instant::now();
        for event in input::drain()? {
            match event {
                InputEvent::Move(dir) => game.queue_direction(dir),
                InputEvent::Quit => {
                    info!(score = game.score(), ticks = game.ticks(), "quit");
                    return Ok(());
                }
            }
        }

        let state = game.tick();
        renderer.draw(&game.frame())?;
        if state == RoundState::GameOver {
            input::hold_until_quit(GAME_OVER_HOLD)?;
            return Ok(());
        }

        let elapsed = frame_start.elapsed();
        if elapsed < config.tick {
            thread::sleep(config.tick - elapsed);
        }
    }
}
