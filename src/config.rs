use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

use crate::ghost::GhostPace;

/// About 15 ticks per second.
pub const DEFAULT_TICK_MS: u64 = 66;

pub const TICK_MS_VAR: &str = "PACMAN_TICK_MS";
pub const GHOST_PACE_VAR: &str = "PACMAN_GHOST_PACE";
pub const MAZE_VAR: &str = "PACMAN_MAZE";
pub const LOG_VAR: &str = "PACMAN_LOG";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub tick: Duration,
    pub ghost_pace: GhostPace,
    /// Maze asset to load instead of the built-in layout.
    pub maze_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(DEFAULT_TICK_MS),
            ghost_pace: GhostPace::default(),
            maze_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from `lookup`. Unparseable values are reported and
    /// replaced by their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let tick_ms = parse_or(&lookup, TICK_MS_VAR, DEFAULT_TICK_MS, |ms: &u64| *ms > 0);
        let ghost_pace = parse_or(&lookup, GHOST_PACE_VAR, defaults.ghost_pace, |_| true);
        Self {
            tick: Duration::from_millis(tick_ms),
            ghost_pace,
            maze_path: path_var(&lookup, MAZE_VAR),
        }
    }
}

/// Log file target. Read on its own, before [`Config`], so that config
/// warnings already reach the log.
pub fn log_path_from_env() -> Option<PathBuf> {
    log_path(|key| std::env::var(key).ok())
}

pub fn log_path(lookup: impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
    path_var(&lookup, LOG_VAR)
}

fn parse_or<T: FromStr + Copy>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
    valid: impl Fn(&T) -> bool,
) -> T {
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) if valid(&value) => value,
        _ => {
            warn!(key, value = %raw, "ignoring invalid setting");
            default
        }
    }
}

fn path_var(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<PathBuf> {
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
}
