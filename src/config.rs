/// Gameplay constants and runtime settings.
///
/// Every physics value is expressed per frame: the simulation assumes a
/// fixed tick and does no frame-rate normalisation.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{GameError, Result};

// ── Playfield ─────────────────────────────────────────────────────────────────

/// Logical canvas width.
pub const SCREEN_WIDTH: u32 = 400;
/// Logical canvas height.
pub const SCREEN_HEIGHT: u32 = 650;

// ── Bird ──────────────────────────────────────────────────────────────────────

/// Downward acceleration added to the bird's velocity every frame.
pub const GRAVITY: f64 = 0.4;
/// Velocity a jump sets (negative = upward).
pub const JUMP_VELOCITY: f64 = -7.5;

pub const BIRD_START_X: f64 = 80.0;
pub const BIRD_START_Y: f64 = (SCREEN_HEIGHT / 2) as f64;
pub const BIRD_WIDTH: f64 = 34.0;
pub const BIRD_HEIGHT: f64 = 24.0;

// ── Pipes ─────────────────────────────────────────────────────────────────────

/// Leftward scroll per frame.
pub const PIPE_SPEED: f64 = 2.5;
pub const PIPE_WIDTH: f64 = 60.0;
pub const PIPE_GAP_HEIGHT: f64 = 160.0;
/// Horizontal distance between consecutive pipes.
pub const PIPE_SPACING: f64 = 220.0;
/// Minimum distance between the gap and the ceiling or floor.
pub const PIPE_MARGIN: f64 = 60.0;
pub const PIPE_COUNT: usize = 3;

// ── Runtime settings ──────────────────────────────────────────────────────────

pub const DEFAULT_FPS: u32 = 60;
const MAX_FPS: u32 = 240;

pub const ENV_FPS: &str = "FLAPPY_FPS";
pub const ENV_SEED: &str = "FLAPPY_SEED";
pub const ENV_LOG: &str = "FLAPPY_LOG";

/// Settings for the terminal driver, read from the environment.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Frames simulated (and drawn) per second.
    pub fps: u32,
    /// Seed for the pipe-gap RNG; entropy when `None`.
    pub seed: Option<u64>,
    /// Log destination. Logging is disabled when `None`, since the game owns
    /// the whole terminal.
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            fps: DEFAULT_FPS,
            seed: None,
            log_file: None,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Settings> {
        Settings::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup. Missing or empty keys
    /// fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Settings>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut settings = Settings::default();

        if let Some(raw) = get(ENV_FPS) {
            let fps: u32 = raw.trim().parse().map_err(|e| GameError::InvalidSetting {
                key: ENV_FPS,
                value: raw.clone(),
                reason: format!("{}", e),
            })?;
            if fps == 0 || fps > MAX_FPS {
                return Err(GameError::InvalidSetting {
                    key: ENV_FPS,
                    value: raw,
                    reason: format!("must be between 1 and {}", MAX_FPS),
                });
            }
            settings.fps = fps;
        }

        if let Some(raw) = get(ENV_SEED) {
            let seed = raw.trim().parse().map_err(|e| GameError::InvalidSetting {
                key: ENV_SEED,
                value: raw.clone(),
                reason: format!("{}", e),
            })?;
            settings.seed = Some(seed);
        }

        settings.log_file = get(ENV_LOG).map(PathBuf::from);

        Ok(settings)
    }

    /// Wall-clock length of one frame.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / self.fps.max(1) as u64)
    }
}
