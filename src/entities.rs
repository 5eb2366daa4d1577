/// Game entity types — plain data. Behaviour lives in `compute`.

use crate::config::{BIRD_HEIGHT, BIRD_START_X, BIRD_START_Y, BIRD_WIDTH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the first jump; the world is frozen.
    NotStarted,
    Playing,
    /// Frozen until the player asks for a restart.
    Dead,
}

/// Axis-aligned box in playfield coordinates (y grows downward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

// ── Bird ──────────────────────────────────────────────────────────────────────

/// The player. `x`/`y` is the centre of its box; `x` never changes. Only
/// `reset` writes `x`, and it writes the start value.
#[derive(Clone, Debug, PartialEq)]
pub struct Bird {
    pub x: f64,
    pub y: f64,
    /// Vertical velocity (positive = downward).
    pub vy: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for Bird {
    fn default() -> Self {
        Bird {
            x: BIRD_START_X,
            y: BIRD_START_Y,
            vy: 0.0,
            width: BIRD_WIDTH,
            height: BIRD_HEIGHT,
        }
    }
}

// ── Pipe ──────────────────────────────────────────────────────────────────────

/// One scrolling obstacle: a top and a bottom barrier around a gap.
#[derive(Clone, Debug, PartialEq)]
pub struct Pipe {
    /// Left edge.
    pub x: f64,
    /// Top of the passable gap.
    pub gap_y: f64,
    /// Set once the bird has cleared this pipe; cleared on recycle.
    pub scored: bool,
}

// ── Session ───────────────────────────────────────────────────────────────────

/// The whole game session. Owned by the driver and passed to
/// `update`/`draw` explicitly.
#[derive(Clone, Debug)]
pub struct Game {
    pub bird: Bird,
    pub pipes: Vec<Pipe>,
    pub score: u32,
    pub state: GameState,
}
