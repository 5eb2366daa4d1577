/// Per-frame game logic.
///
/// Bird physics, pipe scrolling and recycling, collision tests, scoring, and
/// the NotStarted → Playing → Dead state machine. All randomness comes
/// through an injected `rng` so callers control determinism (tests use a
/// seeded RNG).

use rand::Rng;
use tracing::{debug, info, trace};

use crate::config::{
    BIRD_START_X, BIRD_START_Y, GRAVITY, JUMP_VELOCITY, PIPE_COUNT, PIPE_GAP_HEIGHT, PIPE_MARGIN,
    PIPE_SPACING, PIPE_SPEED, PIPE_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH,
};
use crate::entities::{Bird, Bounds, Game, GameState, Pipe};
use crate::error::Result;
use crate::input::FrameInput;

// ── Bounds ────────────────────────────────────────────────────────────────────

impl Bounds {
    /// Positive overlap on both axes. Boxes that merely touch do not overlap.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.right > other.left
            && self.left < other.right
            && self.bottom > other.top
            && self.top < other.bottom
    }
}

// ── Bird ──────────────────────────────────────────────────────────────────────

impl Bird {
    pub fn new() -> Self {
        Bird::default()
    }

    /// Set (not add) the upward jump velocity.
    pub fn jump(&mut self) {
        self.vy = JUMP_VELOCITY;
    }

    /// One explicit Euler step: velocity first, then position.
    pub fn update(&mut self) {
        self.vy += GRAVITY;
        self.y += self.vy;
    }

    /// Clamp the bird inside the playfield.
    ///
    /// Returns `true` when the bird sits on the floor, which is fatal. Hitting
    /// the ceiling only stops upward motion.
    pub fn check_bounds(&mut self) -> bool {
        let half = self.height / 2.0;
        let floor = SCREEN_HEIGHT as f64;

        if self.y + half >= floor {
            self.y = floor - half;
            return true;
        }
        if self.y - half <= 0.0 {
            self.y = half;
            self.vy = 0.0;
        }
        false
    }

    pub fn get_bounds(&self) -> Bounds {
        Bounds {
            left: self.x - self.width / 2.0,
            right: self.x + self.width / 2.0,
            top: self.y - self.height / 2.0,
            bottom: self.y + self.height / 2.0,
        }
    }

    /// Back to the start position at rest. Size is left alone.
    pub fn reset(&mut self) {
        self.x = BIRD_START_X;
        self.y = BIRD_START_Y;
        self.vy = 0.0;
    }
}

// ── Pipe ──────────────────────────────────────────────────────────────────────

/// Uniform gap offset keeping the gap `PIPE_MARGIN` away from both the
/// ceiling and the floor.
pub fn random_gap_y(rng: &mut impl Rng) -> f64 {
    let min_y = PIPE_MARGIN;
    let max_y = SCREEN_HEIGHT as f64 - PIPE_MARGIN - PIPE_GAP_HEIGHT;
    if max_y > min_y {
        rng.gen_range(min_y..max_y)
    } else {
        min_y
    }
}

impl Pipe {
    pub fn new(x: f64, rng: &mut impl Rng) -> Self {
        Pipe {
            x,
            gap_y: random_gap_y(rng),
            scored: false,
        }
    }

    pub fn update(&mut self) {
        self.x -= PIPE_SPEED;
    }

    /// True once the right edge has scrolled past the left edge of the screen.
    pub fn is_off_screen(&self) -> bool {
        self.x + PIPE_WIDTH < 0.0
    }

    /// Recycle this pipe one spacing to the right of `reference_x`.
    pub fn reset(&mut self, reference_x: f64, rng: &mut impl Rng) {
        self.x = reference_x + PIPE_SPACING;
        self.gap_y = random_gap_y(rng);
        self.scored = false;
    }

    /// Barrier from the ceiling down to the gap.
    pub fn top_bounds(&self) -> Bounds {
        Bounds {
            left: self.x,
            right: self.x + PIPE_WIDTH,
            top: 0.0,
            bottom: self.gap_y,
        }
    }

    /// Barrier from the end of the gap down to the floor.
    pub fn bottom_bounds(&self) -> Bounds {
        Bounds {
            left: self.x,
            right: self.x + PIPE_WIDTH,
            top: self.gap_y + PIPE_GAP_HEIGHT,
            bottom: SCREEN_HEIGHT as f64,
        }
    }

    /// Positive overlap with either barrier; touching an edge is not a hit.
    pub fn check_collision(&self, bird: &Bounds) -> bool {
        bird.overlaps(&self.top_bounds()) || bird.overlaps(&self.bottom_bounds())
    }
}

/// The canonical opening row: `PIPE_COUNT` pipes starting at the right edge.
pub fn start_pipes(rng: &mut impl Rng) -> Vec<Pipe> {
    let mut pipes = Vec::with_capacity(PIPE_COUNT);
    for i in 0..PIPE_COUNT {
        let x = SCREEN_WIDTH as f64 + i as f64 * PIPE_SPACING;
        pipes.push(Pipe::new(x, rng));
    }
    pipes
}

// ── Session ───────────────────────────────────────────────────────────────────

impl Game {
    pub fn new(rng: &mut impl Rng) -> Self {
        Game {
            bird: Bird::new(),
            pipes: start_pipes(rng),
            score: 0,
            state: GameState::NotStarted,
        }
    }

    /// Advance one frame. `input.jump` is the edge-triggered jump/confirm
    /// event for this frame.
    ///
    /// The simulation cannot fail; the `Result` is the driver's exit channel.
    pub fn update(&mut self, input: FrameInput, rng: &mut impl Rng) -> Result<()> {
        match self.state {
            GameState::NotStarted => {
                if input.jump {
                    self.state = GameState::Playing;
                    self.bird.jump();
                    info!("game started");
                }
            }
            GameState::Dead => {
                if input.jump {
                    self.reset(rng);
                }
            }
            GameState::Playing => {
                if input.jump {
                    self.bird.jump();
                }
                self.bird.update();
                trace!(y = self.bird.y, vy = self.bird.vy, "bird");

                if self.bird.check_bounds() {
                    self.die("floor");
                    return Ok(());
                }

                self.update_pipes(rng);

                if self.check_collisions() {
                    self.die("pipe");
                }
            }
        }
        Ok(())
    }

    /// Scroll every pipe, score the ones the bird has cleared, then recycle
    /// any that left the screen behind the rightmost pipe.
    pub fn update_pipes(&mut self, rng: &mut impl Rng) {
        let bird_left = self.bird.get_bounds().left;

        for pipe in &mut self.pipes {
            pipe.update();

            if !pipe.scored && pipe.x + PIPE_WIDTH < bird_left {
                pipe.scored = true;
                self.score += 1;
                debug!(score = self.score, "pipe cleared");
            }
        }

        for i in 0..self.pipes.len() {
            if self.pipes[i].is_off_screen() {
                let max_x = self
                    .pipes
                    .iter()
                    .map(|p| p.x)
                    .fold(f64::NEG_INFINITY, f64::max);
                let pipe = &mut self.pipes[i];
                pipe.reset(max_x, rng);
                debug!(x = pipe.x, gap_y = pipe.gap_y, "pipe recycled");
            }
        }
    }

    /// True if the bird overlaps any pipe.
    pub fn check_collisions(&self) -> bool {
        let bird = self.bird.get_bounds();
        self.pipes.iter().any(|p| p.check_collision(&bird))
    }

    /// Fresh session, waiting for the first jump.
    pub fn reset(&mut self, rng: &mut impl Rng) {
        self.bird.reset();
        self.score = 0;
        self.pipes = start_pipes(rng);
        self.state = GameState::NotStarted;
        info!("game reset");
    }

    /// Logical canvas size; the playfield does not follow the window.
    pub fn layout(&self, _outside_width: u32, _outside_height: u32) -> (u32, u32) {
        (SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    fn die(&mut self, cause: &str) {
        self.state = GameState::Dead;
        info!(cause, score = self.score, "bird died");
    }
}
