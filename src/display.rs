/// Rendering layer — all terminal I/O lives here.
///
/// `Game::draw` paints the world onto a `Canvas` in logical playfield
/// coordinates. The canvas stretches the 400×650 playfield over a grid of
/// half-block terminal cells (two pixels per cell) and `present` writes it
/// out with crossterm. No game logic is performed here.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    QueueableCommand,
};

use crate::config::{PIPE_GAP_HEIGHT, PIPE_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::entities::{Bird, Game, GameState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Rec. 601 luma.
    pub fn luma(self) -> u8 {
        let y = 0.299 * self.0 as f64 + 0.587 * self.1 as f64 + 0.114 * self.2 as f64;
        y.round().clamp(0.0, 255.0) as u8
    }

    pub fn grayscale(self) -> Rgb {
        let y = self.luma();
        Rgb(y, y, y)
    }

    fn to_color(self) -> Color {
        Color::Rgb {
            r: self.0,
            g: self.1,
            b: self.2,
        }
    }
}

// ── Colour palette ────────────────────────────────────────────────────────────

pub const C_SKY: Rgb = Rgb(135, 206, 235);
pub const C_PIPE: Rgb = Rgb(0, 200, 0);
pub const C_BIRD_BODY: Rgb = Rgb(255, 215, 0);
pub const C_BIRD_WING: Rgb = Rgb(255, 165, 0);
pub const C_BIRD_EYE: Rgb = Rgb(255, 255, 255);
pub const C_BIRD_PUPIL: Rgb = Rgb(0, 0, 0);
pub const C_BIRD_BEAK: Rgb = Rgb(255, 140, 0);
pub const C_TEXT: Rgb = Rgb(255, 255, 255);

// ── Text placement (logical y) ────────────────────────────────────────────────

pub const SCORE_Y: f64 = 60.0;
pub const START_HINT_Y: f64 = SCREEN_HEIGHT as f64 * 0.35;
pub const GAME_OVER_Y: f64 = SCREEN_HEIGHT as f64 * 0.30;
pub const RESTART_HINT_Y: f64 = GAME_OVER_Y + 45.0;

pub const START_HINT: &str = "Press SPACE to start";
pub const GAME_OVER: &str = "Game over!";
pub const RESTART_HINT: &str = "Press SPACE to play again";

/// A line of text, centred horizontally at logical height `y`.
#[derive(Clone, Debug, PartialEq)]
pub struct TextItem {
    pub text: String,
    pub y: f64,
    pub color: Rgb,
}

// ── Canvas ────────────────────────────────────────────────────────────────────

/// Pixel surface the game draws onto. Each terminal cell holds two pixels
/// stacked vertically.
#[derive(Clone, Debug)]
pub struct Canvas {
    cols: u16,
    rows: u16,
    px: Vec<Rgb>,
    texts: Vec<TextItem>,
}

impl Canvas {
    pub fn new(cols: u16, rows: u16) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Canvas {
            cols,
            rows,
            px: vec![C_SKY; cols as usize * rows as usize * 2],
            texts: Vec::new(),
        }
    }

    /// Follow a terminal resize. Contents are discarded.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        *self = Canvas::new(cols, rows);
    }

    pub fn width_px(&self) -> usize {
        self.cols as usize
    }

    pub fn height_px(&self) -> usize {
        self.rows as usize * 2
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x < self.width_px() && y < self.height_px() {
            Some(self.px[y * self.width_px() + x])
        } else {
            None
        }
    }

    pub fn texts(&self) -> &[TextItem] {
        &self.texts
    }

    fn scale_x(&self) -> f64 {
        self.width_px() as f64 / SCREEN_WIDTH as f64
    }

    fn scale_y(&self) -> f64 {
        self.height_px() as f64 / SCREEN_HEIGHT as f64
    }

    fn set(&mut self, x: i64, y: i64, c: Rgb) {
        if x >= 0 && y >= 0 && (x as usize) < self.width_px() && (y as usize) < self.height_px() {
            let w = self.width_px();
            self.px[y as usize * w + x as usize] = c;
        }
    }

    /// Fill every pixel and drop any queued text.
    pub fn clear(&mut self, color: Rgb) {
        self.px.fill(color);
        self.texts.clear();
    }

    pub fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgb) {
        let (sx, sy) = (self.scale_x(), self.scale_y());
        let x0 = (x * sx).round().max(0.0) as i64;
        let x1 = ((x + w) * sx).round().min(self.width_px() as f64) as i64;
        let y0 = (y * sy).round().max(0.0) as i64;
        let y1 = ((y + h) * sy).round().min(self.height_px() as f64) as i64;
        for py in y0..y1 {
            for px in x0..x1 {
                self.set(px, py, color);
            }
        }
    }

    /// Fill the pixels whose centres fall inside the circle. The pixel under
    /// the centre is always painted, so small shapes stay visible on a
    /// coarse grid.
    pub fn fill_circle(&mut self, cx: f64, cy: f64, r: f64, color: Rgb) {
        let (sx, sy) = (self.scale_x(), self.scale_y());
        self.set((cx * sx).floor() as i64, (cy * sy).floor() as i64, color);

        let x0 = ((cx - r) * sx).floor() as i64;
        let x1 = ((cx + r) * sx).ceil() as i64;
        let y0 = ((cy - r) * sy).floor() as i64;
        let y1 = ((cy + r) * sy).ceil() as i64;
        for py in y0..y1 {
            for px in x0..x1 {
                let lx = (px as f64 + 0.5) / sx - cx;
                let ly = (py as f64 + 0.5) / sy - cy;
                if lx * lx + ly * ly <= r * r {
                    self.set(px, py, color);
                }
            }
        }
    }

    pub fn draw_text(&mut self, text: &str, y: f64, color: Rgb) {
        self.texts.push(TextItem {
            text: text.to_string(),
            y,
            color,
        });
    }

    /// Drop all colour from the frame, text included.
    pub fn desaturate(&mut self) {
        for p in &mut self.px {
            *p = p.grayscale();
        }
        for t in &mut self.texts {
            t.color = t.color.grayscale();
        }
    }

    /// Terminal cell (col, row) a text line starts at.
    pub fn text_cell(&self, item: &TextItem) -> (u16, u16) {
        let row = ((item.y * self.scale_y()) / 2.0).floor().max(0.0) as u16;
        let row = row.min(self.rows - 1);
        let len = item.text.chars().count() as u16;
        let col = self.cols.saturating_sub(len) / 2;
        (col, row)
    }

    /// Write the frame to the terminal: `▀` with the upper pixel as
    /// foreground and the lower as background, then the text on top.
    pub fn present<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let w = self.width_px();
        let mut last: Option<(Rgb, Rgb)> = None;

        for row in 0..self.rows {
            out.queue(cursor::MoveTo(0, row))?;
            let top_line = row as usize * 2 * w;
            for col in 0..w {
                let top = self.px[top_line + col];
                let bottom = self.px[top_line + w + col];
                if last != Some((top, bottom)) {
                    out.queue(style::SetForegroundColor(top.to_color()))?;
                    out.queue(style::SetBackgroundColor(bottom.to_color()))?;
                    last = Some((top, bottom));
                }
                out.queue(Print('▀'))?;
            }
        }

        for item in &self.texts {
            let (col, row) = self.text_cell(item);
            let bg = self.px[row as usize * 2 * w + (col as usize).min(w - 1)];
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(style::SetForegroundColor(item.color.to_color()))?;
            out.queue(style::SetBackgroundColor(bg.to_color()))?;
            out.queue(Print(&item.text))?;
        }

        out.queue(style::ResetColor)?;
        out.flush()?;
        Ok(())
    }
}

// ── World ─────────────────────────────────────────────────────────────────────

impl Game {
    /// Render the full current world onto `canvas`. A dead bird greys out the
    /// whole frame.
    pub fn draw(&self, canvas: &mut Canvas) {
        canvas.clear(C_SKY);

        let floor = SCREEN_HEIGHT as f64;
        for pipe in &self.pipes {
            canvas.fill_rect(pipe.x, 0.0, PIPE_WIDTH, pipe.gap_y, C_PIPE);
            let bottom_top = pipe.gap_y + PIPE_GAP_HEIGHT;
            canvas.fill_rect(pipe.x, bottom_top, PIPE_WIDTH, floor - bottom_top, C_PIPE);
        }

        draw_bird(canvas, &self.bird);

        canvas.draw_text(&self.score.to_string(), SCORE_Y, C_TEXT);
        match self.state {
            GameState::NotStarted => canvas.draw_text(START_HINT, START_HINT_Y, C_TEXT),
            GameState::Dead => {
                canvas.draw_text(GAME_OVER, GAME_OVER_Y, C_TEXT);
                canvas.draw_text(RESTART_HINT, RESTART_HINT_Y, C_TEXT);
            }
            GameState::Playing => {}
        }

        if self.state == GameState::Dead {
            canvas.desaturate();
        }
    }
}

/// Round body, wing, eye and beak around the bird's centre.
fn draw_bird(canvas: &mut Canvas, bird: &Bird) {
    let (cx, cy) = (bird.x, bird.y);
    let r = bird.width * 0.6 / 2.0;

    canvas.fill_circle(cx, cy, r, C_BIRD_BODY);
    canvas.fill_circle(cx - 6.0, cy + 2.0, r * 0.6, C_BIRD_WING);

    let eye_r = r * 0.25;
    canvas.fill_circle(cx + r * 0.3, cy - r * 0.1, eye_r, C_BIRD_EYE);
    canvas.fill_circle(cx + r * 0.38, cy - r * 0.1, eye_r * 0.5, C_BIRD_PUPIL);

    let beak_r = r * 0.15;
    canvas.fill_circle(cx + r * 0.7, cy, beak_r, C_BIRD_BEAK);
    canvas.fill_circle(cx + r * 0.6, cy + beak_r * 0.4, beak_r, C_BIRD_BEAK);
}
