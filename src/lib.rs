//! Flappy Bird for the terminal.
//!
//! `entities` holds the data, `compute` the per-frame simulation, `display`
//! the pixel surface the game draws onto, and `input` the key mapping the
//! driver in `main.rs` feeds into `Game::update`.

pub mod compute;
pub mod config;
pub mod display;
pub mod entities;
pub mod error;
pub mod input;

pub use error::{GameError, Result};
