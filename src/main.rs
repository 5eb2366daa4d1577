use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::Instant;

use crossterm::{
    cursor,
    event::{self, Event},
    terminal, ExecutableCommand, QueueableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use flappy_bird::config::Settings;
use flappy_bird::display::Canvas;
use flappy_bird::entities::Game;
use flappy_bird::input::{self, FrameInput};
use flappy_bird::{GameError, Result};

// ── Logging ───────────────────────────────────────────────────────────────────

/// Log to the configured file only; the terminal belongs to the game.
fn init_logging(settings: &Settings) -> Result<()> {
    let Some(path) = &settings.log_file else {
        return Ok(());
    };
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("flappy_bird=info"))
        .map_err(|e| GameError::Logging(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| GameError::Logging(e.to_string()))
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits. Each frame: drain input, simulate, draw,
/// present, then sleep out the rest of the frame.
fn game_loop<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    settings: &Settings,
) -> Result<()> {
    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let frame = settings.frame_duration();

    let (cols, rows) = terminal::size()?;
    info!(cols, rows, "terminal size");
    let mut canvas = Canvas::new(cols, rows);
    let mut game = Game::new(&mut rng);

    loop {
        let frame_start = Instant::now();

        let mut input = FrameInput::default();
        while let Ok(ev) = rx.try_recv() {
            if let Event::Resize(cols, rows) = ev {
                info!(cols, rows, "terminal resized");
                canvas.resize(cols, rows);
            }
            input.record_event(&ev);
        }
        if input.quit {
            info!(score = game.score, "quit requested");
            return Ok(());
        }

        game.update(input, &mut rng)?;
        game.draw(&mut canvas);
        canvas.present(out)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            thread::sleep(frame - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let settings = Settings::from_env()?;
    init_logging(&settings)?;
    info!(?settings, "starting");

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.queue(terminal::SetTitle("Flappy Bird"))?;
    out.execute(terminal::Clear(terminal::ClearType::All))?;

    // Key-release and key-repeat events keep a held Space from re-jumping.
    // Kitty-protocol terminals honour this; others fall back to plain presses.
    let keyboard_enhanced = input::request_event_types(&mut out);
    info!(keyboard_enhanced, "keyboard enhancement");

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = game_loop(&mut out, &rx, &settings);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = input::release_event_types(&mut out);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(e) = &result {
        warn!(error = %e, "exiting with error");
    } else {
        info!("exiting");
    }
    result
}
