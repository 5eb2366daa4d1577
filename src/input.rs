/// Key mapping from raw terminal events to per-frame actions.
///
/// Only `Press` events count. Key repeat and release are dropped, so holding
/// Space jumps exactly once. That filtering relies on the terminal reporting
/// event types: `request_event_types` asks for them. Terminals that ignore the
/// request deliver OS auto-repeat as plain `Press` events.

use std::io::Write;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::ExecutableCommand;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Jump while playing; start or restart otherwise.
    Jump,
    Quit,
}

/// Actions collected over one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub jump: bool,
    pub quit: bool,
}

impl FrameInput {
    pub fn jump() -> Self {
        FrameInput {
            jump: true,
            quit: false,
        }
    }

    /// Fold one more action into this frame. Repeated jumps within a frame
    /// are still a single jump event.
    pub fn record(&mut self, action: Action) {
        match action {
            Action::Jump => self.jump = true,
            Action::Quit => self.quit = true,
        }
    }

    /// Fold a raw terminal event; anything that isn't a mapped key press is
    /// ignored.
    pub fn record_event(&mut self, event: &Event) {
        if let Event::Key(key) = event {
            if let Some(action) = action_for(key) {
                self.record(action);
            }
        }
    }
}

pub fn action_for(key: &KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => Some(Action::Jump),
        KeyCode::Char('w') | KeyCode::Char('W') => Some(Action::Jump),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

// ── Keyboard enhancement ──────────────────────────────────────────────────────

/// Ask the terminal to tag key events as press / repeat / release.
/// Returns whether the request could be sent; pair a `true` with
/// `release_event_types` on exit.
pub fn request_event_types<W: Write>(out: &mut W) -> bool {
    out.execute(PushKeyboardEnhancementFlags(
        KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
    ))
    .is_ok()
}

pub fn release_event_types<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.execute(PopKeyboardEnhancementFlags)?;
    Ok(())
}
