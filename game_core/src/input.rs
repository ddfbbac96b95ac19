//! Input mapping: key events in, per-frame commands out

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Space,
    Reset,
    Up,
    Down,
}

/// Commands for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameCommands {
    pub quit: bool,
    pub start: bool,
    pub reset: bool,
    pub paddle_dir: i8, // -1 = up, 0 = stop, 1 = down
}

/// Accumulates key events between frames.
///
/// Start and reset are one-shot and consumed by [`InputMapper::take_commands`];
/// the paddle direction is held until a release, and quit is sticky.
#[derive(Debug, Clone, Default)]
pub struct InputMapper {
    pending: FrameCommands,
}

impl InputMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Escape => self.pending.quit = true,
            Key::Space => self.pending.start = true,
            Key::Reset => self.pending.reset = true,
            Key::Up => self.pending.paddle_dir = -1,
            Key::Down => self.pending.paddle_dir = 1,
        }
    }

    /// Releasing either arrow stops the paddle, even if the other is still held
    pub fn key_up(&mut self, key: Key) {
        if matches!(key, Key::Up | Key::Down) {
            self.pending.paddle_dir = 0;
        }
    }

    pub fn take_commands(&mut self) -> FrameCommands {
        let commands = self.pending;
        self.pending.start = false;
        self.pending.reset = false;
        commands
    }
}
