use glam::IVec2;
use thiserror::Error;

use crate::components::Side;
use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: i32,
    pub arena_height: i32,
    pub paddle_width: i32,
    pub paddle_height: i32,
    pub paddle_margin: i32,
    pub player_paddle_speed: i32,
    pub cpu_paddle_speed: i32,
    pub ai_dead_zone: i32,
    pub ball_size: i32,
    pub ball_serve_speed_x: i32,
    pub ball_serve_speed_y: i32,
    pub win_score: u8,
    /// Frames the game-over screen stays up before returning to the menu
    pub game_over_frames: u32,
    pub frame_millis: u32,
    pub seed: u64,
}

/// Configuration values that would break the physics or state invariants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("arena must have a positive size, got {width}x{height}")]
    EmptyArena { width: i32, height: i32 },
    #[error("paddle of {width}x{height} does not fit the arena")]
    PaddleTooLarge { width: i32, height: i32 },
    #[error("paddle margin must not be negative, got {0}")]
    NegativeMargin(i32),
    #[error("ball of size {0} does not fit the arena")]
    BallTooLarge(i32),
    #[error("ball serve speed must be non-zero on both axes, got ({x}, {y})")]
    StalledServe { x: i32, y: i32 },
    #[error("horizontal serve speed {speed} would skip through a paddle (limit {limit})")]
    ServeTooFast { speed: i32, limit: i32 },
    #[error("paddle speeds and AI dead zone must not be negative")]
    NegativeSpeed,
    #[error("win score must be at least 1")]
    ZeroWinScore,
    #[error("game-over screen must be shown for at least one frame")]
    ZeroGameOverFrames,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            player_paddle_speed: Params::PLAYER_PADDLE_SPEED,
            cpu_paddle_speed: Params::CPU_PADDLE_SPEED,
            ai_dead_zone: Params::AI_DEAD_ZONE,
            ball_size: Params::BALL_SIZE,
            ball_serve_speed_x: Params::BALL_SERVE_SPEED_X,
            ball_serve_speed_y: Params::BALL_SERVE_SPEED_Y,
            win_score: Params::WIN_SCORE,
            game_over_frames: Params::GAME_OVER_FRAMES,
            frame_millis: Params::FRAME_MILLIS,
            seed: Params::RNG_SEED,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the invariants the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.arena_width <= 0 || self.arena_height <= 0 {
            return Err(ConfigError::EmptyArena {
                width: self.arena_width,
                height: self.arena_height,
            });
        }
        if self.paddle_margin < 0 {
            return Err(ConfigError::NegativeMargin(self.paddle_margin));
        }
        if self.paddle_width <= 0
            || self.paddle_height <= 0
            || self.paddle_height > self.arena_height
            || 2 * (self.paddle_margin + self.paddle_width) > self.arena_width
        {
            return Err(ConfigError::PaddleTooLarge {
                width: self.paddle_width,
                height: self.paddle_height,
            });
        }
        if self.ball_size <= 0
            || self.ball_size >= self.arena_height
            || self.ball_size >= self.arena_width
        {
            return Err(ConfigError::BallTooLarge(self.ball_size));
        }
        if self.ball_serve_speed_x == 0 || self.ball_serve_speed_y == 0 {
            return Err(ConfigError::StalledServe {
                x: self.ball_serve_speed_x,
                y: self.ball_serve_speed_y,
            });
        }
        // Overlap detection needs the ball inside the paddle for at least one frame
        let limit = self.paddle_width + self.ball_size;
        if self.ball_serve_speed_x.abs() >= limit {
            return Err(ConfigError::ServeTooFast {
                speed: self.ball_serve_speed_x,
                limit,
            });
        }
        if self.player_paddle_speed < 0 || self.cpu_paddle_speed < 0 || self.ai_dead_zone < 0 {
            return Err(ConfigError::NegativeSpeed);
        }
        if self.win_score == 0 {
            return Err(ConfigError::ZeroWinScore);
        }
        if self.game_over_frames == 0 {
            return Err(ConfigError::ZeroGameOverFrames);
        }
        Ok(())
    }

    /// Get X position (left edge) for a paddle
    pub fn paddle_x(&self, side: Side) -> i32 {
        match side {
            Side::Player => self.paddle_margin,
            Side::Cpu => self.arena_width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Clamp paddle top edge to arena bounds
    pub fn clamp_paddle_y(&self, y: i32) -> i32 {
        y.clamp(0, self.arena_height - self.paddle_height)
    }

    /// Initial paddle top edge (vertically centered)
    pub fn paddle_spawn_y(&self) -> i32 {
        (self.arena_height - self.paddle_height) / 2
    }

    /// Ball top-left corner when centered in the arena
    pub fn ball_spawn(&self) -> IVec2 {
        IVec2::new(
            (self.arena_width - self.ball_size) / 2,
            (self.arena_height - self.ball_size) / 2,
        )
    }
}
