/// Game tuning parameters for Pong
///
/// All distances are in arena pixels and all speeds in pixels per frame.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: i32 = 640;
    pub const ARENA_HEIGHT: i32 = 480;

    // Paddle
    pub const PADDLE_WIDTH: i32 = 10;
    pub const PADDLE_HEIGHT: i32 = 50;
    pub const PADDLE_MARGIN: i32 = 20; // Gap between arena edge and paddle
    pub const PLAYER_PADDLE_SPEED: i32 = 5;
    pub const CPU_PADDLE_SPEED: i32 = 3; // Slower than the ball so the cpu can be beaten
    pub const AI_DEAD_ZONE: i32 = 5;

    // Ball
    pub const BALL_SIZE: i32 = 10;
    pub const BALL_SERVE_SPEED_X: i32 = 4;
    pub const BALL_SERVE_SPEED_Y: i32 = 3;

    // Score
    pub const WIN_SCORE: u8 = 11;

    // Frames
    pub const GAME_OVER_FRAMES: u32 = 1; // One displayed frame, then back to the menu
    pub const FRAME_MILLIS: u32 = 16; // ~60 Hz, best effort

    // Determinism
    pub const RNG_SEED: u64 = 12345;
}
