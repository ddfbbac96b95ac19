use glam::IVec2;

use crate::config::Config;
use crate::geometry::Rect;
use crate::resources::GameRng;

/// Which end of the arena an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Human player, left paddle
    Player,
    /// Computer opponent, right paddle
    Cpu,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Cpu,
            Side::Cpu => Side::Player,
        }
    }

    /// Sign of the x velocity that moves toward this side
    pub fn direction_x(self) -> i32 {
        match self {
            Side::Player => -1,
            Side::Cpu => 1,
        }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    pub rect: Rect,
    pub vel: IVec2, // Pixels per frame
}

impl Ball {
    pub fn new(rect: Rect, vel: IVec2) -> Self {
        Self { rect, vel }
    }

    /// Centered ball heading toward the cpu; used at game start and on reset
    pub fn initial(config: &Config) -> Self {
        let spawn = config.ball_spawn();
        Self {
            rect: Rect::new(spawn.x, spawn.y, config.ball_size, config.ball_size),
            vel: IVec2::new(
                Side::Cpu.direction_x() * config.ball_serve_speed_x.abs(),
                config.ball_serve_speed_y.abs(),
            ),
        }
    }

    /// Re-center the ball and serve it toward `toward` with a random vertical direction
    pub fn reset(&mut self, config: &Config, toward: Side, rng: &mut GameRng) {
        use rand::Rng;

        self.rect.pos = config.ball_spawn();
        let dy = config.ball_serve_speed_y.abs();
        self.vel = IVec2::new(
            toward.direction_x() * config.ball_serve_speed_x.abs(),
            if rng.0.gen_bool(0.5) { dy } else { -dy },
        );
    }

    /// Move by one frame of velocity, unconditionally
    pub fn advance(&mut self) {
        self.rect.pos += self.vel;
    }

    pub fn moving_toward(&self, side: Side) -> bool {
        self.vel.x * side.direction_x() > 0
    }
}

/// Paddle component - a vertically moving bat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paddle {
    pub side: Side,
    pub rect: Rect,
    pub dy: i32, // Pixels per frame, positive = down
}

impl Paddle {
    pub fn new(side: Side, rect: Rect) -> Self {
        Self { side, rect, dy: 0 }
    }

    /// Paddle at its side's fixed x, vertically centered, at rest
    pub fn initial(side: Side, config: &Config) -> Self {
        Self::new(
            side,
            Rect::new(
                config.paddle_x(side),
                config.paddle_spawn_y(),
                config.paddle_width,
                config.paddle_height,
            ),
        )
    }

    /// Move by `dy` and stop flush against the top or bottom wall
    pub fn advance(&mut self, arena_height: i32) {
        let max_y = arena_height - self.rect.size.y;
        self.rect.pos.y = (self.rect.pos.y + self.dy).clamp(0, max_y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_side_helpers() {
        assert_eq!(Side::Player.opponent(), Side::Cpu);
        assert_eq!(Side::Cpu.opponent(), Side::Player);
        assert_eq!(Side::Player.direction_x(), -1);
        assert_eq!(Side::Cpu.direction_x(), 1);
    }

    #[test]
    fn test_initial_ball_is_centered_and_moving() {
        let config = Config::new();
        let ball = Ball::initial(&config);
        assert_eq!(ball.rect.pos, config.ball_spawn());
        assert_eq!(ball.vel, IVec2::new(4, 3));
        assert!(ball.moving_toward(Side::Cpu));
    }

    #[test]
    fn test_reset_serves_toward_requested_side() {
        let config = Config::new();
        let mut rng = GameRng::new(7);
        let mut ball = Ball::new(Rect::new(-50, 100, 10, 10), IVec2::new(-4, 3));

        ball.reset(&config, Side::Player, &mut rng);
        assert_eq!(ball.rect.pos, config.ball_spawn());
        assert_eq!(ball.vel.x, -config.ball_serve_speed_x);
        assert_eq!(ball.vel.y.abs(), config.ball_serve_speed_y);

        ball.reset(&config, Side::Cpu, &mut rng);
        assert_eq!(ball.vel.x, config.ball_serve_speed_x);
    }

    #[test]
    fn test_paddle_stops_at_top_wall() {
        let mut paddle = Paddle::new(Side::Player, Rect::new(20, 3, 10, 50));
        paddle.dy = -5;
        paddle.advance(480);
        assert_eq!(paddle.rect.pos.y, 0);
        paddle.advance(480);
        assert_eq!(paddle.rect.pos.y, 0, "Paddle rests at the wall, no bounce");
    }

    #[test]
    fn test_paddle_stops_at_bottom_wall() {
        let mut paddle = Paddle::new(Side::Cpu, Rect::new(610, 428, 10, 50));
        paddle.dy = 5;
        paddle.advance(480);
        assert_eq!(paddle.rect.pos.y, 430);
    }

    #[test]
    fn test_initial_paddles() {
        let config = Config::new();
        let player = Paddle::initial(Side::Player, &config);
        let cpu = Paddle::initial(Side::Cpu, &config);
        assert_eq!(player.rect.pos, IVec2::new(20, 215));
        assert_eq!(cpu.rect.pos, IVec2::new(610, 215));
        assert_eq!(player.dy, 0);
        assert_eq!(cpu.dy, 0);
    }

    proptest! {
        #[test]
        fn ball_advance_adds_velocity_exactly(
            x in -1000i32..1000,
            y in -1000i32..1000,
            dx in -20i32..20,
            dy in -20i32..20,
        ) {
            let mut ball = Ball::new(Rect::new(x, y, 10, 10), IVec2::new(dx, dy));
            ball.advance();
            prop_assert_eq!(ball.rect.pos, IVec2::new(x + dx, y + dy));
            prop_assert_eq!(ball.vel, IVec2::new(dx, dy));
        }

        #[test]
        fn paddle_stays_within_arena(y in 0i32..=430, dy in -100i32..100) {
            let mut paddle = Paddle::new(Side::Player, Rect::new(20, y, 10, 50));
            paddle.dy = dy;
            paddle.advance(480);
            let unclamped = y + dy;
            prop_assert!((0..=430).contains(&paddle.rect.pos.y));
            if unclamped < 0 {
                prop_assert_eq!(paddle.rect.pos.y, 0);
            } else if unclamped > 430 {
                prop_assert_eq!(paddle.rect.pos.y, 430);
            } else {
                prop_assert_eq!(paddle.rect.pos.y, unclamped);
            }
        }

        #[test]
        fn reset_never_stalls(seed in any::<u64>(), toward_player in any::<bool>()) {
            let config = Config::new();
            let mut rng = GameRng::new(seed);
            let mut ball = Ball::initial(&config);
            let side = if toward_player { Side::Player } else { Side::Cpu };
            ball.reset(&config, side, &mut rng);
            prop_assert!(ball.vel.x != 0 && ball.vel.y != 0);
            prop_assert!(ball.moving_toward(side));
        }
    }
}
