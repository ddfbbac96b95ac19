use crate::{Ball, Config, Paddle, Side};
use hecs::World;

/// Direction the cpu paddle should move to line up with the ball.
///
/// Compares vertical centers only: no look-ahead, no difficulty scaling.
/// Returns -1 (up), 0 (inside the dead zone) or 1 (down).
pub fn cpu_direction(ball: &Ball, paddle: &Paddle, dead_zone: i32) -> i32 {
    let diff = ball.rect.center().y - paddle.rect.center().y;
    if diff < -dead_zone {
        -1
    } else if diff > dead_zone {
        1
    } else {
        0
    }
}

/// Set the cpu paddle's velocity toward the ball
pub fn drive_cpu_paddle(world: &mut World, config: &Config) {
    let ball = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| *ball);

    let Some(ball) = ball else {
        return;
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Cpu {
            paddle.dy = cpu_direction(&ball, paddle, config.ai_dead_zone) * config.cpu_paddle_speed;
        }
    }
}
