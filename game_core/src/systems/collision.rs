use crate::{Ball, Config, Events, Paddle, Side};
use hecs::World;

/// Check ball collisions with walls, then paddles.
///
/// Wall contact only touches the y axis and paddle contact only the x axis,
/// so a frame with both applies both reflections.
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Copy paddles out first; the ball query needs the world mutably
    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if bounce_off_walls(ball, config.arena_height) {
            log::debug!("ball hit wall at y={}", ball.rect.pos.y);
            events.ball_hit_wall = true;
        }

        for paddle in &paddles {
            if bounce_off_paddle(ball, paddle) {
                log::debug!("ball hit {:?} paddle", paddle.side);
                events.ball_hit_paddle = true;
            }
        }
    }
}

/// Reflect off the top or bottom wall and clamp inside the arena.
///
/// The new dy always points away from the wall that was touched, so a ball
/// resting on the boundary is never flipped back into it.
pub fn bounce_off_walls(ball: &mut Ball, arena_height: i32) -> bool {
    if ball.rect.top() <= 0 {
        ball.rect.pos.y = 0;
        ball.vel.y = ball.vel.y.abs();
        true
    } else if ball.rect.bottom() >= arena_height {
        ball.rect.pos.y = arena_height - ball.rect.size.y;
        ball.vel.y = -ball.vel.y.abs();
        true
    } else {
        false
    }
}

/// Reflect off a paddle the ball overlaps and is moving toward.
///
/// Plain reflection, no spin: dy is left unchanged. The ball is placed flush
/// against the paddle face so it cannot re-trigger on the next frame.
pub fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle) -> bool {
    if !ball.rect.overlaps(&paddle.rect) || !ball.moving_toward(paddle.side) {
        return false;
    }

    ball.vel.x = -ball.vel.x;
    ball.rect.pos.x = match paddle.side {
        Side::Player => paddle.rect.right(),
        Side::Cpu => paddle.rect.left() - ball.rect.size.x,
    };
    true
}
