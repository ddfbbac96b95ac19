use crate::{Ball, Config, Paddle};
use hecs::World;

/// Apply paddle velocities, clamped to the arena
pub fn move_paddles(world: &mut World, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.advance(config.arena_height);
    }
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Rect, Side};
    use glam::IVec2;

    #[test]
    fn test_move_ball_applies_velocity() {
        let mut world = World::new();
        let entity = create_ball(
            &mut world,
            Ball::new(Rect::new(100, 100, 10, 10), IVec2::new(-4, 3)),
        );

        move_ball(&mut world);

        let ball = world.get::<&Ball>(entity).unwrap();
        assert_eq!(ball.rect.pos, IVec2::new(96, 103));
    }

    #[test]
    fn test_move_ball_does_not_clamp() {
        let mut world = World::new();
        let entity = create_ball(
            &mut world,
            Ball::new(Rect::new(2, 1, 10, 10), IVec2::new(-4, -3)),
        );

        move_ball(&mut world);

        let ball = world.get::<&Ball>(entity).unwrap();
        assert_eq!(
            ball.rect.pos,
            IVec2::new(-2, -2),
            "Ball motion is unconditional; walls are handled by collisions"
        );
    }

    #[test]
    fn test_move_paddles_moves_both_sides() {
        let mut world = World::new();
        let config = Config::new();
        let mut player = Paddle::initial(Side::Player, &config);
        player.dy = -5;
        let mut cpu = Paddle::initial(Side::Cpu, &config);
        cpu.dy = 3;
        let player_entity = create_paddle(&mut world, player);
        let cpu_entity = create_paddle(&mut world, cpu);

        move_paddles(&mut world, &config);

        assert_eq!(world.get::<&Paddle>(player_entity).unwrap().rect.pos.y, 210);
        assert_eq!(world.get::<&Paddle>(cpu_entity).unwrap().rect.pos.y, 218);
    }

    #[test]
    fn test_move_paddles_clamps_to_arena() {
        let mut world = World::new();
        let config = Config::new();
        let mut paddle = Paddle::initial(Side::Player, &config);
        paddle.rect.pos.y = 2;
        paddle.dy = -5;
        let entity = create_paddle(&mut world, paddle);

        move_paddles(&mut world, &config);

        assert_eq!(world.get::<&Paddle>(entity).unwrap().rect.pos.y, 0);
    }
}
