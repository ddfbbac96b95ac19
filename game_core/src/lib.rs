pub mod components;
pub mod config;
pub mod fsm;
pub mod geometry;
pub mod input;
pub mod params;
pub mod resources;
pub mod systems;
pub mod world;

pub use components::*;
pub use config::*;
pub use fsm::*;
pub use geometry::*;
pub use input::*;
pub use params::*;
pub use resources::*;
pub use world::*;

use hecs::World;
use systems::*;

/// Whether the frame loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Run one deterministic frame of the Pong simulation
pub fn step(game: &mut GameWorld, commands: &FrameCommands) -> Control {
    // Clear events at start of frame
    game.events.clear();

    if commands.quit {
        return Control::Quit;
    }

    // GameOver stays up for a fixed number of frames, then back to the menu
    game.tick_game_over();

    // Player paddle velocity, start and reset
    game.apply_commands(commands);

    if !game.fsm.is_playing() {
        return Control::Continue;
    }

    let GameWorld {
        world,
        config,
        score,
        events,
        rng,
        ..
    } = game;

    // 1. Move ball
    move_ball(world);

    // 2. Steer cpu paddle toward the ball
    drive_cpu_paddle(world, config);

    // 3. Move paddles based on velocities
    move_paddles(world, config);

    // 4. Check collisions (walls, then paddles)
    check_collisions(world, config, events);

    // 5. Check scoring (ball exited arena)
    check_scoring(world, config, score, events, rng);

    // 6. Win check
    if let Some(winner) = check_winner(score, config, events) {
        game.enter_game_over(winner);
    }

    Control::Continue
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, paddle: Paddle) -> hecs::Entity {
    world.spawn((paddle,))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}
