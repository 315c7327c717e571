pub mod components;
pub mod config;
pub mod fsm;
pub mod input;
pub mod params;
pub mod render;
pub mod resources;
pub mod simulation;
pub mod systems;

pub use components::*;
pub use config::*;
pub use fsm::*;
pub use input::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use simulation::*;

use hecs::World;
use systems::*;

/// Run one frame of the Pong rules
///
/// Systems run in a fixed order; each sees the previous one's writes.
pub fn step(
    world: &mut World,
    arena: &Arena,
    config: &Config,
    intent: PaddleIntent,
    events: &mut Events,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Paddles
    move_player_paddle(world, arena, config, intent);
    move_opponent_paddle(world, arena, config);

    // 2. Ball
    move_ball(world);

    // 3. Collisions (side walls, then paddles)
    check_wall_collisions(world, arena, events);
    check_paddle_collisions(world, config, events);

    // 4. Scoring (ball crossed top or bottom)
    check_scoring(world, arena, config, events);
}

/// Helper to create a paddle entity with the configured size
pub fn create_paddle(
    world: &mut World,
    side: Side,
    pos: glam::Vec2,
    config: &Config,
) -> hecs::Entity {
    world.spawn((Paddle::new(
        side,
        pos,
        config.paddle_width,
        config.paddle_height,
    ),))
}

/// Helper to create the ball entity at base speed
pub fn create_ball(
    world: &mut World,
    pos: glam::Vec2,
    vel: glam::Vec2,
    config: &Config,
) -> hecs::Entity {
    world.spawn((Ball::new(
        pos,
        vel,
        config.ball_radius,
        config.ball_speed_base,
    ),))
}
