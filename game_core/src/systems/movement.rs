use crate::{Arena, Ball, Config, Paddle, PaddleIntent, Side};
use hecs::World;

/// Apply the held arrow keys to the player paddle
pub fn move_player_paddle(world: &mut World, arena: &Arena, config: &Config, intent: PaddleIntent) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Player {
            continue;
        }
        // Both keys held cancel out
        if intent.left {
            paddle.pos.x -= config.player_paddle_speed;
        }
        if intent.right {
            paddle.pos.x += config.player_paddle_speed;
        }
        paddle.pos.x = config.clamp_paddle_x(paddle.pos.x, paddle.width, arena.width);
    }
}

/// Track the ball horizontally with the opponent paddle
///
/// Moves a fixed step toward `ball.x` unless the ball is within the dead
/// zone around the paddle center.
pub fn move_opponent_paddle(world: &mut World, arena: &Arena, config: &Config) {
    let ball_x = match world.query::<&Ball>().iter().next().map(|(_e, b)| b.pos.x) {
        Some(x) => x,
        None => return,
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Opponent {
            continue;
        }
        let diff = ball_x - paddle.center_x();
        if diff.abs() > config.opponent_dead_zone {
            paddle.pos.x += config.opponent_speed.copysign(diff);
        }
        paddle.pos.x = config.clamp_paddle_x(paddle.pos.x, paddle.width, arena.width);
    }
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}
