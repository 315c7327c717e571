use crate::{Arena, Ball, Config, Events, Paddle, Side};
use hecs::World;

/// Check if the ball crossed a scoring plane
///
/// Crossing the top awards the player, crossing the bottom awards the
/// opponent. The ball is parked at the center immediately so the same
/// crossing can't be counted twice; relaunching is the caller's job.
/// A ball at rest never scores.
pub fn check_scoring(world: &mut World, arena: &Arena, config: &Config, events: &mut Events) {
    let mut scorer = None;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if !ball.in_motion() {
            continue;
        }
        if ball.pos.y - ball.radius < 0.0 {
            scorer = Some(Side::Player);
        } else if ball.pos.y + ball.radius > arena.height {
            scorer = Some(Side::Opponent);
        } else {
            continue;
        }
        ball.recenter(arena.center(), config.ball_speed_base);
    }

    let Some(side) = scorer else {
        return;
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == side {
            paddle.score += 1;
            log::info!("{:?} scores, now {}", side, paddle.score);
        }
    }

    match side {
        Side::Player => events.player_scored = true,
        Side::Opponent => events.opponent_scored = true,
    }
}
