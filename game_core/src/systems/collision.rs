use crate::{Arena, Ball, Config, Events, Paddle, Side};
use glam::Vec2;
use hecs::World;

/// Bounce the ball off the left and right edges
///
/// Top and bottom are scoring planes, not walls.
pub fn check_wall_collisions(world: &mut World, arena: &Arena, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x - ball.radius < 0.0 {
            ball.pos.x = ball.radius;
            ball.vel.x = -ball.vel.x;
            events.ball_hit_wall = true;
        }
        if ball.pos.x + ball.radius > arena.width {
            ball.pos.x = arena.width - ball.radius;
            ball.vel.x = -ball.vel.x;
            events.ball_hit_wall = true;
        }
    }
}

/// Velocity after leaving a paddle
///
/// `offset` is the hit position relative to the paddle center in [-1, 1],
/// mapped linearly onto [-max_angle, max_angle] from vertical. `dir` picks
/// the vertical direction. The result always has length `speed`.
pub fn bounce_velocity(offset: f32, speed: f32, max_angle: f32, dir: f32) -> Vec2 {
    let angle = offset.clamp(-1.0, 1.0) * max_angle;
    Vec2::new(speed * angle.sin(), dir * speed * angle.cos())
}

/// Rectangle overlap test between the ball and a paddle
///
/// The ball must straddle the paddle's vertical span and its center must lie
/// strictly within the paddle's horizontal span. Corners are not rounded.
fn ball_hits_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    ball.pos.y + ball.radius > paddle.pos.y
        && ball.pos.y - ball.radius < paddle.pos.y + paddle.height
        && ball.pos.x > paddle.pos.x
        && ball.pos.x < paddle.pos.x + paddle.width
}

/// Redirect the ball off any paddle it overlaps
///
/// The player paddle is checked before the opponent paddle.
pub fn check_paddle_collisions(world: &mut World, config: &Config, events: &mut Events) {
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| *p)
        .collect();
    paddles.sort_by_key(|p| p.side == Side::Opponent);

    for paddle in &paddles {
        for (_entity, ball) in world.query_mut::<&mut Ball>() {
            if !ball_hits_paddle(ball, paddle) {
                continue;
            }

            ball.speed += config.ball_speed_increment;
            ball.vel = bounce_velocity(
                paddle.hit_offset(ball.pos.x),
                ball.speed,
                config.max_bounce_angle,
                paddle.side.bounce_dir(),
            );

            // Push the ball clear of the paddle face so it cannot re-trigger
            ball.pos.y = match paddle.side {
                Side::Player => paddle.pos.y - ball.radius - config.ball_paddle_nudge,
                Side::Opponent => {
                    paddle.pos.y + paddle.height + ball.radius + config.ball_paddle_nudge
                }
            };

            events.ball_hit_paddle = true;
            log::debug!(
                "Ball hit {:?} paddle, speed now {:.1}",
                paddle.side,
                ball.speed
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};

    fn setup_world() -> (World, Arena, Config, Events) {
        (
            World::new(),
            Arena::new(800.0, 600.0),
            Config::new(),
            Events::new(),
        )
    }

    fn ball(world: &World) -> Ball {
        world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, b)| *b)
            .unwrap()
    }

    #[test]
    fn test_ball_bounces_off_left_wall() {
        let (mut world, arena, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(3.0, 300.0), Vec2::new(-4.0, 5.0), &config);

        check_wall_collisions(&mut world, &arena, &mut events);

        let b = ball(&world);
        assert_eq!(b.pos.x, config.ball_radius, "Clamped to the wall");
        assert_eq!(b.vel, Vec2::new(4.0, 5.0), "Only dx is reflected");
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_ball_bounces_off_right_wall() {
        let (mut world, arena, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(797.0, 300.0), Vec2::new(3.0, -5.0), &config);

        check_wall_collisions(&mut world, &arena, &mut events);

        let b = ball(&world);
        assert_eq!(b.pos.x, arena.width - config.ball_radius);
        assert_eq!(b.vel, Vec2::new(-3.0, -5.0));
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_no_bounce_off_top_or_bottom() {
        let (mut world, arena, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(400.0, -20.0), Vec2::new(0.0, -5.0), &config);

        check_wall_collisions(&mut world, &arena, &mut events);

        let b = ball(&world);
        assert_eq!(b.vel, Vec2::new(0.0, -5.0));
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_bounce_velocity_magnitude_and_bounds() {
        let max = config_max_angle();
        let mut last_angle = f32::NEG_INFINITY;
        for i in 0..=20 {
            let offset = -1.0 + i as f32 * 0.1;
            let v = bounce_velocity(offset, 7.2, max, -1.0);
            assert!((v.length() - 7.2).abs() < 1e-4, "|v| should equal speed");
            assert!(v.y < 0.0, "Player bounce goes up");

            let angle = v.x.atan2(-v.y);
            assert!(angle.abs() <= max + 1e-5, "Angle {} exceeds 45 degrees", angle);
            assert!(angle > last_angle, "Angle should grow with offset");
            last_angle = angle;
        }
    }

    #[test]
    fn test_bounce_velocity_clamps_offset() {
        let max = config_max_angle();
        let at_edge = bounce_velocity(1.0, 7.0, max, 1.0);
        let beyond = bounce_velocity(3.0, 7.0, max, 1.0);
        assert!((at_edge - beyond).length() < 1e-6);
    }

    fn config_max_angle() -> f32 {
        Config::new().max_bounce_angle
    }

    #[test]
    fn test_ball_collides_with_player_paddle() {
        let (mut world, _arena, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Player, Vec2::new(400.0, 570.0), &config);
        create_ball(&mut world, Vec2::new(475.0, 565.0), Vec2::new(1.0, 5.0), &config);

        check_paddle_collisions(&mut world, &config, &mut events);

        let b = ball(&world);
        assert!(b.vel.y < 0.0, "Ball should head up off the player paddle");
        assert!(b.vel.x > 0.0, "Right-of-center hit deflects right");
        assert!((b.speed - 7.2).abs() < 1e-5);
        assert!((b.vel.length() - b.speed).abs() < 1e-4);
        assert_eq!(b.pos.y, 570.0 - config.ball_radius - 1.0);
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_ball_collides_with_opponent_paddle() {
        let (mut world, _arena, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Opponent, Vec2::new(300.0, 20.0), &config);
        create_ball(&mut world, Vec2::new(325.0, 36.0), Vec2::new(0.0, -5.0), &config);

        check_paddle_collisions(&mut world, &config, &mut events);

        let b = ball(&world);
        assert!(b.vel.y > 0.0, "Ball should head down off the opponent paddle");
        assert!(b.vel.x < 0.0, "Left-of-center hit deflects left");
        assert_eq!(b.pos.y, 20.0 + config.paddle_height + config.ball_radius + 1.0);
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_center_hit_goes_straight() {
        let (mut world, _arena, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Player, Vec2::new(400.0, 570.0), &config);
        create_ball(&mut world, Vec2::new(450.0, 566.0), Vec2::new(2.0, 5.0), &config);

        check_paddle_collisions(&mut world, &config, &mut events);

        let b = ball(&world);
        assert!(b.vel.x.abs() < 1e-6);
        assert!((b.vel.y + b.speed).abs() < 1e-5);
    }

    #[test]
    fn test_ball_outside_paddle_span_misses() {
        let (mut world, _arena, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Player, Vec2::new(400.0, 570.0), &config);
        // Ball edge overlaps the paddle but its center is past the corner
        create_ball(&mut world, Vec2::new(505.0, 568.0), Vec2::new(0.0, 5.0), &config);

        check_paddle_collisions(&mut world, &config, &mut events);

        let b = ball(&world);
        assert_eq!(b.vel, Vec2::new(0.0, 5.0));
        assert_eq!(b.speed, config.ball_speed_base);
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_ball_above_player_paddle_misses() {
        let (mut world, _arena, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Player, Vec2::new(400.0, 570.0), &config);
        create_ball(&mut world, Vec2::new(450.0, 500.0), Vec2::new(0.0, 5.0), &config);

        check_paddle_collisions(&mut world, &config, &mut events);

        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_speed_grows_every_hit() {
        let (mut world, _arena, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Player, Vec2::new(400.0, 570.0), &config);
        create_ball(&mut world, Vec2::new(450.0, 566.0), Vec2::new(0.0, 5.0), &config);

        let mut last_speed = config.ball_speed_base;
        for _ in 0..5 {
            for (_e, b) in world.query_mut::<&mut Ball>() {
                b.pos.y = 566.0;
            }
            check_paddle_collisions(&mut world, &config, &mut events);
            let b = ball(&world);
            assert!(b.speed > last_speed);
            last_speed = b.speed;
        }
        assert!((last_speed - 8.0).abs() < 1e-4);
    }

    #[test]
    fn test_no_collision_when_no_ball() {
        let (mut world, _arena, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Player, Vec2::new(400.0, 570.0), &config);

        check_paddle_collisions(&mut world, &config, &mut events);

        assert!(!events.ball_hit_paddle);
    }
}
