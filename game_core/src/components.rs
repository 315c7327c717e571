use glam::Vec2;

/// Which end of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Keyboard-controlled, anchored to the bottom edge
    Player,
    /// Computer-controlled, anchored to the top edge
    Opponent,
}

impl Side {
    /// Vertical direction the ball leaves this paddle in (-1 = up, 1 = down)
    pub fn bounce_dir(self) -> f32 {
        match self {
            Side::Player => -1.0,
            Side::Opponent => 1.0,
        }
    }
}

/// Paddle component
///
/// `pos` is the top-left corner. Only `pos.x` moves during play.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub score: u32,
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, width: f32, height: f32) -> Self {
        Self {
            side,
            pos,
            width,
            height,
            score: 0,
        }
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }

    /// Horizontal offset of `x` from the paddle center, scaled to [-1, 1]
    pub fn hit_offset(&self, x: f32) -> f32 {
        ((x - self.center_x()) / (self.width / 2.0)).clamp(-1.0, 1.0)
    }
}

/// Ball component
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub speed: f32, // Scalar used for paddle redirects; grows each hit
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, speed: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            speed,
        }
    }

    /// A round is live once the ball has been launched
    pub fn in_motion(&self) -> bool {
        self.vel != Vec2::ZERO
    }

    /// Park the ball at `center` with no velocity and the base speed
    pub fn recenter(&mut self, center: Vec2, base_speed: f32) {
        self.pos = center;
        self.vel = Vec2::ZERO;
        self.speed = base_speed;
    }

    /// Serve the ball in a random diagonal direction
    ///
    /// Each axis picks a sign with equal odds. The horizontal magnitude is
    /// drawn from `[dx_min, dx_max)`, the vertical one is always `dy`.
    pub fn launch(&mut self, dx_min: f32, dx_max: f32, dy: f32, rng: &mut crate::GameRng) {
        use rand::Rng;
        let dir_x = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let dir_y = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let dx = rng.0.gen_range(dx_min..dx_max);
        self.vel = Vec2::new(dx * dir_x, dy * dir_y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameRng;

    #[test]
    fn test_hit_offset_range() {
        let paddle = Paddle::new(Side::Player, Vec2::new(400.0, 570.0), 100.0, 12.0);
        assert_eq!(paddle.hit_offset(450.0), 0.0, "Center hit");
        assert_eq!(paddle.hit_offset(400.0), -1.0, "Left edge");
        assert_eq!(paddle.hit_offset(500.0), 1.0, "Right edge");
        assert_eq!(paddle.hit_offset(475.0), 0.5);
    }

    #[test]
    fn test_recenter_clears_velocity_and_speed() {
        let mut ball = Ball::new(Vec2::new(10.0, 10.0), Vec2::new(3.0, -5.0), 8.0, 9.4);
        ball.recenter(Vec2::new(400.0, 300.0), 7.0);
        assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
        assert!(!ball.in_motion());
        assert_eq!(ball.speed, 7.0);
    }

    #[test]
    fn test_launch_covers_all_directions() {
        let mut rng = GameRng::new(7);
        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO, 8.0, 7.0);
        let mut seen = [[false; 2]; 2];

        for _ in 0..200 {
            ball.launch(2.0, 4.0, 5.0, &mut rng);
            let sx = (ball.vel.x > 0.0) as usize;
            let sy = (ball.vel.y > 0.0) as usize;
            seen[sx][sy] = true;

            let dx = ball.vel.x.abs();
            assert!((2.0..4.0).contains(&dx), "dx magnitude {} out of range", dx);
            assert_eq!(ball.vel.y.abs(), 5.0);
        }

        assert!(
            seen.iter().flatten().all(|s| *s),
            "Every sign combination should occur, got {:?}",
            seen
        );
    }
}
