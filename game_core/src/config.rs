use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub player_paddle_speed: f32,
    pub player_bottom_offset: f32,
    pub opponent_top_offset: f32,
    pub opponent_speed: f32,
    pub opponent_dead_zone: f32,
    pub ball_radius: f32,
    pub ball_speed_base: f32,
    pub ball_speed_increment: f32,
    pub ball_paddle_nudge: f32,
    pub max_bounce_angle: f32,
    pub launch_dx_min: f32,
    pub launch_dx_max: f32,
    pub launch_dy: f32,
    pub relaunch_delay_ms: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            player_paddle_speed: Params::PLAYER_PADDLE_SPEED,
            player_bottom_offset: Params::PLAYER_BOTTOM_OFFSET,
            opponent_top_offset: Params::OPPONENT_TOP_OFFSET,
            opponent_speed: Params::OPPONENT_SPEED,
            opponent_dead_zone: Params::OPPONENT_DEAD_ZONE,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_base: Params::BALL_SPEED_BASE,
            ball_speed_increment: Params::BALL_SPEED_INCREMENT,
            ball_paddle_nudge: Params::BALL_PADDLE_NUDGE,
            max_bounce_angle: Params::MAX_BOUNCE_ANGLE,
            launch_dx_min: Params::LAUNCH_DX_MIN,
            launch_dx_max: Params::LAUNCH_DX_MAX,
            launch_dy: Params::LAUNCH_DY,
            relaunch_delay_ms: Params::RELAUNCH_DELAY_MS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default left edge for a paddle centered on a surface of `arena_width`
    pub fn paddle_start_x(&self, arena_width: f32) -> f32 {
        arena_width / 2.0 - self.paddle_width / 2.0
    }

    /// Top edge of the bottom-anchored player paddle
    pub fn player_paddle_y(&self, arena_height: f32) -> f32 {
        arena_height - self.player_bottom_offset
    }

    /// Top edge of the top-anchored opponent paddle
    pub fn opponent_paddle_y(&self) -> f32 {
        self.opponent_top_offset
    }

    /// Clamp a paddle's left edge so the whole paddle stays on the surface
    pub fn clamp_paddle_x(&self, x: f32, paddle_width: f32, arena_width: f32) -> f32 {
        // Pins to 0 when the surface is narrower than the paddle
        x.min(arena_width - paddle_width).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_positions() {
        let config = Config::new();
        assert_eq!(config.paddle_start_x(800.0), 350.0, "Paddle centered");
        assert_eq!(config.player_paddle_y(600.0), 570.0, "Player near bottom");
        assert_eq!(config.opponent_paddle_y(), 20.0, "Opponent near top");
    }

    #[test]
    fn test_config_clamp_paddle_x() {
        let config = Config::new();
        assert_eq!(config.clamp_paddle_x(-5.0, 100.0, 800.0), 0.0);
        assert_eq!(config.clamp_paddle_x(750.0, 100.0, 800.0), 700.0);
        assert_eq!(config.clamp_paddle_x(123.0, 100.0, 800.0), 123.0);
    }

    #[test]
    fn test_config_clamp_paddle_x_narrow_surface() {
        let config = Config::new();
        assert_eq!(config.clamp_paddle_x(10.0, 100.0, 60.0), 0.0);
    }
}
