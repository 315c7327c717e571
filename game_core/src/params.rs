/// Game tuning parameters for Neon Pong
///
/// Distances are in surface pixels, speeds in pixels per frame.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Paddle
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 12.0;
    pub const PLAYER_PADDLE_SPEED: f32 = 8.0;
    pub const PLAYER_BOTTOM_OFFSET: f32 = 30.0; // From the bottom edge to the paddle's top
    pub const OPPONENT_TOP_OFFSET: f32 = 20.0;

    // Opponent controller
    pub const OPPONENT_SPEED: f32 = 5.5; // Slightly slower than the player
    pub const OPPONENT_DEAD_ZONE: f32 = 10.0;

    // Ball
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_SPEED_BASE: f32 = 7.0;
    pub const BALL_SPEED_INCREMENT: f32 = 0.2; // Added on every paddle hit, uncapped
    pub const BALL_PADDLE_NUDGE: f32 = 1.0;
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

    // Launch
    pub const LAUNCH_DX_MIN: f32 = 2.0;
    pub const LAUNCH_DX_MAX: f32 = 4.0;
    pub const LAUNCH_DY: f32 = 5.0;
    pub const RELAUNCH_DELAY_MS: f64 = 1000.0;
}
