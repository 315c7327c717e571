//! Frame drawing
//!
//! Draws a [`Simulation`] onto any 2D [`Surface`]. Nothing here mutates
//! game state, so it is safe to call every frame in any state.

use crate::{Side, Simulation};

pub const BACKGROUND_COLOR: &str = "#0f172a";
pub const GRID_COLOR: &str = "#444";
pub const GRID_SPACING: f32 = 40.0;
pub const GRID_ALPHA: f32 = 0.1;
pub const CENTER_LINE_COLOR: &str = "#333";
pub const SCORE_FONT: &str = "40px \"Press Start 2P\"";
pub const SCORE_COLOR: &str = "rgba(255, 255, 255, 0.2)";
pub const PLAYER_COLOR: &str = "#0ea5e9";
pub const OPPONENT_COLOR: &str = "#f43f5e";
pub const BALL_COLOR: &str = "#fff";
pub const PADDLE_GLOW: f32 = 10.0;
pub const BALL_GLOW: f32 = 15.0;

/// Minimal 2D drawing API, shaped after the HTML canvas context
pub trait Surface {
    /// Decoded image the surface can blit
    type Image;

    fn clear_rect(&self, x: f32, y: f32, w: f32, h: f32);
    fn fill_rect(&self, x: f32, y: f32, w: f32, h: f32);
    fn stroke_line(&self, x0: f32, y0: f32, x1: f32, y1: f32);
    fn fill_circle(&self, x: f32, y: f32, radius: f32);
    fn fill_text(&self, text: &str, x: f32, y: f32);
    /// Natural pixel size of a decoded image
    fn image_size(&self, image: &Self::Image) -> (f32, f32);
    /// Blit the `src` rectangle of `image` into the `dst` rectangle, both (x, y, w, h)
    fn draw_image(&self, image: &Self::Image, src: [f32; 4], dst: [f32; 4]);

    fn set_fill_style(&self, color: &str);
    fn set_stroke_style(&self, color: &str);
    fn set_line_width(&self, width: f32);
    fn set_font(&self, font: &str);
    fn set_text_align(&self, align: &str);
    fn set_global_alpha(&self, alpha: f32);
    /// Glow around everything filled afterwards; a blur of 0 turns it off
    fn set_shadow(&self, blur: f32, color: &str);
}

/// Optional background image supplied from outside the game
pub struct Theme<I> {
    pub background: Option<I>,
}

impl<I> Theme<I> {
    pub fn new() -> Self {
        Self { background: None }
    }

    pub fn set_background(&mut self, image: I) {
        self.background = Some(image);
    }

    pub fn clear_background(&mut self) {
        self.background = None;
    }
}

impl<I> Default for Theme<I> {
    fn default() -> Self {
        Self::new()
    }
}

/// Source rectangle that covers a `w`×`h` target without distortion
///
/// The image is scaled until it fills the target and the overflow is
/// cropped evenly from both sides. None for an image with no pixels.
pub fn cover_crop(image_w: f32, image_h: f32, w: f32, h: f32) -> Option<[f32; 4]> {
    if image_w <= 0.0 || image_h <= 0.0 || w <= 0.0 || h <= 0.0 {
        return None;
    }
    let scale = (w / image_w).max(h / image_h);
    let (crop_w, crop_h) = (w / scale, h / scale);
    Some([
        (image_w - crop_w) / 2.0,
        (image_h - crop_h) / 2.0,
        crop_w,
        crop_h,
    ])
}

/// Draw background, scores, paddles and ball
pub fn render_frame<S: Surface>(surface: &S, sim: &Simulation, theme: &Theme<S::Image>) {
    let arena = sim.arena;
    let (w, h) = (arena.width, arena.height);

    surface.clear_rect(0.0, 0.0, w, h);
    draw_background(surface, w, h, theme);

    // Scores
    let (player_score, opponent_score) = sim.scores();
    surface.set_font(SCORE_FONT);
    surface.set_fill_style(SCORE_COLOR);
    surface.set_text_align("center");
    surface.fill_text(&opponent_score.to_string(), w / 2.0, h / 2.0 - 50.0);
    surface.fill_text(&player_score.to_string(), w / 2.0, h / 2.0 + 80.0);

    // Paddles
    for (side, color) in [(Side::Opponent, OPPONENT_COLOR), (Side::Player, PLAYER_COLOR)] {
        if let Some(paddle) = sim.paddle(side) {
            surface.set_fill_style(color);
            surface.set_shadow(PADDLE_GLOW, color);
            surface.fill_rect(paddle.pos.x, paddle.pos.y, paddle.width, paddle.height);
        }
    }

    // Ball
    if let Some(ball) = sim.ball() {
        surface.set_fill_style(BALL_COLOR);
        surface.set_shadow(BALL_GLOW, BALL_COLOR);
        surface.fill_circle(ball.pos.x, ball.pos.y, ball.radius);
    }

    surface.set_shadow(0.0, "transparent");
}

fn draw_background<S: Surface>(surface: &S, w: f32, h: f32, theme: &Theme<S::Image>) {
    if let Some(image) = &theme.background {
        let (image_w, image_h) = surface.image_size(image);
        if let Some(src) = cover_crop(image_w, image_h, w, h) {
            surface.draw_image(image, src, [0.0, 0.0, w, h]);
            return;
        }
    }

    surface.set_fill_style(BACKGROUND_COLOR);
    surface.fill_rect(0.0, 0.0, w, h);

    surface.set_global_alpha(GRID_ALPHA);
    surface.set_stroke_style(GRID_COLOR);
    surface.set_line_width(1.0);
    let mut x = 0.0;
    while x <= w {
        surface.stroke_line(x, 0.0, x, h);
        x += GRID_SPACING;
    }
    let mut y = 0.0;
    while y <= h {
        surface.stroke_line(0.0, y, w, y);
        y += GRID_SPACING;
    }
    surface.set_global_alpha(1.0);

    surface.set_stroke_style(CENTER_LINE_COLOR);
    surface.set_line_width(2.0);
    surface.stroke_line(0.0, h / 2.0, w, h / 2.0);
}

/// Title screen drawn over the frame while in the menu
pub fn render_menu_overlay<S: Surface>(surface: &S, sim: &Simulation) {
    let (w, h) = (sim.arena.width, sim.arena.height);
    let cx = w / 2.0;
    let cy = h / 2.0;

    surface.set_fill_style("rgba(0, 0, 0, 0.6)");
    surface.fill_rect(0.0, 0.0, w, h);

    surface.set_text_align("center");
    surface.set_font("56px \"Press Start 2P\"");
    surface.set_fill_style(PLAYER_COLOR);
    surface.set_shadow(20.0, OPPONENT_COLOR);
    surface.fill_text("NEON PONG", cx, cy - 40.0);
    surface.set_shadow(0.0, "transparent");

    surface.set_font("20px \"Press Start 2P\"");
    surface.set_fill_style("#fff");
    surface.fill_text("Press ENTER to Start", cx, cy + 20.0);

    surface.set_font("14px sans-serif");
    surface.set_fill_style("#94a3b8");
    surface.fill_text("\u{2190} Left", cx - 60.0, cy + 70.0);
    surface.fill_text("Right \u{2192}", cx + 60.0, cy + 70.0);
}
