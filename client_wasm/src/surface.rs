use game_core::Surface;
use std::f64::consts::TAU;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

/// `Surface` backed by a canvas 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    type Image = HtmlImageElement;

    fn clear_rect(&self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.clear_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_rect(&self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn stroke_line(&self, x0: f32, y0: f32, x1: f32, y1: f32) {
        self.ctx.begin_path();
        self.ctx.move_to(x0 as f64, y0 as f64);
        self.ctx.line_to(x1 as f64, y1 as f64);
        self.ctx.stroke();
    }

    fn fill_circle(&self, x: f32, y: f32, radius: f32) {
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(x as f64, y as f64, radius as f64, 0.0, TAU) {
            log::warn!("arc failed: {:?}", e);
            return;
        }
        self.ctx.fill();
        self.ctx.close_path();
    }

    fn fill_text(&self, text: &str, x: f32, y: f32) {
        if let Err(e) = self.ctx.fill_text(text, x as f64, y as f64) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }

    fn image_size(&self, image: &HtmlImageElement) -> (f32, f32) {
        (image.natural_width() as f32, image.natural_height() as f32)
    }

    fn draw_image(&self, image: &HtmlImageElement, src: [f32; 4], dst: [f32; 4]) {
        let [sx, sy, sw, sh] = src.map(f64::from);
        let [dx, dy, dw, dh] = dst.map(f64::from);
        if let Err(e) = self
            .ctx
            .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                image, sx, sy, sw, sh, dx, dy, dw, dh,
            )
        {
            log::warn!("draw_image failed: {:?}", e);
        }
    }

    fn set_fill_style(&self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn set_stroke_style(&self, color: &str) {
        self.ctx.set_stroke_style_str(color);
    }

    fn set_line_width(&self, width: f32) {
        self.ctx.set_line_width(width as f64);
    }

    fn set_font(&self, font: &str) {
        self.ctx.set_font(font);
    }

    fn set_text_align(&self, align: &str) {
        self.ctx.set_text_align(align);
    }

    fn set_global_alpha(&self, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
    }

    fn set_shadow(&self, blur: f32, color: &str) {
        self.ctx.set_shadow_blur(blur as f64);
        self.ctx.set_shadow_color(color);
    }
}
