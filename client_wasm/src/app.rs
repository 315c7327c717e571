use crate::surface::CanvasSurface;
use crate::theme::{self, PendingImage};
use game_core::{render_frame, render_menu_overlay, InputTracker, Simulation, Theme};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

/// State owned by one mounted game view
pub struct App {
    pub sim: Simulation,
    pub input: InputTracker,
    pub theme: Theme<HtmlImageElement>,
    /// Bumped on every theme change so stale image loads can be discarded
    pub theme_generation: u32,
    pub pending_theme: Option<PendingImage>,
    pub canvas: HtmlCanvasElement,
    pub surface: CanvasSurface,
    /// Cleared on teardown; late async callbacks check it before touching state
    pub alive: bool,
}

impl App {
    pub fn new(canvas: HtmlCanvasElement, seed: u64) -> Result<Self, String> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| format!("Failed to get 2d context: {:?}", e))?
            .ok_or_else(|| "Canvas has no 2d context".to_string())?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "2d context has unexpected type".to_string())?;

        let (width, height) = container_size(&canvas);
        canvas.set_width(width);
        canvas.set_height(height);

        Ok(Self {
            sim: Simulation::new(width as f32, height as f32, seed),
            input: InputTracker::new(),
            theme: Theme::new(),
            theme_generation: 0,
            pending_theme: None,
            canvas,
            surface: CanvasSurface::new(ctx),
            alive: true,
        })
    }

    /// Match the canvas resolution to its container and reset the field
    pub fn fit_to_container(&mut self, now: f64) {
        let (width, height) = container_size(&self.canvas);
        if width == 0 || height == 0 {
            return;
        }
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.sim.resize(width as f32, height as f32, now);
    }

    /// One display frame: step then draw
    pub fn frame(&mut self, now: f64) {
        theme::release_settled(self);
        self.sim.tick(&self.input, now);

        render_frame(&self.surface, &self.sim, &self.theme);
        if self.sim.fsm.in_menu() {
            render_menu_overlay(&self.surface, &self.sim);
        }
    }
}

/// Pixel size of the element the canvas fills, falling back to the canvas itself
fn container_size(canvas: &HtmlCanvasElement) -> (u32, u32) {
    let (w, h) = match canvas.parent_element() {
        Some(parent) => (parent.client_width(), parent.client_height()),
        None => (canvas.client_width(), canvas.client_height()),
    };
    (w.max(0) as u32, h.max(0) as u32)
}
