//! Browser client for Neon Pong
//!
//! Canvas 2D rendering driven by requestAnimationFrame. The game rules live
//! in `game_core`; this crate wires them to the DOM.

#![cfg(target_arch = "wasm32")]

mod app;
mod driver;
mod input;
mod logger;
mod surface;
mod theme;

use app::App;
use driver::GameLoop;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

/// Handle returned to JS for a running game
#[wasm_bindgen]
pub struct GameHandle {
    game: GameLoop,
}

#[wasm_bindgen]
impl GameHandle {
    /// Stop the loop and detach all listeners. Safe to call twice.
    pub fn stop(&mut self) {
        self.game.stop();
    }

    /// Use the image at `url` (any `img` src, including data URLs) as background
    pub fn set_background_image(&self, url: &str) -> Result<(), JsValue> {
        theme::load_background(&self.game.app, url).map_err(|e| JsValue::from_str(&e))
    }

    pub fn clear_background_image(&self) {
        theme::clear_background(&mut self.game.app.borrow_mut());
    }

    /// Current state as a string ("Menu", "Playing", ...)
    pub fn state(&self) -> String {
        self.game.app.borrow().sim.fsm.state_string()
    }

    pub fn player_score(&self) -> u32 {
        self.game.app.borrow().sim.scores().0
    }

    pub fn opponent_score(&self) -> u32 {
        self.game.app.borrow().sim.scores().1
    }
}

/// Mount the game on the canvas with id `canvas_id`
#[wasm_bindgen]
pub fn start(canvas_id: &str) -> Result<GameHandle, JsValue> {
    logger::init(log::LevelFilter::Info);
    start_inner(canvas_id).map_err(|e| {
        log::error!("{}", e);
        JsValue::from_str(&e)
    })
}

fn start_inner(canvas_id: &str) -> Result<GameHandle, String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "No document".to_string())?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| format!("No element with id {}", canvas_id))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| format!("Element {} is not a canvas", canvas_id))?;

    let seed = js_sys::Date::now() as u64;
    let app = App::new(canvas, seed)?;
    let game = GameLoop::start(app)?;
    Ok(GameHandle { game })
}
