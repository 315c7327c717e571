//! Keyboard input handling

use crate::app::App;
use game_core::is_launch_key;
use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent};

/// Extract key from keyboard event
pub fn key_from_event(event: &Event) -> Option<String> {
    event.dyn_ref::<KeyboardEvent>().map(|e| e.key())
}

/// Record the key and start the game if it is a launch key pressed in the menu
pub fn handle_key_down(app: &mut App, key: &str) {
    app.input.key_down(key);
    if app.sim.fsm.in_menu() && is_launch_key(key) {
        app.sim.start();
    }
}

pub fn handle_key_up(app: &mut App, key: &str) {
    app.input.key_up(key);
}

/// Focus left the page; keyup events for held keys will never arrive
pub fn handle_blur(app: &mut App) {
    app.input.clear();
}
