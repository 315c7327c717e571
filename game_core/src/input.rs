//! Keyboard state tracking
//!
//! Keys are identified by the DOM `KeyboardEvent.key` string.

use std::collections::HashSet;

pub const KEY_LEFT: &str = "ArrowLeft";
pub const KEY_RIGHT: &str = "ArrowRight";

/// Keys that start a game from the menu
pub fn is_launch_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Horizontal movement requested for the player paddle this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub left: bool,
    pub right: bool,
}

/// Set of currently held keys
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    held: HashSet<String>,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: &str) {
        self.held.insert(key.to_string());
    }

    pub fn key_up(&mut self, key: &str) {
        self.held.remove(key);
    }

    pub fn is_held(&self, key: &str) -> bool {
        self.held.contains(key)
    }

    /// Release everything, e.g. when the window loses focus
    pub fn clear(&mut self) {
        self.held.clear();
    }

    pub fn intent(&self) -> PaddleIntent {
        PaddleIntent {
            left: self.is_held(KEY_LEFT),
            right: self.is_held(KEY_RIGHT),
        }
    }
}
