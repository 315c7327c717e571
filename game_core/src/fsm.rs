//! Game State Machine
//!
//! Only Menu -> Playing is reachable. Paused and GameOver are reserved
//! values with no inbound transition.

/// Game states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    Menu,
    Playing,
    Paused,
    GameOver,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Start,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: GameState,
    pub to_state: GameState,
    pub action: GameAction,
}

/// Game Finite State Machine
#[derive(Debug, Clone, Default)]
pub struct GameFsm {
    state: GameState,
}

impl GameFsm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Current state as a string (for JS interop)
    pub fn state_string(&self) -> String {
        format!("{:?}", self.state)
    }

    pub fn can_transition(&self, action: GameAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: GameAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            log::info!("State {:?} -> {:?} on {:?}", from_state, next_state, action);
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    fn get_next_state(&self, action: GameAction) -> Option<GameState> {
        match (self.state, action) {
            (GameState::Menu, GameAction::Start) => Some(GameState::Playing),

            // Invalid transition
            _ => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.state == GameState::Playing
    }

    pub fn in_menu(&self) -> bool {
        self.state == GameState::Menu
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let fsm = GameFsm::new();
        assert_eq!(fsm.state(), GameState::Menu);
        assert!(fsm.in_menu());
    }

    #[test]
    fn test_start_from_menu() {
        let mut fsm = GameFsm::new();
        let result = fsm.transition(GameAction::Start);
        assert!(result.success);
        assert_eq!(result.from_state, GameState::Menu);
        assert_eq!(result.to_state, GameState::Playing);
        assert!(fsm.is_playing());
    }

    #[test]
    fn test_start_while_playing_rejected() {
        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::Start);
        assert!(!fsm.can_transition(GameAction::Start));

        let result = fsm.transition(GameAction::Start);
        assert!(!result.success);
        assert_eq!(fsm.state(), GameState::Playing);
    }

    #[test]
    fn test_state_string() {
        let mut fsm = GameFsm::new();
        assert_eq!(fsm.state_string(), "Menu");
        fsm.transition(GameAction::Start);
        assert_eq!(fsm.state_string(), "Playing");
    }
}
