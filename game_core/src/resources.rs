use glam::Vec2;

/// Playing surface bounds in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// A surface with no area has not been laid out yet
    pub fn is_ready(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub player_scored: bool,
    pub opponent_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.player_scored = false;
        self.opponent_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }

    pub fn scored(&self) -> bool {
        self.player_scored || self.opponent_scored
    }
}

/// Pending serve after a point, expressed as a deadline on the frame clock (ms)
#[derive(Debug, Clone, Copy, Default)]
pub struct RelaunchTimer {
    due_at: Option<f64>,
}

impl RelaunchTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now: f64, delay: f64) {
        self.due_at = Some(now + delay);
    }

    pub fn cancel(&mut self) {
        self.due_at = None;
    }

    pub fn is_pending(&self) -> bool {
        self.due_at.is_some()
    }

    /// Consume the deadline if it has passed. Fires at most once per schedule.
    pub fn fire(&mut self, now: f64) -> bool {
        match self.due_at {
            Some(due) if now >= due => {
                self.due_at = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_center() {
        let arena = Arena::new(800.0, 600.0);
        assert_eq!(arena.center(), Vec2::new(400.0, 300.0));
        assert!(arena.is_ready());
        assert!(!Arena::new(0.0, 600.0).is_ready());
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.player_scored = true;
        events.opponent_scored = true;
        events.ball_hit_paddle = true;
        events.ball_hit_wall = true;

        events.clear();

        assert!(!events.player_scored);
        assert!(!events.opponent_scored);
        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
        assert!(!events.scored());
    }

    #[test]
    fn test_relaunch_timer_fires_once_after_deadline() {
        let mut timer = RelaunchTimer::new();
        assert!(!timer.fire(0.0), "Nothing scheduled");

        timer.schedule(500.0, 1000.0);
        assert!(timer.is_pending());
        assert!(!timer.fire(1499.0), "Too early");
        assert!(timer.fire(1500.0), "Due");
        assert!(!timer.fire(1600.0), "Already fired");
        assert!(!timer.is_pending());
    }

    #[test]
    fn test_relaunch_timer_cancel() {
        let mut timer = RelaunchTimer::new();
        timer.schedule(0.0, 1000.0);
        timer.cancel();
        assert!(!timer.fire(5000.0));
    }
}
