use crate::{
    create_ball, create_paddle, step, Arena, Ball, Config, Events, GameAction, GameFsm, GameRng,
    GameState, InputTracker, Paddle, RelaunchTimer, Side,
};
use glam::Vec2;
use hecs::{Entity, World};

/// Everything one mounted game view owns
///
/// The frame driver holds this exclusively and lends it to the step and,
/// read-only, to the renderer.
pub struct Simulation {
    pub world: World,
    pub arena: Arena,
    pub config: Config,
    pub events: Events,
    pub rng: GameRng,
    pub fsm: GameFsm,
    pub relaunch: RelaunchTimer,
    ball: Entity,
    player: Entity,
    opponent: Entity,
}

impl Simulation {
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        Self::with_config(Config::new(), width, height, seed)
    }

    pub fn with_config(config: Config, width: f32, height: f32, seed: u64) -> Self {
        let arena = Arena::new(width, height);
        let mut world = World::new();

        let start_x = config.paddle_start_x(arena.width);
        let player = create_paddle(
            &mut world,
            Side::Player,
            Vec2::new(start_x, config.player_paddle_y(arena.height)),
            &config,
        );
        let opponent = create_paddle(
            &mut world,
            Side::Opponent,
            Vec2::new(start_x, config.opponent_paddle_y()),
            &config,
        );
        let ball = create_ball(&mut world, arena.center(), Vec2::ZERO, &config);

        Self {
            world,
            arena,
            config,
            events: Events::new(),
            rng: GameRng::new(seed),
            fsm: GameFsm::new(),
            relaunch: RelaunchTimer::new(),
            ball,
            player,
            opponent,
        }
    }

    /// Match the playing field to a new surface size
    ///
    /// Re-centers the ball at rest and puts both paddles back at their
    /// default spots. Scores are kept. A rally in progress is dropped
    /// without a point; while playing, a fresh serve is scheduled.
    /// A zero-sized surface is ignored.
    pub fn resize(&mut self, width: f32, height: f32, now: f64) {
        let arena = Arena::new(width, height);
        if !arena.is_ready() {
            return;
        }
        self.arena = arena;
        log::info!("Surface resized to {}x{}", width, height);

        let config = &self.config;
        let start_x = config.paddle_start_x(arena.width);
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.width = config.paddle_width;
            paddle.height = config.paddle_height;
            paddle.pos = match paddle.side {
                Side::Player => Vec2::new(start_x, config.player_paddle_y(arena.height)),
                Side::Opponent => Vec2::new(start_x, config.opponent_paddle_y()),
            };
        }
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.radius = config.ball_radius;
            ball.recenter(arena.center(), config.ball_speed_base);
        }

        if self.fsm.is_playing() {
            self.relaunch.schedule(now, self.config.relaunch_delay_ms);
        }
    }

    /// Leave the menu and serve the first ball
    ///
    /// Returns false if the game was not in the menu.
    pub fn start(&mut self) -> bool {
        if !self.fsm.transition(GameAction::Start).success {
            return false;
        }
        self.launch_ball();
        true
    }

    /// Serve the ball from wherever it currently rests
    pub fn launch_ball(&mut self) {
        let config = &self.config;
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.launch(
                config.launch_dx_min,
                config.launch_dx_max,
                config.launch_dy,
                &mut self.rng,
            );
            log::debug!("Ball launched with velocity {:?}", ball.vel);
        }
    }

    /// Advance one display frame
    ///
    /// `now` is the frame timestamp in milliseconds. Fires a due relaunch,
    /// then runs the rules once if playing. A point schedules the next serve.
    /// Nothing moves until the surface has a size.
    pub fn tick(&mut self, input: &InputTracker, now: f64) {
        if !self.arena.is_ready() {
            return;
        }

        if self.relaunch.fire(now) {
            self.launch_ball();
        }

        if !self.fsm.is_playing() {
            return;
        }

        step(
            &mut self.world,
            &self.arena,
            &self.config,
            input.intent(),
            &mut self.events,
        );

        if self.events.scored() {
            self.relaunch.schedule(now, self.config.relaunch_delay_ms);
        }
    }

    pub fn state(&self) -> GameState {
        self.fsm.state()
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.ball).ok().map(|b| *b)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        let entity = match side {
            Side::Player => self.player,
            Side::Opponent => self.opponent,
        };
        self.world.get::<&Paddle>(entity).ok().map(|p| *p)
    }

    /// (player, opponent)
    pub fn scores(&self) -> (u32, u32) {
        let score = |side| self.paddle(side).map(|p| p.score).unwrap_or(0);
        (score(Side::Player), score(Side::Opponent))
    }
}
