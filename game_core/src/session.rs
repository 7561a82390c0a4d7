use hecs::World;

use crate::{
    create_ball, create_paddle, step, Aabb, Arena, Ball, BestOf, Config, Events, GameRng,
    InputQueue, MatchAction, MatchFsm, MatchPhase, Paddle, PaddleSide, Score, Time,
};

/// A complete single-player match: world, score, and the modal match flow.
///
/// The session owns everything the shell needs per frame: it queues player
/// input, advances the simulation, reports the frame's events for sound
/// triggering, and hands out bounding-box snapshots for rendering.
pub struct GameSession {
    pub world: World,
    pub time: Time,
    pub arena: Arena,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub input_queue: InputQueue,
    pub rng: GameRng,
    fsm: MatchFsm,
    win_score: u8,
    winner: Option<PaddleSide>,
}

impl GameSession {
    pub fn new(config: Config, seed: u64) -> Self {
        let arena = Arena::new(config.arena_width, config.arena_height);
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        let paddle_y = arena.paddle_spawn_y(config.paddle_height);
        create_paddle(&mut world, PaddleSide::Player, paddle_y);
        create_paddle(&mut world, PaddleSide::Ai, paddle_y);

        let ball = Ball::serve(
            arena.ball_spawn(),
            config.ball_speed_x,
            config.ball_speed_y,
            &mut rng,
        );
        create_ball(&mut world, ball);

        let win_score = config.win_score;
        Self {
            world,
            time: Time::default(),
            arena,
            config,
            score: Score::new(),
            events: Events::new(),
            input_queue: InputQueue::new(),
            rng,
            fsm: MatchFsm::new(),
            win_score,
            winner: None,
        }
    }

    /// Queue the player's paddle direction for the next step:
    /// -1 = up, 0 = stop, 1 = down.
    pub fn queue_player_input(&mut self, dir: i8) {
        self.input_queue.push_dir(dir);
    }

    /// Advance the simulation by `dt` seconds. A no-op while the match is
    /// over; the shell keeps calling it unconditionally.
    pub fn step(&mut self, dt: f32) {
        if !self.fsm.is_playing() {
            // The frame that ends the match reports its events once; after
            // that the shell must not see stale flags.
            self.events.clear();
            return;
        }

        self.time.dt = dt;
        step(
            &mut self.world,
            &mut self.time,
            &self.arena,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.input_queue,
            &mut self.rng,
        );

        if let Some(winner) = self.score.has_winner(self.win_score) {
            self.winner = Some(winner);
            self.fsm.transition(MatchAction::GameOver);
        }
    }

    /// Start a fresh match at the chosen length. Only valid in `MatchOver`.
    pub fn restart(&mut self, best_of: BestOf) {
        if !self.fsm.transition(MatchAction::Restart) {
            return;
        }

        self.win_score = best_of.win_score();
        self.score.reset();
        self.winner = None;

        let paddle_y = self.arena.paddle_spawn_y(self.config.paddle_height);
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.y = paddle_y;
        }

        let serve = Ball::serve(
            self.arena.ball_spawn(),
            self.config.ball_speed_x,
            self.config.ball_speed_y,
            &mut self.rng,
        );
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            *ball = serve;
        }
    }

    pub fn phase(&self) -> MatchPhase {
        self.fsm.phase()
    }

    pub fn winner(&self) -> Option<PaddleSide> {
        self.winner
    }

    pub fn scores(&self) -> (u8, u8) {
        (self.score.player, self.score.ai)
    }

    pub fn win_score(&self) -> u8 {
        self.win_score
    }

    /// Bounding box of the ball, if one exists.
    pub fn ball_rect(&self) -> Option<Aabb> {
        let mut query = self.world.query::<&Ball>();
        query
            .iter()
            .next()
            .map(|(_entity, ball)| self.config.ball_rect(ball.pos))
    }

    /// Bounding box of the paddle on the given side.
    pub fn paddle_rect(&self, side: PaddleSide) -> Option<Aabb> {
        let mut query = self.world.query::<&Paddle>();
        query
            .iter()
            .find(|(_entity, paddle)| paddle.side == side)
            .map(|(_entity, paddle)| self.config.paddle_rect(side, paddle.y))
    }
}
