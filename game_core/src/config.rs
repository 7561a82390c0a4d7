use crate::{Aabb, PaddleSide};
use glam::Vec2;

/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 400.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_MARGIN: f32 = 10.0; // gap between paddle and arena edge
    pub const PADDLE_SPEED: f32 = 600.0; // units per second
    pub const AI_SPEED: f32 = 300.0; // slower than the ball, so it can be beaten

    // Ball
    pub const BALL_SIZE: f32 = 7.0;
    pub const BALL_SPEED_X: f32 = 300.0;
    pub const BALL_SPEED_Y: f32 = 180.0;

    // Score (best-of-3 by default)
    pub const WIN_SCORE: u8 = 2;

    // Physics
    pub const FIXED_DT: f32 = 0.0166; // ~60 Hz
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}

/// Match length, selectable from the replay menu. The match goes to the
/// first side reaching `win_score` points (ceil(N/2)).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BestOf {
    Three,
    Five,
    Seven,
}

impl BestOf {
    pub fn win_score(self) -> u8 {
        match self {
            BestOf::Three => 2,
            BestOf::Five => 3,
            BestOf::Seven => 4,
        }
    }
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_speed: f32,
    pub ai_speed: f32,
    pub ball_size: f32,
    pub ball_speed_x: f32,
    pub ball_speed_y: f32,
    pub win_score: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_speed: Params::PADDLE_SPEED,
            ai_speed: Params::AI_SPEED,
            ball_size: Params::BALL_SIZE,
            ball_speed_x: Params::BALL_SPEED_X,
            ball_speed_y: Params::BALL_SPEED_Y,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// X position of a paddle's left edge.
    pub fn paddle_x(&self, side: PaddleSide) -> f32 {
        match side {
            PaddleSide::Player => self.paddle_margin,
            PaddleSide::Ai => self.arena_width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Clamp a paddle's top edge to the arena.
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.arena_height - self.paddle_height)
    }

    /// Bounding box of a paddle at the given top edge.
    pub fn paddle_rect(&self, side: PaddleSide, y: f32) -> Aabb {
        Aabb::from_top_left(
            Vec2::new(self.paddle_x(side), y),
            Vec2::new(self.paddle_width, self.paddle_height),
        )
    }

    /// Bounding box of the ball at the given top-left corner.
    pub fn ball_rect(&self, pos: Vec2) -> Aabb {
        Aabb::from_top_left(pos, Vec2::splat(self.ball_size))
    }
}
