use glam::Vec2;

use crate::GameRng;

/// Which side of the arena a paddle defends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleSide {
    /// Human paddle, left edge
    Player,
    /// Auto-tracking paddle, right edge
    Ai,
}

/// Paddle component. `y` is the top edge, clamped to the arena.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: PaddleSide,
    pub y: f32,
}

impl Paddle {
    pub fn new(side: PaddleSide, y: f32) -> Self {
        Self { side, y }
    }
}

/// Movement intent for the player paddle.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Ball component. `pos` is the top-left corner; `vel` is units per second.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Serve a new ball from the spawn point with both directions random.
    pub fn serve(spawn: Vec2, speed_x: f32, speed_y: f32, rng: &mut GameRng) -> Self {
        use rand::Rng;
        let sx = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let sy = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        Self::new(spawn, Vec2::new(speed_x * sx, speed_y * sy))
    }

    /// Return to the spawn point after a point: the horizontal direction is
    /// inverted, the vertical direction re-rolled at fixed magnitude.
    pub fn reset(&mut self, spawn: Vec2, speed_y: f32, rng: &mut GameRng) {
        use rand::Rng;
        self.pos = spawn;
        self.vel.x = -self.vel.x;
        self.vel.y = if rng.0.gen_bool(0.5) { speed_y } else { -speed_y };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_returns_to_spawn_and_inverts_horizontal() {
        let mut rng = GameRng::new(7);
        let spawn = Vec2::new(400.0, 200.0);
        let mut ball = Ball::new(Vec2::new(12.0, 33.0), Vec2::new(-300.0, 180.0));

        ball.reset(spawn, 180.0, &mut rng);

        assert_eq!(ball.pos, spawn, "Ball should return to its spawn point");
        assert_eq!(
            ball.vel.x, 300.0,
            "Horizontal velocity should flip sign on reset"
        );
        assert_eq!(
            ball.vel.y.abs(),
            180.0,
            "Vertical speed magnitude should be fixed"
        );
    }

    #[test]
    fn test_serve_uses_fixed_speed_magnitudes() {
        let mut rng = GameRng::new(99);
        let ball = Ball::serve(Vec2::new(400.0, 200.0), 300.0, 180.0, &mut rng);

        assert_eq!(ball.vel.x.abs(), 300.0);
        assert_eq!(ball.vel.y.abs(), 180.0);
    }

    #[test]
    fn test_serve_is_deterministic_for_a_seed() {
        let spawn = Vec2::new(400.0, 200.0);
        let a = Ball::serve(spawn, 300.0, 180.0, &mut GameRng::new(42));
        let b = Ball::serve(spawn, 300.0, 180.0, &mut GameRng::new(42));

        assert_eq!(a.vel, b.vel, "Same seed should give the same serve");
    }
}
