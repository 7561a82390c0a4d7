use crate::{Arena, Ball, Config, Events, GameRng, Score};
use hecs::World;

/// Check if the ball left the arena (scoring). Crossing the left boundary
/// is a point for the AI, crossing the right boundary a point for the
/// player; the `if/else if` guarantees at most one point per step.
pub fn check_scoring(
    world: &mut World,
    arena: &Arena,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x <= 0.0 {
            score.increment_ai();
            events.ai_scored = true;
            ball.reset(arena.ball_spawn(), config.ball_speed_y, rng);
        } else if ball.pos.x >= arena.width {
            score.increment_player();
            events.player_scored = true;
            ball.reset(arena.ball_spawn(), config.ball_speed_y, rng);
        }
    }
}
