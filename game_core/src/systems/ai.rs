use crate::{Ball, Config, Paddle, PaddleSide, Time};
use hecs::World;

/// Move the AI paddle's center toward the ball's vertical center at a fixed
/// rate, snapping when closer than one step. The tracker is deliberately
/// non-predictive: it chases where the ball is, not where it will land, so
/// angled rallies can outrun it.
pub fn track_ball(world: &mut World, time: &Time, config: &Config) {
    let target = {
        let mut query = world.query::<&Ball>();
        query
            .iter()
            .next()
            .map(|(_entity, ball)| ball.pos.y + config.ball_size / 2.0)
    };
    let Some(target) = target else {
        return;
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != PaddleSide::Ai {
            continue;
        }
        let center = paddle.y + config.paddle_height / 2.0;
        let step = config.ai_speed * time.dt;
        let delta = target - center;
        let next_center = if delta.abs() <= step {
            target
        } else {
            center + step * delta.signum()
        };
        paddle.y = config.clamp_paddle_y(next_center - config.paddle_height / 2.0);
    }
}
