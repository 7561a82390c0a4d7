use crate::{Arena, Ball, Config, Events, Paddle, PaddleSide};
use hecs::World;

/// Resolve ball collisions against the top/bottom walls and both paddles.
///
/// Wall bounces clamp the ball to the boundary and flip the vertical
/// velocity. Paddle hits snap the ball flush against the paddle face before
/// flipping the horizontal velocity, so the ball can neither tunnel through
/// a paddle nor stick inside one. The player paddle is checked first and at
/// most one paddle is resolved per step.
pub fn check_collisions(world: &mut World, arena: &Arena, config: &Config, events: &mut Events) {
    // Collect paddle tops without holding borrows across the ball update
    let mut player_y = None;
    let mut ai_y = None;
    for (_entity, paddle) in world.query::<&Paddle>().iter() {
        match paddle.side {
            PaddleSide::Player => player_y = Some(paddle.y),
            PaddleSide::Ai => ai_y = Some(paddle.y),
        }
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Top/bottom wall bounce
        if ball.pos.y <= 0.0 {
            ball.pos.y = 0.0;
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        } else if ball.pos.y + config.ball_size >= arena.height {
            ball.pos.y = arena.height - config.ball_size;
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }

        let ball_rect = config.ball_rect(ball.pos);

        if let Some(y) = player_y {
            let paddle_rect = config.paddle_rect(PaddleSide::Player, y);
            if ball_rect.intersects(&paddle_rect) {
                // Snap the ball's left edge to the paddle's right edge
                ball.pos.x = paddle_rect.max.x;
                ball.vel.x = -ball.vel.x;
                events.ball_hit_paddle = true;
                continue;
            }
        }

        if let Some(y) = ai_y {
            let paddle_rect = config.paddle_rect(PaddleSide::Ai, y);
            if ball_rect.intersects(&paddle_rect) {
                // Snap the ball's right edge to the paddle's left edge
                ball.pos.x = paddle_rect.min.x - config.ball_size;
                ball.vel.x = -ball.vel.x;
                events.ball_hit_paddle = true;
            }
        }
    }
}
