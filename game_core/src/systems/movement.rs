use crate::{Ball, Config, Paddle, PaddleIntent, Time};
use hecs::World;

/// Apply paddle movement based on intents. Only the player paddle carries a
/// `PaddleIntent`; the AI paddle is driven by the tracking system.
pub fn move_paddles(world: &mut World, time: &Time, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.dir != 0 {
            paddle.y += intent.dir as f32 * config.paddle_speed * time.dt;
            paddle.y = config.clamp_paddle_y(paddle.y);
        }
    }
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World, time: &Time) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel * time.dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, PaddleSide};
    use glam::Vec2;

    #[test]
    fn test_paddle_stays_in_bounds_under_sustained_input() {
        let mut world = World::new();
        let config = Config::new();
        let player = create_paddle(&mut world, PaddleSide::Player, 150.0);
        let time = Time::new(0.016, 0.0);

        {
            let mut intent = world.get::<&mut PaddleIntent>(player).unwrap();
            intent.dir = -1;
        }
        for _ in 0..1000 {
            move_paddles(&mut world, &time, &config);
        }
        assert_eq!(
            world.get::<&Paddle>(player).unwrap().y,
            0.0,
            "Paddle should pin to the top edge"
        );

        {
            let mut intent = world.get::<&mut PaddleIntent>(player).unwrap();
            intent.dir = 1;
        }
        for _ in 0..1000 {
            move_paddles(&mut world, &time, &config);
        }
        assert_eq!(
            world.get::<&Paddle>(player).unwrap().y,
            config.arena_height - config.paddle_height,
            "Paddle should pin to the bottom edge"
        );
    }

    #[test]
    fn test_ball_advances_by_velocity() {
        let mut world = World::new();
        let ball = create_ball(
            &mut world,
            Ball::new(Vec2::new(100.0, 100.0), Vec2::new(300.0, -180.0)),
        );
        let time = Time::new(0.1, 0.0);

        move_ball(&mut world, &time);

        let ball = world.get::<&Ball>(ball).unwrap();
        assert_eq!(ball.pos, Vec2::new(130.0, 82.0));
    }
}
