pub mod arena;
pub mod components;
pub mod config;
pub mod fsm;
pub mod resources;
pub mod session;
pub mod systems;

pub use arena::*;
pub use components::*;
pub use config::*;
pub use fsm::*;
pub use resources::*;
pub use session::*;

use hecs::World;
use systems::*;

/// Run one frame of the Pong simulation
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    arena: &Arena,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    input_queue: &mut InputQueue,
    rng: &mut GameRng,
) {
    // Clamp dt to prevent large jumps
    let clamped_dt = time.dt.min(Params::MAX_DT);

    // Events accumulate across the whole frame so a wall bounce in an early
    // micro-step still reaches the audio collaborator.
    events.clear();

    // Fixed micro-steps for stable physics
    let mut remaining_dt = clamped_dt;
    while remaining_dt > 0.0 {
        let step_dt = remaining_dt.min(Params::FIXED_DT);
        remaining_dt -= step_dt;

        let step_time = Time {
            dt: step_dt,
            now: time.now + (clamped_dt - remaining_dt),
        };

        // 1. Ingest queued player input
        ingest_inputs(world, input_queue);

        // 2. Move the player paddle
        move_paddles(world, &step_time, config);

        // 3. Advance the ball
        move_ball(world, &step_time);

        // 4. Wall bounce and paddle collisions (player first)
        check_collisions(world, arena, config, events);

        // 5. Scoring (ball exited the arena)
        check_scoring(world, arena, config, score, events, rng);

        // 6. AI paddle tracks the ball
        track_ball(world, &step_time, config);
    }

    // Update time
    time.now += clamped_dt;
}

/// Helper to create a paddle entity. Only the player paddle carries an
/// input intent; the AI paddle is driven by the tracking system.
pub fn create_paddle(world: &mut World, side: PaddleSide, y: f32) -> hecs::Entity {
    match side {
        PaddleSide::Player => world.spawn((Paddle::new(side, y), PaddleIntent::new())),
        PaddleSide::Ai => world.spawn((Paddle::new(side, y),)),
    }
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}
