use crate::{InputQueue, Paddle, PaddleIntent, PaddleSide};
use hecs::World;

/// Apply queued directions to the player paddle's intent. The intent
/// persists until the next queued direction, so the shell pushes the
/// current direction every frame (0 when no key is held).
pub fn ingest_inputs(world: &mut World, queue: &mut InputQueue) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if paddle.side == PaddleSide::Player {
            for &dir in &queue.dirs {
                intent.dir = dir;
            }
        }
    }
    queue.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_paddle;

    #[test]
    fn test_last_queued_direction_wins() {
        let mut world = World::new();
        let player = create_paddle(&mut world, PaddleSide::Player, 150.0);

        let mut queue = InputQueue::new();
        queue.push_dir(1);
        queue.push_dir(-1);
        ingest_inputs(&mut world, &mut queue);

        let intent = world.get::<&PaddleIntent>(player).unwrap();
        assert_eq!(intent.dir, -1, "Latest queued direction should win");
        assert!(queue.dirs.is_empty(), "Queue should be drained");
    }

    #[test]
    fn test_intent_persists_when_queue_empty() {
        let mut world = World::new();
        let player = create_paddle(&mut world, PaddleSide::Player, 150.0);

        let mut queue = InputQueue::new();
        queue.push_dir(1);
        ingest_inputs(&mut world, &mut queue);
        ingest_inputs(&mut world, &mut queue);

        let intent = world.get::<&PaddleIntent>(player).unwrap();
        assert_eq!(intent.dir, 1);
    }
}
