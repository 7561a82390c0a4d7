use crate::PaddleSide;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self { dt: 0.016, now: 0.0 }
    }
}

/// Match score tracking
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub player: u8,
    pub ai: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_player(&mut self) {
        self.player += 1;
    }

    pub fn increment_ai(&mut self) {
        self.ai += 1;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn has_winner(&self, win_score: u8) -> Option<PaddleSide> {
        if self.player >= win_score {
            Some(PaddleSide::Player)
        } else if self.ai >= win_score {
            Some(PaddleSide::Ai)
        } else {
            None
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame. The presentation shell reads
/// these after each step to trigger sounds.
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub player_scored: bool,
    pub ai_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.player_scored = false;
        self.ai_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }

    pub fn any_score(&self) -> bool {
        self.player_scored || self.ai_scored
    }
}

/// Queued player paddle directions for the next step
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub dirs: Vec<i8>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_dir(&mut self, dir: i8) {
        self.dirs.push(dir.clamp(-1, 1));
    }

    pub fn clear(&mut self) {
        self.dirs.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increments() {
        let mut score = Score::new();
        score.increment_player();
        score.increment_player();
        score.increment_ai();
        assert_eq!(score.player, 2);
        assert_eq!(score.ai, 1);
    }

    #[test]
    fn test_score_has_winner_player() {
        let mut score = Score::new();
        score.increment_player();
        score.increment_player();
        assert_eq!(
            score.has_winner(2),
            Some(PaddleSide::Player),
            "Player should win at the target score"
        );
    }

    #[test]
    fn test_score_has_winner_ai() {
        let mut score = Score::new();
        for _ in 0..3 {
            score.increment_ai();
        }
        assert_eq!(score.has_winner(3), Some(PaddleSide::Ai));
    }

    #[test]
    fn test_score_no_winner_below_threshold() {
        let mut score = Score::new();
        score.increment_player();
        assert_eq!(score.has_winner(2), None, "No winner below threshold");
    }

    #[test]
    fn test_score_reset() {
        let mut score = Score::new();
        score.increment_player();
        score.increment_ai();
        score.reset();
        assert_eq!((score.player, score.ai), (0, 0));
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.player_scored = true;
        events.ai_scored = true;
        events.ball_hit_paddle = true;
        events.ball_hit_wall = true;

        events.clear();

        assert!(!events.player_scored);
        assert!(!events.ai_scored);
        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_input_queue_clamps_directions() {
        let mut queue = InputQueue::new();
        queue.push_dir(-5);
        queue.push_dir(3);
        queue.push_dir(0);
        assert_eq!(queue.dirs, vec![-1, 1, 0]);

        queue.clear();
        assert!(queue.dirs.is_empty());
    }
}
