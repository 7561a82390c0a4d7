//! Procedural sound effects: three short beeps rendered at startup and
//! played fire-and-forget.
//!
//! If no output device is available the engine stays disabled and `play`
//! becomes a no-op, so the game runs silently instead of crashing.

pub mod synth;

use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamHandle, Sink};

use synth::{sine_tone, SAMPLE_RATE};

/// The game's sound effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    PaddleHit,
    WallBounce,
    Score,
}

/// Buffers for every effect, rendered once at construction.
pub struct SoundBank {
    paddle_hit: Vec<f32>,
    wall_bounce: Vec<f32>,
    score: Vec<f32>,
}

impl SoundBank {
    pub fn new() -> Self {
        Self {
            paddle_hit: sine_tone(440.0, 0.08, SAMPLE_RATE, 0.4),
            wall_bounce: sine_tone(300.0, 0.06, SAMPLE_RATE, 0.35),
            score: sine_tone(760.0, 0.25, SAMPLE_RATE, 0.4),
        }
    }

    pub fn buffer(&self, effect: SoundEffect) -> &[f32] {
        match effect {
            SoundEffect::PaddleHit => &self.paddle_hit,
            SoundEffect::WallBounce => &self.wall_bounce,
            SoundEffect::Score => &self.score,
        }
    }
}

impl Default for SoundBank {
    fn default() -> Self {
        Self::new()
    }
}

/// Audio playback engine: precomputed bank plus an output stream.
pub struct AudioEngine {
    bank: SoundBank,
    // The stream must stay alive for playback; only the handle is used.
    output: Option<(OutputStream, OutputStreamHandle)>,
}

impl AudioEngine {
    /// Create the engine. On device failure a disabled engine is returned.
    pub fn new() -> Self {
        let output = match OutputStream::try_default() {
            Ok(pair) => Some(pair),
            Err(err) => {
                log::warn!("no audio output device, running silent: {err}");
                None
            }
        };
        Self {
            bank: SoundBank::new(),
            output,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.output.is_some()
    }

    /// Fire-and-forget playback. Overlapping effects mix in the output
    /// stream; no ordering between them is guaranteed or needed.
    pub fn play(&self, effect: SoundEffect) {
        let Some((_stream, handle)) = &self.output else {
            return;
        };
        if let Ok(sink) = Sink::try_new(handle) {
            let buffer = self.bank.buffer(effect).to_vec();
            sink.append(SamplesBuffer::new(1, SAMPLE_RATE, buffer));
            sink.detach();
        }
    }
}

impl Default for AudioEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_renders_every_effect() {
        let bank = SoundBank::new();
        for effect in [
            SoundEffect::PaddleHit,
            SoundEffect::WallBounce,
            SoundEffect::Score,
        ] {
            assert!(
                !bank.buffer(effect).is_empty(),
                "{effect:?} buffer should be rendered"
            );
        }
    }

    #[test]
    fn test_score_beep_is_the_longest() {
        let bank = SoundBank::new();
        let score = bank.buffer(SoundEffect::Score).len();
        assert!(score > bank.buffer(SoundEffect::PaddleHit).len());
        assert!(score > bank.buffer(SoundEffect::WallBounce).len());
    }

    #[test]
    fn test_disabled_engine_play_is_noop() {
        let engine = AudioEngine {
            bank: SoundBank::new(),
            output: None,
        };
        assert!(!engine.is_enabled());
        engine.play(SoundEffect::Score); // must not panic
    }
}
