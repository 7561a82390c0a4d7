//! Pure tone synthesis.
//!
//! Every effect buffer is rendered up front, once; playback never touches
//! the synthesizer again.

/// Samples per second for every rendered buffer.
pub const SAMPLE_RATE: u32 = 44_100;

/// Attack/release ramp length.
const FADE_SECS: f32 = 0.005;

/// Render a sine burst as a mono f32 buffer.
///
/// A short linear attack/release envelope keeps the buffer click-free at
/// both ends. `volume` bounds the peak amplitude.
pub fn sine_tone(freq_hz: f32, duration: f32, sample_rate: u32, volume: f32) -> Vec<f32> {
    let sample_count = (sample_rate as f32 * duration) as usize;
    let fade_samples = (sample_rate as f32 * FADE_SECS) as usize;

    let mut samples = Vec::with_capacity(sample_count);
    for i in 0..sample_count {
        let t = i as f32 / sample_rate as f32;
        let s = (t * freq_hz * std::f32::consts::TAU).sin() * volume;
        samples.push(s * envelope(i, sample_count, fade_samples));
    }
    samples
}

fn envelope(i: usize, total: usize, fade: usize) -> f32 {
    if fade == 0 || total == 0 {
        return 1.0;
    }
    let attack = (i as f32 / fade as f32).min(1.0);
    let release = ((total - 1 - i) as f32 / fade as f32).min(1.0);
    attack * release
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_count_matches_duration() {
        let samples = sine_tone(440.0, 0.1, SAMPLE_RATE, 0.5);
        assert_eq!(samples.len(), 4410);
    }

    #[test]
    fn test_amplitude_bounded_by_volume() {
        let volume = 0.4;
        let samples = sine_tone(440.0, 0.1, SAMPLE_RATE, volume);
        let peak = samples.iter().fold(0.0f32, |m, s| m.max(s.abs()));
        assert!(peak <= volume + 1e-6, "Peak {peak} exceeds volume {volume}");
        assert!(peak > volume * 0.9, "Tone should actually reach near peak");
    }

    #[test]
    fn test_envelope_silences_both_ends() {
        let samples = sine_tone(440.0, 0.1, SAMPLE_RATE, 0.5);
        assert_eq!(samples[0], 0.0, "Attack ramp starts from silence");
        assert!(
            samples.last().unwrap().abs() < 0.01,
            "Release ramp ends near silence"
        );
    }

    #[test]
    fn test_zero_duration_renders_empty_buffer() {
        assert!(sine_tone(440.0, 0.0, SAMPLE_RATE, 0.5).is_empty());
    }
}
