//! Additive sine synthesis.
//!
//! Synthesis runs in two phases over a buffer of `round(duration * rate)`
//! frames:
//!
//! 1. **Accumulate**: `sample[n] = sum_i a_i * sin(2 pi f_i n / rate)` for every
//!    audible partial.
//! 2. **Scale**: divide every sample by `max(1, max |sample|)`.
//!
//! Phase 1 is split across threads in fixed blocks of frames. Each frame sums
//! its partials in input order, so the result does not depend on how the
//! blocks are scheduled.

use std::f64::consts::TAU;

use mzwave_spec::AudioParams;
use rayon::prelude::*;

/// Frames per parallel work unit.
const BLOCK_FRAMES: usize = 4096;

/// One sine component of the output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Partial {
    /// Frequency in Hz.
    pub frequency: f64,
    /// Linear amplitude.
    pub amplitude: f64,
}

impl Partial {
    /// Creates a partial.
    pub fn new(frequency: f64, amplitude: f64) -> Self {
        Self {
            frequency,
            amplitude,
        }
    }

    /// A partial is audible when it lies strictly between 0 Hz and Nyquist
    /// and has a non-zero amplitude.
    pub fn is_audible(&self, nyquist: f64) -> bool {
        self.frequency > 0.0 && self.frequency < nyquist && self.amplitude > 0.0
    }
}

/// A rendered, normalized mono buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    /// Samples in [-1, 1].
    pub samples: Vec<f64>,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Largest absolute sample before scaling.
    pub raw_peak: f64,
    /// Divisor applied in the scaling phase (`max(1, raw_peak)`).
    pub divisor: f64,
    /// Number of partials that contributed.
    pub audible_partials: usize,
}

impl AudioBuffer {
    /// Number of frames.
    pub fn num_frames(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if every sample is exactly zero.
    pub fn is_silent(&self) -> bool {
        self.samples.iter().all(|&s| s == 0.0)
    }
}

/// Renders partials into a normalized buffer.
///
/// Inaudible partials (see [`Partial::is_audible`]) contribute nothing. An
/// empty or fully inaudible set yields a silent buffer of the full length.
pub fn synthesize_waveform(partials: &[Partial], audio: &AudioParams) -> AudioBuffer {
    let nyquist = audio.nyquist();
    let audible: Vec<Partial> = partials
        .iter()
        .copied()
        .filter(|p| p.is_audible(nyquist))
        .collect();

    let mut samples = accumulate(&audible, audio.num_frames(), audio.sample_rate as f64);
    let raw_peak = peak_level(&samples);
    let divisor = normalize(&mut samples);

    log::debug!(
        "synthesized {} frames from {}/{} partials (raw peak {:.4}, divisor {:.4})",
        samples.len(),
        audible.len(),
        partials.len(),
        raw_peak,
        divisor
    );

    AudioBuffer {
        samples,
        sample_rate: audio.sample_rate,
        raw_peak,
        divisor,
        audible_partials: audible.len(),
    }
}

/// Phase 1: sums every partial into a fresh buffer without scaling.
pub fn accumulate(partials: &[Partial], num_frames: usize, sample_rate: f64) -> Vec<f64> {
    let mut samples = vec![0.0; num_frames];
    if partials.is_empty() {
        return samples;
    }

    // Angular step per frame for each partial.
    let steps: Vec<(f64, f64)> = partials
        .iter()
        .map(|p| (TAU * p.frequency / sample_rate, p.amplitude))
        .collect();

    samples
        .par_chunks_mut(BLOCK_FRAMES)
        .enumerate()
        .for_each(|(block, chunk)| {
            let start = block * BLOCK_FRAMES;
            for (offset, sample) in chunk.iter_mut().enumerate() {
                let n = (start + offset) as f64;
                *sample = steps
                    .iter()
                    .map(|&(step, amplitude)| amplitude * (step * n).sin())
                    .sum();
            }
        });

    samples
}

/// Largest absolute sample value, or 0.0 for an empty buffer.
pub fn peak_level(samples: &[f64]) -> f64 {
    samples.iter().map(|s| s.abs()).fold(0.0_f64, f64::max)
}

/// Phase 2: scales the buffer so no sample exceeds 1.0 in magnitude.
///
/// Buffers already within [-1, 1] are left untouched. Returns the divisor
/// that was applied.
pub fn normalize(samples: &mut [f64]) -> f64 {
    let divisor = peak_level(samples).max(1.0);
    if divisor > 1.0 {
        for sample in samples.iter_mut() {
            *sample /= divisor;
        }
    }
    divisor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audibility() {
        let nyquist = 4000.0;
        assert!(Partial::new(440.0, 0.5).is_audible(nyquist));
        assert!(!Partial::new(0.0, 0.5).is_audible(nyquist));
        assert!(!Partial::new(-440.0, 0.5).is_audible(nyquist));
        assert!(!Partial::new(4000.0, 0.5).is_audible(nyquist));
        assert!(!Partial::new(440.0, 0.0).is_audible(nyquist));
    }

    #[test]
    fn test_accumulate_matches_formula() {
        let partials = [Partial::new(440.0, 0.3), Partial::new(1000.0, 0.2)];
        let samples = accumulate(&partials, 10_000, 8000.0);

        for n in [0usize, 1, 17, 4095, 4096, 9999] {
            let t = n as f64;
            let expected = 0.3 * (TAU * 440.0 / 8000.0 * t).sin()
                + 0.2 * (TAU * 1000.0 / 8000.0 * t).sin();
            assert_eq!(samples[n], expected, "frame {}", n);
        }
    }

    #[test]
    fn test_quiet_buffer_not_amplified() {
        let audio = AudioParams::new(0.1, 8000);
        let buffer = synthesize_waveform(&[Partial::new(440.0, 0.3)], &audio);

        assert_eq!(buffer.divisor, 1.0);
        let raw = accumulate(&[Partial::new(440.0, 0.3)], audio.num_frames(), 8000.0);
        assert_eq!(buffer.samples, raw);
        assert!(buffer.raw_peak <= 0.3);
    }

    #[test]
    fn test_loud_buffer_scaled_to_unity() {
        let audio = AudioParams::new(0.5, 8000);
        let partials = [
            Partial::new(200.0, 1.0),
            Partial::new(400.0, 1.0),
            Partial::new(600.0, 1.0),
        ];
        let buffer = synthesize_waveform(&partials, &audio);

        assert!(buffer.raw_peak > 1.0);
        assert_eq!(buffer.divisor, buffer.raw_peak);
        let peak = peak_level(&buffer.samples);
        assert!((peak - 1.0).abs() < 1e-12, "peak {}", peak);
    }

    #[test]
    fn test_inaudible_partials_are_skipped() {
        let audio = AudioParams::new(0.05, 8000);
        let partials = [
            Partial::new(5000.0, 1.0),
            Partial::new(-20.0, 1.0),
            Partial::new(300.0, 0.0),
        ];
        let buffer = synthesize_waveform(&partials, &audio);

        assert_eq!(buffer.num_frames(), 400);
        assert_eq!(buffer.audible_partials, 0);
        assert!(buffer.is_silent());
    }

    #[test]
    fn test_normalize_empty() {
        let mut samples: Vec<f64> = Vec::new();
        assert_eq!(normalize(&mut samples), 1.0);
    }
}
