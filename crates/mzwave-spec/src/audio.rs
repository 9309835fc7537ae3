//! Audio rendering parameters.

use serde::{Deserialize, Serialize};

/// Shortest accepted duration in seconds.
pub const MIN_DURATION_SECONDS: f64 = 0.01;
/// Longest accepted duration in seconds.
pub const MAX_DURATION_SECONDS: f64 = 30.0;
/// Lowest accepted sample rate in Hz.
pub const MIN_SAMPLE_RATE: u32 = 3500;
/// Highest accepted sample rate in Hz.
pub const MAX_SAMPLE_RATE: u32 = 192_000;

/// Default duration in seconds.
pub const DEFAULT_DURATION_SECONDS: f64 = 5.0;
/// Default sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Duration and sample rate of a rendering.
///
/// Serialized as `{ "duration": .., "sample_rate": .. }` to match the
/// `audio_settings` block of the response document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AudioParams {
    /// Length of the output in seconds.
    #[serde(rename = "duration")]
    pub duration_seconds: f64,
    /// Output sample rate in Hz.
    pub sample_rate: u32,
}

impl AudioParams {
    /// Creates audio parameters.
    pub fn new(duration_seconds: f64, sample_rate: u32) -> Self {
        Self {
            duration_seconds,
            sample_rate,
        }
    }

    /// Number of frames in the output: `round(duration * sample_rate)`.
    pub fn num_frames(&self) -> usize {
        (self.duration_seconds * self.sample_rate as f64).round() as usize
    }

    /// Nyquist frequency (`sample_rate / 2`) in Hz.
    pub fn nyquist(&self) -> f64 {
        self.sample_rate as f64 / 2.0
    }
}

impl Default for AudioParams {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_SECONDS, DEFAULT_SAMPLE_RATE)
    }
}
