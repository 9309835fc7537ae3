//! Encoded WAV output.

use std::io;

use super::format::{BitDepth, WavFormat};
use super::writer::{samples_to_pcm, write_wav_to_vec};

/// A fully encoded WAV file plus its identifying hash.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the PCM payload.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Sample encoding.
    pub bit_depth: BitDepth,
    /// Number of frames.
    pub num_frames: usize,
}

impl WavResult {
    /// Encodes mono samples at the given bit depth.
    pub fn from_samples(samples: &[f64], sample_rate: u32, bit_depth: BitDepth) -> io::Result<Self> {
        let pcm = samples_to_pcm(samples, bit_depth);
        let pcm_hash = blake3::hash(&pcm).to_hex().to_string();
        let format = WavFormat::mono(sample_rate).with_bit_depth(bit_depth);
        let wav_data = write_wav_to_vec(&format, &pcm)?;

        Ok(Self {
            wav_data,
            pcm_hash,
            sample_rate,
            bit_depth,
            num_frames: samples.len(),
        })
    }

    /// Encodes mono samples as 16-bit PCM.
    pub fn from_mono(samples: &[f64], sample_rate: u32) -> io::Result<Self> {
        Self::from_samples(samples, sample_rate, BitDepth::Pcm16)
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_frames as f64 / self.sample_rate as f64
    }
}
