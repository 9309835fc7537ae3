//! Deterministic mono WAV writer.
//!
//! Files are a canonical 44-byte RIFF/WAVE header followed by little-endian
//! PCM. Nothing time- or host-dependent is written, so identical samples
//! always produce identical bytes. The BLAKE3 hash of the PCM payload
//! identifies the audio independently of the header.

mod format;
mod pcm;
mod result;
mod writer;


pub use format::{BitDepth, WavFormat, WAV_HEADER_LEN};
pub use pcm::{compute_pcm_hash, extract_pcm_data};
pub use result::WavResult;
pub use writer::{samples_to_pcm, samples_to_pcm16, write_wav, write_wav_to_vec};
