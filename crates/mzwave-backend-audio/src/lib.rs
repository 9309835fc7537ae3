//! mzwave Audio Backend
//!
//! This crate renders mass spectra as sound. Each peak becomes one sine
//! partial: its m/z is mapped to a frequency by the request's algorithm and
//! its intensity, relative to the strongest peak, becomes the partial's
//! amplitude.
//!
//! # Determinism
//!
//! Rendering is a pure function of the peaks, the algorithm parameters and
//! the audio settings. Frames are computed in parallel, but each frame sums
//! its partials in input order, so the output is byte-identical across runs
//! and thread counts.
//!
//! # Example
//!
//! ```
//! use mzwave_backend_audio::synthesize;
//! use mzwave_spec::{AlgorithmParams, AudioParams, Peak};
//!
//! let peaks = vec![Peak::new(300.0, 1000.0), Peak::new(301.0, 500.0)];
//! let output = synthesize(
//!     &peaks,
//!     &AlgorithmParams::Linear { offset: 300.0 },
//!     &AudioParams::new(0.1, 44100),
//! )
//! .unwrap();
//!
//! assert_eq!(output.wav.num_frames, 4410);
//! assert_eq!(output.table[0].frequency, 600.0);
//! ```
//!
//! # Crate Structure
//!
//! - [`generate()`] / [`synthesize()`] - Main entry points
//! - [`mapping`] - m/z to frequency and intensity to amplitude
//! - [`synthesis`] - Additive sine rendering and normalization
//! - [`table`] - Per-peak transformed-spectrum rows
//! - [`wav`] - Deterministic WAV file writer

pub mod error;
pub mod generate;
pub mod mapping;
pub mod synthesis;
pub mod table;
pub mod wav;

pub use error::{SynthesisError, SynthesisResult};
pub use generate::{generate, synthesize, synthesize_with_depth, SynthesisOutput};
pub use mapping::{map_amplitude, map_frequency, MappingError, AMPLITUDE_DB_FLOOR};
pub use synthesis::{synthesize_waveform, AudioBuffer, Partial};
pub use wav::{BitDepth, WavResult};
