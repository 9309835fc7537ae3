//! Per-peak mapping from spectrum values to synthesis parameters.
//!
//! - [`frequency`] maps m/z to Hz according to the selected algorithm
//! - [`amplitude`] maps intensity to a linear gain and a dB value
//!
//! [`map_spectrum`] runs both over a whole spectrum and stops at the first
//! peak that cannot be mapped.

pub mod amplitude;
pub mod frequency;

use mzwave_spec::validation::{validate_finite, validate_non_negative};
use mzwave_spec::{max_intensity, AlgorithmParams, Peak};
use thiserror::Error;

use crate::error::{SynthesisError, SynthesisResult};

pub use amplitude::{linear_to_db, map_amplitude, Amplitude, AMPLITUDE_DB_FLOOR};
pub use frequency::map_frequency;

/// Why a single m/z value could not be mapped.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MappingError {
    /// `mz + shift` is zero (within epsilon).
    #[error("inverse mapping is undefined at mz + shift = 0 (mz={mz}, shift={shift})")]
    Singularity {
        /// m/z value.
        mz: f64,
        /// Configured shift.
        shift: f64,
    },

    /// Modulo algorithm with a non-positive modulus.
    #[error("modulus must be positive, got {0}")]
    InvalidModulus(f64),

    /// The mapping overflowed to infinity or NaN.
    #[error("mapping of mz={mz} produced a non-finite frequency ({frequency})")]
    NonFinite {
        /// m/z value.
        mz: f64,
        /// Resulting frequency.
        frequency: f64,
    },
}

/// A peak's synthesis parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MappedPeak {
    /// Frequency in Hz (unclamped).
    pub frequency: f64,
    /// Amplitude relative to the spectrum maximum.
    pub amplitude: Amplitude,
}

/// Maps every peak of a spectrum, in order.
///
/// Peaks are checked eagerly: the first peak with a non-finite value, a
/// negative intensity, or an unmappable m/z fails the whole call.
pub fn map_spectrum(peaks: &[Peak], algorithm: &AlgorithmParams) -> SynthesisResult<Vec<MappedPeak>> {
    let mut frequencies = Vec::with_capacity(peaks.len());

    for (i, peak) in peaks.iter().enumerate() {
        validate_finite("mz", peak.mz)
            .map_err(|e| SynthesisError::invalid_param(format!("peaks[{}].mz", i), e.message))?;
        validate_non_negative("intensity", peak.intensity).map_err(|e| {
            SynthesisError::invalid_param(format!("peaks[{}].intensity", i), e.message)
        })?;

        let frequency = map_frequency(peak.mz, algorithm)
            .map_err(|e| SynthesisError::from_mapping(i, peak.mz, e))?;
        log::trace!("peak {}: mz={} -> {} Hz", i, peak.mz, frequency);
        frequencies.push(frequency);
    }

    let max = max_intensity(peaks);
    Ok(peaks
        .iter()
        .zip(frequencies)
        .map(|(peak, frequency)| MappedPeak {
            frequency,
            amplitude: map_amplitude(peak.intensity, max),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_spectrum_preserves_order() {
        let peaks = vec![Peak::new(301.0, 500.0), Peak::new(300.0, 1000.0)];
        let mapped = map_spectrum(&peaks, &AlgorithmParams::Linear { offset: 300.0 }).unwrap();

        assert_eq!(mapped.len(), 2);
        assert_eq!(mapped[0].frequency, 601.0);
        assert_eq!(mapped[0].amplitude.linear, 0.5);
        assert_eq!(mapped[1].frequency, 600.0);
        assert_eq!(mapped[1].amplitude.linear, 1.0);
    }

    #[test]
    fn test_fail_fast_on_first_bad_peak() {
        let peaks = vec![
            Peak::new(100.0, 1.0),
            Peak::new(110.0, -2.0),
            Peak::new(f64::NAN, 1.0),
        ];
        let err = map_spectrum(&peaks, &AlgorithmParams::linear()).unwrap_err();
        assert!(err.to_string().contains("peaks[1].intensity"), "{}", err);
    }

    #[test]
    fn test_singularity_reports_index() {
        let peaks = vec![Peak::new(10.0, 1.0), Peak::new(-1.0, 1.0)];
        let algorithm = AlgorithmParams::Inverse {
            scale: 1000.0,
            shift: 1.0,
        };
        match map_spectrum(&peaks, &algorithm) {
            Err(SynthesisError::Domain { index, mz, .. }) => {
                assert_eq!(index, 1);
                assert_eq!(mz, -1.0);
            }
            other => panic!("expected domain error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_spectrum() {
        assert!(map_spectrum(&[], &AlgorithmParams::modulo()).unwrap().is_empty());
    }
}
