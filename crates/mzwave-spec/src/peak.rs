//! Peak types and spectrum text parsing.

use serde::{Deserialize, Serialize};

use crate::error::SpecError;

/// One (m/z, intensity) observation in a mass spectrum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Peak {
    /// Mass-to-charge ratio.
    pub mz: f64,
    /// Raw intensity (any non-negative scale).
    pub intensity: f64,
}

impl Peak {
    /// Creates a new peak.
    pub fn new(mz: f64, intensity: f64) -> Self {
        Self { mz, intensity }
    }
}

/// A peak together with the values it was mapped to for synthesis.
///
/// Field order matches the `spectrum` rows of the response document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformedPeak {
    /// Source m/z.
    pub mz: f64,
    /// Mapped frequency in Hz (unclamped).
    pub frequency: f64,
    /// Source intensity.
    pub intensity: f64,
    /// Intensity relative to the spectrum maximum, in [0, 1].
    pub amplitude_linear: f64,
    /// `20 * log10(amplitude_linear)`, floored for silent peaks.
    pub amplitude_db: f64,
}

/// Returns the maximum intensity of a spectrum, or 0.0 if it is empty.
pub fn max_intensity(peaks: &[Peak]) -> f64 {
    peaks.iter().map(|p| p.intensity).fold(0.0_f64, f64::max)
}

/// Parses whitespace-separated `mz intensity` pairs into peaks.
///
/// Any run of whitespace (spaces, tabs, newlines) separates tokens, so both
/// one-pair-per-line listings and a single flat line are accepted.
///
/// # Example
/// ```
/// use mzwave_spec::peak::parse_spectrum_text;
///
/// let peaks = parse_spectrum_text("300 1000\n301 500").unwrap();
/// assert_eq!(peaks.len(), 2);
/// assert_eq!(peaks[1].intensity, 500.0);
/// ```
pub fn parse_spectrum_text(text: &str) -> Result<Vec<Peak>, SpecError> {
    let values = text
        .split_whitespace()
        .map(|token| {
            token.parse::<f64>().map_err(|_| {
                SpecError::MalformedSpectrum(format!("could not convert '{}' to a number", token))
            })
        })
        .collect::<Result<Vec<f64>, SpecError>>()?;

    if values.len() % 2 != 0 {
        return Err(SpecError::MalformedSpectrum(
            "spectrum data must have an even number of values (pairs of mz/intensity)".to_string(),
        ));
    }

    Ok(values
        .chunks_exact(2)
        .map(|pair| Peak::new(pair[0], pair[1]))
        .collect())
}
