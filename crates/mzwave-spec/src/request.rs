//! The sonification request document.

use serde::{Deserialize, Serialize};

use crate::algorithm::AlgorithmParams;
use crate::audio::{AudioParams, DEFAULT_DURATION_SECONDS, DEFAULT_SAMPLE_RATE};
use crate::error::SpecError;
use crate::peak::{parse_spectrum_text, Peak};

/// Compound label used when the caller supplied no name.
pub const CUSTOM_COMPOUND_NAME: &str = "Custom Compound";
/// Accession used when the caller supplied none.
pub const CUSTOM_ACCESSION: &str = "CUSTOM-001";

/// A request to turn one spectrum into audio.
///
/// Exactly one of `peaks` or `spectrum_text` must be present.
///
/// # Example
/// ```
/// use mzwave_spec::SonifyRequest;
///
/// let request = SonifyRequest::from_json(r#"{
///     "compound": "Caffeine",
///     "spectrum_text": "195.08 999\n138.06 420",
///     "algorithm": { "type": "linear", "offset": 300 },
///     "duration": 1.0
/// }"#).unwrap();
///
/// assert_eq!(request.sample_rate, 44100);
/// assert_eq!(request.resolve_peaks().unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SonifyRequest {
    /// Display name of the compound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compound: Option<String>,
    /// Database accession of the spectrum record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accession: Option<String>,
    /// Already-resolved peak list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peaks: Option<Vec<Peak>>,
    /// Whitespace-separated `mz intensity` pairs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spectrum_text: Option<String>,
    /// Frequency mapping algorithm.
    #[serde(default)]
    pub algorithm: AlgorithmParams,
    /// Duration in seconds.
    #[serde(default = "default_duration")]
    pub duration: f64,
    /// Sample rate in Hz.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
}

fn default_duration() -> f64 {
    DEFAULT_DURATION_SECONDS
}

fn default_sample_rate() -> u32 {
    DEFAULT_SAMPLE_RATE
}

impl SonifyRequest {
    /// Creates a request for an already-resolved peak list with default settings.
    pub fn from_peaks(peaks: Vec<Peak>) -> Self {
        Self {
            compound: None,
            accession: None,
            peaks: Some(peaks),
            spectrum_text: None,
            algorithm: AlgorithmParams::default(),
            duration: DEFAULT_DURATION_SECONDS,
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }

    /// Creates a request for pasted spectrum text with default settings.
    pub fn from_spectrum_text(text: impl Into<String>) -> Self {
        Self {
            peaks: None,
            spectrum_text: Some(text.into()),
            ..Self::from_peaks(Vec::new())
        }
    }

    /// Sets the algorithm.
    pub fn with_algorithm(mut self, algorithm: AlgorithmParams) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets duration and sample rate.
    pub fn with_audio(mut self, audio: AudioParams) -> Self {
        self.duration = audio.duration_seconds;
        self.sample_rate = audio.sample_rate;
        self
    }

    /// Sets the compound label.
    pub fn with_compound(mut self, compound: impl Into<String>) -> Self {
        self.compound = Some(compound.into());
        self
    }

    /// Parses a request from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the request to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Converts the request to a JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value, SpecError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Audio parameters of the request.
    pub fn audio_params(&self) -> AudioParams {
        AudioParams::new(self.duration, self.sample_rate)
    }

    /// Returns the peak list, parsing `spectrum_text` if that is the source.
    pub fn resolve_peaks(&self) -> Result<Vec<Peak>, SpecError> {
        match (&self.peaks, &self.spectrum_text) {
            (Some(peaks), None) => Ok(peaks.clone()),
            (None, Some(text)) => parse_spectrum_text(text),
            (Some(_), Some(_)) => Err(SpecError::PeakSource(
                "supply either peaks or spectrum_text, not both".to_string(),
            )),
            (None, None) => Err(SpecError::PeakSource(
                "one of peaks or spectrum_text is required".to_string(),
            )),
        }
    }

    /// Compound label, or the custom placeholder.
    pub fn compound_label(&self) -> &str {
        self.compound
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(CUSTOM_COMPOUND_NAME)
    }

    /// Accession, or the custom placeholder.
    pub fn accession_label(&self) -> &str {
        self.accession
            .as_deref()
            .filter(|a| !a.trim().is_empty())
            .unwrap_or(CUSTOM_ACCESSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_applied() {
        let request = SonifyRequest::from_json(r#"{"peaks":[{"mz":100,"intensity":5}]}"#).unwrap();
        assert_eq!(request.algorithm, AlgorithmParams::linear());
        assert_eq!(request.duration, 5.0);
        assert_eq!(request.sample_rate, 44100);
        assert_eq!(request.compound_label(), CUSTOM_COMPOUND_NAME);
        assert_eq!(request.accession_label(), CUSTOM_ACCESSION);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = SonifyRequest::from_json(r#"{"peaks":[],"volume":3}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_peaks_sources() {
        let request = SonifyRequest::from_spectrum_text("300 1000 301 500");
        assert_eq!(
            request.resolve_peaks().unwrap(),
            vec![Peak::new(300.0, 1000.0), Peak::new(301.0, 500.0)]
        );

        let mut both = request.clone();
        both.peaks = Some(vec![]);
        assert!(matches!(both.resolve_peaks(), Err(SpecError::PeakSource(_))));

        let mut neither = request;
        neither.spectrum_text = None;
        assert!(matches!(neither.resolve_peaks(), Err(SpecError::PeakSource(_))));
    }

    #[test]
    fn test_json_round_trip() {
        let request = SonifyRequest::from_peaks(vec![Peak::new(55.0, 1.0)])
            .with_compound("Ethanol")
            .with_algorithm(AlgorithmParams::Modulo {
                factor: 3.0,
                modulus: 250.0,
                base: 80.0,
            })
            .with_audio(AudioParams::new(0.5, 22050));

        let json = request.to_json_pretty().unwrap();
        let parsed = SonifyRequest::from_json(&json).unwrap();
        assert_eq!(parsed, request);
    }
}
