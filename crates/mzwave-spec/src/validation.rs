//! Request validation.
//!
//! Unlike synthesis, which stops at the first offending peak, validation
//! walks the whole request and reports every problem it finds so a caller can
//! fix them in one pass.

pub mod common;

use crate::algorithm::{AlgorithmParams, INVERSE_SINGULARITY_EPSILON};
use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};
use crate::peak::{max_intensity, parse_spectrum_text, Peak};
use crate::request::SonifyRequest;

pub use common::{
    validate_duration, validate_finite, validate_non_negative, validate_parameter,
    validate_positive, validate_range, validate_sample_rate, CommonValidationError,
};

/// Shortest accepted `spectrum_text`, in characters.
pub const MIN_SPECTRUM_TEXT_LEN: usize = 3;
/// Longest accepted `spectrum_text`, in characters.
pub const MAX_SPECTRUM_TEXT_LEN: usize = 100_000;

/// Validates a request.
///
/// # Example
/// ```
/// use mzwave_spec::{validate_request, ErrorCode, SonifyRequest};
///
/// let request = SonifyRequest::from_spectrum_text("300 1000 301");
/// let result = validate_request(&request);
/// assert!(!result.is_ok());
/// assert_eq!(result.errors[0].code, ErrorCode::MalformedSpectrumText);
/// ```
pub fn validate_request(request: &SonifyRequest) -> ValidationResult {
    let mut result = ValidationResult::success();

    let peaks = validate_peak_source(request, &mut result);
    if let Some(peaks) = &peaks {
        validate_peaks(peaks, &mut result);
    }

    if let Err(e) = validate_duration(request.duration) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidDuration,
            e.to_string(),
            "duration",
        ));
    }
    if let Err(e) = validate_sample_rate(request.sample_rate) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidSampleRate,
            e.to_string(),
            "sample_rate",
        ));
    }

    validate_algorithm(&request.algorithm, peaks.as_deref(), &mut result);
    check_warnings(request, peaks.as_deref(), &mut result);

    log::debug!(
        "validated request: {} error(s), {} warning(s)",
        result.errors.len(),
        result.warnings.len()
    );
    result
}

/// Resolves the peak list, recording source errors. Returns `None` when no
/// peak list could be obtained.
fn validate_peak_source(request: &SonifyRequest, result: &mut ValidationResult) -> Option<Vec<Peak>> {
    match (&request.peaks, &request.spectrum_text) {
        (None, None) => {
            result.add_error(ValidationError::new(
                ErrorCode::NoPeakSource,
                "one of peaks or spectrum_text is required",
            ));
            None
        }
        (Some(_), Some(_)) => {
            result.add_error(ValidationError::new(
                ErrorCode::ConflictingPeakSources,
                "supply either peaks or spectrum_text, not both",
            ));
            None
        }
        (Some(peaks), None) => Some(peaks.clone()),
        (None, Some(text)) => {
            let len = text.chars().count();
            if !(MIN_SPECTRUM_TEXT_LEN..=MAX_SPECTRUM_TEXT_LEN).contains(&len) {
                result.add_error(ValidationError::with_path(
                    ErrorCode::SpectrumTextLength,
                    format!(
                        "spectrum data must be between {} and {} characters, got {}",
                        MIN_SPECTRUM_TEXT_LEN, MAX_SPECTRUM_TEXT_LEN, len
                    ),
                    "spectrum_text",
                ));
                return None;
            }
            match parse_spectrum_text(text) {
                Ok(peaks) => Some(peaks),
                Err(e) => {
                    result.add_error(ValidationError::with_path(
                        ErrorCode::MalformedSpectrumText,
                        e.to_string(),
                        "spectrum_text",
                    ));
                    None
                }
            }
        }
    }
}

/// Validates individual peaks: finite values and non-negative intensity.
pub fn validate_peaks(peaks: &[Peak], result: &mut ValidationResult) {
    for (i, peak) in peaks.iter().enumerate() {
        if let Err(e) = validate_finite("mz", peak.mz) {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidPeak,
                e.to_string(),
                format!("peaks[{}].mz", i),
            ));
        } else if peak.mz <= 0.0 {
            result.add_warning(ValidationWarning::with_path(
                WarningCode::NonPositiveMz,
                format!("m/z should be positive, got {}", peak.mz),
                format!("peaks[{}].mz", i),
            ));
        }

        if let Err(e) = validate_non_negative("intensity", peak.intensity) {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidPeak,
                e.to_string(),
                format!("peaks[{}].intensity", i),
            ));
        }
    }
}

fn validate_algorithm(
    algorithm: &AlgorithmParams,
    peaks: Option<&[Peak]>,
    result: &mut ValidationResult,
) {
    for (name, value) in algorithm.named_values() {
        if let Err(e) = validate_parameter(name, value) {
            result.add_error(ValidationError::with_path(
                ErrorCode::ParameterOutOfRange,
                e.to_string(),
                format!("algorithm.{}", name),
            ));
        }
    }

    match *algorithm {
        AlgorithmParams::Linear { .. } => {}
        AlgorithmParams::Inverse { shift, .. } => {
            if !shift.is_finite() {
                return;
            }
            for (i, peak) in peaks.unwrap_or_default().iter().enumerate() {
                if peak.mz.is_finite() && (peak.mz + shift).abs() < INVERSE_SINGULARITY_EPSILON {
                    result.add_error(ValidationError::with_path(
                        ErrorCode::InverseSingularity,
                        format!(
                            "inverse mapping is undefined for mz={} with shift={} (mz + shift = 0)",
                            peak.mz, shift
                        ),
                        format!("peaks[{}].mz", i),
                    ));
                }
            }
        }
        AlgorithmParams::Modulo { modulus, .. } => {
            if modulus.is_finite() && modulus <= 0.0 {
                result.add_error(ValidationError::with_path(
                    ErrorCode::InvalidModulus,
                    format!("modulus must be positive, got {}", modulus),
                    "algorithm.modulus",
                ));
            }
        }
    }
}

fn check_warnings(request: &SonifyRequest, peaks: Option<&[Peak]>, result: &mut ValidationResult) {
    if let Some(peaks) = peaks {
        if peaks.is_empty() {
            result.add_warning(ValidationWarning::new(
                WarningCode::SilentSpectrum,
                "spectrum has no peaks; output will be silence",
            ));
        } else if max_intensity(peaks) == 0.0 {
            result.add_warning(ValidationWarning::new(
                WarningCode::SilentSpectrum,
                "every peak has zero intensity; output will be silence",
            ));
        }
    }

    if request.compound.as_deref().map_or(true, |c| c.trim().is_empty()) {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::MissingCompound,
            "no compound name given",
            "compound",
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::AudioParams;
    use pretty_assertions::assert_eq;

    fn valid_request() -> SonifyRequest {
        SonifyRequest::from_peaks(vec![Peak::new(300.0, 1000.0), Peak::new(301.0, 500.0)])
            .with_compound("Caffeine")
            .with_audio(AudioParams::new(1.0, 44100))
    }

    fn error_codes(result: &ValidationResult) -> Vec<ErrorCode> {
        result.errors.iter().map(|e| e.code).collect()
    }

    #[test]
    fn test_valid_request() {
        let result = validate_request(&valid_request());
        assert!(result.is_ok(), "errors: {:?}", result.errors);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_missing_and_conflicting_sources() {
        let mut request = valid_request();
        request.peaks = None;
        assert_eq!(error_codes(&validate_request(&request)), vec![ErrorCode::NoPeakSource]);

        let mut request = valid_request();
        request.spectrum_text = Some("1 2".to_string());
        assert_eq!(
            error_codes(&validate_request(&request)),
            vec![ErrorCode::ConflictingPeakSources]
        );
    }

    #[test]
    fn test_spectrum_text_length() {
        let request = SonifyRequest::from_spectrum_text("1 ");
        let result = validate_request(&request);
        assert_eq!(error_codes(&result), vec![ErrorCode::SpectrumTextLength]);
        assert_eq!(result.errors[0].path.as_deref(), Some("spectrum_text"));

        let long = "1 2\n".repeat(25_001);
        let result = validate_request(&SonifyRequest::from_spectrum_text(long));
        assert_eq!(error_codes(&result), vec![ErrorCode::SpectrumTextLength]);
    }

    #[test]
    fn test_invalid_peaks_reported_with_paths() {
        let mut request = valid_request();
        request.peaks = Some(vec![
            Peak::new(100.0, 1.0),
            Peak::new(f64::NAN, 1.0),
            Peak::new(120.0, -3.0),
        ]);
        let result = validate_request(&request);
        let paths: Vec<_> = result.errors.iter().filter_map(|e| e.path.clone()).collect();
        assert_eq!(paths, vec!["peaks[1].mz", "peaks[2].intensity"]);
    }

    #[test]
    fn test_non_positive_mz_warns() {
        let mut request = valid_request();
        request.peaks = Some(vec![Peak::new(-5.0, 1.0)]);
        let result = validate_request(&request);
        assert!(result.is_ok());
        assert_eq!(result.warnings[0].code, WarningCode::NonPositiveMz);
    }

    #[test]
    fn test_audio_bounds() {
        let mut request = valid_request();
        request.duration = 31.0;
        request.sample_rate = 1000;
        assert_eq!(
            error_codes(&validate_request(&request)),
            vec![ErrorCode::InvalidDuration, ErrorCode::InvalidSampleRate]
        );
    }

    #[test]
    fn test_parameter_range_and_modulus() {
        let request = valid_request().with_algorithm(AlgorithmParams::Modulo {
            factor: 2e6,
            modulus: -4.0,
            base: 100.0,
        });
        let result = validate_request(&request);
        assert_eq!(
            error_codes(&result),
            vec![ErrorCode::ParameterOutOfRange, ErrorCode::InvalidModulus]
        );
        assert_eq!(result.errors[0].path.as_deref(), Some("algorithm.factor"));
    }

    #[test]
    fn test_inverse_singularity() {
        let mut request = valid_request().with_algorithm(AlgorithmParams::Inverse {
            scale: 1000.0,
            shift: 1.0,
        });
        request.peaks = Some(vec![Peak::new(10.0, 1.0), Peak::new(-1.0, 2.0)]);
        let result = validate_request(&request);
        assert_eq!(error_codes(&result), vec![ErrorCode::InverseSingularity]);
        assert_eq!(result.errors[0].path.as_deref(), Some("peaks[1].mz"));
    }

    #[test]
    fn test_silent_and_unnamed_warnings() {
        let mut request = valid_request();
        request.compound = None;
        request.peaks = Some(vec![Peak::new(100.0, 0.0)]);
        let result = validate_request(&request);
        let codes: Vec<_> = result.warnings.iter().map(|w| w.code).collect();
        assert_eq!(codes, vec![WarningCode::SilentSpectrum, WarningCode::MissingCompound]);
    }
}
