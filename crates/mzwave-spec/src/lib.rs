//! mzwave Canonical Request Library
//!
//! This crate provides the data model, validation, and hashing for mzwave
//! sonification requests. A request is a JSON document naming a mass spectrum
//! (a list of peaks, or pasted `mz intensity` text), an m/z to frequency
//! algorithm, and the audio settings to render with.
//!
//! # Example
//!
//! ```
//! use mzwave_spec::{AlgorithmParams, AudioParams, Peak, SonifyRequest};
//! use mzwave_spec::validation::validate_request;
//! use mzwave_spec::hash::canonical_request_hash;
//!
//! let request = SonifyRequest::from_peaks(vec![
//!     Peak::new(300.0, 1000.0),
//!     Peak::new(301.0, 500.0),
//! ])
//! .with_compound("Example")
//! .with_algorithm(AlgorithmParams::Linear { offset: 300.0 })
//! .with_audio(AudioParams::new(1.0, 44100));
//!
//! let result = validate_request(&request);
//! assert!(result.is_ok());
//!
//! let hash = canonical_request_hash(&request).unwrap();
//! assert_eq!(hash.len(), 64);
//! ```
//!
//! # Modules
//!
//! - [`algorithm`]: Frequency mapping algorithms and their parameters
//! - [`audio`]: Duration and sample rate
//! - [`error`]: Error and warning types for validation
//! - [`hash`]: Canonical request hashing
//! - [`peak`]: Peaks, transformed peaks, and spectrum text parsing
//! - [`request`]: The request document
//! - [`response`]: The response document
//! - [`validation`]: Request validation functions

pub mod algorithm;
pub mod audio;
pub mod error;
pub mod hash;
pub mod peak;
pub mod request;
pub mod response;
pub mod validation;

// Re-export commonly used types at the crate root
pub use algorithm::{AlgorithmParams, INVERSE_SINGULARITY_EPSILON, MAX_PARAMETER_MAGNITUDE};
pub use audio::{
    AudioParams, MAX_DURATION_SECONDS, MAX_SAMPLE_RATE, MIN_DURATION_SECONDS, MIN_SAMPLE_RATE,
};
pub use error::{
    BackendError, ErrorCode, SpecError, ValidationError, ValidationResult, ValidationWarning,
    WarningCode,
};
pub use hash::{canonical_request_hash, canonical_value_hash};
pub use peak::{max_intensity, parse_spectrum_text, Peak, TransformedPeak};
pub use request::{SonifyRequest, CUSTOM_ACCESSION, CUSTOM_COMPOUND_NAME};
pub use response::{SonifyResponse, SynthesisStatus};
pub use validation::validate_request;

#[cfg(test)]
mod integration_tests {
    use super::*;

    /// A request as the web form would submit it for pasted spectrum text.
    #[test]
    fn test_parse_form_request() {
        let json = r#"{
            "spectrum_text": "41.0 120\n43.0 999\n58.0 310",
            "algorithm": { "type": "modulo", "factor": 10, "modulus": 500, "base": 100 },
            "duration": 2.5,
            "sample_rate": 22050
        }"#;

        let request = SonifyRequest::from_json(json).expect("should parse");
        assert_eq!(request.algorithm.name(), "modulo");
        assert_eq!(request.audio_params(), AudioParams::new(2.5, 22050));
        assert_eq!(request.resolve_peaks().unwrap().len(), 3);

        let result = validate_request(&request);
        assert!(result.is_ok(), "errors: {:?}", result.errors);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].code, WarningCode::MissingCompound);
    }

    #[test]
    fn test_hash_stability() {
        let request = SonifyRequest::from_spectrum_text("300 1000 301 500");
        let hash1 = canonical_request_hash(&request).unwrap();
        let hash2 = canonical_request_hash(&request).unwrap();
        assert_eq!(hash1, hash2, "hash should be stable across calls");
        assert_eq!(hash1.len(), 64, "hash should be 64 hex characters");
    }

    #[test]
    fn test_validation_error_messages() {
        let request = SonifyRequest::from_spectrum_text("300 1000").with_algorithm(
            AlgorithmParams::Modulo {
                factor: 1.0,
                modulus: 0.0,
                base: 0.0,
            },
        );

        let result = validate_request(&request);
        assert!(!result.is_ok());

        let error = result
            .errors
            .iter()
            .find(|e| e.code == ErrorCode::InvalidModulus)
            .expect("modulus error");
        assert!(error.message.contains("modulus"));
    }
}
