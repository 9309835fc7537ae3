//! Error types for request validation and processing.

use thiserror::Error;

/// Error codes for request validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Peak source errors (E001-E005)
    /// E001: Neither `peaks` nor `spectrum_text` supplied
    NoPeakSource,
    /// E002: Both `peaks` and `spectrum_text` supplied
    ConflictingPeakSources,
    /// E003: `spectrum_text` length outside the accepted range
    SpectrumTextLength,
    /// E004: `spectrum_text` could not be parsed into peak pairs
    MalformedSpectrumText,
    /// E005: Peak with a non-finite value or negative intensity
    InvalidPeak,

    // Audio errors (E006-E007)
    /// E006: Duration outside [0.01, 30] seconds
    InvalidDuration,
    /// E007: Sample rate outside [3500, 192000] Hz
    InvalidSampleRate,

    // Algorithm errors (E008-E010)
    /// E008: Algorithm parameter not finite or outside [-1e6, 1e6]
    ParameterOutOfRange,
    /// E009: Modulo algorithm with a non-positive modulus
    InvalidModulus,
    /// E010: Inverse algorithm singularity (`mz + shift == 0`)
    InverseSingularity,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::NoPeakSource => "E001",
            ErrorCode::ConflictingPeakSources => "E002",
            ErrorCode::SpectrumTextLength => "E003",
            ErrorCode::MalformedSpectrumText => "E004",
            ErrorCode::InvalidPeak => "E005",
            ErrorCode::InvalidDuration => "E006",
            ErrorCode::InvalidSampleRate => "E007",
            ErrorCode::ParameterOutOfRange => "E008",
            ErrorCode::InvalidModulus => "E009",
            ErrorCode::InverseSingularity => "E010",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Warning codes for request validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// W001: Peak with m/z <= 0
    NonPositiveMz,
    /// W002: Spectrum is empty or every intensity is zero
    SilentSpectrum,
    /// W003: No compound label supplied
    MissingCompound,
}

impl WarningCode {
    /// Returns the warning code string (e.g., "W001").
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::NonPositiveMz => "W001",
            WarningCode::SilentSpectrum => "W002",
            WarningCode::MissingCompound => "W003",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// JSON path to the problematic field (e.g., "peaks\[3\].intensity").
    pub path: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation error with a JSON path.
    pub fn with_path(code: ErrorCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// A validation warning with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The warning code.
    pub code: WarningCode,
    /// Human-readable warning message.
    pub message: String,
    /// JSON path to the problematic field.
    pub path: Option<String>,
}

impl ValidationWarning {
    /// Creates a new validation warning.
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation warning with a JSON path.
    pub fn with_path(
        code: WarningCode,
        message: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

/// Top-level error type for request operations.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Request validation failed with one or more errors.
    #[error("request validation failed with {0} error(s)")]
    ValidationFailed(usize),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Spectrum text could not be turned into peaks.
    #[error("invalid spectrum data format: {0}")]
    MalformedSpectrum(String),

    /// The request does not name exactly one peak source.
    #[error("invalid peak source: {0}")]
    PeakSource(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of request validation.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether validation passed (no errors).
    pub ok: bool,
    /// List of validation errors.
    pub errors: Vec<ValidationError>,
    /// List of validation warnings.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Creates a successful validation result.
    pub fn success() -> Self {
        Self {
            ok: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
        self.ok = false;
    }

    /// Adds a warning to the result.
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Returns true if there are no errors.
    pub fn is_ok(&self) -> bool {
        self.ok
    }

    /// Converts to a Result, returning Err if there are errors.
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, Vec<ValidationError>> {
        if self.ok {
            Ok(self.warnings)
        } else {
            Err(self.errors)
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::success()
    }
}

/// Common trait for backend errors.
///
/// Gives callers a stable code and category for any backend failure without
/// mzwave-spec depending on backend crates.
///
/// # Example
///
/// ```ignore
/// use mzwave_spec::error::BackendError;
///
/// fn handle_error<E: BackendError>(err: E) {
///     eprintln!("[{}] {}", err.code(), err.message());
/// }
/// ```
pub trait BackendError: std::error::Error {
    /// Get the error code for reporting.
    ///
    /// Returns a static string like "SYNTH_001". These codes are stable and
    /// can be used for programmatic error handling.
    fn code(&self) -> &'static str;

    /// Get a human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Get the error category for grouping related errors.
    fn category(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ErrorCode::NoPeakSource.code(), "E001");
        assert_eq!(ErrorCode::MalformedSpectrumText.code(), "E004");
        assert_eq!(ErrorCode::InvalidSampleRate.code(), "E007");
        assert_eq!(ErrorCode::InverseSingularity.code(), "E010");
    }

    #[test]
    fn test_warning_codes() {
        assert_eq!(WarningCode::NonPositiveMz.code(), "W001");
        assert_eq!(WarningCode::MissingCompound.code(), "W003");
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new(ErrorCode::NoPeakSource, "no peaks supplied");
        assert_eq!(err.to_string(), "E001: no peaks supplied");

        let err_with_path = ValidationError::with_path(
            ErrorCode::InvalidPeak,
            "intensity must be non-negative",
            "peaks[2].intensity",
        );
        assert_eq!(
            err_with_path.to_string(),
            "E005: intensity must be non-negative (at peaks[2].intensity)"
        );
    }

    #[test]
    fn test_validation_result() {
        let mut result = ValidationResult::success();
        assert!(result.is_ok());

        result.add_warning(ValidationWarning::new(
            WarningCode::MissingCompound,
            "no compound",
        ));
        assert!(result.is_ok());

        result.add_error(ValidationError::new(ErrorCode::InvalidModulus, "bad"));
        assert!(!result.is_ok());
        assert_eq!(result.clone().into_result().unwrap_err().len(), 1);
    }
}
