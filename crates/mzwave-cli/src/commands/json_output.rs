//! JSON output types for machine-readable CLI output.
//!
//! This module provides structured output types for the `--json` flag on
//! `render`, `validate`, and `inspect`. Every command prints exactly one JSON
//! document to stdout.

use mzwave_backend_audio::SynthesisError;
use mzwave_spec::{BackendError, SynthesisStatus, TransformedPeak};
use serde::{Deserialize, Serialize};

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
/// Validation errors pass through their `E0xx` codes and synthesis errors
/// their `SYNTH_xxx` codes.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// JSON parse error
    pub const JSON_PARSE: &str = "CLI_002";
    /// Neither or both of --request / --peaks
    pub const INPUT_SOURCE: &str = "CLI_003";
    /// Flag does not apply to the selected algorithm
    pub const INVALID_FLAG: &str = "CLI_004";
    /// Unsupported bit depth
    pub const BIT_DEPTH: &str = "CLI_005";
    /// Output file could not be written
    pub const FILE_WRITE: &str = "CLI_006";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "E001", "SYNTH_002")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// JSON path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
            file: None,
        }
    }

    /// Sets the JSON path for this error.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code (e.g., "W001")
    pub code: String,
    /// Human-readable warning message
    pub message: String,
    /// JSON path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl JsonWarning {
    /// Creates a new warning with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
        }
    }

    /// Sets the JSON path for this warning.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// Output envelope shared by every command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandOutput<T> {
    /// Whether the command succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Validation warnings
    pub warnings: Vec<JsonWarning>,
    /// Command-specific result (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    /// Canonical request hash
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_hash: Option<String>,
    /// BLAKE3 hash of the source file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<String>,
}

impl<T> CommandOutput<T> {
    /// Creates a successful output.
    pub fn success(
        result: T,
        request_hash: Option<String>,
        source_hash: String,
        warnings: Vec<JsonWarning>,
    ) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            warnings,
            result: Some(result),
            request_hash,
            source_hash: Some(source_hash),
        }
    }

    /// Creates a failed output.
    pub fn failure(
        errors: Vec<JsonError>,
        warnings: Vec<JsonWarning>,
        request_hash: Option<String>,
        source_hash: Option<String>,
    ) -> Self {
        Self {
            success: false,
            errors,
            warnings,
            result: None,
            request_hash,
            source_hash,
        }
    }
}

/// Result details for `validate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateResult {
    /// Source format (request/peaks)
    pub source_kind: String,
    /// Number of peaks in the resolved spectrum
    pub peak_count: usize,
    /// Algorithm name
    pub algorithm: String,
}

/// Result details for `render`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// Path of the written WAV file
    pub wav_path: String,
    /// Path of the written response document (if requested)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_path: Option<String>,
    /// Bits per sample
    pub bit_depth: u16,
    /// Number of frames
    pub num_frames: usize,
    /// Partials that contributed to the waveform
    pub audible_partials: usize,
    /// Divisor applied during normalization
    pub divisor: f64,
    /// Synthesis status
    pub status: SynthesisStatus,
    /// BLAKE3 hash of the PCM payload
    pub pcm_hash: String,
    /// One row per input peak
    pub spectrum: Vec<TransformedPeak>,
}

/// Result details for `inspect`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectResult {
    /// Algorithm name
    pub algorithm: String,
    /// Parameters of the selected algorithm
    pub parameters: serde_json::Value,
    /// Nyquist frequency for the request's sample rate
    pub nyquist: f64,
    /// Rows whose partial would be audible
    pub audible_partials: usize,
    /// One row per input peak
    pub spectrum: Vec<TransformedPeak>,
}

/// Converts an InputError to a JsonError.
pub fn input_error_to_json(err: &crate::input::InputError, file: Option<&str>) -> JsonError {
    use crate::input::InputError;

    let code = match err {
        InputError::FileRead { .. } => error_codes::FILE_READ,
        InputError::JsonParse { .. } => error_codes::JSON_PARSE,
        InputError::MissingSource | InputError::ConflictingSources => error_codes::INPUT_SOURCE,
        InputError::InvalidFlag { .. } => error_codes::INVALID_FLAG,
    };

    let mut error = JsonError::new(code, err.to_string());
    if let Some(f) = file {
        error = error.with_file(f);
    }
    error
}

/// Converts a ValidationError to a JsonError.
pub fn validation_error_to_json(err: &mzwave_spec::ValidationError) -> JsonError {
    let mut error = JsonError::new(err.code.to_string(), &err.message);
    if let Some(ref path) = err.path {
        error = error.with_path(path);
    }
    error
}

/// Converts a ValidationWarning to a JsonWarning.
pub fn validation_warning_to_json(warn: &mzwave_spec::ValidationWarning) -> JsonWarning {
    let mut warning = JsonWarning::new(warn.code.to_string(), &warn.message);
    if let Some(ref path) = warn.path {
        warning = warning.with_path(path);
    }
    warning
}

/// Converts a SynthesisError to a JsonError carrying its backend code.
pub fn synthesis_error_to_json(err: &SynthesisError) -> JsonError {
    let error = JsonError::new(err.code(), err.to_string());
    match err {
        SynthesisError::InvalidParameter { name, .. } => error.with_path(name),
        SynthesisError::Domain { index, .. } => error.with_path(format!("peaks[{}].mz", index)),
        _ => error,
    }
}
