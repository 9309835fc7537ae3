//! Error types for the audio backend.

use mzwave_spec::{BackendError, SpecError};
use thiserror::Error;

use crate::mapping::MappingError;

/// Result type for synthesis operations.
pub type SynthesisResult<T> = Result<T, SynthesisError>;

/// Errors that can occur during synthesis.
///
/// Every variant is raised before any audio is produced; there is no partial
/// output on failure.
#[derive(Debug, Error)]
pub enum SynthesisError {
    /// Out-of-range or malformed parameter (audio settings, algorithm
    /// parameters, or a peak value).
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name or JSON path.
        name: String,
        /// Error message.
        message: String,
    },

    /// The frequency mapping is undefined for a peak.
    #[error("mapping undefined for peak {index} (mz={mz}): {message}")]
    Domain {
        /// Index of the offending peak.
        index: usize,
        /// m/z of the offending peak.
        mz: f64,
        /// Error message.
        message: String,
    },

    /// The request could not be turned into a peak list.
    #[error("request error: {0}")]
    Request(#[from] SpecError),

    /// I/O error while encoding.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SynthesisError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Attaches a peak index to a mapping failure.
    pub(crate) fn from_mapping(index: usize, mz: f64, err: MappingError) -> Self {
        match err {
            MappingError::InvalidModulus(modulus) => Self::invalid_param(
                "algorithm.modulus",
                format!("modulus must be positive, got {}", modulus),
            ),
            other => Self::Domain {
                index,
                mz,
                message: other.to_string(),
            },
        }
    }

    /// Returns true for errors caused by a mathematically undefined mapping.
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain { .. })
    }
}

impl BackendError for SynthesisError {
    fn code(&self) -> &'static str {
        match self {
            SynthesisError::InvalidParameter { .. } => "SYNTH_001",
            SynthesisError::Domain { .. } => "SYNTH_002",
            SynthesisError::Request(_) => "SYNTH_003",
            SynthesisError::Io(_) => "SYNTH_004",
        }
    }

    fn category(&self) -> &'static str {
        "audio"
    }
}
