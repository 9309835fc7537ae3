//! Common validation utilities shared by request validation and the backend.
//!
//! The backend reuses these checks so that a request rejected here is
//! rejected with the same message at synthesis time.

use std::fmt;

use crate::algorithm::MAX_PARAMETER_MAGNITUDE;
use crate::audio::{MAX_DURATION_SECONDS, MAX_SAMPLE_RATE, MIN_DURATION_SECONDS, MIN_SAMPLE_RATE};

/// Error type for common validation failures.
#[derive(Debug, Clone, PartialEq)]
pub struct CommonValidationError {
    /// Human-readable error message.
    pub message: String,
}

impl CommonValidationError {
    /// Creates a new validation error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CommonValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CommonValidationError {}

/// Validate that a value is positive (> 0).
///
/// # Example
/// ```
/// use mzwave_spec::validation::common::validate_positive;
///
/// assert!(validate_positive("modulus", 1.0).is_ok());
/// assert!(validate_positive("modulus", 0.0).is_err());
/// assert!(validate_positive("modulus", -1.0).is_err());
/// ```
pub fn validate_positive(name: &str, value: f64) -> Result<(), CommonValidationError> {
    validate_finite(name, value)?;
    if value <= 0.0 {
        return Err(CommonValidationError::new(format!(
            "{} must be positive, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Validate that a value is non-negative (>= 0).
pub fn validate_non_negative(name: &str, value: f64) -> Result<(), CommonValidationError> {
    validate_finite(name, value)?;
    if value < 0.0 {
        return Err(CommonValidationError::new(format!(
            "{} must be non-negative, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Validate that a value is finite.
pub fn validate_finite(name: &str, value: f64) -> Result<(), CommonValidationError> {
    if !value.is_finite() {
        return Err(CommonValidationError::new(format!(
            "{} must be finite, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Validate that a value is within a specified range [min, max].
///
/// # Example
/// ```
/// use mzwave_spec::validation::common::validate_range;
///
/// assert!(validate_range("offset", 300.0, -1e6, 1e6).is_ok());
/// assert!(validate_range("offset", 2e6, -1e6, 1e6).is_err());
/// ```
pub fn validate_range(
    name: &str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), CommonValidationError> {
    validate_finite(name, value)?;
    if value < min || value > max {
        return Err(CommonValidationError::new(format!(
            "{} must be in [{}, {}], got {}",
            name, min, max, value
        )));
    }
    Ok(())
}

/// Validate an algorithm parameter against the accepted magnitude.
pub fn validate_parameter(name: &str, value: f64) -> Result<(), CommonValidationError> {
    validate_range(name, value, -MAX_PARAMETER_MAGNITUDE, MAX_PARAMETER_MAGNITUDE)
}

/// Validate a rendering duration in seconds.
pub fn validate_duration(duration: f64) -> Result<(), CommonValidationError> {
    validate_range("duration", duration, MIN_DURATION_SECONDS, MAX_DURATION_SECONDS)
}

/// Validate a sample rate in Hz.
pub fn validate_sample_rate(sample_rate: u32) -> Result<(), CommonValidationError> {
    if !(MIN_SAMPLE_RATE..=MAX_SAMPLE_RATE).contains(&sample_rate) {
        return Err(CommonValidationError::new(format!(
            "sample_rate must be in [{}, {}], got {}",
            MIN_SAMPLE_RATE, MAX_SAMPLE_RATE, sample_rate
        )));
    }
    Ok(())
}
