//! m/z to frequency mapping.

use mzwave_spec::{AlgorithmParams, INVERSE_SINGULARITY_EPSILON};

use super::MappingError;

/// Maps one m/z value to a frequency in Hz.
///
/// The result is not clamped: negative or super-Nyquist frequencies are
/// returned as-is and treated as silent by the synthesizer.
///
/// # Errors
/// * [`MappingError::Singularity`] when `|mz + shift| < 1e-9` (inverse)
/// * [`MappingError::InvalidModulus`] when `modulus <= 0` (modulo)
/// * [`MappingError::NonFinite`] when the arithmetic overflows
pub fn map_frequency(mz: f64, algorithm: &AlgorithmParams) -> Result<f64, MappingError> {
    let frequency = match *algorithm {
        AlgorithmParams::Linear { offset } => mz + offset,
        AlgorithmParams::Inverse { scale, shift } => {
            let denominator = mz + shift;
            if denominator.abs() < INVERSE_SINGULARITY_EPSILON {
                return Err(MappingError::Singularity { mz, shift });
            }
            scale / denominator
        }
        AlgorithmParams::Modulo {
            factor,
            modulus,
            base,
        } => {
            if modulus.is_nan() || modulus <= 0.0 {
                return Err(MappingError::InvalidModulus(modulus));
            }
            wrap(mz * factor, modulus) + base
        }
    };

    if !frequency.is_finite() {
        return Err(MappingError::NonFinite { mz, frequency });
    }
    Ok(frequency)
}

/// Floating-point remainder in `[0, modulus)` regardless of the sign of `x`.
#[inline]
fn wrap(x: f64, modulus: f64) -> f64 {
    ((x % modulus) + modulus) % modulus
}
