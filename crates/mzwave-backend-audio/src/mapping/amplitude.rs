//! Intensity to amplitude mapping.

/// Decibel value reported for a peak whose linear amplitude is zero.
pub const AMPLITUDE_DB_FLOOR: f64 = -100.0;

/// Linear and decibel amplitude of one peak.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Amplitude {
    /// Intensity relative to the spectrum maximum, in [0, 1].
    pub linear: f64,
    /// `20 * log10(linear)`, or [`AMPLITUDE_DB_FLOOR`] when `linear == 0`.
    pub db: f64,
}

/// Maps an intensity to an amplitude relative to `max_intensity`.
///
/// A spectrum whose maximum is zero maps every peak to zero.
pub fn map_amplitude(intensity: f64, max_intensity: f64) -> Amplitude {
    let linear = if max_intensity > 0.0 {
        (intensity / max_intensity).clamp(0.0, 1.0)
    } else {
        0.0
    };

    Amplitude {
        linear,
        db: linear_to_db(linear),
    }
}

/// Converts a linear amplitude to decibels, flooring silence.
pub fn linear_to_db(linear: f64) -> f64 {
    if linear > 0.0 {
        20.0 * linear.log10()
    } else {
        AMPLITUDE_DB_FLOOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_peak_is_unity() {
        let amp = map_amplitude(1000.0, 1000.0);
        assert_eq!(amp.linear, 1.0);
        assert_eq!(amp.db, 0.0);
    }

    #[test]
    fn test_half_intensity() {
        let amp = map_amplitude(500.0, 1000.0);
        assert_eq!(amp.linear, 0.5);
        assert!((amp.db - (-6.0206)).abs() < 1e-3, "got {}", amp.db);
    }

    #[test]
    fn test_zero_intensity_floor() {
        let amp = map_amplitude(0.0, 1000.0);
        assert_eq!(amp.linear, 0.0);
        assert_eq!(amp.db, AMPLITUDE_DB_FLOOR);
    }

    #[test]
    fn test_zero_max_intensity() {
        let amp = map_amplitude(0.0, 0.0);
        assert_eq!(amp.linear, 0.0);
        assert_eq!(amp.db, AMPLITUDE_DB_FLOOR);
    }

    #[test]
    fn test_scale_invariance() {
        let a = map_amplitude(3.0, 12.0);
        let b = map_amplitude(3000.0, 12000.0);
        assert_eq!(a, b);
    }
}
