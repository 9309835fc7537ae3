//! m/z to frequency algorithm parameters.

use serde::{Deserialize, Serialize};

/// Distance from zero at which `mz + shift` is treated as a singularity by the
/// inverse algorithm.
pub const INVERSE_SINGULARITY_EPSILON: f64 = 1e-9;

/// Largest magnitude accepted for any algorithm parameter.
pub const MAX_PARAMETER_MAGNITUDE: f64 = 1_000_000.0;

/// Frequency mapping algorithm with its parameters.
///
/// Serialized with an internal `type` tag:
///
/// ```json
/// { "type": "modulo", "factor": 10.0, "modulus": 500.0, "base": 100.0 }
/// ```
///
/// Omitted parameters take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum AlgorithmParams {
    /// `frequency = mz + offset`
    Linear {
        /// Offset added to m/z, in Hz.
        #[serde(default = "default_offset")]
        offset: f64,
    },
    /// `frequency = scale / (mz + shift)`
    Inverse {
        /// Numerator of the mapping.
        #[serde(default = "default_scale")]
        scale: f64,
        /// Shift added to m/z before division.
        #[serde(default = "default_shift")]
        shift: f64,
    },
    /// `frequency = ((mz * factor) mod modulus) + base`
    Modulo {
        /// Multiplier applied to m/z.
        #[serde(default = "default_factor")]
        factor: f64,
        /// Wrap-around period; must be positive.
        #[serde(default = "default_modulus")]
        modulus: f64,
        /// Lowest output frequency.
        #[serde(default = "default_base")]
        base: f64,
    },
}

fn default_offset() -> f64 {
    300.0
}

fn default_scale() -> f64 {
    100_000.0
}

fn default_shift() -> f64 {
    1.0
}

fn default_factor() -> f64 {
    10.0
}

fn default_modulus() -> f64 {
    500.0
}

fn default_base() -> f64 {
    100.0
}

impl AlgorithmParams {
    /// Linear mapping with the default offset.
    pub fn linear() -> Self {
        Self::Linear {
            offset: default_offset(),
        }
    }

    /// Inverse mapping with the default scale and shift.
    pub fn inverse() -> Self {
        Self::Inverse {
            scale: default_scale(),
            shift: default_shift(),
        }
    }

    /// Modulo mapping with the default factor, modulus, and base.
    pub fn modulo() -> Self {
        Self::Modulo {
            factor: default_factor(),
            modulus: default_modulus(),
            base: default_base(),
        }
    }

    /// Returns the algorithm name used in requests and responses.
    pub fn name(&self) -> &'static str {
        match self {
            AlgorithmParams::Linear { .. } => "linear",
            AlgorithmParams::Inverse { .. } => "inverse",
            AlgorithmParams::Modulo { .. } => "modulo",
        }
    }

    /// Looks up the default parameters for an algorithm name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "linear" => Some(Self::linear()),
            "inverse" => Some(Self::inverse()),
            "modulo" => Some(Self::modulo()),
            _ => None,
        }
    }

    /// Returns `(name, value)` for every parameter of the selected algorithm.
    pub fn named_values(&self) -> Vec<(&'static str, f64)> {
        match *self {
            AlgorithmParams::Linear { offset } => vec![("offset", offset)],
            AlgorithmParams::Inverse { scale, shift } => vec![("scale", scale), ("shift", shift)],
            AlgorithmParams::Modulo {
                factor,
                modulus,
                base,
            } => vec![("factor", factor), ("modulus", modulus), ("base", base)],
        }
    }

    /// Returns only the selected algorithm's parameters as a JSON object.
    pub fn parameters(&self) -> serde_json::Value {
        let map = self
            .named_values()
            .into_iter()
            .map(|(name, value)| (name.to_string(), serde_json::json!(value)))
            .collect::<serde_json::Map<String, serde_json::Value>>();
        serde_json::Value::Object(map)
    }
}

impl Default for AlgorithmParams {
    fn default() -> Self {
        Self::linear()
    }
}

impl std::fmt::Display for AlgorithmParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let params = self
            .named_values()
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{} ({})", self.name(), params)
    }
}
