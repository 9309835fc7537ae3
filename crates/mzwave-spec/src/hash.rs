//! Canonical request hashing.
//!
//! A request is hashed as `hex(BLAKE3(canonical_json(request)))`, where the
//! canonical form has lexicographically sorted object keys and no whitespace.
//! Two requests that deserialize to the same values hash identically no matter
//! how their source JSON was formatted.

use crate::error::SpecError;
use crate::request::SonifyRequest;

/// Computes the canonical BLAKE3 hash of a request.
///
/// # Returns
/// * A 64-character lowercase hexadecimal string
///
/// # Example
/// ```
/// use mzwave_spec::{Peak, SonifyRequest};
/// use mzwave_spec::hash::canonical_request_hash;
///
/// let request = SonifyRequest::from_peaks(vec![Peak::new(300.0, 1000.0)]);
/// let hash = canonical_request_hash(&request).unwrap();
/// assert_eq!(hash.len(), 64);
/// ```
pub fn canonical_request_hash(request: &SonifyRequest) -> Result<String, SpecError> {
    let value = request.to_value()?;
    Ok(canonical_value_hash(&value))
}

/// Computes the canonical BLAKE3 hash of a JSON value.
pub fn canonical_value_hash(value: &serde_json::Value) -> String {
    let canonical = canonicalize_json(value);
    blake3::hash(canonical.as_bytes()).to_hex().to_string()
}

/// Renders a JSON value with sorted keys and no insignificant whitespace.
pub fn canonicalize_json(value: &serde_json::Value) -> String {
    let mut out = String::new();
    write_canonical(value, &mut out);
    out
}

fn write_canonical(value: &serde_json::Value, out: &mut String) {
    match value {
        serde_json::Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        serde_json::Value::Object(map) => {
            let mut entries: Vec<(&String, &serde_json::Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));

            out.push('{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                // Scalars (and keys) use serde_json's compact encoding.
                out.push_str(&serde_json::Value::String(key.clone()).to_string());
                out.push(':');
                write_canonical(item, out);
            }
            out.push('}');
        }
        scalar => out.push_str(&scalar.to_string()),
    }
}
