//! Canonical JSON bytes for hashing.
//!
//! Every digest in the workspace is computed over bytes produced here, so two
//! logically equal values always hash the same.
//!
//! # Rules
//!
//! 1. Object keys sorted by byte order, at every depth.
//! 2. Compact form, no whitespace.
//! 3. Strings escaped by `serde_json` (RFC 8259).
//! 4. Numbers must be integers. Floats are rejected so formatting cannot
//!    drift between platforms.

/// Error type for canonical JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CanonError {
    #[error("non-integer number in canonical JSON: {raw}")]
    NonIntegerNumber { raw: String },
}

/// Serialize `value` canonically.
///
/// # Errors
///
/// [`CanonError::NonIntegerNumber`] if any number is not an `i64` or `u64`.
pub fn canonical_json_bytes(value: &serde_json::Value) -> Result<Vec<u8>, CanonError> {
    let mut out = Vec::with_capacity(128);
    emit(&mut out, value)?;
    Ok(out)
}

fn emit(out: &mut Vec<u8>, value: &serde_json::Value) -> Result<(), CanonError> {
    use serde_json::Value;

    match value {
        Value::Null | Value::Bool(_) | Value::String(_) => emit_scalar(out, value),
        Value::Number(n) => {
            if n.is_f64() {
                return Err(CanonError::NonIntegerNumber { raw: n.to_string() });
            }
            emit_scalar(out, value);
        }
        Value::Array(items) => {
            out.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                emit(out, item)?;
            }
            out.push(b']');
        }
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_unstable_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

            out.push(b'{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                emit_str(out, key);
                out.push(b':');
                emit(out, item)?;
            }
            out.push(b'}');
        }
    }
    Ok(())
}

// Scalars have exactly one compact serde_json rendering. Writing into a Vec
// cannot fail.
fn emit_scalar(out: &mut Vec<u8>, value: &serde_json::Value) {
    let _ = serde_json::to_writer(&mut *out, value);
}

fn emit_str(out: &mut Vec<u8>, s: &str) {
    let _ = serde_json::to_writer(&mut *out, s);
}
