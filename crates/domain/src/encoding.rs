//! Base64, JSON and serialization-based copying.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{DomainError, DomainResult};

/// Encodes a string as standard, padded base64.
#[must_use]
pub fn base64_encode(input: &str) -> String {
    STANDARD.encode(input.as_bytes())
}

/// Decodes standard base64 into a UTF-8 string.
///
/// # Errors
///
/// Returns [`DomainError::InvalidBase64`] if the input is not valid base64
/// or the decoded bytes are not UTF-8.
pub fn base64_decode(input: &str) -> DomainResult<String> {
    let bytes = STANDARD
        .decode(input)
        .map_err(|e| DomainError::InvalidBase64(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| DomainError::InvalidBase64(e.to_string()))
}

/// Returns true if `input` is non-empty, valid standard base64.
#[must_use]
pub fn is_base64(input: &str) -> bool {
    !input.is_empty() && STANDARD.decode(input).is_ok()
}

/// Returns true if `input` is a complete JSON document of any type.
#[must_use]
pub fn is_json(input: &str) -> bool {
    serde_json::from_str::<Value>(input).is_ok()
}

/// Creates a `U` from a `T` by round-tripping through JSON.
///
/// Fields are matched by their serialized names; extra source fields are
/// ignored unless `U` denies unknown fields.
///
/// # Errors
///
/// Returns [`DomainError::DeepCopy`] if `from` cannot be serialized or the
/// JSON does not deserialize into `U`.
pub fn deep_copy<T, U>(from: &T) -> DomainResult<U>
where
    T: Serialize + ?Sized,
    U: DeserializeOwned,
{
    let value = serde_json::to_value(from).map_err(|e| DomainError::DeepCopy(e.to_string()))?;
    serde_json::from_value(value).map_err(|e| DomainError::DeepCopy(e.to_string()))
}

/// Copies the fields of `from` onto an existing `to`.
///
/// Objects are merged recursively: keys present in `from` overwrite those in
/// `to`, keys absent from `from` keep their current value. `to` is left
/// untouched when an error is returned.
///
/// # Errors
///
/// Returns [`DomainError::DeepCopy`] if either value cannot be serialized or
/// the merged JSON does not deserialize into `U`.
pub fn deep_copy_into<T, U>(from: &T, to: &mut U) -> DomainResult<()>
where
    T: Serialize + ?Sized,
    U: Serialize + DeserializeOwned,
{
    let source = serde_json::to_value(from).map_err(|e| DomainError::DeepCopy(e.to_string()))?;
    let mut target = serde_json::to_value(&*to).map_err(|e| DomainError::DeepCopy(e.to_string()))?;

    merge_json(&mut target, source);

    *to = serde_json::from_value(target).map_err(|e| DomainError::DeepCopy(e.to_string()))?;
    Ok(())
}

fn merge_json(target: &mut Value, source: Value) {
    match (target, source) {
        (Value::Object(target), Value::Object(source)) => {
            for (key, value) in source {
                match target.get_mut(&key) {
                    Some(existing) => merge_json(existing, value),
                    None => {
                        target.insert(key, value);
                    }
                }
            }
        }
        (target, source) => *target = source,
    }
}
