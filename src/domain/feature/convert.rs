//! Conversions from KV entries to feature records.

use super::wire::KvEntry;
use super::Feature;
use crate::error::DecodeError;
use crate::shared::KeyPrefix;

use base64::alphabet;
use base64::engine::general_purpose::GeneralPurposeConfig;
use base64::engine::{DecodePaddingMode, GeneralPurpose};
use base64::Engine;
use serde_json::{Map, Value};

/// Standard alphabet, padding optional.
const BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decode a raw KV value into the fields of a feature.
///
/// An absent or `null` value is not an error and yields no fields.
pub fn decode_value(value: Option<&Value>) -> Result<Map<String, Value>, DecodeError> {
    let encoded = match value {
        None | Some(Value::Null) => return Ok(Map::new()),
        Some(Value::String(s)) => s,
        Some(_) => return Err(DecodeError::NotAString),
    };

    let bytes = BASE64.decode(encoded)?;
    match serde_json::from_slice::<Value>(&bytes)? {
        Value::Object(map) => Ok(map),
        other => Err(DecodeError::NotAnObject(json_kind(&other))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Drop everything from the last `.` of the key onwards, if it has one.
pub fn strip_file_extension(key: &str) -> &str {
    match key.rfind('.') {
        Some(dot) => &key[..dot],
        None => key,
    }
}

/// Feature id for `key`: optional extension removal, then prefix removal.
pub fn derive_id<'a>(key: &'a str, prefix: &KeyPrefix, strip_extension: bool) -> &'a str {
    let record_key = if strip_extension {
        strip_file_extension(key)
    } else {
        key
    };
    prefix.strip(record_key)
}

impl Feature {
    /// Build the record for one entry. Decode failures degrade to an
    /// id-only record.
    pub fn from_entry(entry: &KvEntry, prefix: &KeyPrefix, strip_extension: bool) -> Self {
        let id = derive_id(&entry.key, prefix, strip_extension);
        let fields = decode_value(entry.value.as_ref()).unwrap_or_else(|e| {
            tracing::debug!(key = %entry.key, error = %e, "Undecodable value, keeping id only");
            Map::new()
        });
        Feature::new(id, fields)
    }
}

/// Turn a listing into records, skipping the folder marker and keeping order.
pub(crate) fn into_features(
    entries: &[KvEntry],
    prefix: &KeyPrefix,
    strip_extension: bool,
) -> Vec<Feature> {
    entries
        .iter()
        .filter(|entry| !prefix.is_folder_marker(&entry.key))
        .map(|entry| Feature::from_entry(entry, prefix, strip_extension))
        .collect()
}
