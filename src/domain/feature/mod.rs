//! Feature domain: flag records built from KV entries.

pub mod client;
mod convert;
pub mod wire;

pub use convert::{decode_value, derive_id, strip_file_extension};

use serde::Serialize;
use serde_json::{Map, Value};

/// Field that always carries the record identifier.
pub const ID_FIELD: &str = "id";

/// One feature flag.
///
/// The decoded value's top-level fields plus `id`, which always wins over a
/// decoded field of the same name. Field order follows the stored JSON, with
/// `id` last. Serializes as a flat JSON object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Feature {
    fields: Map<String, Value>,
}

impl Feature {
    pub fn new(id: impl Into<String>, mut fields: Map<String, Value>) -> Self {
        fields.shift_remove(ID_FIELD);
        fields.insert(ID_FIELD.to_string(), Value::String(id.into()));
        Self { fields }
    }

    /// A record with no fields besides `id`.
    pub fn id_only(id: impl Into<String>) -> Self {
        Self::new(id, Map::new())
    }

    pub fn id(&self) -> &str {
        self.fields
            .get(ID_FIELD)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// All fields, `id` included.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// The conventional `enabled` flag, when present and boolean.
    pub fn enabled(&self) -> Option<bool> {
        self.get("enabled").and_then(Value::as_bool)
    }

    pub fn description(&self) -> Option<&str> {
        self.get("description").and_then(Value::as_str)
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.fields
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_id_wins_on_collision() {
        let feature = Feature::new(
            "feature_one",
            object(json!({"id": "spoofed", "enabled": true})),
        );
        assert_eq!(feature.id(), "feature_one");
        assert_eq!(
            feature.into_value(),
            json!({"enabled": true, "id": "feature_one"})
        );
    }

    #[test]
    fn test_id_is_last_field() {
        let feature = Feature::new(
            "feature_one",
            object(json!({"id": 7, "description": "d", "enabled": false})),
        );
        let keys: Vec<&str> = feature.fields().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["description", "enabled", "id"]);
    }

    #[test]
    fn test_accessors() {
        let feature = Feature::new(
            "feature_two",
            object(json!({"description": "This is feature two.", "enabled": false})),
        );
        assert_eq!(feature.description(), Some("This is feature two."));
        assert_eq!(feature.enabled(), Some(false));
        assert!(feature.get("missing").is_none());

        let bare = Feature::id_only("bare");
        assert_eq!(bare.enabled(), None);
        assert_eq!(bare.fields().len(), 1);
    }

    #[test]
    fn test_serializes_flat() {
        let feature = Feature::new("f", object(json!({"enabled": true})));
        assert_eq!(
            serde_json::to_string(&feature).unwrap(),
            r#"{"enabled":true,"id":"f"}"#
        );
    }
}
