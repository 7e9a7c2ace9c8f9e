//! Wire types for Consul KV listing responses.

use serde::{Deserialize, Serialize};

/// One item of a recursive `GET /v1/kv/<prefix>` listing.
///
/// `value` is left untyped: Consul sends a base64 string or `null`, and
/// anything else must degrade that entry rather than fail the response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct KvEntry {
    pub key: String,
    #[serde(default)]
    pub value: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_index: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modify_index: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lock_index: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<String>,
}

impl KvEntry {
    pub fn new(key: impl Into<String>, value: Option<&str>) -> Self {
        Self {
            key: key.into(),
            value: value.map(|v| serde_json::Value::String(v.to_string())),
            create_index: None,
            modify_index: None,
            lock_index: None,
            flags: None,
            session: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_consul_listing() {
        let json = r#"[
            {
                "LockIndex": 0,
                "Key": "conf/flags/",
                "Flags": 0,
                "Value": null,
                "CreateIndex": 12,
                "ModifyIndex": 12
            },
            {
                "LockIndex": 0,
                "Key": "conf/flags/feature_one",
                "Flags": 0,
                "Value": "eyJlbmFibGVkIjp0cnVlfQ==",
                "CreateIndex": 13,
                "ModifyIndex": 20,
                "Session": "adf4238a-882b-9ddc-4a9d-5b6758e4159e"
            }
        ]"#;
        let entries: Vec<KvEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].key, "conf/flags/");
        assert!(entries[0].value.is_none());
        assert_eq!(entries[1].modify_index, Some(20));
        assert_eq!(
            entries[1].value,
            Some(serde_json::Value::String("eyJlbmFibGVkIjp0cnVlfQ==".to_string()))
        );
        assert!(entries[1].session.is_some());
    }

    #[test]
    fn test_missing_value_field() {
        let entry: KvEntry = serde_json::from_str(r#"{"Key": "conf/flags/a"}"#).unwrap();
        assert_eq!(entry, KvEntry::new("conf/flags/a", None));
    }

    #[test]
    fn test_non_string_value_still_deserializes() {
        let entry: KvEntry =
            serde_json::from_str(r#"{"Key": "conf/flags/a", "Value": 42}"#).unwrap();
        assert_eq!(entry.value, Some(serde_json::json!(42)));
    }
}
