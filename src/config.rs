//! Connection and transform settings for a `KnobzClient`.

use crate::network::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_TIMEOUT_MS};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Trust anchor used to validate the agent's TLS certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaCertificate {
    /// PEM-encoded certificate.
    Pem(String),
    /// DER-encoded certificate.
    Der(Vec<u8>),
    /// PEM file on disk, read when the client is built.
    File(PathBuf),
}

/// Settings for one client instance.
///
/// Every field has a default, so a partial document (or `{}`) deserializes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConsulConfig {
    /// Use `https` instead of `http`.
    pub secure: bool,
    /// Only used when `secure` is set.
    pub ca_certificate: Option<CaCertificate>,
    pub host: String,
    pub port: u16,
    pub timeout_millis: u64,
    /// KV folder under which the flags live.
    pub key_prefix: String,
    /// Drop a trailing `.ext` from keys before deriving ids.
    pub strip_file_extension: bool,
}

impl Default for ConsulConfig {
    fn default() -> Self {
        Self {
            secure: false,
            ca_certificate: None,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            timeout_millis: DEFAULT_TIMEOUT_MS,
            key_prefix: String::new(),
            strip_file_extension: false,
        }
    }
}

impl ConsulConfig {
    pub fn scheme(&self) -> &'static str {
        if self.secure {
            "https"
        } else {
            "http"
        }
    }

    /// `scheme://host:port` of the agent.
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.scheme(), self.host, self.port)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConsulConfig::default();
        assert!(!config.secure);
        assert!(config.ca_certificate.is_none());
        assert_eq!(config.base_url(), "http://127.0.0.1:8500");
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.key_prefix, "");
        assert!(!config.strip_file_extension);
    }

    #[test]
    fn test_secure_scheme() {
        let config = ConsulConfig {
            secure: true,
            host: "consul.internal".to_string(),
            port: 8501,
            ..Default::default()
        };
        assert_eq!(config.base_url(), "https://consul.internal:8501");
    }

    #[test]
    fn test_deserialize_partial() {
        let json = r#"{
            "host": "my-consul.dev",
            "port": 8555,
            "keyPrefix": "conf/flags",
            "stripFileExtension": true
        }"#;
        let config: ConsulConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.host, "my-consul.dev");
        assert_eq!(config.port, 8555);
        assert_eq!(config.key_prefix, "conf/flags");
        assert!(config.strip_file_extension);
        assert_eq!(config.timeout_millis, DEFAULT_TIMEOUT_MS);
        assert!(!config.secure);
    }

    #[test]
    fn test_deserialize_empty_is_default() {
        let config: ConsulConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ConsulConfig::default());
    }

    #[test]
    fn test_deserialize_ca_file() {
        let json = r#"{"secure": true, "caCertificate": {"file": "/etc/consul/ca.pem"}}"#;
        let config: ConsulConfig = serde_json::from_str(json).unwrap();
        assert_eq!(
            config.ca_certificate,
            Some(CaCertificate::File(PathBuf::from("/etc/consul/ca.pem")))
        );
    }
}
