//! High-level client — `KnobzClient` with the features sub-client accessor.
//!
//! The feature sub-client lives in `domain/feature/client.rs`. This module
//! keeps the builder and the bound configuration.

use crate::config::{CaCertificate, ConsulConfig};
use crate::domain::feature::client::Features;
use crate::domain::feature::Feature;
use crate::error::KnobzError;
use crate::http::ConsulHttp;
use crate::shared::KeyPrefix;

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::feature::client::Features as FeaturesClient;

/// The primary entry point: one Consul agent, one key prefix.
///
/// Immutable once built. Cloning is cheap and clones share the connection
/// pool, so one instance can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct KnobzClient {
    pub(crate) http: ConsulHttp,
    pub(crate) config: ConsulConfig,
    pub(crate) prefix: KeyPrefix,
}

impl KnobzClient {
    pub fn builder() -> KnobzClientBuilder {
        KnobzClientBuilder::default()
    }

    /// Build a client from a complete configuration.
    pub fn new(config: ConsulConfig) -> Result<Self, KnobzError> {
        KnobzClientBuilder::default().config(config).build()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn features(&self) -> Features<'_> {
        Features { client: self }
    }

    /// Fetch every flag under the configured prefix.
    ///
    /// Shorthand for `client.features().list()`.
    pub async fn fetch_features(&self) -> Result<Vec<Feature>, KnobzError> {
        self.features().list().await
    }

    pub fn config(&self) -> &ConsulConfig {
        &self.config
    }

    /// `scheme://host:port` of the Consul agent.
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// The normalized prefix flags are listed under.
    pub fn prefix(&self) -> &KeyPrefix {
        &self.prefix
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default)]
pub struct KnobzClientBuilder {
    config: ConsulConfig,
}

impl KnobzClientBuilder {
    /// Replace every setting at once.
    pub fn config(mut self, config: ConsulConfig) -> Self {
        self.config = config;
        self
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.config.secure = secure;
        self
    }

    /// Trust anchor for TLS. Ignored unless `secure` is set.
    pub fn ca_certificate(mut self, ca: CaCertificate) -> Self {
        self.config.ca_certificate = Some(ca);
        self
    }

    pub fn host(mut self, host: &str) -> Self {
        self.config.host = host.to_string();
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout_millis = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn timeout_millis(mut self, millis: u64) -> Self {
        self.config.timeout_millis = millis;
        self
    }

    pub fn key_prefix(mut self, prefix: &str) -> Self {
        self.config.key_prefix = prefix.to_string();
        self
    }

    pub fn strip_file_extension(mut self, strip: bool) -> Self {
        self.config.strip_file_extension = strip;
        self
    }

    pub fn build(self) -> Result<KnobzClient, KnobzError> {
        let http = ConsulHttp::new(&self.config)?;
        let prefix = KeyPrefix::new(&self.config.key_prefix);
        tracing::debug!(
            base_url = http.base_url(),
            prefix = %prefix,
            "Built knobz client"
        );
        Ok(KnobzClient {
            http,
            config: self.config,
            prefix,
        })
    }
}
