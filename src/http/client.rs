//! Low-level HTTP client — `ConsulHttp`.
//!
//! Issues the recursive KV listing and returns wire types. Conversion to
//! feature records happens in the feature domain.

use crate::config::ConsulConfig;
use crate::domain::feature::wire::KvEntry;
use crate::error::{HttpError, KnobzError};
use crate::http::tls;
use crate::network::KV_API_PATH;
use crate::shared::KeyPrefix;

use reqwest::Client;
use serde::de::DeserializeOwned;

/// Query string sent with every listing: the whole subtree, served by any
/// agent (stale reads are fine for flags).
const LIST_QUERY: &str = "recurse=true&stale=true";

/// Low-level HTTP client for the Consul KV API.
#[derive(Debug, Clone)]
pub struct ConsulHttp {
    base_url: String,
    client: Client,
}

impl ConsulHttp {
    pub fn new(config: &ConsulConfig) -> Result<Self, KnobzError> {
        let mut builder = Client::builder()
            .timeout(config.timeout())
            .pool_max_idle_per_host(10);

        if config.secure {
            builder = tls::apply_trust_anchor(builder, config.ca_certificate.as_ref())?;
        } else if config.ca_certificate.is_some() {
            tracing::warn!("CA certificate configured but `secure` is off; ignoring it");
        }

        let client = builder
            .build()
            .map_err(|e| KnobzError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.base_url(),
            client,
        })
    }

    /// `scheme://host:port` of the agent.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full listing URL for `prefix`.
    pub fn kv_url(&self, prefix: &KeyPrefix) -> String {
        format!(
            "{}{}/{}?{}",
            self.base_url,
            KV_API_PATH,
            prefix.url_path(),
            LIST_QUERY
        )
    }

    // ── KV ───────────────────────────────────────────────────────────────

    /// List every entry under `prefix`, in the store's key order.
    ///
    /// A 404 means the prefix holds no keys and yields an empty list. Every
    /// other failure is returned as is. Single attempt, no retries.
    pub async fn list_entries(&self, prefix: &KeyPrefix) -> Result<Vec<KvEntry>, HttpError> {
        let url = self.kv_url(prefix);
        tracing::debug!(url = %url, "Listing KV entries");

        match self.get::<Vec<KvEntry>>(&url).await {
            Ok(entries) => Ok(entries),
            Err(HttpError::NotFound(_)) => {
                tracing::debug!(prefix = %prefix, "Prefix not found, no entries");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        let resp = self.client.get(url).send().await.map_err(from_reqwest)?;
        let status = resp.status();

        if status.is_success() {
            return resp.json::<T>().await.map_err(from_reqwest);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            403 => Err(HttpError::Forbidden(body_text)),
            404 => Err(HttpError::NotFound(body_text)),
            429 => Err(HttpError::RateLimited),
            400..=499 => Err(HttpError::BadRequest {
                status: status_code,
                body: body_text,
            }),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}

fn from_reqwest(e: reqwest::Error) -> HttpError {
    if e.is_timeout() {
        HttpError::Timeout
    } else {
        HttpError::Reqwest(e)
    }
}
