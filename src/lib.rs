//! # knobz-consul
//!
//! Feature flags for knobz, read from a folder of Consul's KV store.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Configuration, key prefixes, errors
//! 2. **HTTP** — internal `ConsulHttp`, one recursive KV listing per call
//! 3. **Domain** — KV wire types and their conversion into `Feature` records
//! 4. **High-Level Client** — `KnobzClient` with the features sub-client
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use knobz_consul::prelude::*;
//!
//! let client = KnobzClient::builder()
//!     .host("consul.service.consul")
//!     .key_prefix("conf/flags")
//!     .strip_file_extension(true)
//!     .build()?;
//!
//! for feature in client.fetch_features().await? {
//!     println!("{} enabled={:?}", feature.id(), feature.enabled());
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Client settings.
pub mod config;

/// Unified SDK error types.
pub mod error;

/// Network defaults.
pub mod network;

/// Shared newtypes.
pub mod shared;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// Consul KV transport. Reached through `KnobzClient::features()`.
pub(crate) mod http;

// ── Layer 3: Domain ──────────────────────────────────────────────────────────

/// Domain modules (vertical slices): types, wire types, conversions.
pub mod domain;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `KnobzClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Configuration
    pub use crate::config::{CaCertificate, ConsulConfig};
    pub use crate::shared::KeyPrefix;

    // Domain types
    pub use crate::domain::feature::wire::KvEntry;
    pub use crate::domain::feature::Feature;

    // Errors
    pub use crate::error::{DecodeError, HttpError, KnobzError};

    // Network
    pub use crate::network::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_TIMEOUT_MS};

    // Clients
    pub use crate::client::{FeaturesClient, KnobzClient, KnobzClientBuilder};
}
