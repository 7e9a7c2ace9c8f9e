//! Network defaults for the Consul agent connection.

/// Default Consul agent host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default Consul HTTP API port.
pub const DEFAULT_PORT: u16 = 8500;

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Path of the KV endpoint, relative to the agent base URL.
pub const KV_API_PATH: &str = "/v1/kv";
