//! HTTP transport layer bound to one Consul agent.

pub mod client;
mod tls;

pub use client::ConsulHttp;
