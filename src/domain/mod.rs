//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Domain types handed to callers
//! - `wire.rs` — Raw serde structs matching Consul responses
//! - `convert.rs` — Conversions from wire types to domain types
//! - `client.rs` — Sub-client with the fetch methods

pub mod feature;
