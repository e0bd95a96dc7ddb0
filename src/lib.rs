//! # mqttmirror
//!
//! `mqttmirror` subscribes to every topic on an MQTT broker and mirrors the
//! latest payload seen on each topic into an embedded key-value store, with
//! optional expiry. The mirrored state is served over HTTP as an HTML table
//! and a JSON mapping, giving a queryable "last known value" snapshot of a
//! home-automation topic hierarchy.
//!
//! ## Core Modules
//!
//! - `filter`: decides which topics represent real device readings worth
//!   caching. Command (`/set`) topics, test namespaces and a fixed set of
//!   vendor-internal prefixes are excluded.
//! - `store`: the last-value store, at most one live entry per topic,
//!   backed by an embedded sled database.
//! - `bridge`: the MQTT ingest loop feeding accepted messages into the store.
//! - `snapshot`: the sorted, filtered view of all cached readings.
//! - `http`: the axum surface exposing the snapshot as HTML and JSON.
//! - `config`: handles loading and merging server configuration.
//! - `utils`: shared error types and logging setup.

pub mod bridge;
pub mod config;
pub mod filter;
pub mod http;
pub mod snapshot;
pub mod store;
pub mod utils;
