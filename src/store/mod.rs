//! The `store` module provides the last-value store: at most one live entry
//! per topic, the value being the raw payload last seen on that topic.
//!
//! Entries may carry an absolute expiry deadline; an expired entry is
//! indistinguishable from one that was never written. The store exclusively
//! owns all cached state — the ingest bridge and the snapshot reader only go
//! through its `set`/`get`/`list_keys`/`bulk_get` contract.
//!
//! Backed by `sled` as an embedded key-value store.

pub mod sled_store;

pub use sled_store::LastValueStore;

#[cfg(test)]
mod tests;
