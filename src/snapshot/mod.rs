//! The `snapshot` module produces a point-in-time view of all cached
//! readings: filter-passing topics only, sorted ascending, paired with their
//! current values.
//!
//! The listing and the bulk read are two separate store calls; an entry that
//! expires between them shows up as a `None` value rather than an error.

use crate::filter::is_interesting;
use crate::store::LastValueStore;
use crate::utils::error::StoreError;

/// One row of the snapshot: a topic and its last value, if still live.
pub type SnapshotEntry = (String, Option<String>);

/// Full, filtered, lexicographically sorted view of the cached state.
///
/// Read-only; topics that fail the filter are omitted even if the store
/// still holds an entry for them (they may predate a filter change).
pub fn snapshot(store: &LastValueStore) -> Result<Vec<SnapshotEntry>, StoreError> {
    let mut topics: Vec<String> = store
        .list_keys()?
        .into_iter()
        .filter(|t| is_interesting(t))
        .collect();
    topics.sort();

    let values = store.bulk_get(&topics)?;
    Ok(topics.into_iter().zip(values).collect())
}
