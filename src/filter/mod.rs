//! The `filter` module decides which MQTT topics are worth mirroring.
//!
//! A home-automation broker carries a lot of traffic that is not a device
//! reading: write/command topics, automation action topics, test namespaces
//! and chatty vendor-internal hierarchies. The ingest bridge and the snapshot
//! reader both consult [`is_interesting`] so that only real readings ever
//! reach a reader.

/// Topic prefixes that never represent device readings.
const EXCLUDED_PREFIXES: [&str; 6] = [
    "/homeseer/action/",
    "happy",
    "/deconz",
    "/hubitat",
    "/openmqtt",
    "/xiaomi",
];

/// Substrings that mark a topic as internal or test traffic.
const EXCLUDED_SUBSTRINGS: [&str; 2] = ["/isy", "test"];

/// Returns `true` if `topic` is a device reading worth caching.
///
/// A topic qualifies when it is namespace-qualified (starts with `/` and is
/// longer than the bare `/`), is not a `/set` command topic, and matches none
/// of the excluded substrings or prefixes. Total over all inputs; malformed
/// topics are simply not interesting.
pub fn is_interesting(topic: &str) -> bool {
    if topic.is_empty() || !topic.starts_with('/') || topic.len() <= 1 {
        return false;
    }

    if EXCLUDED_SUBSTRINGS.iter().any(|s| topic.contains(s)) {
        return false;
    }

    if topic.ends_with("/set") {
        return false;
    }

    !EXCLUDED_PREFIXES.iter().any(|p| topic.starts_with(p))
}
