use tempfile::tempdir;

use super::IngestBridge;
use crate::store::LastValueStore;

fn create_test_bridge(ttl_seconds: Option<u64>) -> (tempfile::TempDir, IngestBridge, LastValueStore) {
    let dir = tempdir().unwrap();
    let store = LastValueStore::open(dir.path().to_str().unwrap(), "readings").unwrap();
    let bridge = IngestBridge::new(store.clone(), ttl_seconds);
    (dir, bridge, store)
}

#[test]
fn accepted_message_is_stored() {
    let (_dir, bridge, store) = create_test_bridge(None);

    bridge.handle_message("/room/temp", "21.5");

    assert_eq!(store.get("/room/temp").unwrap(), Some("21.5".to_string()));
}

#[test]
fn filtered_topics_never_reach_the_store() {
    let (_dir, bridge, store) = create_test_bridge(None);

    bridge.handle_message("/room/temp", "21.5");
    bridge.handle_message("/room/temp/set", "22");
    bridge.handle_message("/homeseer/action/1", "x");

    assert_eq!(store.list_keys().unwrap(), vec!["/room/temp".to_string()]);
    assert_eq!(store.get("/room/temp").unwrap(), Some("21.5".to_string()));
    assert_eq!(store.get("/room/temp/set").unwrap(), None);
    assert_eq!(store.get("/homeseer/action/1").unwrap(), None);
}

#[test]
fn later_message_overwrites_earlier_value() {
    let (_dir, bridge, store) = create_test_bridge(None);

    bridge.handle_message("/a", "1");
    bridge.handle_message("/a", "2");

    assert_eq!(store.get("/a").unwrap(), Some("2".to_string()));
}

#[test]
fn redelivery_of_the_same_message_is_idempotent() {
    let (_dir, bridge, store) = create_test_bridge(None);

    bridge.handle_message("/a", "1");
    bridge.handle_message("/a", "1");

    assert_eq!(store.get("/a").unwrap(), Some("1".to_string()));
    assert_eq!(store.list_keys().unwrap().len(), 1);
}

#[test]
fn configured_ttl_expires_bridged_entries() {
    let (_dir, bridge, store) = create_test_bridge(Some(1));

    bridge.handle_message("/room/temp", "21.5");
    assert_eq!(store.get("/room/temp").unwrap(), Some("21.5".to_string()));

    std::thread::sleep(std::time::Duration::from_millis(1200));
    assert_eq!(store.get("/room/temp").unwrap(), None);
}

#[test]
fn json_payloads_are_stored_verbatim() {
    let (_dir, bridge, store) = create_test_bridge(None);

    bridge.handle_message("/json/blob", "{\"temp\": 21.5}");
    assert_eq!(
        store.get("/json/blob").unwrap(),
        Some("{\"temp\": 21.5}".to_string())
    );
}
