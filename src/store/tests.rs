use std::thread::sleep;
use std::time::Duration;

use tempfile::tempdir;

use super::LastValueStore;

fn create_test_store() -> (tempfile::TempDir, LastValueStore) {
    let dir = tempdir().unwrap();
    let store = LastValueStore::open(dir.path().to_str().unwrap(), "readings").unwrap();
    (dir, store)
}

#[test]
fn set_then_get_returns_value() {
    let (_dir, store) = create_test_store();

    store.set("/room/temp", "21.5", None).unwrap();
    assert_eq!(store.get("/room/temp").unwrap(), Some("21.5".to_string()));
}

#[test]
fn get_unknown_topic_returns_none() {
    let (_dir, store) = create_test_store();
    assert_eq!(store.get("/never/seen").unwrap(), None);
}

#[test]
fn overwrite_keeps_only_latest_value() {
    let (_dir, store) = create_test_store();

    store.set("/a", "1", None).unwrap();
    store.set("/a", "2", None).unwrap();

    assert_eq!(store.get("/a").unwrap(), Some("2".to_string()));
    assert_eq!(store.list_keys().unwrap(), vec!["/a".to_string()]);
}

#[test]
fn ttl_expires_entries() {
    let (_dir, store) = create_test_store();

    store.set("/room/temp", "21.5", Some(1)).unwrap();
    assert_eq!(
        store.get("/room/temp").unwrap(),
        Some("21.5".to_string()),
        "entry should be live right after the write"
    );

    sleep(Duration::from_millis(1200));
    assert_eq!(store.get("/room/temp").unwrap(), None);
}

#[test]
fn rewrite_refreshes_ttl_deadline() {
    let (_dir, store) = create_test_store();

    store.set("/door", "open", Some(1)).unwrap();
    sleep(Duration::from_millis(600));
    store.set("/door", "closed", Some(1)).unwrap();
    sleep(Duration::from_millis(600));

    // 1.2s after the first write, but only 0.6s after the refresh
    assert_eq!(store.get("/door").unwrap(), Some("closed".to_string()));
}

#[test]
fn entry_without_ttl_does_not_expire() {
    let (_dir, store) = create_test_store();

    store.set("/room/temp", "21.5", None).unwrap();
    sleep(Duration::from_millis(1100));
    assert_eq!(store.get("/room/temp").unwrap(), Some("21.5".to_string()));
}

#[test]
fn list_keys_skips_expired_entries() {
    let (_dir, store) = create_test_store();

    store.set("/keep", "1", None).unwrap();
    store.set("/drop", "2", Some(1)).unwrap();
    sleep(Duration::from_millis(1200));

    assert_eq!(store.list_keys().unwrap(), vec!["/keep".to_string()]);
}

#[test]
fn bulk_get_aligns_with_input_order() {
    let (_dir, store) = create_test_store();

    store.set("/b", "two", None).unwrap();
    store.set("/a", "one", None).unwrap();

    let topics = vec!["/b".to_string(), "/missing".to_string(), "/a".to_string()];
    let values = store.bulk_get(&topics).unwrap();

    assert_eq!(
        values,
        vec![
            Some("two".to_string()),
            None,
            Some("one".to_string()),
        ]
    );
}

#[test]
fn empty_payloads_are_stored() {
    let (_dir, store) = create_test_store();

    store.set("/blank", "", None).unwrap();
    assert_eq!(store.get("/blank").unwrap(), Some(String::new()));
}
