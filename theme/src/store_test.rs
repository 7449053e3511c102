use super::*;

#[test]
fn empty_store_reads_none() {
    let store = MemoryStore::new();
    assert_eq!(store.get("theme").expect("read"), None);
}

#[test]
fn set_overwrites_previous_value() {
    let mut store = MemoryStore::new();
    store.set("theme", "dark").expect("write");
    store.set("theme", "light").expect("write");
    assert_eq!(store.get("theme").expect("read").as_deref(), Some("light"));
}

#[test]
fn keys_are_independent() {
    let store = MemoryStore::new().with_entry("other", "dark");
    assert_eq!(store.get("theme").expect("read"), None);
}

#[test]
fn read_only_store_rejects_writes_but_serves_seeded_reads() {
    let mut store = MemoryStore::read_only().with_entry("theme", "light");
    let err = store.set("theme", "dark").expect_err("write should fail");
    assert!(matches!(err, StoreError::Write { ref key, .. } if key == "theme"));
    assert_eq!(store.get("theme").expect("read").as_deref(), Some("light"));
}

#[test]
fn store_error_messages_name_the_key() {
    let err = StoreError::Read {
        key: "theme".to_owned(),
        reason: "SecurityError".to_owned(),
    };
    assert_eq!(err.to_string(), "failed to read `theme`: SecurityError");
}

#[test]
fn unreadable_store_rejects_reads_but_accepts_writes() {
    let mut store = MemoryStore::unreadable();
    let err = store.get("theme").expect_err("read should fail");
    assert!(matches!(err, StoreError::Read { ref key, .. } if key == "theme"));
    store.set("theme", "dark").expect("write");
}
