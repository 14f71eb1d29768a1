use super::*;

#[test]
fn memory_storage_set_get_remove() {
    let store = MemoryStorage::new();
    assert!(store.is_empty());
    store.set("token", "abc");
    assert_eq!(store.get("token").as_deref(), Some("abc"));
    assert_eq!(store.len(), 1);
    store.remove("token");
    assert_eq!(store.get("token"), None);
    assert!(store.is_empty());
}

#[test]
fn memory_storage_overwrites() {
    let store = MemoryStorage::new();
    store.set("user", "a");
    store.set("user", "b");
    assert_eq!(store.get("user").as_deref(), Some("b"));
    assert_eq!(store.len(), 1);
}

#[test]
fn removing_missing_key_is_noop() {
    let store = MemoryStorage::new();
    store.remove("nope");
    assert!(store.is_empty());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_inert_off_browser() {
    let store = BrowserStorage;
    store.set("token", "abc");
    assert_eq!(store.get("token"), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn default_storage_off_browser_is_in_memory() {
    let store = default_storage();
    store.set("k", "v");
    assert_eq!(store.get("k").as_deref(), Some("v"));
}
