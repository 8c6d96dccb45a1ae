use super::*;

#[test]
fn memory_store_starts_empty() {
    let store = MemoryStore::new();
    assert_eq!(store.get("token"), None);
}

#[test]
fn memory_store_set_get_remove() {
    let store = MemoryStore::new();
    store.set("token", "abc");
    assert_eq!(store.get("token").as_deref(), Some("abc"));
    store.set("token", "def");
    assert_eq!(store.get("token").as_deref(), Some("def"));
    store.remove("token");
    assert_eq!(store.get("token"), None);
}

#[test]
fn memory_store_with_entry_seeds_value() {
    let store = MemoryStore::with_entry("token", "abc");
    assert_eq!(store.get("token").as_deref(), Some("abc"));
    assert_eq!(store.get("other"), None);
}

#[test]
fn shared_store_is_usable_through_trait_object() {
    let store: SharedCredentialStore = Arc::new(MemoryStore::with_entry("k", "v"));
    let clone = Arc::clone(&store);
    clone.remove("k");
    assert_eq!(store.get("k"), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_reads_empty_off_browser() {
    let store = BrowserStorage;
    store.set("token", "abc");
    assert_eq!(store.get("token"), None);
}
