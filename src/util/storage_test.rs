use super::*;

#[test]
fn memory_storage_clones_share_entries() {
    let a = MemoryStorage::new();
    let b = a.clone();
    a.set("k", "v");
    assert_eq!(b.get("k").as_deref(), Some("v"));
    b.remove("k");
    assert!(a.get("k").is_none());
    assert!(a.is_empty());
}

#[test]
fn memory_storage_overwrites_existing_key() {
    let s = MemoryStorage::new();
    s.set("k", "1");
    s.set("k", "2");
    assert_eq!(s.get("k").as_deref(), Some("2"));
    assert_eq!(s.len(), 1);
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_storage_is_inert_without_csr() {
    let s = BrowserStorage;
    s.set("k", "v");
    assert!(s.get("k").is_none());
    s.remove("k");
}
