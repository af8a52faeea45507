use super::*;
use crate::util::storage::MemoryStorage;

fn user() -> User {
    User { id: 7, username: "rahim".into(), email: "rahim@example.com".into() }
}

fn creds() -> Credentials {
    Credentials { access: "access-1".into(), refresh: "refresh-1".into() }
}

fn store() -> (TokenStore<MemoryStorage>, MemoryStorage) {
    let storage = MemoryStorage::new();
    (TokenStore::new(storage.clone()), storage)
}

// =============================================================
// save / load
// =============================================================

#[test]
fn save_then_load_returns_same_session() {
    let (store, _) = store();
    store.save(&creds(), &user());
    let loaded = store.load().unwrap();
    assert_eq!(loaded.user, user());
    assert_eq!(loaded.credentials, creds());
}

#[test]
fn save_uses_fixed_key_names() {
    let (store, storage) = store();
    store.save(&creds(), &user());
    assert_eq!(storage.get("access_token").as_deref(), Some("access-1"));
    assert_eq!(storage.get("refresh_token").as_deref(), Some("refresh-1"));
    assert!(storage.get("user").unwrap().contains("rahim"));
}

#[test]
fn load_on_empty_storage_is_none() {
    let (store, _) = store();
    assert!(store.load().is_none());
}

#[test]
fn user_without_tokens_is_not_a_session() {
    let (store, storage) = store();
    storage.set(USER_KEY, r#"{"id":1,"username":"u","email":"u@x.io"}"#);
    assert!(store.load().is_none());
}

#[test]
fn corrupt_user_record_loads_as_empty() {
    let (store, storage) = store();
    store.save(&creds(), &user());
    storage.set(USER_KEY, "{not json");
    assert!(store.load().is_none());
}

// =============================================================
// clear
// =============================================================

#[test]
fn clear_removes_everything() {
    let (store, storage) = store();
    store.save(&creds(), &user());
    store.clear();
    assert!(storage.is_empty());
    assert!(store.access_token().is_none());
    assert!(store.refresh_token().is_none());
}

#[test]
fn clear_is_idempotent_on_empty_store() {
    let (store, storage) = store();
    store.clear();
    store.clear();
    assert!(storage.is_empty());
}

// =============================================================
// rotation
// =============================================================

#[test]
fn replace_access_keeps_refresh_and_user() {
    let (store, _) = store();
    store.save(&creds(), &user());
    store.replace_access("access-2");
    let loaded = store.load().unwrap();
    assert_eq!(loaded.credentials.access, "access-2");
    assert_eq!(loaded.credentials.refresh, "refresh-1");
    assert_eq!(loaded.user, user());
}

#[test]
fn empty_token_strings_read_as_absent() {
    let (store, storage) = store();
    storage.set(ACCESS_TOKEN_KEY, "");
    assert!(store.access_token().is_none());
}
