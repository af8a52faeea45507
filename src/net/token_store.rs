//! Persisted credentials and the cached user record.
//!
//! DESIGN
//! ======
//! One owner for the three persisted keys. The session context writes here on
//! login/logout and the HTTP client's refresh path rotates the access token;
//! nothing else reads or writes these keys. Writes are last-write-wins: the
//! UI thread is the only writer.
//!
//! Tokens are opaque. No structure check happens here.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use records::{Credentials, User};

use crate::util::storage::KeyValueStore;

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const USER_KEY: &str = "user";

/// What survives a page reload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredSession {
    pub credentials: Credentials,
    pub user: User,
}

#[derive(Clone, Debug, Default)]
pub struct TokenStore<S> {
    storage: S,
}

impl<S: KeyValueStore> TokenStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Persist a fresh credential pair and the user it belongs to,
    /// replacing whatever was stored.
    pub fn save(&self, credentials: &Credentials, user: &User) {
        let user_json = match serde_json::to_string(user) {
            Ok(json) => json,
            Err(e) => {
                log::error!("token store: user serialization failed: {e}");
                return;
            }
        };
        self.storage.set(ACCESS_TOKEN_KEY, &credentials.access);
        self.storage.set(REFRESH_TOKEN_KEY, &credentials.refresh);
        self.storage.set(USER_KEY, &user_json);
    }

    /// Stored session, if complete.
    ///
    /// A user without both tokens is not a session; a partial or corrupt
    /// record loads as empty.
    pub fn load(&self) -> Option<StoredSession> {
        let access = self.storage.get(ACCESS_TOKEN_KEY)?;
        let refresh = self.storage.get(REFRESH_TOKEN_KEY)?;
        let raw_user = self.storage.get(USER_KEY)?;
        match serde_json::from_str::<User>(&raw_user) {
            Ok(user) => Some(StoredSession { credentials: Credentials { access, refresh }, user }),
            Err(e) => {
                log::warn!("token store: discarding unreadable user record: {e}");
                None
            }
        }
    }

    /// Remove every persisted key. Safe to call repeatedly.
    pub fn clear(&self) {
        self.storage.remove(ACCESS_TOKEN_KEY);
        self.storage.remove(REFRESH_TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }

    pub fn access_token(&self) -> Option<String> {
        self.storage.get(ACCESS_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.storage.get(REFRESH_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// Rotate the access token after a successful refresh. The refresh
    /// token and user record are kept.
    pub fn replace_access(&self, access: &str) {
        self.storage.set(ACCESS_TOKEN_KEY, access);
    }
}
