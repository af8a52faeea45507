//! Session context: who is signed in.
//!
//! DESIGN
//! ======
//! `AuthState` starts in the loading phase and settles once `restore` has
//! read the token store. After that it moves between anonymous and
//! authenticated only through `login`, `logout` and `expire`. The store and
//! this state change together so a user is never shown without credentials.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use records::{Credentials, User};

use super::StateCell;
use super::dashboard::DashboardState;
use super::donations::DonationsState;
use super::profile::ProfileState;
use super::requests::RequestsState;
use crate::net::token_store::TokenStore;
use crate::util::storage::KeyValueStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Loading,
    Anonymous,
    Authenticated,
}

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        match (&self.user, self.loading) {
            (Some(_), _) => SessionPhase::Authenticated,
            (None, true) => SessionPhase::Loading,
            (None, false) => SessionPhase::Anonymous,
        }
    }

    /// Settle the startup phase from whatever the store holds.
    ///
    /// A partial or corrupt record is wiped so no stale token goes out.
    pub fn restore<S: KeyValueStore>(&mut self, store: &TokenStore<S>) {
        self.user = store.load().map(|session| session.user);
        if self.user.is_none() {
            store.clear();
        }
        self.loading = false;
        log::debug!("auth: restored session, signed in = {}", self.user.is_some());
    }

    /// Persist a fresh session. Overwrites any session already present.
    pub fn login<S: KeyValueStore>(&mut self, store: &TokenStore<S>, user: User, credentials: &Credentials) {
        store.save(credentials, &user);
        log::info!("auth: signed in as {}", user.username);
        self.user = Some(user);
        self.loading = false;
    }

    pub fn logout<S: KeyValueStore>(&mut self, store: &TokenStore<S>) {
        store.clear();
        self.user = None;
        self.loading = false;
    }

    /// The HTTP client already cleared the store; drop the in-memory user.
    pub fn expire(&mut self) {
        self.user = None;
        self.loading = false;
    }

    #[must_use]
    pub fn user_id(&self) -> Option<u64> {
        self.user.as_ref().map(|u| u.id)
    }
}

/// Drop everything fetched for the account that just left, so the next
/// account on this browser starts from empty pages. Runs on logout and on
/// session expiry.
pub fn reset_session_state(
    requests: &impl StateCell<RequestsState>,
    donations: &impl StateCell<DonationsState>,
    dashboard: &impl StateCell<DashboardState>,
    profile: &impl StateCell<ProfileState>,
) {
    requests.modify(|s| *s = RequestsState::default());
    donations.modify(|s| *s = DonationsState::default());
    dashboard.modify(|s| *s = DashboardState::default());
    profile.modify(|s| *s = ProfileState::default());
}
