//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Dashboard routes apply identical unauthenticated redirect behavior; the
//! login and registration pages bounce a signed-in user to the dashboard.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AuthState, SessionPhase};

pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// Whether a guarded page should send the visitor to the login route.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    state.phase() == SessionPhase::Anonymous
}

/// Whether a public auth page should send the visitor to the dashboard.
pub fn should_redirect_authed(state: &AuthState) -> bool {
    state.phase() == SessionPhase::Authenticated
}

/// Redirect to `login_route` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, login_route: String, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.with(should_redirect_unauth) {
            navigate(&login_route, NavigateOptions::default());
        }
    });
}

/// Redirect to the dashboard once a user is present.
pub fn install_authed_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.with(should_redirect_authed) {
            navigate(DASHBOARD_ROUTE, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
