//! Root application component with routing and context providers.

use std::future::Future;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::nav::DashboardLayout;
use crate::config::ClientConfig;
use crate::net::BrowserClient;
use crate::net::http::ApiClient;
use crate::net::token_store::TokenStore;
use crate::net::transport::BrowserTransport;
use crate::pages::{
    dashboard::DashboardPage, donations::DonationsPage, login::LoginPage, profile::ProfilePage,
    register::RegisterPage, requests::RequestsPage, verify_email::VerifyEmailPage,
};
use crate::state::auth::{AuthState, reset_session_state};
use crate::state::dashboard::DashboardState;
use crate::state::donations::DonationsState;
use crate::state::notifications::{NoticeKind, NotificationCenter, notify};
use crate::state::profile::ProfileState;
use crate::state::requests::RequestsState;
use crate::util::storage::BrowserStorage;

/// Context handle to the shared REST client. The client is not `Send`, so
/// it lives in local storage; the handle itself is `Copy`.
pub type ClientHandle = StoredValue<BrowserClient, LocalStorage>;

/// Handlers call `get_value()` on the handle when they fire.
pub fn use_client() -> ClientHandle {
    expect_context::<ClientHandle>()
}

/// Run a task on the browser event loop. Native builds drop it unpolled.
pub fn spawn_task(task: impl Future<Output = ()> + 'static) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(task);
    #[cfg(not(feature = "csr"))]
    drop(task);
}

/// Root application component.
///
/// Restores the session, wires the session-expired path and provides all
/// shared state contexts before routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let store = TokenStore::new(BrowserStorage);
    let client: BrowserClient =
        ApiClient::new(BrowserTransport::new(config.request_timeout_ms), store.clone(), config.clone());

    let auth = RwSignal::new(AuthState::default());
    let notices = RwSignal::new(NotificationCenter::default());
    let requests = RwSignal::new(RequestsState::default());
    let donations = RwSignal::new(DonationsState::default());
    let dashboard = RwSignal::new(DashboardState::default());
    let profile = RwSignal::new(ProfileState::default());

    auth.update(|a| a.restore(&store));

    // The guarded layout reacts to the cleared user and navigates to login.
    client.on_session_expired(move || {
        auth.update(AuthState::expire);
        reset_session_state(&requests, &donations, &dashboard, &profile);
        notify(&notices, NoticeKind::Warning, "Your session has expired. Please log in again.");
    });

    provide_context::<ClientHandle>(StoredValue::new_local(client));
    provide_context(config);
    provide_context(auth);
    provide_context(notices);
    provide_context(requests);
    provide_context(donations);
    provide_context(dashboard);
    provide_context(profile);

    view! {
        <Title text="Blood Bank"/>
        <crate::components::notification_tray::NotificationTray/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route
                    path=(StaticSegment("verify"), ParamSegment("uid"), ParamSegment("token"))
                    view=VerifyEmailPage
                />
                <ParentRoute path=StaticSegment("dashboard") view=DashboardLayout>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("requests") view=RequestsPage/>
                    <Route path=StaticSegment("donations") view=DonationsPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                </ParentRoute>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/dashboard"/> }/>
            </Routes>
        </Router>
    }
}
