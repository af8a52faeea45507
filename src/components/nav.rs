//! Signed-in shell: navigation bar, session guard and the routed page body.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::{A, Outlet};
use leptos_router::hooks::use_navigate;

use crate::app::{spawn_task, use_client};
use crate::config::ClientConfig;
use crate::state::auth::{AuthState, reset_session_state};
use crate::state::dashboard::DashboardState;
use crate::state::donations::DonationsState;
use crate::state::notifications::{NoticeKind, NotificationCenter, notify};
use crate::state::profile::{ProfileState, load_profile};
use crate::state::requests::RequestsState;
use crate::util::auth::install_unauth_redirect;

const LINKS: [(&str, &str); 4] = [
    ("/dashboard", "Dashboard"),
    ("/dashboard/requests", "Blood Requests"),
    ("/dashboard/donations", "Donations"),
    ("/dashboard/profile", "Profile"),
];

/// Layout for every `/dashboard` route.
///
/// Nothing below the bar renders until a user is present. The donor profile
/// is fetched whenever the signed-in account changes, since request actions
/// depend on donor availability.
#[component]
pub fn DashboardLayout() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let profile = expect_context::<RwSignal<ProfileState>>();
    let notices = expect_context::<RwSignal<NotificationCenter>>();
    let requests = expect_context::<RwSignal<RequestsState>>();
    let donations = expect_context::<RwSignal<DonationsState>>();
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let config = expect_context::<ClientConfig>();
    let client = use_client();
    let navigate = use_navigate();

    install_unauth_redirect(auth, config.login_route.clone(), navigate.clone());

    Effect::new(move || {
        if auth.with(AuthState::user_id).is_none() {
            return;
        }
        let client = client.get_value();
        spawn_task(async move {
            load_profile(&profile, &client).await;
        });
    });

    let login_route = config.login_route;
    let on_logout = move |_| {
        let client = client.get_value();
        auth.update(|a| a.logout(client.store()));
        reset_session_state(&requests, &donations, &dashboard, &profile);
        notify(&notices, NoticeKind::Info, "You have been logged out.");
        navigate(&login_route, NavigateOptions::default());
    };

    let username = move || auth.with(|a| a.user.as_ref().map(|u| u.username.clone()).unwrap_or_default());

    view! {
        <div class="shell">
            <nav class="shell__nav">
                <span class="shell__brand">"Blood Bank"</span>
                <ul class="shell__links">
                    {LINKS
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <li>
                                    <A href=*href exact=true>
                                        {*label}
                                    </A>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
                <span class="shell__user">{username}</span>
                <button class="btn btn--ghost" on:click=on_logout>
                    "Logout"
                </button>
            </nav>
            <main class="shell__body">
                <Show
                    when=move || auth.with(|a| a.user.is_some())
                    fallback=|| view! { <p class="shell__loading">"Loading..."</p> }
                >
                    <Outlet/>
                </Show>
            </main>
        </div>
    }
}
