//! Sign-in page with email-or-username and password.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use records::FieldErrors;
use records::validate::{NON_FIELD, validate_login};

use crate::app::{spawn_task, use_client};
use crate::state::auth::AuthState;
use crate::state::notifications::{NoticeKind, NotificationCenter, notify};
use crate::util::auth::{DASHBOARD_ROUTE, install_authed_redirect};

/// Login page. A visitor who is already signed in goes straight to the
/// dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NotificationCenter>>();
    let client = use_client();
    let navigate = use_navigate();

    install_authed_redirect(auth, navigate.clone());

    let identifier = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let request = match validate_login(&identifier.get_untracked(), &password.get_untracked()) {
            Ok(request) => request,
            Err(found) => {
                errors.set(found);
                return;
            }
        };
        errors.set(FieldErrors::new());
        submitting.set(true);
        let client = client.get_value();
        let navigate = navigate.clone();
        spawn_task(async move {
            match client.login(&request).await {
                Ok(resp) => {
                    let (user, credentials) = resp.into_parts();
                    auth.update(|a| a.login(client.store(), user, &credentials));
                    notify(&notices, NoticeKind::Success, "Login successful!");
                    navigate(DASHBOARD_ROUTE, NavigateOptions::default());
                }
                Err(err) => {
                    log::warn!("login: failed: {err}");
                    let mut found = err.field_errors().cloned().unwrap_or_default();
                    if found.is_empty() {
                        found.insert(NON_FIELD, err.user_message());
                    }
                    errors.set(found);
                }
            }
            submitting.set(false);
        });
    };

    let field_error = move |field: &'static str| move || errors.with(|e| e.get(field).map(str::to_owned));

    view! {
        <div class="auth-page">
            <form class="auth-page__card form" on:submit=on_submit>
                <h1>"Sign in"</h1>
                <p class="form__error form__error--banner">{field_error(NON_FIELD)}</p>
                <label class="form__field">
                    <span class="form__label">"Email or username"</span>
                    <input
                        class="form__input"
                        type="text"
                        autocomplete="username"
                        prop:value=move || identifier.get()
                        on:input=move |ev| identifier.set(event_target_value(&ev))
                    />
                    <span class="form__error">{field_error("email")}</span>
                </label>
                <label class="form__field">
                    <span class="form__label">"Password"</span>
                    <input
                        class="form__input"
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <span class="form__error">{field_error("password")}</span>
                </label>
                <button type="submit" class="btn btn--primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                </button>
                <p class="auth-page__switch">
                    "No account yet? " <A href="/register">"Register"</A>
                </p>
            </form>
        </div>
    }
}
