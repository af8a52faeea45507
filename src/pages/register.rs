//! Account registration page.
//!
//! New accounts stay inactive until the emailed verification link is
//! followed, so success swaps the form for a "check your inbox" panel.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use records::FieldErrors;
use records::validate::{NON_FIELD, validate_registration};

use crate::app::{spawn_task, use_client};
use crate::state::auth::AuthState;
use crate::util::auth::install_authed_redirect;

const CHECK_EMAIL: &str = "Registration successful! Please check your email to verify your account.";

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let client = use_client();
    install_authed_redirect(auth, use_navigate());

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let submitting = RwSignal::new(false);
    let done = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let request = match validate_registration(
            &username.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
        ) {
            Ok(request) => request,
            Err(found) => {
                errors.set(found);
                return;
            }
        };
        errors.set(FieldErrors::new());
        submitting.set(true);
        let client = client.get_value();
        spawn_task(async move {
            match client.register(&request).await {
                Ok(resp) => {
                    let message = if resp.message.trim().is_empty() { CHECK_EMAIL.to_owned() } else { resp.message };
                    done.set(Some(message));
                }
                Err(err) => {
                    log::warn!("register: failed: {err}");
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

    let form = move || {
        view! {
            <form class="auth-page__card form" on:submit=on_submit>
                <h1>"Create an account"</h1>
                <p class="form__error form__error--banner">{field_error(NON_FIELD)}</p>
                <label class="form__field">
                    <span class="form__label">"Username"</span>
                    <input
                        class="form__input"
                        type="text"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <span class="form__error">{field_error("username")}</span>
                </label>
                <label class="form__field">
                    <span class="form__label">"Email"</span>
                    <input
                        class="form__input"
                        type="email"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <span class="form__error">{field_error("email")}</span>
                </label>
                <label class="form__field">
                    <span class="form__label">"Password"</span>
                    <input
                        class="form__input"
                        type="password"
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <span class="form__error">{field_error("password")}</span>
                </label>
                <button type="submit" class="btn btn--primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Registering..." } else { "Register" }}
                </button>
                <p class="auth-page__switch">
                    "Already registered? " <A href="/login">"Sign in"</A>
                </p>
            </form>
        }
    };

    view! {
        <div class="auth-page">
            <Show
                when=move || done.with(Option::is_some)
                fallback=form
            >
                <div class="auth-page__card">
                    <h1>"Check your inbox"</h1>
                    <p>{move || done.get().unwrap_or_default()}</p>
                    <A href="/login">"Go to sign in"</A>
                </div>
            </Show>
        </div>
    }
}
