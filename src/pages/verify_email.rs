//! Landing page for the emailed verification link.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::app::{spawn_task, use_client};

#[derive(Clone, Debug, PartialEq, Eq)]
enum Outcome {
    Pending,
    Verified(String),
    Failed(String),
}

const VERIFIED: &str = "Your email has been verified. You can now sign in.";
const FAILED: &str = "Invalid or expired verification link.";

/// Verifies the `uid`/`token` pair from the URL once, on mount.
#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let params = use_params_map();
    let client = use_client().get_value();
    let outcome = RwSignal::new(Outcome::Pending);

    let (uid, token) = params.with_untracked(|p| (p.get("uid").unwrap_or_default(), p.get("token").unwrap_or_default()));
    if uid.is_empty() || token.is_empty() {
        outcome.set(Outcome::Failed(FAILED.to_owned()));
    } else {
        spawn_task(async move {
            let next = match client.verify_email(&uid, &token).await {
                Ok(resp) if resp.success => Outcome::Verified(non_empty(resp.message, VERIFIED)),
                Ok(resp) => Outcome::Failed(non_empty(resp.message, FAILED)),
                Err(err) => {
                    log::warn!("verify: failed: {err}");
                    Outcome::Failed(crate::state::action_error(&err, FAILED))
                }
            };
            outcome.set(next);
        });
    }

    view! {
        <div class="auth-page">
            <div class="auth-page__card">
                <h1>"Email verification"</h1>
                {move || match outcome.get() {
                    Outcome::Pending => view! { <p>"Verifying your email..."</p> }.into_any(),
                    Outcome::Verified(message) => {
                        view! {
                            <p class="auth-page__success">{message}</p>
                            <A href="/login">"Sign in"</A>
                        }
                            .into_any()
                    }
                    Outcome::Failed(message) => {
                        view! {
                            <p class="form__error">{message}</p>
                            <A href="/register">"Register again"</A>
                            " or "
                            <A href="/login">"sign in"</A>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}

fn non_empty(message: String, fallback: &str) -> String {
    if message.trim().is_empty() { fallback.to_owned() } else { message }
}
