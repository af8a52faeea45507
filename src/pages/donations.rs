//! Donation history with donor/recipient tabs.

use leptos::prelude::*;
use records::{DonationAction, DonationRole, Viewer};

use crate::app::{spawn_task, use_client};
use crate::components::donation_card::DonationCard;
use crate::state::auth::AuthState;
use crate::state::donations::{DonationsState, reload_donations, run_donation_action, select_role};
use crate::state::notifications::NotificationCenter;
use crate::util::dialog;

fn confirm_prompt(action: DonationAction) -> &'static str {
    match action {
        DonationAction::Confirm => "Are you sure you want to confirm this donation? This action cannot be undone.",
        DonationAction::Cancel => "Are you sure you want to cancel this donation?",
    }
}

#[component]
pub fn DonationsPage() -> impl IntoView {
    let donations = expect_context::<RwSignal<DonationsState>>();
    let notices = expect_context::<RwSignal<NotificationCenter>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let client = use_client();

    {
        let client = client.get_value();
        spawn_task(async move {
            reload_donations(&donations, &client).await;
        });
    }

    let on_action = Callback::new(move |(id, action): (u64, DonationAction)| {
        if !dialog::confirm(confirm_prompt(action)) {
            return;
        }
        let client = client.get_value();
        spawn_task(async move {
            run_donation_action(&donations, &notices, &client, id, action).await;
        });
    });

    let on_tab = move |role: DonationRole| {
        if donations.with_untracked(|s| s.role) == role {
            return;
        }
        let client = client.get_value();
        spawn_task(async move {
            select_role(&donations, &client, role).await;
        });
    };

    let rows = move || match auth.with(AuthState::user_id) {
        Some(id) => donations.with(|s| s.rows(&Viewer::new(id))),
        None => Vec::new(),
    };

    view! {
        <div class="donations-page">
            <header class="donations-page__header">
                <h1>"Donation History"</h1>
            </header>

            <nav class="tabs">
                {DonationRole::ALL
                    .into_iter()
                    .map(|role| {
                        view! {
                            <button
                                class="tabs__tab"
                                class:tabs__tab--active=move || donations.with(|s| s.role == role)
                                on:click=move |_| on_tab(role)
                            >
                                {role.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>

            {move || donations.with(|s| s.error.clone()).map(|e| view! { <p class="page-error">{e}</p> })}

            <Show
                when=move || !donations.with(|s| s.loading && s.items.is_empty())
                fallback=|| view! { <p>"Loading donation history..."</p> }
            >
                {move || {
                    let rows = rows();
                    if rows.is_empty() {
                        return view! { <p class="empty">"No donations to show."</p> }.into_any();
                    }
                    view! {
                        <div class="donations-page__list">
                            {rows
                                .into_iter()
                                .map(|row| view! { <DonationCard row=row on_action=on_action/> })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }}
            </Show>
        </div>
    }
}
