//! Blood request list with filters, workflow actions and the create dialog.

use leptos::prelude::*;
use records::{BloodGroup, BloodRequest, RequestAction, RequestFilter, RequestStatus, Urgency, Viewer};

use crate::app::{ClientHandle, spawn_task, use_client};
use crate::components::request_card::RequestCard;
use crate::components::request_form::CreateRequestDialog;
use crate::state::auth::AuthState;
use crate::state::notifications::{NoticeKind, NotificationCenter, notify};
use crate::state::profile::ProfileState;
use crate::state::requests::{RequestsState, apply_filter, reload_requests, run_request_action};
use crate::util::dialog;

const CONFIRM_CANCEL: &str = "Are you sure you want to cancel this request?";

#[component]
pub fn RequestsPage() -> impl IntoView {
    let requests = expect_context::<RwSignal<RequestsState>>();
    let notices = expect_context::<RwSignal<NotificationCenter>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let profile = expect_context::<RwSignal<ProfileState>>();
    let client = use_client();
    let show_create = RwSignal::new(false);

    let reload = move || {
        let client = client.get_value();
        spawn_task(async move {
            reload_requests(&requests, &client).await;
        });
    };
    reload();

    let on_action = Callback::new(move |(id, action): (u64, RequestAction)| {
        if action == RequestAction::Cancel && !dialog::confirm(CONFIRM_CANCEL) {
            return;
        }
        let client = client.get_value();
        spawn_task(async move {
            run_request_action(&requests, &notices, &client, id, action).await;
        });
    });

    let on_created = Callback::new(move |created: BloodRequest| {
        log::info!("requests: created #{}", created.id);
        notify(&notices, NoticeKind::Success, "Blood request created successfully!");
        reload();
    });
    let on_close = Callback::new(move |()| show_create.set(false));

    let rows = move || {
        let viewer = auth.with(AuthState::user_id).map(|id| Viewer { id, available: profile.with(ProfileState::available) });
        match viewer {
            Some(viewer) => requests.with(|s| s.rows(&viewer)),
            None => Vec::new(),
        }
    };

    view! {
        <div class="requests-page">
            <header class="requests-page__header">
                <h1>"Blood Requests"</h1>
                <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                    "+ New Request"
                </button>
            </header>

            <FilterBar requests=requests client=client/>

            {move || requests.with(|s| s.error.clone()).map(|e| view! { <p class="page-error">{e}</p> })}

            <Show
                when=move || !requests.with(|s| s.loading && s.items.is_empty())
                fallback=|| view! { <p>"Loading blood requests..."</p> }
            >
                {move || {
                    let rows = rows();
                    if rows.is_empty() {
                        return view! { <p class="empty">"No blood requests match these filters."</p> }.into_any();
                    }
                    view! {
                        <div class="requests-page__list">
                            {rows
                                .into_iter()
                                .map(|row| view! { <RequestCard row=row on_action=on_action/> })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }}
            </Show>

            <Show when=move || show_create.get()>
                <CreateRequestDialog on_created=on_created on_close=on_close/>
            </Show>
        </div>
    }
}

/// Status, blood group and urgency selectors plus the "mine only" toggle.
/// Every change replaces the filter and re-fetches.
#[component]
fn FilterBar(requests: RwSignal<RequestsState>, client: ClientHandle) -> impl IntoView {
    let change = move |edit: Box<dyn FnOnce(&mut RequestFilter)>| {
        let Some(mut filter) = requests.try_with_untracked(|s| s.filter.clone()) else {
            return;
        };
        edit(&mut filter);
        let client = client.get_value();
        spawn_task(async move {
            apply_filter(&requests, &client, filter).await;
        });
    };

    view! {
        <div class="filter-bar">
            <select
                class="form__input"
                prop:value=move || requests.with(|s| s.filter.status.map(RequestStatus::as_str).unwrap_or(""))
                on:change=move |ev| {
                    let status = event_target_value(&ev).parse::<RequestStatus>().ok();
                    change(Box::new(move |f| f.status = status));
                }
            >
                <option value="">"All statuses"</option>
                {RequestStatus::ALL
                    .iter()
                    .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                    .collect::<Vec<_>>()}
            </select>
            <select
                class="form__input"
                prop:value=move || requests.with(|s| s.filter.blood_group.map(BloodGroup::as_str).unwrap_or(""))
                on:change=move |ev| {
                    let group = event_target_value(&ev).parse::<BloodGroup>().ok();
                    change(Box::new(move |f| f.blood_group = group));
                }
            >
                <option value="">"All blood groups"</option>
                {BloodGroup::ALL
                    .iter()
                    .map(|g| view! { <option value=g.as_str()>{g.as_str()}</option> })
                    .collect::<Vec<_>>()}
            </select>
            <select
                class="form__input"
                prop:value=move || requests.with(|s| s.filter.urgency.map(Urgency::as_str).unwrap_or(""))
                on:change=move |ev| {
                    let urgency = event_target_value(&ev).parse::<Urgency>().ok();
                    change(Box::new(move |f| f.urgency = urgency));
                }
            >
                <option value="">"All urgencies"</option>
                {Urgency::ALL
                    .iter()
                    .map(|u| view! { <option value=u.as_str()>{u.label()}</option> })
                    .collect::<Vec<_>>()}
            </select>
            <label class="filter-bar__toggle">
                <input
                    type="checkbox"
                    prop:checked=move || requests.with(|s| s.filter.my_requests)
                    on:change=move |ev| {
                        let mine = event_target_checked(&ev);
                        change(Box::new(move |f| f.my_requests = mine));
                    }
                />
                "My requests only"
            </label>
        </div>
    }
}
