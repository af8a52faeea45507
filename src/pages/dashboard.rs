//! Dashboard page: counters plus the latest requests and donations.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::{spawn_task, use_client};
use crate::state::dashboard::{DashboardState, reload_dashboard};

/// Dashboard overview. Refetches on every mount.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let client = use_client().get_value();
    spawn_task(async move {
        reload_dashboard(&dashboard, &client).await;
    });

    let stat = move |label: &'static str, pick: fn(&DashboardState) -> u32, class: &'static str| {
        view! {
            <div class=format!("stat-card {class}")>
                <span class="stat-card__value">{move || dashboard.with(pick)}</span>
                <span class="stat-card__label">{label}</span>
            </div>
        }
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Dashboard"</h1>
            </header>
            {move || dashboard.with(|d| d.error.clone()).map(|e| view! { <p class="page-error">{e}</p> })}
            <Show
                when=move || !dashboard.with(|d| d.loading)
                fallback=|| view! { <p>"Loading dashboard..."</p> }
            >
                <section class="dashboard-page__stats">
                    {stat("My requests", |d| d.summary.stats.total_requests, "")}
                    {stat("Pending requests", |d| d.summary.stats.pending_requests, "stat-card--pending")}
                    {stat("Completed requests", |d| d.summary.stats.completed_requests, "stat-card--done")}
                    {stat("My donations", |d| d.summary.stats.total_donations, "")}
                    {stat("Pending donations", |d| d.summary.stats.pending_donations, "stat-card--pending")}
                    {stat("Completed donations", |d| d.summary.stats.completed_donations, "stat-card--done")}
                    {stat("Available donors", |d| d.summary.stats.available_donors_count, "stat-card--info")}
                    {stat("Urgent requests", |d| d.summary.stats.urgent_requests_count, "stat-card--urgent")}
                </section>

                <section class="dashboard-page__recent">
                    <h2>"Recent requests"</h2>
                    {move || {
                        let recent = dashboard.with(|d| d.summary.recent_requests.clone());
                        if recent.is_empty() {
                            return view! { <p class="empty">"No blood requests yet."</p> }.into_any();
                        }
                        view! {
                            <ul class="recent-list">
                                {recent
                                    .into_iter()
                                    .map(|r| {
                                        view! {
                                            <li class="recent-list__item">
                                                <span class="recent-list__group">{r.blood_group.as_str()}</span>
                                                <span>{r.patient_name}</span>
                                                <span>{r.hospital_name}</span>
                                                <span class=format!("badge badge--status-{}", r.status.as_str())>
                                                    {r.status.label()}
                                                </span>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                            .into_any()
                    }}
                    <A href="/dashboard/requests">"View all requests"</A>
                </section>

                <section class="dashboard-page__recent">
                    <h2>"Recent donations"</h2>
                    {move || {
                        let recent = dashboard.with(|d| d.summary.recent_donations.clone());
                        if recent.is_empty() {
                            return view! { <p class="empty">"No donations yet."</p> }.into_any();
                        }
                        view! {
                            <ul class="recent-list">
                                {recent
                                    .into_iter()
                                    .map(|d| {
                                        let title = d
                                            .patient_name
                                            .clone()
                                            .unwrap_or_else(|| format!("Request #{}", d.blood_request));
                                        view! {
                                            <li class="recent-list__item">
                                                <span>{title}</span>
                                                <span>{d.donation_date.unwrap_or_default()}</span>
                                                <span class=format!("badge badge--status-{}", d.status.as_str())>
                                                    {d.status.label()}
                                                </span>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                            .into_any()
                    }}
                    <A href="/dashboard/donations">"View donation history"</A>
                </section>
            </Show>
        </div>
    }
}
