//! Card for one donation record.

use leptos::prelude::*;
use records::DonationAction;

use crate::state::donations::DonationRow;

#[component]
pub fn DonationCard(row: DonationRow, on_action: Callback<(u64, DonationAction)>) -> impl IntoView {
    let DonationRow { donation, actions, busy, viewer_is_donor } = row;
    let id = donation.id;
    let status_class = format!("badge badge--status-{}", donation.status.as_str());
    let role = if viewer_is_donor { "You donated" } else { "You received" };
    let counterpart = if viewer_is_donor { donation.recipient_name.clone() } else { donation.donor_name.clone() };
    let group = donation.blood_group.map(|g| g.as_str());

    view! {
        <article class="donation-card">
            <header class="donation-card__header">
                <span class="donation-card__role">{role}</span>
                <h3>{donation.patient_name.clone().unwrap_or_else(|| format!("Request #{}", donation.blood_request))}</h3>
                <span class=status_class>{donation.status.label()}</span>
            </header>
            <dl class="donation-card__details">
                {group.map(|g| view! { <dt>"Blood group"</dt><dd>{g}</dd> })}
                <dt>"Units"</dt>
                <dd>{donation.units_donated}</dd>
                {donation.hospital_name.clone().map(|h| view! { <dt>"Hospital"</dt><dd>{h}</dd> })}
                {counterpart.map(|c| view! { <dt>"With"</dt><dd>{c}</dd> })}
                {donation.donation_date.clone().map(|d| view! { <dt>"Date"</dt><dd>{d}</dd> })}
            </dl>
            <footer class="donation-card__actions">
                {actions
                    .into_iter()
                    .map(|action| {
                        let class = match action {
                            DonationAction::Confirm => "btn btn--primary",
                            DonationAction::Cancel => "btn btn--danger",
                        };
                        view! {
                            <button class=class disabled=busy on:click=move |_| on_action.run((id, action))>
                                {if busy { "Working..." } else { action.label() }}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </footer>
        </article>
    }
}
