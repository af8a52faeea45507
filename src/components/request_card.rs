//! Card for one blood request in a list.

use leptos::prelude::*;
use records::RequestAction;

use crate::state::requests::RequestRow;

#[component]
pub fn RequestCard(row: RequestRow, on_action: Callback<(u64, RequestAction)>) -> impl IntoView {
    let RequestRow { request, actions, busy } = row;
    let id = request.id;
    let urgency_class = format!("badge badge--urgency-{}", request.urgency.as_str());
    let status_class = format!("badge badge--status-{}", request.status.as_str());
    let needed_by = request.needed_by_date.clone().unwrap_or_else(|| "Not specified".to_owned());
    let notes = (!request.additional_notes.is_empty()).then(|| request.additional_notes.clone());

    view! {
        <article class="request-card" class:request-card--urgent=request.urgency.is_urgent()>
            <header class="request-card__header">
                <span class="request-card__group">{request.blood_group.as_str()}</span>
                <h3 class="request-card__patient">{request.patient_name.clone()}</h3>
                <span class=urgency_class title=request.urgency.description()>{request.urgency.label()}</span>
                <span class=status_class>{request.status.label()}</span>
            </header>
            <dl class="request-card__details">
                <dt>"Units"</dt>
                <dd>{request.units_needed}</dd>
                <dt>"Hospital"</dt>
                <dd>{request.hospital_name.clone()}", "{request.hospital_address.clone()}</dd>
                <dt>"Contact"</dt>
                <dd>{request.contact_phone.clone()}</dd>
                <dt>"Needed by"</dt>
                <dd>{needed_by}</dd>
            </dl>
            {notes.map(|n| view! { <p class="request-card__notes">{n}</p> })}
            <footer class="request-card__actions">
                {actions
                    .into_iter()
                    .map(|action| {
                        let class = match action {
                            RequestAction::Accept => "btn btn--primary",
                            RequestAction::Cancel => "btn btn--danger",
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
