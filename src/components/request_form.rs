//! Modal form for creating a blood request.

use leptos::prelude::*;
use records::validate::NON_FIELD;
use records::{BloodGroup, BloodRequest, Urgency};

use crate::app::{spawn_task, use_client};
use crate::state::request_form::{RequestDraft, RequestField, submit_request};

#[component]
pub fn CreateRequestDialog(on_created: Callback<BloodRequest>, on_close: Callback<()>) -> impl IntoView {
    let draft = RwSignal::new(RequestDraft::default());
    let client = use_client();
    let today = crate::util::clock::today();
    let min_date = today.to_string();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let client = client.get_value();
        spawn_task(async move {
            if let Some(created) = submit_request(&draft, &client, today).await {
                on_created.run(created);
                on_close.run(());
            }
        });
    };

    let text_field = move |field: RequestField, label: &'static str, kind: &'static str| {
        view! {
            <label class="form__field">
                <span class="form__label">{label}</span>
                <input
                    class="form__input"
                    class:form__input--invalid=move || draft.with(|d| d.error(field).is_some())
                    type=kind
                    name=field.key()
                    prop:value=move || draft.with(|d| field_value(d, field))
                    on:input=move |ev| draft.update(|d| d.set(field, &event_target_value(&ev)))
                />
                <span class="form__error">{move || draft.with(|d| d.error(field).map(str::to_owned))}</span>
            </label>
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create Blood Request"</h2>
                <form class="form" on:submit=on_submit>
                    <p class="form__error form__error--banner">
                        {move || draft.with(|d| d.errors.get(NON_FIELD).map(str::to_owned))}
                    </p>
                    {text_field(RequestField::PatientName, "Patient name", "text")}
                    <label class="form__field">
                        <span class="form__label">"Blood group"</span>
                        <select
                            class="form__input"
                            prop:value=move || draft.with(|d| d.form.blood_group.clone())
                            on:change=move |ev| draft.update(|d| d.set(RequestField::BloodGroup, &event_target_value(&ev)))
                        >
                            <option value="">"Select blood group"</option>
                            {BloodGroup::ALL
                                .iter()
                                .map(|g| view! { <option value=g.as_str()>{g.as_str()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                        <span class="form__error">
                            {move || draft.with(|d| d.error(RequestField::BloodGroup).map(str::to_owned))}
                        </span>
                    </label>
                    {text_field(RequestField::UnitsNeeded, "Units needed", "number")}
                    <label class="form__field">
                        <span class="form__label">"Urgency"</span>
                        <select
                            class="form__input"
                            prop:value=move || draft.with(|d| d.form.urgency.as_str())
                            on:change=move |ev| {
                                if let Ok(u) = event_target_value(&ev).parse::<Urgency>() {
                                    draft.update(|d| d.set_urgency(u));
                                }
                            }
                        >
                            {Urgency::ALL
                                .iter()
                                .map(|u| {
                                    view! {
                                        <option value=u.as_str()>{format!("{} - {}", u.label(), u.description())}</option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    {text_field(RequestField::HospitalName, "Hospital name", "text")}
                    {text_field(RequestField::HospitalAddress, "Hospital address", "text")}
                    {text_field(RequestField::ContactPhone, "Contact phone (+8801xxxxxxxxx)", "tel")}
                    <label class="form__field">
                        <span class="form__label">"Needed by"</span>
                        <input
                            class="form__input"
                            type="date"
                            min=min_date
                            prop:value=move || draft.with(|d| d.form.needed_by_date.clone())
                            on:input=move |ev| draft.update(|d| d.set(RequestField::NeededByDate, &event_target_value(&ev)))
                        />
                        <span class="form__error">
                            {move || draft.with(|d| d.error(RequestField::NeededByDate).map(str::to_owned))}
                        </span>
                    </label>
                    <label class="form__field">
                        <span class="form__label">"Additional notes"</span>
                        <textarea
                            class="form__input"
                            prop:value=move || draft.with(|d| d.form.additional_notes.clone())
                            on:input=move |ev| draft.update(|d| d.set(RequestField::AdditionalNotes, &event_target_value(&ev)))
                        ></textarea>
                    </label>
                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary" disabled=move || draft.with(|d| d.submitting)>
                            {move || if draft.with(|d| d.submitting) { "Creating..." } else { "Create Request" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

fn field_value(draft: &RequestDraft, field: RequestField) -> String {
    let form = &draft.form;
    match field {
        RequestField::PatientName => form.patient_name.clone(),
        RequestField::BloodGroup => form.blood_group.clone(),
        RequestField::UnitsNeeded => form.units_needed.clone(),
        RequestField::HospitalName => form.hospital_name.clone(),
        RequestField::HospitalAddress => form.hospital_address.clone(),
        RequestField::ContactPhone => form.contact_phone.clone(),
        RequestField::NeededByDate => form.needed_by_date.clone(),
        RequestField::AdditionalNotes => form.additional_notes.clone(),
    }
}
