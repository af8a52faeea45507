//! Donor profile page: read-only card with an edit form.

use leptos::prelude::*;
use records::BloodGroup;
use records::validate::{ProfileForm, normalize_phone};

use crate::app::{spawn_task, use_client};
use crate::state::notifications::{NoticeKind, NotificationCenter, notify};
use crate::state::profile::{ProfileState, load_profile, save_profile};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let profile = expect_context::<RwSignal<ProfileState>>();
    let notices = expect_context::<RwSignal<NotificationCenter>>();
    let client = use_client();

    {
        let client = client.get_value();
        spawn_task(async move {
            load_profile(&profile, &client).await;
        });
    }

    let on_save = Callback::new(move |()| {
        let client = client.get_value();
        spawn_task(async move {
            if save_profile(&profile, &client).await {
                if let Some(Some(text)) = profile.try_with_untracked(|s| s.success.clone()) {
                    notify(&notices, NoticeKind::Success, text);
                }
            }
        });
    });

    // Only a mode switch rebuilds the body; field edits must keep focus.
    let mode = Memo::new(move |_| profile.with(|s| (s.loading && s.profile.is_none(), s.editing)));

    view! {
        <div class="profile-page">
            <header class="profile-page__header">
                <h1>"My Profile"</h1>
            </header>
            {move || profile.with(|s| s.error.clone()).map(|e| view! { <p class="page-error">{e}</p> })}
            {move || {
                profile.with(|s| s.success.clone()).map(|m| view! { <p class="page-success">{m}</p> })
            }}
            {move || {
                let (loading, editing) = mode.get();
                if loading {
                    view! { <p>"Loading profile..."</p> }.into_any()
                } else if editing {
                    view! { <ProfileEditor profile=profile on_save=on_save/> }.into_any()
                } else {
                    view! { <ProfileSummary profile=profile/> }.into_any()
                }
            }}
        </div>
    }
}

#[component]
fn ProfileSummary(profile: RwSignal<ProfileState>) -> impl IntoView {
    let Some(Some(p)) = profile.try_with_untracked(|s| s.profile.clone()) else {
        return view! { <p class="empty">"No profile yet."</p> }.into_any();
    };
    let availability = if p.is_available_for_donation { "Available to donate" } else { "Not available" };
    view! {
        <section class="profile-card">
            <dl class="profile-card__details">
                <dt>"Full name"</dt>
                <dd>{p.full_name}</dd>
                <dt>"Age"</dt>
                <dd>{p.age}</dd>
                <dt>"Blood group"</dt>
                <dd>{p.blood_group.as_str()}</dd>
                <dt>"Address"</dt>
                <dd>{p.address}</dd>
                <dt>"Phone"</dt>
                <dd>{if p.phone_number.is_empty() { "Not provided".to_owned() } else { p.phone_number }}</dd>
                <dt>"Last donation"</dt>
                <dd>{p.last_donation_date.unwrap_or_else(|| "Never".to_owned())}</dd>
                <dt>"Availability"</dt>
                <dd>{availability}</dd>
            </dl>
            <button class="btn btn--primary" on:click=move |_| profile.update(ProfileState::begin_edit)>
                "Edit Profile"
            </button>
        </section>
    }
        .into_any()
}

#[component]
fn ProfileEditor(profile: RwSignal<ProfileState>, on_save: Callback<()>) -> impl IntoView {
    let text_field = move |key: &'static str,
                           label: &'static str,
                           kind: &'static str,
                           read: fn(&ProfileForm) -> String,
                           write: fn(&mut ProfileForm, String)| {
        view! {
            <label class="form__field">
                <span class="form__label">{label}</span>
                <input
                    class="form__input"
                    class:form__input--invalid=move || profile.with(|s| s.field_errors.get(key).is_some())
                    type=kind
                    name=key
                    prop:value=move || profile.with(|s| read(&s.form))
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        profile.update(|s| s.edit(key, |f| write(f, value)));
                    }
                />
                <span class="form__error">{move || profile.with(|s| s.field_errors.get(key).map(str::to_owned))}</span>
            </label>
        }
    };

    let creating = move || profile.with(ProfileState::creating);
    let saving = move || profile.with(|s| s.saving);

    view! {
        <form class="form profile-form" on:submit=move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            on_save.run(());
        }>
            {text_field("full_name", "Full name", "text", |f| f.full_name.clone(), |f, v| f.full_name = v)}
            {text_field("age", "Age", "number", |f| f.age.clone(), |f, v| f.age = v)}
            <label class="form__field">
                <span class="form__label">"Blood group"</span>
                <select
                    class="form__input"
                    prop:value=move || profile.with(|s| s.form.blood_group.clone())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        profile.update(|s| s.edit("blood_group", |f| f.blood_group = value));
                    }
                >
                    <option value="">"Select blood group"</option>
                    {BloodGroup::ALL
                        .iter()
                        .map(|g| view! { <option value=g.as_str()>{g.as_str()}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <span class="form__error">
                    {move || profile.with(|s| s.field_errors.get("blood_group").map(str::to_owned))}
                </span>
            </label>
            {text_field("address", "Address", "text", |f| f.address.clone(), |f, v| f.address = v)}
            {text_field(
                "phone_number",
                "Phone (+8801xxxxxxxxx)",
                "tel",
                |f| f.phone_number.clone(),
                |f, v| f.phone_number = normalize_phone(&v),
            )}
            {text_field(
                "last_donation_date",
                "Last donation date",
                "date",
                |f| f.last_donation_date.clone(),
                |f, v| f.last_donation_date = v,
            )}
            <label class="form__field form__field--inline">
                <input
                    type="checkbox"
                    prop:checked=move || profile.with(|s| s.form.is_available_for_donation)
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        profile.update(|s| s.edit("is_available_for_donation", |f| f.is_available_for_donation = checked));
                    }
                />
                <span>"Available for donation"</span>
            </label>
            <div class="form__actions">
                <Show when=move || !creating()>
                    <button type="button" class="btn" on:click=move |_| profile.update(ProfileState::cancel_edit)>
                        "Cancel"
                    </button>
                </Show>
                <button type="submit" class="btn btn--primary" disabled=saving>
                    {move || match (saving(), creating()) {
                        (true, _) => "Saving...",
                        (false, true) => "Create Profile",
                        (false, false) => "Save Changes",
                    }}
                </button>
            </div>
        </form>
    }
}
