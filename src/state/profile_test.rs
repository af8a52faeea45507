use std::cell::RefCell;
use std::rc::Rc;

use futures::executor::block_on;

use super::*;
use crate::net::test_support::{ScriptedTransport, client, seed_session};
use crate::net::transport::Method;

const PROFILE_JSON: &str = r#"{"full_name":"Nadia Islam","age":27,"address":"Mirpur, Dhaka","blood_group":"B-",
    "last_donation_date":"2024-03-02","is_available_for_donation":false,"phone_number":"+8801812345678"}"#;

fn filled_form() -> ProfileForm {
    ProfileForm {
        full_name: "Nadia Islam".into(),
        age: "27".into(),
        address: "Mirpur, Dhaka".into(),
        blood_group: "B-".into(),
        ..ProfileForm::default()
    }
}

// =============================================================
// load
// =============================================================

#[test]
fn missing_profile_opens_create_mode() {
    let transport = ScriptedTransport::new().reply(404, r#"{"error":"Profile not found"}"#);
    let (client, store) = client(transport);
    seed_session(&store, "a", "r");
    let state = Rc::new(RefCell::new(ProfileState::default()));

    block_on(load_profile(&state, &client));

    let s = state.borrow();
    assert!(s.creating());
    assert!(s.editing);
    assert!(s.error.is_none());
    assert!(s.available());
}

#[test]
fn loaded_profile_fills_form() {
    let transport = ScriptedTransport::new().reply(200, PROFILE_JSON);
    let (client, store) = client(transport);
    seed_session(&store, "a", "r");
    let state = Rc::new(RefCell::new(ProfileState::default()));

    block_on(load_profile(&state, &client));

    let s = state.borrow();
    assert!(!s.creating());
    assert!(!s.editing);
    assert_eq!(s.form.age, "27");
    assert!(!s.available());
}

// =============================================================
// save
// =============================================================

#[test]
fn first_save_posts_then_updates_put() {
    let transport = ScriptedTransport::new().reply(201, PROFILE_JSON).reply(200, PROFILE_JSON);
    let (client, store) = client(transport.clone());
    seed_session(&store, "a", "r");
    let state = Rc::new(RefCell::new(ProfileState { form: filled_form(), ..ProfileState::default() }));

    assert!(block_on(save_profile(&state, &client)));
    assert_eq!(state.borrow().success.as_deref(), Some("Profile created successfully!"));

    assert!(block_on(save_profile(&state, &client)));
    assert_eq!(state.borrow().success.as_deref(), Some("Profile updated successfully!"));

    let methods: Vec<_> = transport.requests().iter().map(|r| r.method).collect();
    assert_eq!(methods, [Method::Post, Method::Put]);
}

#[test]
fn invalid_age_never_reaches_network() {
    let transport = ScriptedTransport::new();
    let (client, _) = client(transport.clone());
    let form = ProfileForm { age: "12".into(), ..filled_form() };
    let state = Rc::new(RefCell::new(ProfileState { form, ..ProfileState::default() }));

    assert!(!block_on(save_profile(&state, &client)));
    assert!(transport.requests().is_empty());
    assert_eq!(state.borrow().field_errors.get("age"), Some("Age must be between 16 and 65"));
}

#[test]
fn server_field_errors_are_kept_per_field() {
    let transport = ScriptedTransport::new().reply(400, r#"{"phone_number":["Enter a valid phone number."]}"#);
    let (client, store) = client(transport);
    seed_session(&store, "a", "r");
    let state = Rc::new(RefCell::new(ProfileState { form: filled_form(), ..ProfileState::default() }));

    assert!(!block_on(save_profile(&state, &client)));
    let s = state.borrow();
    assert!(!s.saving);
    assert_eq!(s.field_errors.get("phone_number"), Some("Enter a valid phone number."));
}

#[test]
fn editing_a_field_clears_its_error() {
    let mut state = ProfileState::default();
    state.field_errors.insert("full_name", "Full name is required");
    state.field_errors.insert("age", "Age must be between 16 and 65");
    state.edit("full_name", |f| f.full_name = "N".into());
    assert!(state.field_errors.get("full_name").is_none());
    assert!(state.field_errors.get("age").is_some());
}

#[test]
fn cancel_edit_restores_saved_values() {
    let profile: Profile = serde_json::from_str(PROFILE_JSON).unwrap();
    let mut state = ProfileState { profile: Some(profile), editing: true, ..ProfileState::default() };
    state.form.full_name = "changed".into();
    state.cancel_edit();
    assert!(!state.editing);
    assert_eq!(state.form.full_name, "Nadia Islam");
}
