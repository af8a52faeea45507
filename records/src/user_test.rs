use super::*;

#[test]
fn login_response_splits_into_user_and_credentials() {
    let raw = r#"{
        "refresh": "r-1",
        "access": "a-1",
        "user": { "id": 7, "username": "rahim", "email": "rahim@example.com" }
    }"#;
    let resp: LoginResponse = serde_json::from_str(raw).unwrap();
    let (user, creds) = resp.into_parts();
    assert_eq!(user.id, 7);
    assert_eq!(user.username, "rahim");
    assert_eq!(creds.access, "a-1");
    assert_eq!(creds.refresh, "r-1");
}

#[test]
fn user_ignores_extra_server_fields() {
    let raw = r#"{"id":1,"username":"u","email":"u@x.io","is_active":true,"date_joined":"2024-01-01"}"#;
    let user: User = serde_json::from_str(raw).unwrap();
    assert_eq!(user.email, "u@x.io");
}

#[test]
fn credentials_debug_redacts_tokens() {
    let creds = Credentials { access: "secret-a".into(), refresh: "secret-r".into() };
    let dbg = format!("{creds:?}");
    assert!(!dbg.contains("secret-a"));
    assert!(!dbg.contains("secret-r"));
}

#[test]
fn profile_defaults_availability_to_true() {
    let raw = r#"{"full_name":"Karim","age":30,"address":"Dhaka","blood_group":"B+"}"#;
    let profile: Profile = serde_json::from_str(raw).unwrap();
    assert!(profile.is_available_for_donation);
    assert!(profile.last_donation_date.is_none());
    assert_eq!(profile.phone_number, "");
}

#[test]
fn accept_response_reads_donation_id() {
    let raw = r#"{"message":"Blood request accepted successfully","donation_id":42}"#;
    let resp: AcceptResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.donation_id, Some(42));
}
