use futures::executor::block_on;
use records::{BloodGroup, RequestStatus, Urgency};

use super::*;
use crate::net::test_support::{ScriptedTransport, client, seed_session};

const REQUEST_JSON: &str = r#"{
    "id": 4, "requester": 9, "patient_name": "Karim", "blood_group": "AB-",
    "units_needed": 2, "urgency": "critical", "status": "pending",
    "needed_by_date": null, "hospital_name": "Dhaka Medical",
    "hospital_address": "Bakshibazar", "contact_phone": "+8801712345678",
    "additional_notes": ""
}"#;

// =============================================================
// Paths
// =============================================================

#[test]
fn unfiltered_request_list_has_no_query() {
    assert_eq!(blood_requests_path(&RequestFilter::default()), "accounts/blood-requests/");
}

#[test]
fn filtered_request_list_encodes_blood_group() {
    let filter = RequestFilter {
        blood_group: Some(BloodGroup::APositive),
        status: Some(RequestStatus::Pending),
        my_requests: true,
        ..RequestFilter::default()
    };
    assert_eq!(
        blood_requests_path(&filter),
        "accounts/blood-requests/?status=pending&blood_group=A%2B&my_requests=true"
    );
}

#[test]
fn action_paths() {
    assert_eq!(request_action_path(12, RequestAction::Accept), "accounts/blood-requests/12/accept_request/");
    assert_eq!(request_action_path(12, RequestAction::Cancel), "accounts/blood-requests/12/cancel_request/");
    assert_eq!(donation_action_path(3, DonationAction::Confirm), "accounts/donation-history/3/confirm_donation/");
    assert_eq!(donation_action_path(3, DonationAction::Cancel), "accounts/donation-history/3/cancel_donation/");
}

#[test]
fn donation_role_filter() {
    assert_eq!(donations_path(DonationRole::All), "accounts/donation-history/");
    assert_eq!(donations_path(DonationRole::Donor), "accounts/donation-history/?role=donor");
}

#[test]
fn verify_path_keeps_both_segments() {
    assert_eq!(verify_email_path("MQ", "abc-123"), "accounts/verify-email/MQ/abc-123/");
}

// =============================================================
// Endpoints
// =============================================================

#[test]
fn login_posts_credentials_without_token() {
    let transport = ScriptedTransport::new().reply(
        200,
        r#"{"user":{"id":3,"username":"rahim","email":"r@x.io"},"access":"a","refresh":"r"}"#,
    );
    let (client, store) = client(transport.clone());
    let req = LoginRequest { email: "rahim".into(), password: "secret1".into() };
    let resp = block_on(client.login(&req)).unwrap();

    assert_eq!(resp.user.id, 3);
    assert!(store.load().is_none());
    let sent = transport.requests();
    assert_eq!(sent[0].url, "/api/accounts/login/");
    assert_eq!(sent[0].method, Method::Post);
    assert_eq!(sent[0].body, Some(serde_json::json!({"email": "rahim", "password": "secret1"})));
}

#[test]
fn login_non_field_error_is_shown() {
    let transport =
        ScriptedTransport::new().reply(400, r#"{"non_field_errors":["Please verify your email first"]}"#);
    let (client, _) = client(transport);
    let req = LoginRequest { email: "x".into(), password: "y".into() };
    let err = block_on(client.login(&req)).unwrap_err();
    assert_eq!(err.user_message(), "Please verify your email first");
}

#[test]
fn login_without_server_message_uses_fallback() {
    let transport = ScriptedTransport::new().reply(400, "");
    let (client, _) = client(transport);
    let req = LoginRequest { email: "x".into(), password: "y".into() };
    let err = block_on(client.login(&req)).unwrap_err();
    assert_eq!(err.user_message(), "Invalid Email/Username or Password");
}

#[test]
fn missing_profile_is_none() {
    let transport = ScriptedTransport::new().reply(404, r#"{"error":"Profile not found"}"#);
    let (client, store) = client(transport);
    seed_session(&store, "a", "r");
    assert_eq!(block_on(client.fetch_profile()).unwrap(), None);
}

#[test]
fn profile_update_uses_put() {
    let body = r#"{"full_name":"Rahim","age":30,"address":"Dhaka","blood_group":"O+",
        "last_donation_date":null,"is_available_for_donation":true,"phone_number":""}"#;
    let transport = ScriptedTransport::new().reply(200, body);
    let (client, store) = client(transport.clone());
    seed_session(&store, "a", "r");
    let profile: Profile = serde_json::from_str(body).unwrap();
    block_on(client.update_profile(&profile)).unwrap();
    assert_eq!(transport.requests()[0].method, Method::Put);
}

#[test]
fn list_requests_decodes_records() {
    let transport = ScriptedTransport::new().reply(200, &format!("[{REQUEST_JSON}]"));
    let (client, store) = client(transport);
    seed_session(&store, "a", "r");
    let list = block_on(client.list_blood_requests(&RequestFilter::default())).unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].urgency, Urgency::Critical);
    assert_eq!(list[0].blood_group, BloodGroup::AbNegative);
}

#[test]
fn accept_returns_donation_id() {
    let transport =
        ScriptedTransport::new().reply(200, r#"{"message":"Blood request accepted successfully","donation_id":8}"#);
    let (client, store) = client(transport.clone());
    seed_session(&store, "a", "r");
    let resp = block_on(client.accept_request(4)).unwrap();
    assert_eq!(resp.donation_id, Some(8));
    assert_eq!(transport.requests()[0].bearer.as_deref(), Some("a"));
    assert!(transport.requests()[0].body.is_none());
}

#[test]
fn verify_email_is_a_public_get() {
    let transport = ScriptedTransport::new().reply(200, r#"{"success":true,"message":"Email verified"}"#);
    let (client, store) = client(transport.clone());
    seed_session(&store, "a", "r");
    let resp = block_on(client.verify_email("MQ", "tok")).unwrap();
    assert!(resp.success);
    let sent = transport.requests();
    assert_eq!(sent[0].method, Method::Get);
    assert!(sent[0].bearer.is_none());
}

#[test]
fn dashboard_tolerates_missing_sections() {
    let transport = ScriptedTransport::new().reply(200, r#"{"stats":{"total_requests":5}}"#);
    let (client, store) = client(transport);
    seed_session(&store, "a", "r");
    let summary = block_on(client.dashboard_summary()).unwrap();
    assert_eq!(summary.stats.total_requests, 5);
    assert!(summary.recent_requests.is_empty());
}
