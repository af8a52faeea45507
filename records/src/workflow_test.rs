use super::*;
use crate::blood::{BloodGroup, Urgency};

const OWNER: UserId = 1;
const DONOR: UserId = 2;
const STRANGER: UserId = 9;

fn request(status: RequestStatus) -> BloodRequest {
    BloodRequest {
        id: 100,
        requester: OWNER,
        patient_name: "Ayesha".into(),
        blood_group: BloodGroup::APositive,
        units_needed: 1,
        urgency: Urgency::Critical,
        status,
        needed_by_date: None,
        hospital_name: "DMC".into(),
        hospital_address: "Dhaka".into(),
        contact_phone: "+8801712345678".into(),
        additional_notes: String::new(),
    }
}

fn donation(status: DonationStatus) -> DonationRecord {
    DonationRecord {
        id: 7,
        blood_request: 100,
        donor: DONOR,
        recipient: OWNER,
        units_donated: 1,
        donation_date: None,
        status,
        notes: String::new(),
        patient_name: None,
        blood_group: None,
        hospital_name: None,
        donor_name: None,
        recipient_name: None,
    }
}

// =============================================================
// Blood request actions
// =============================================================

#[test]
fn pending_request_offers_accept_to_others_and_cancel_to_owner() {
    let req = request(RequestStatus::Pending);
    assert_eq!(request_actions(&req, &Viewer::new(DONOR)), vec![RequestAction::Accept]);
    assert_eq!(request_actions(&req, &Viewer::new(OWNER)), vec![RequestAction::Cancel]);
}

#[test]
fn unavailable_donor_cannot_accept() {
    let req = request(RequestStatus::Pending);
    let viewer = Viewer { id: DONOR, available: false };
    assert!(request_actions(&req, &viewer).is_empty());
}

#[test]
fn accepted_request_leaves_only_owner_cancel() {
    let req = request(RequestStatus::Accepted);
    assert_eq!(request_actions(&req, &Viewer::new(OWNER)), vec![RequestAction::Cancel]);
    assert!(request_actions(&req, &Viewer::new(DONOR)).is_empty());
    assert!(request_actions(&req, &Viewer::new(STRANGER)).is_empty());
}

#[test]
fn terminal_requests_offer_nothing() {
    for status in [RequestStatus::Completed, RequestStatus::Canceled] {
        let req = request(status);
        assert!(request_actions(&req, &Viewer::new(OWNER)).is_empty());
        assert!(request_actions(&req, &Viewer::new(DONOR)).is_empty());
    }
}

#[test]
fn accepting_moves_action_set_from_accept_to_cancel_and_confirm() {
    let donor = Viewer::new(DONOR);
    let owner = Viewer::new(OWNER);
    assert_eq!(request_actions(&request(RequestStatus::Pending), &donor), vec![RequestAction::Accept]);

    // Server now reports the request accepted and a pending donation record.
    assert!(!request_actions(&request(RequestStatus::Accepted), &donor).contains(&RequestAction::Accept));
    assert_eq!(request_actions(&request(RequestStatus::Accepted), &owner), vec![RequestAction::Cancel]);
    assert_eq!(
        donation_actions(&donation(DonationStatus::Pending), &owner),
        vec![DonationAction::Confirm, DonationAction::Cancel]
    );
}

// =============================================================
// Donation actions
// =============================================================

#[test]
fn pending_donation_lets_donor_cancel_only() {
    let rec = donation(DonationStatus::Pending);
    assert_eq!(donation_actions(&rec, &Viewer::new(DONOR)), vec![DonationAction::Cancel]);
}

#[test]
fn confirmed_and_terminal_donations_offer_nothing() {
    for status in [DonationStatus::Confirmed, DonationStatus::Completed, DonationStatus::Canceled] {
        let rec = donation(status);
        assert!(donation_actions(&rec, &Viewer::new(OWNER)).is_empty());
        assert!(donation_actions(&rec, &Viewer::new(DONOR)).is_empty());
    }
}

#[test]
fn strangers_get_no_donation_actions() {
    let rec = donation(DonationStatus::Pending);
    assert!(donation_actions(&rec, &Viewer::new(STRANGER)).is_empty());
}

#[test]
fn action_endpoints_match_server_routes() {
    assert_eq!(RequestAction::Accept.endpoint(), "accept_request");
    assert_eq!(RequestAction::Cancel.endpoint(), "cancel_request");
    assert_eq!(DonationAction::Confirm.endpoint(), "confirm_donation");
    assert_eq!(DonationAction::Cancel.endpoint(), "cancel_donation");
}
