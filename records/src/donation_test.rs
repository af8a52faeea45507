use super::*;

#[test]
fn donation_record_tolerates_minimal_payload() {
    let raw = r#"{"id":5,"blood_request":11,"donor":2,"recipient":3,"status":"pending"}"#;
    let rec: DonationRecord = serde_json::from_str(raw).unwrap();
    assert_eq!(rec.units_donated, 1);
    assert_eq!(rec.status, DonationStatus::Pending);
    assert!(rec.donation_date.is_none());
    assert!(rec.blood_group.is_none());
}

#[test]
fn donation_record_reads_linked_request_fields() {
    let raw = r#"{
        "id": 5, "blood_request": 11, "donor": 2, "recipient": 3,
        "status": "confirmed", "donation_date": "2025-02-10",
        "patient_name": "Ayesha", "blood_group": "O-", "hospital_name": "DMC"
    }"#;
    let rec: DonationRecord = serde_json::from_str(raw).unwrap();
    assert_eq!(rec.status, DonationStatus::Confirmed);
    assert_eq!(rec.blood_group, Some(BloodGroup::ONegative));
    assert_eq!(rec.patient_name.as_deref(), Some("Ayesha"));
}

#[test]
fn involves_matches_either_participant() {
    let raw = r#"{"id":5,"blood_request":11,"donor":2,"recipient":3,"status":"pending"}"#;
    let rec: DonationRecord = serde_json::from_str(raw).unwrap();
    assert!(rec.involves(2));
    assert!(rec.involves(3));
    assert!(!rec.involves(4));
}

#[test]
fn role_query_string_is_empty_for_all() {
    assert_eq!(DonationRole::All.query_string(), "");
    assert_eq!(DonationRole::Donor.query_string(), "role=donor");
    assert_eq!(DonationRole::Recipient.query_string(), "role=recipient");
}
