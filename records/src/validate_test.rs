use super::*;
use time::macros::date;

fn valid_form() -> RequestForm {
    RequestForm {
        patient_name: "Ayesha Rahman".into(),
        blood_group: "O-".into(),
        units_needed: "2".into(),
        urgency: Urgency::High,
        hospital_name: "Dhaka Medical College Hospital".into(),
        hospital_address: "Bakshibazar, Dhaka".into(),
        contact_phone: "+8801712345678".into(),
        needed_by_date: String::new(),
        additional_notes: "  ".into(),
    }
}

const TODAY: Date = date!(2025 - 03 - 10);

// =============================================================
// RequestForm
// =============================================================

#[test]
fn valid_form_builds_payload() {
    let payload = valid_form().validate(TODAY).unwrap();
    assert_eq!(payload.blood_group, BloodGroup::ONegative);
    assert_eq!(payload.units_needed, 2);
    assert_eq!(payload.urgency, Urgency::High);
    assert_eq!(payload.additional_notes, "");
    assert!(payload.needed_by_date.is_none());
}

#[test]
fn units_above_ten_are_rejected() {
    let form = RequestForm { units_needed: "11".into(), ..valid_form() };
    let errors = form.validate(TODAY).unwrap_err();
    assert_eq!(errors.get("units_needed"), Some("Units needed cannot exceed 10"));
    assert_eq!(errors.len(), 1);
}

#[test]
fn units_below_one_or_blank_are_rejected() {
    for raw in ["0", "-3", "", "abc"] {
        let form = RequestForm { units_needed: raw.into(), ..valid_form() };
        let errors = form.validate(TODAY).unwrap_err();
        assert_eq!(errors.get("units_needed"), Some("Units needed must be at least 1"), "input {raw:?}");
    }
}

#[test]
fn ten_units_is_accepted() {
    let form = RequestForm { units_needed: "10".into(), ..valid_form() };
    assert_eq!(form.validate(TODAY).unwrap().units_needed, 10);
}

#[test]
fn short_phone_is_rejected_with_bangladesh_message() {
    let form = RequestForm { contact_phone: "017123".into(), ..valid_form() };
    let errors = form.validate(TODAY).unwrap_err();
    assert_eq!(
        errors.get("contact_phone"),
        Some("Please enter a valid Bangladesh phone number (+8801xxxxxxxxx)")
    );
}

#[test]
fn blank_required_fields_each_report() {
    let form = RequestForm {
        patient_name: " ".into(),
        blood_group: String::new(),
        hospital_name: String::new(),
        hospital_address: String::new(),
        contact_phone: String::new(),
        ..valid_form()
    };
    let errors = form.validate(TODAY).unwrap_err();
    assert_eq!(errors.get("patient_name"), Some("Patient name is required"));
    assert_eq!(errors.get("blood_group"), Some("Blood group is required"));
    assert_eq!(errors.get("hospital_name"), Some("Hospital name is required"));
    assert_eq!(errors.get("hospital_address"), Some("Hospital address is required"));
    assert_eq!(errors.get("contact_phone"), Some("Contact phone is required"));
    assert!(errors.get("units_needed").is_none());
}

#[test]
fn past_needed_by_date_is_rejected() {
    let form = RequestForm { needed_by_date: "2025-03-09".into(), ..valid_form() };
    let errors = form.validate(TODAY).unwrap_err();
    assert_eq!(errors.get("needed_by_date"), Some("Date cannot be in the past"));
}

#[test]
fn today_and_future_dates_are_accepted() {
    for raw in ["2025-03-10", "2025-04-01"] {
        let form = RequestForm { needed_by_date: raw.into(), ..valid_form() };
        let payload = form.validate(TODAY).unwrap();
        assert_eq!(payload.needed_by_date.as_deref(), Some(raw));
    }
}

#[test]
fn garbage_date_is_rejected() {
    let form = RequestForm { needed_by_date: "next tuesday".into(), ..valid_form() };
    let errors = form.validate(TODAY).unwrap_err();
    assert_eq!(errors.get("needed_by_date"), Some("Enter a valid date"));
}

// =============================================================
// Phone helpers
// =============================================================

#[test]
fn bangladesh_phone_accepts_international_form() {
    assert!(is_bangladesh_phone("+8801712345678"));
    assert!(is_bangladesh_phone("+880 1712 345678"));
    assert!(is_bangladesh_phone("+8801912345678"));
}

#[test]
fn bangladesh_phone_rejects_bad_operator_digit_and_length() {
    assert!(!is_bangladesh_phone("017123"));
    assert!(!is_bangladesh_phone("+8801212345678"));
    assert!(!is_bangladesh_phone("+88017123456789"));
    assert!(!is_bangladesh_phone("01712345678"));
}

#[test]
fn normalize_phone_completes_local_spellings() {
    assert_eq!(normalize_phone("01712345678"), "+8801712345678");
    assert_eq!(normalize_phone("8801712345678"), "+8801712345678");
    assert_eq!(normalize_phone("017-1234 5678"), "+8801712345678");
    assert_eq!(normalize_phone("0171"), "0171");
}

// =============================================================
// FieldErrors
// =============================================================

#[test]
fn server_body_field_lists_become_field_errors() {
    let body = serde_json::json!({
        "contact_phone": ["Ensure this field has no more than 15 characters."],
        "patient_name": "This field may not be blank."
    });
    let errors = FieldErrors::from_server_body(&body).unwrap();
    assert_eq!(
        errors.get("contact_phone"),
        Some("Ensure this field has no more than 15 characters.")
    );
    assert_eq!(errors.get("patient_name"), Some("This field may not be blank."));
}

#[test]
fn server_business_error_is_not_a_field_error() {
    let body = serde_json::json!({ "error": "This request is no longer available" });
    assert!(FieldErrors::from_server_body(&body).is_none());
}

#[test]
fn summary_prefers_non_field_message() {
    let mut errors = FieldErrors::new();
    errors.insert("age", "bad age");
    errors.insert(NON_FIELD, "Failed to create request. Please try again.");
    assert_eq!(errors.summary(), Some("Failed to create request. Please try again."));
}

#[test]
fn first_message_per_field_wins() {
    let mut errors = FieldErrors::new();
    errors.insert("email", "first");
    errors.insert("email", "second");
    assert_eq!(errors.get("email"), Some("first"));
}

// =============================================================
// Accounts
// =============================================================

#[test]
fn login_requires_both_fields() {
    let errors = validate_login("  ", "").unwrap_err();
    assert_eq!(errors.get("email"), Some("Email or username is required"));
    assert_eq!(errors.get("password"), Some("Password is required"));
    let ok = validate_login(" rahim ", "pw").unwrap();
    assert_eq!(ok.email, "rahim");
}

#[test]
fn registration_checks_email_and_password_length() {
    let errors = validate_registration("rahim", "not-an-email", "12345").unwrap_err();
    assert_eq!(errors.get("email"), Some("Enter a valid email address"));
    assert_eq!(errors.get("password"), Some("Password must be at least 6 characters"));
    assert!(validate_registration("rahim", "rahim@example.com", "123456").is_ok());
}

#[test]
fn profile_form_round_trips_existing_profile() {
    let profile = Profile {
        full_name: "Karim".into(),
        age: 30,
        address: "Chattogram".into(),
        blood_group: BloodGroup::BPositive,
        last_donation_date: Some("2024-12-01".into()),
        is_available_for_donation: false,
        phone_number: String::new(),
    };
    let form = ProfileForm::from(&profile);
    assert_eq!(form.validate().unwrap(), profile);
}

#[test]
fn profile_form_rejects_out_of_range_age() {
    let form = ProfileForm {
        full_name: "Karim".into(),
        age: "70".into(),
        address: "Sylhet".into(),
        blood_group: "A+".into(),
        ..ProfileForm::default()
    };
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.get("age"), Some("Age must be between 16 and 65"));
}
