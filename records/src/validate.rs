//! Client-side form validation.
//!
//! DESIGN
//! ======
//! Every check runs before any network call and reports per-field messages so
//! the UI can render each one next to its input without blocking the others.
//! The server re-validates everything; its field errors are parsed into the
//! same [`FieldErrors`] shape so both sources render identically.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::Date;
use time::macros::format_description;

use crate::blood::{BloodGroup, Urgency};
use crate::request::NewBloodRequest;
use crate::user::{LoginRequest, Profile, RegisterRequest};

pub const MIN_UNITS: u32 = 1;
pub const MAX_UNITS: u32 = 10;
pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_DONOR_AGE: u32 = 16;
pub const MAX_DONOR_AGE: u32 = 65;

/// Key used for errors not tied to one input.
pub const NON_FIELD: &str = "non_field_errors";

/// Field name → message. Ordered so rendering is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for `field`. The first message per field wins.
    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_owned()).or_insert_with(|| message.into());
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.0.remove(field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// First message, preferring the non-field entry.
    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.get(NON_FIELD).or_else(|| self.0.values().next().map(String::as_str))
    }

    /// Parse a DRF-style error body: `{"field": ["msg", ...]}` or
    /// `{"field": "msg"}`. Returns `None` when the body carries no field map.
    ///
    /// `error`, `message` and `detail` keys are business messages, not field
    /// errors, and are skipped.
    #[must_use]
    pub fn from_server_body(body: &Value) -> Option<Self> {
        let map = body.as_object()?;
        let mut errors = Self::new();
        for (field, value) in map {
            if matches!(field.as_str(), "error" | "message" | "detail" | "action_required") {
                continue;
            }
            let message = match value {
                Value::String(s) => Some(s.clone()),
                Value::Array(items) => items.iter().find_map(|v| v.as_str().map(str::to_owned)),
                _ => None,
            };
            if let Some(message) = message {
                errors.insert(field, message);
            }
        }
        if errors.is_empty() { None } else { Some(errors) }
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, Self> {
        if self.is_empty() { Ok(value()) } else { Err(self) }
    }
}

// =============================================================================
// PHONE
// =============================================================================

/// Normalise phone input as the user types.
///
/// Keeps only digits and `+`, then completes the two common local spellings
/// to the `+880` international form.
#[must_use]
pub fn normalize_phone(raw: &str) -> String {
    let cleaned: String = raw.chars().filter(|c| c.is_ascii_digit() || *c == '+').collect();
    if cleaned.starts_with("01") && cleaned.len() == 11 {
        format!("+88{cleaned}")
    } else if cleaned.starts_with("8801") && cleaned.len() == 13 {
        format!("+{cleaned}")
    } else {
        cleaned
    }
}

/// `+8801[3-9]XXXXXXXX`, whitespace ignored.
#[must_use]
pub fn is_bangladesh_phone(raw: &str) -> bool {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let Some(rest) = compact.strip_prefix("+8801") else {
        return false;
    };
    let bytes = rest.as_bytes();
    bytes.len() == 9 && (b'3'..=b'9').contains(&bytes[0]) && bytes[1..].iter().all(u8::is_ascii_digit)
}

// =============================================================================
// DATES
// =============================================================================

/// Parse the `YYYY-MM-DD` prefix of a date or datetime string.
#[must_use]
pub fn parse_date(raw: &str) -> Option<Date> {
    let day = raw.trim().split('T').next()?;
    Date::parse(day, format_description!("[year]-[month]-[day]")).ok()
}

// =============================================================================
// BLOOD REQUEST
// =============================================================================

/// Raw blood request form input, as typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestForm {
    pub patient_name: String,
    pub blood_group: String,
    pub units_needed: String,
    pub urgency: Urgency,
    pub hospital_name: String,
    pub hospital_address: String,
    pub contact_phone: String,
    pub needed_by_date: String,
    pub additional_notes: String,
}

impl Default for RequestForm {
    fn default() -> Self {
        Self {
            patient_name: String::new(),
            blood_group: String::new(),
            units_needed: MIN_UNITS.to_string(),
            urgency: Urgency::default(),
            hospital_name: String::new(),
            hospital_address: String::new(),
            contact_phone: String::new(),
            needed_by_date: String::new(),
            additional_notes: String::new(),
        }
    }
}

impl RequestForm {
    /// Validate against `today` and build the creation payload.
    ///
    /// # Errors
    ///
    /// Returns every failing field with its message.
    pub fn validate(&self, today: Date) -> Result<NewBloodRequest, FieldErrors> {
        let mut errors = FieldErrors::new();

        let patient_name = self.patient_name.trim();
        if patient_name.is_empty() {
            errors.insert("patient_name", "Patient name is required");
        }

        let blood_group = self.blood_group.parse::<BloodGroup>().ok();
        if blood_group.is_none() {
            errors.insert("blood_group", "Blood group is required");
        }

        let units = self.units_needed.trim().parse::<i64>().ok();
        match units {
            Some(n) if n > i64::from(MAX_UNITS) => errors.insert("units_needed", "Units needed cannot exceed 10"),
            Some(n) if n >= i64::from(MIN_UNITS) => {}
            _ => errors.insert("units_needed", "Units needed must be at least 1"),
        }

        let hospital_name = self.hospital_name.trim();
        if hospital_name.is_empty() {
            errors.insert("hospital_name", "Hospital name is required");
        }
        let hospital_address = self.hospital_address.trim();
        if hospital_address.is_empty() {
            errors.insert("hospital_address", "Hospital address is required");
        }

        let phone: String = self.contact_phone.chars().filter(|c| !c.is_whitespace()).collect();
        if phone.is_empty() {
            errors.insert("contact_phone", "Contact phone is required");
        } else if !is_bangladesh_phone(&phone) {
            errors.insert("contact_phone", "Please enter a valid Bangladesh phone number (+8801xxxxxxxxx)");
        }

        let needed_by = self.needed_by_date.trim();
        if !needed_by.is_empty() {
            match parse_date(needed_by) {
                Some(date) if date < today => errors.insert("needed_by_date", "Date cannot be in the past"),
                Some(_) => {}
                None => errors.insert("needed_by_date", "Enter a valid date"),
            }
        }

        errors.into_result(|| NewBloodRequest {
            patient_name: patient_name.to_owned(),
            blood_group: blood_group.unwrap_or(BloodGroup::OPositive),
            units_needed: units.and_then(|n| u32::try_from(n).ok()).unwrap_or(MIN_UNITS),
            urgency: self.urgency,
            hospital_name: hospital_name.to_owned(),
            hospital_address: hospital_address.to_owned(),
            contact_phone: phone,
            needed_by_date: (!needed_by.is_empty()).then(|| needed_by.to_owned()),
            additional_notes: self.additional_notes.trim().to_owned(),
        })
    }
}

// =============================================================================
// ACCOUNTS
// =============================================================================

/// # Errors
///
/// Returns a message for each empty field.
pub fn validate_login(identifier: &str, password: &str) -> Result<LoginRequest, FieldErrors> {
    let mut errors = FieldErrors::new();
    let identifier = identifier.trim();
    if identifier.is_empty() {
        errors.insert("email", "Email or username is required");
    }
    if password.is_empty() {
        errors.insert("password", "Password is required");
    }
    errors.into_result(|| LoginRequest { email: identifier.to_owned(), password: password.to_owned() })
}

/// # Errors
///
/// Returns a message for each failing field.
pub fn validate_registration(username: &str, email: &str, password: &str) -> Result<RegisterRequest, FieldErrors> {
    let mut errors = FieldErrors::new();
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() {
        errors.insert("username", "Username is required");
    }
    if email.is_empty() {
        errors.insert("email", "Email is required");
    } else if !looks_like_email(email) {
        errors.insert("email", "Enter a valid email address");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        errors.insert("password", "Password must be at least 6 characters");
    }
    errors.into_result(|| RegisterRequest {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

fn looks_like_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace)
}

/// Raw donor profile form input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileForm {
    pub full_name: String,
    pub age: String,
    pub address: String,
    pub blood_group: String,
    pub last_donation_date: String,
    pub is_available_for_donation: bool,
    pub phone_number: String,
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            age: String::new(),
            address: String::new(),
            blood_group: String::new(),
            last_donation_date: String::new(),
            is_available_for_donation: true,
            phone_number: String::new(),
        }
    }
}

impl From<&Profile> for ProfileForm {
    fn from(profile: &Profile) -> Self {
        Self {
            full_name: profile.full_name.clone(),
            age: profile.age.to_string(),
            address: profile.address.clone(),
            blood_group: profile.blood_group.as_str().to_owned(),
            last_donation_date: profile.last_donation_date.clone().unwrap_or_default(),
            is_available_for_donation: profile.is_available_for_donation,
            phone_number: profile.phone_number.clone(),
        }
    }
}

impl ProfileForm {
    /// # Errors
    ///
    /// Returns a message for each failing field.
    pub fn validate(&self) -> Result<Profile, FieldErrors> {
        let mut errors = FieldErrors::new();
        let full_name = self.full_name.trim();
        if full_name.is_empty() {
            errors.insert("full_name", "Full name is required");
        }
        let age = self.age.trim().parse::<u32>().ok();
        match age {
            Some(a) if (MIN_DONOR_AGE..=MAX_DONOR_AGE).contains(&a) => {}
            _ => errors.insert("age", "Age must be between 16 and 65"),
        }
        let address = self.address.trim();
        if address.is_empty() {
            errors.insert("address", "Address is required");
        }
        let blood_group = self.blood_group.parse::<BloodGroup>().ok();
        if blood_group.is_none() {
            errors.insert("blood_group", "Blood group is required");
        }
        let last_donation = self.last_donation_date.trim();
        if !last_donation.is_empty() && parse_date(last_donation).is_none() {
            errors.insert("last_donation_date", "Enter a valid date");
        }
        let phone = self.phone_number.trim();
        if !phone.is_empty() && !is_bangladesh_phone(phone) {
            errors.insert("phone_number", "Please enter a valid Bangladesh phone number (+8801xxxxxxxxx)");
        }

        errors.into_result(|| Profile {
            full_name: full_name.to_owned(),
            age: age.unwrap_or(MIN_DONOR_AGE),
            address: address.to_owned(),
            blood_group: blood_group.unwrap_or(BloodGroup::OPositive),
            last_donation_date: (!last_donation.is_empty()).then(|| last_donation.to_owned()),
            is_available_for_donation: self.is_available_for_donation,
            phone_number: phone.to_owned(),
        })
    }
}
