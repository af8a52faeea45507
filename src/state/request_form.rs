//! Create-blood-request form model.
//!
//! Input is held as typed text. Phone input is normalised on every edit;
//! validation runs on submit and blocks the network call when it fails.
//! Field errors from the server are merged back so they render inline.

#[cfg(test)]
#[path = "request_form_test.rs"]
mod request_form_test;

use records::validate::{NON_FIELD, RequestForm, normalize_phone};
use records::{BloodRequest, FieldErrors, NewBloodRequest, Urgency};
use time::Date;

use super::StateCell;
use crate::net::error::ApiError;
use crate::net::http::ApiClient;
use crate::net::transport::Transport;
use crate::util::storage::KeyValueStore;

const CREATE_FAILED: &str = "Failed to create request. Please try again.";

/// Form field names, matching the wire names so server errors line up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestField {
    PatientName,
    BloodGroup,
    UnitsNeeded,
    HospitalName,
    HospitalAddress,
    ContactPhone,
    NeededByDate,
    AdditionalNotes,
}

impl RequestField {
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::PatientName => "patient_name",
            Self::BloodGroup => "blood_group",
            Self::UnitsNeeded => "units_needed",
            Self::HospitalName => "hospital_name",
            Self::HospitalAddress => "hospital_address",
            Self::ContactPhone => "contact_phone",
            Self::NeededByDate => "needed_by_date",
            Self::AdditionalNotes => "additional_notes",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestDraft {
    pub form: RequestForm,
    pub errors: FieldErrors,
    pub submitting: bool,
}

impl RequestDraft {
    /// Store typed input for `field` and clear that field's error.
    pub fn set(&mut self, field: RequestField, value: &str) {
        let slot = match field {
            RequestField::PatientName => &mut self.form.patient_name,
            RequestField::BloodGroup => &mut self.form.blood_group,
            RequestField::UnitsNeeded => &mut self.form.units_needed,
            RequestField::HospitalName => &mut self.form.hospital_name,
            RequestField::HospitalAddress => &mut self.form.hospital_address,
            RequestField::ContactPhone => &mut self.form.contact_phone,
            RequestField::NeededByDate => &mut self.form.needed_by_date,
            RequestField::AdditionalNotes => &mut self.form.additional_notes,
        };
        *slot = if field == RequestField::ContactPhone { normalize_phone(value) } else { value.to_owned() };
        self.errors.remove(field.key());
    }

    pub fn set_urgency(&mut self, urgency: Urgency) {
        self.form.urgency = urgency;
    }

    #[must_use]
    pub fn error(&self, field: RequestField) -> Option<&str> {
        self.errors.get(field.key())
    }

    /// Validate for submission. On failure the errors are stored on the draft.
    ///
    /// # Errors
    ///
    /// Returns the field errors when any input is invalid.
    pub fn submit(&mut self, today: Date) -> Result<NewBloodRequest, FieldErrors> {
        match self.form.validate(today) {
            Ok(payload) => {
                self.errors = FieldErrors::new();
                Ok(payload)
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }

    /// Fold a failed create back into the draft.
    pub fn absorb(&mut self, err: &ApiError) {
        self.errors = match err {
            ApiError::Validation(fields) => fields.clone(),
            ApiError::Rejected { message, .. } => {
                let mut errors = FieldErrors::new();
                errors.insert(NON_FIELD, message.clone());
                errors
            }
            ApiError::Network(_) | ApiError::Timeout(_) => {
                let mut errors = FieldErrors::new();
                errors.insert(NON_FIELD, err.user_message());
                errors
            }
            _ => {
                let mut errors = FieldErrors::new();
                errors.insert(NON_FIELD, CREATE_FAILED);
                errors
            }
        };
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Validate against `today`, then create. On success the draft is reset and
/// the created request returned; on failure the draft carries the errors.
pub async fn submit_request<C, T, S>(cell: &C, client: &ApiClient<T, S>, today: Date) -> Option<BloodRequest>
where
    C: StateCell<RequestDraft>,
    T: Transport,
    S: KeyValueStore,
{
    let mut payload = None;
    cell.modify(|draft| {
        if !draft.submitting {
            payload = draft.submit(today).ok();
            draft.submitting = payload.is_some();
        }
    });
    let payload = payload?;

    let result = client.create_blood_request(&payload).await;
    let mut created = None;
    cell.modify(|draft| {
        draft.submitting = false;
        match result {
            Ok(request) => {
                draft.reset();
                created = Some(request);
            }
            Err(err) => {
                log::warn!("request form: create failed: {err}");
                draft.absorb(&err);
            }
        }
    });
    created
}
