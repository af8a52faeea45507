//! Donor profile view-model.
//!
//! A 404 from the profile endpoint means the account has no profile yet; the
//! page opens in edit mode and the first save is a create (POST). Later saves
//! are updates (PUT).

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use records::validate::ProfileForm;
use records::{FieldErrors, Profile};

use super::StateCell;
use crate::net::error::ApiError;
use crate::net::http::ApiClient;
use crate::net::transport::Transport;
use crate::util::storage::KeyValueStore;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileState {
    pub profile: Option<Profile>,
    pub form: ProfileForm,
    pub editing: bool,
    pub loading: bool,
    pub saving: bool,
    pub field_errors: FieldErrors,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self {
            profile: None,
            form: ProfileForm::default(),
            editing: false,
            loading: true,
            saving: false,
            field_errors: FieldErrors::new(),
            error: None,
            success: None,
        }
    }
}

impl ProfileState {
    /// Whether the next save creates the profile.
    #[must_use]
    pub fn creating(&self) -> bool {
        self.profile.is_none()
    }

    /// Donor availability for the workflow; no profile counts as available.
    #[must_use]
    pub fn available(&self) -> bool {
        self.profile.as_ref().is_none_or(|p| p.is_available_for_donation)
    }

    pub fn begin_edit(&mut self) {
        self.editing = true;
        self.error = None;
        self.success = None;
    }

    /// Throw away edits. Without a saved profile there is nothing to return
    /// to, so the form stays open.
    pub fn cancel_edit(&mut self) {
        if let Some(profile) = &self.profile {
            self.form = ProfileForm::from(profile);
            self.editing = false;
        }
        self.field_errors = FieldErrors::new();
        self.error = None;
        self.success = None;
    }

    /// Apply an edit to one field and drop that field's stale error.
    pub fn edit(&mut self, field: &str, apply: impl FnOnce(&mut ProfileForm)) {
        apply(&mut self.form);
        self.field_errors.remove(field);
    }

    fn loaded(&mut self, profile: Option<Profile>) {
        match &profile {
            Some(p) => {
                self.form = ProfileForm::from(p);
                self.editing = false;
            }
            None => {
                self.form = ProfileForm::default();
                self.editing = true;
            }
        }
        self.profile = profile;
    }
}

pub async fn load_profile<C, T, S>(cell: &C, client: &ApiClient<T, S>)
where
    C: StateCell<ProfileState>,
    T: Transport,
    S: KeyValueStore,
{
    cell.modify(|s| {
        s.loading = true;
        s.error = None;
    });
    let result = client.fetch_profile().await;
    cell.modify(|s| {
        s.loading = false;
        match result {
            Ok(profile) => s.loaded(profile),
            Err(err) => {
                log::warn!("profile: load failed: {err}");
                s.error = Some(super::load_error(&err, "Failed to load profile"));
            }
        }
    });
}

/// Validate and save the form. Returns whether the profile was stored.
pub async fn save_profile<C, T, S>(cell: &C, client: &ApiClient<T, S>) -> bool
where
    C: StateCell<ProfileState>,
    T: Transport,
    S: KeyValueStore,
{
    let Some((form, creating, saving)) = cell.peek(|s| (s.form.clone(), s.creating(), s.saving)) else {
        return false;
    };
    if saving {
        return false;
    }
    let profile = match form.validate() {
        Ok(profile) => profile,
        Err(errors) => {
            cell.modify(|s| s.field_errors = errors);
            return false;
        }
    };

    cell.modify(|s| {
        s.saving = true;
        s.field_errors = FieldErrors::new();
        s.error = None;
        s.success = None;
    });
    let result = if creating { client.create_profile(&profile).await } else { client.update_profile(&profile).await };
    let ok = result.is_ok();
    cell.modify(|s| {
        s.saving = false;
        match result {
            Ok(saved) => {
                s.loaded(Some(saved));
                let text = if creating { "Profile created successfully!" } else { "Profile updated successfully!" };
                s.success = Some(text.to_owned());
            }
            Err(ApiError::Validation(errors)) => {
                s.error = errors.summary().map(str::to_owned);
                s.field_errors = errors;
            }
            Err(err) => {
                log::warn!("profile: save failed: {err}");
                s.error = Some(super::action_error(&err, "Failed to save profile"));
            }
        }
    });
    ok
}
