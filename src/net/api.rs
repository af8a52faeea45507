//! Typed REST endpoints.
//!
//! Paths are relative to `ClientConfig::api_base_url`. Login, registration and
//! email verification go out without credentials; everything else runs
//! through the refresh protocol in `net::http`.
//!
//! ERROR HANDLING
//! ==============
//! Every method returns `Result<_, ApiError>`. The only status translated
//! into a value is the profile 404, which means "no profile yet".

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use records::{
    AcceptResponse, BloodRequest, DashboardSummary, DonationAction, DonationRecord, DonationRole, LoginRequest,
    LoginResponse, MessageResponse, NewBloodRequest, Profile, RegisterRequest, RequestAction, RequestFilter,
    VerifyEmailResponse,
};

use super::error::{ApiError, REJECTED_FALLBACK};
use super::http::{ApiClient, encode};
use super::transport::{Method, Transport};
use crate::util::storage::KeyValueStore;

pub const LOGIN_PATH: &str = "accounts/login/";
pub const REGISTER_PATH: &str = "accounts/register/";
pub const PROFILE_PATH: &str = "accounts/profile/";
pub const BLOOD_REQUESTS_PATH: &str = "accounts/blood-requests/";
pub const DONATIONS_PATH: &str = "accounts/donation-history/";
pub const DASHBOARD_PATH: &str = "accounts/dashboard-stats/";

const LOGIN_FALLBACK: &str = "Invalid Email/Username or Password";

// =============================================================================
// PATHS
// =============================================================================

#[must_use]
pub fn blood_requests_path(filter: &RequestFilter) -> String {
    with_query(BLOOD_REQUESTS_PATH, &filter.query_string())
}

#[must_use]
pub fn request_action_path(id: u64, action: RequestAction) -> String {
    format!("{BLOOD_REQUESTS_PATH}{id}/{}/", action.endpoint())
}

#[must_use]
pub fn donations_path(role: DonationRole) -> String {
    with_query(DONATIONS_PATH, &role.query_string())
}

#[must_use]
pub fn donation_action_path(id: u64, action: DonationAction) -> String {
    format!("{DONATIONS_PATH}{id}/{}/", action.endpoint())
}

#[must_use]
pub fn verify_email_path(uid: &str, token: &str) -> String {
    format!("accounts/verify-email/{uid}/{token}/")
}

fn with_query(path: &str, query: &str) -> String {
    if query.is_empty() { path.to_owned() } else { format!("{path}?{query}") }
}

// =============================================================================
// ENDPOINTS
// =============================================================================

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    /// `POST accounts/login/`. Persists nothing; the session context owns that.
    ///
    /// # Errors
    ///
    /// Bad credentials come back as [`ApiError::Rejected`] with the server's
    /// text, or a generic message when the server gave none.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let resp = self
            .send_public(Method::Post, LOGIN_PATH, Some(encode(request)?))
            .await
            .map_err(|err| match err {
                ApiError::Rejected { status, message } if message == REJECTED_FALLBACK => {
                    ApiError::Rejected { status, message: LOGIN_FALLBACK.to_owned() }
                }
                other => other,
            })?;
        resp.json().map_err(ApiError::Decode)
    }

    /// `POST accounts/register/`.
    ///
    /// # Errors
    ///
    /// Duplicate username or email arrives as [`ApiError::Validation`].
    pub async fn register(&self, request: &RegisterRequest) -> Result<MessageResponse, ApiError> {
        let resp = self.send_public(Method::Post, REGISTER_PATH, Some(encode(request)?)).await?;
        if resp.body.trim().is_empty() {
            return Ok(MessageResponse::default());
        }
        resp.json().map_err(ApiError::Decode)
    }

    /// `GET accounts/verify-email/{uid}/{token}/`.
    ///
    /// # Errors
    ///
    /// An invalid or expired link is [`ApiError::Rejected`].
    pub async fn verify_email(&self, uid: &str, token: &str) -> Result<VerifyEmailResponse, ApiError> {
        let resp = self.send_public(Method::Get, &verify_email_path(uid, token), None).await?;
        resp.json().map_err(ApiError::Decode)
    }

    /// `GET accounts/profile/`; `None` when the account has no profile yet.
    ///
    /// # Errors
    ///
    /// Any failure other than the 404.
    pub async fn fetch_profile(&self) -> Result<Option<Profile>, ApiError> {
        match self.get_json(PROFILE_PATH).await {
            Ok(profile) => Ok(Some(profile)),
            Err(ApiError::NotFound { .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// `POST accounts/profile/`.
    ///
    /// # Errors
    ///
    /// Server-side field errors arrive as [`ApiError::Validation`].
    pub async fn create_profile(&self, profile: &Profile) -> Result<Profile, ApiError> {
        self.post_json(PROFILE_PATH, profile).await
    }

    /// `PUT accounts/profile/`.
    ///
    /// # Errors
    ///
    /// Server-side field errors arrive as [`ApiError::Validation`].
    pub async fn update_profile(&self, profile: &Profile) -> Result<Profile, ApiError> {
        self.put_json(PROFILE_PATH, profile).await
    }

    /// `GET accounts/blood-requests/` with the filter's query parameters.
    ///
    /// # Errors
    ///
    /// Transport or status failure.
    pub async fn list_blood_requests(&self, filter: &RequestFilter) -> Result<Vec<BloodRequest>, ApiError> {
        self.get_json(&blood_requests_path(filter)).await
    }

    /// `POST accounts/blood-requests/`.
    ///
    /// # Errors
    ///
    /// Server-side field errors arrive as [`ApiError::Validation`].
    pub async fn create_blood_request(&self, request: &NewBloodRequest) -> Result<BloodRequest, ApiError> {
        self.post_json(BLOOD_REQUESTS_PATH, request).await
    }

    /// `POST accounts/blood-requests/{id}/accept_request/`.
    ///
    /// # Errors
    ///
    /// Accepting one's own or a non-pending request is [`ApiError::Rejected`].
    pub async fn accept_request(&self, id: u64) -> Result<AcceptResponse, ApiError> {
        let resp = self.send(Method::Post, &request_action_path(id, RequestAction::Accept), None).await?;
        resp.json().map_err(ApiError::Decode)
    }

    /// `POST accounts/blood-requests/{id}/cancel_request/`.
    ///
    /// # Errors
    ///
    /// Cancelling someone else's request is [`ApiError::Rejected`].
    pub async fn cancel_request(&self, id: u64) -> Result<MessageResponse, ApiError> {
        self.post_action(&request_action_path(id, RequestAction::Cancel)).await
    }

    /// `GET accounts/donation-history/`, optionally narrowed to one side.
    ///
    /// # Errors
    ///
    /// Transport or status failure.
    pub async fn list_donations(&self, role: DonationRole) -> Result<Vec<DonationRecord>, ApiError> {
        self.get_json(&donations_path(role)).await
    }

    /// `POST accounts/donation-history/{id}/confirm_donation/`.
    ///
    /// # Errors
    ///
    /// Anyone but the recipient gets [`ApiError::Rejected`].
    pub async fn confirm_donation(&self, id: u64) -> Result<MessageResponse, ApiError> {
        self.post_action(&donation_action_path(id, DonationAction::Confirm)).await
    }

    /// `POST accounts/donation-history/{id}/cancel_donation/`.
    ///
    /// # Errors
    ///
    /// Non-participants get [`ApiError::Rejected`].
    pub async fn cancel_donation(&self, id: u64) -> Result<MessageResponse, ApiError> {
        self.post_action(&donation_action_path(id, DonationAction::Cancel)).await
    }

    /// `GET accounts/dashboard-stats/`.
    ///
    /// # Errors
    ///
    /// Transport or status failure.
    pub async fn dashboard_summary(&self) -> Result<DashboardSummary, ApiError> {
        self.get_json(DASHBOARD_PATH).await
    }
}
