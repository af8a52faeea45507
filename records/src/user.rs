//! Accounts: user record, credentials, and the auth/profile payloads.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use serde::{Deserialize, Serialize};

use crate::blood::BloodGroup;

/// Server-assigned account identifier.
pub type UserId = u64;

/// Cached identity of the signed-in account.
///
/// Never authoritative: the next server response supersedes it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
}

/// Access/refresh token pair. Both values are opaque strings.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub access: String,
    pub refresh: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access", &"<redacted>")
            .field("refresh", &"<redacted>")
            .finish()
    }
}

/// `POST /accounts/login/` body. `email` accepts a username as well.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /accounts/login/` success body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: User,
    pub access: String,
    pub refresh: String,
}

impl LoginResponse {
    /// Split into the cached user and the credential pair.
    #[must_use]
    pub fn into_parts(self) -> (User, Credentials) {
        (self.user, Credentials { access: self.access, refresh: self.refresh })
    }
}

/// `POST /token/refresh/` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

/// `POST /token/refresh/` success body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access: String,
}

/// `POST /accounts/register/` body. Accounts stay inactive until the email
/// verification link is followed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Generic `{ "message": ... }` acknowledgement.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// `GET /accounts/verify-email/{uid}/{token}/` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyEmailResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

/// `POST .../accept_request/` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptResponse {
    #[serde(default)]
    pub message: String,
    pub donation_id: Option<u64>,
}

/// Donor profile attached one-to-one to an account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub full_name: String,
    pub age: u32,
    pub address: String,
    pub blood_group: BloodGroup,
    #[serde(default)]
    pub last_donation_date: Option<String>,
    #[serde(default = "default_available")]
    pub is_available_for_donation: bool,
    #[serde(default)]
    pub phone_number: String,
}

fn default_available() -> bool {
    true
}
