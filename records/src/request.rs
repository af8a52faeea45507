//! Blood requests and the list filter sent with `GET /accounts/blood-requests/`.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use std::fmt::Write as _;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::blood::{BloodGroup, ParseEnumError, Urgency};
use crate::user::UserId;

/// Server-side lifecycle of a blood request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Pending,
    Accepted,
    Completed,
    Canceled,
}

impl RequestStatus {
    pub const ALL: [Self; 4] = [Self::Pending, Self::Accepted, Self::Completed, Self::Canceled];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Completed => "completed",
            Self::Canceled => "canceled",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Accepted => "Accepted",
            Self::Completed => "Completed",
            Self::Canceled => "Canceled",
        }
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Canceled)
    }
}

impl FromStr for RequestStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|st| st.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseEnumError { kind: "request status", value: s.to_owned() })
    }
}

/// A request for blood as listed by the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BloodRequest {
    pub id: u64,
    pub requester: UserId,
    pub patient_name: String,
    pub blood_group: BloodGroup,
    pub units_needed: u32,
    pub urgency: Urgency,
    pub status: RequestStatus,
    #[serde(default)]
    pub needed_by_date: Option<String>,
    pub hospital_name: String,
    pub hospital_address: String,
    pub contact_phone: String,
    #[serde(default)]
    pub additional_notes: String,
}

impl BloodRequest {
    #[must_use]
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.requester == user_id
    }
}

/// Creation payload for `POST /accounts/blood-requests/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBloodRequest {
    pub patient_name: String,
    pub blood_group: BloodGroup,
    pub units_needed: u32,
    pub urgency: Urgency,
    pub hospital_name: String,
    pub hospital_address: String,
    pub contact_phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub needed_by_date: Option<String>,
    #[serde(default)]
    pub additional_notes: String,
}

/// Query parameters accepted by the blood request list endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestFilter {
    pub status: Option<RequestStatus>,
    pub blood_group: Option<BloodGroup>,
    pub urgency: Option<Urgency>,
    pub my_requests: bool,
}

impl RequestFilter {
    /// Encode the set parameters as `a=b&c=d`, empty when nothing is set.
    #[must_use]
    pub fn query_string(&self) -> String {
        let mut pairs: Vec<(&str, &str)> = Vec::new();
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str()));
        }
        if let Some(group) = self.blood_group {
            pairs.push(("blood_group", group.as_str()));
        }
        if let Some(urgency) = self.urgency {
            pairs.push(("urgency", urgency.as_str()));
        }
        if self.my_requests {
            pairs.push(("my_requests", "true"));
        }
        encode_pairs(&pairs)
    }
}

pub(crate) fn encode_pairs(pairs: &[(&str, &str)]) -> String {
    let mut out = String::new();
    for (i, (key, value)) in pairs.iter().enumerate() {
        if i > 0 {
            out.push('&');
        }
        out.push_str(key);
        out.push('=');
        encode_component(&mut out, value);
    }
    out
}

fn encode_component(out: &mut String, value: &str) {
    for byte in value.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            out.push(char::from(byte));
        } else {
            let _ = write!(out, "%{byte:02X}");
        }
    }
}
