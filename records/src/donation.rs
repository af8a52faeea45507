//! Donation records: the tracked fulfilment of a blood request by one donor.

#[cfg(test)]
#[path = "donation_test.rs"]
mod donation_test;

use serde::{Deserialize, Serialize};

use crate::blood::BloodGroup;
use crate::request::encode_pairs;
use crate::user::UserId;

/// Server-side lifecycle of a donation record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DonationStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Canceled,
}

impl DonationStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Canceled => "canceled",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::Completed => "Completed",
            Self::Canceled => "Canceled",
        }
    }
}

/// A donation record, created by the server when a donor accepts a request.
///
/// The linked request fields are denormalised by the server for display and
/// may be absent on older payloads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonationRecord {
    pub id: u64,
    pub blood_request: u64,
    pub donor: UserId,
    pub recipient: UserId,
    #[serde(default = "default_units")]
    pub units_donated: u32,
    #[serde(default)]
    pub donation_date: Option<String>,
    pub status: DonationStatus,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub patient_name: Option<String>,
    #[serde(default)]
    pub blood_group: Option<BloodGroup>,
    #[serde(default)]
    pub hospital_name: Option<String>,
    #[serde(default)]
    pub donor_name: Option<String>,
    #[serde(default)]
    pub recipient_name: Option<String>,
}

fn default_units() -> u32 {
    1
}

impl DonationRecord {
    #[must_use]
    pub fn involves(&self, user_id: UserId) -> bool {
        self.donor == user_id || self.recipient == user_id
    }
}

/// Which side of the donation history to list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DonationRole {
    #[default]
    All,
    Donor,
    Recipient,
}

impl DonationRole {
    pub const ALL: [Self; 3] = [Self::All, Self::Donor, Self::Recipient];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Activity",
            Self::Donor => "My Donations",
            Self::Recipient => "Received",
        }
    }

    /// `role=...` parameter, empty for [`DonationRole::All`].
    #[must_use]
    pub fn query_string(self) -> String {
        match self {
            Self::All => String::new(),
            Self::Donor => encode_pairs(&[("role", "donor")]),
            Self::Recipient => encode_pairs(&[("role", "recipient")]),
        }
    }
}
