//! Permitted workflow actions per record.
//!
//! The server owns every status; this module only answers "which buttons does
//! this viewer get for this record right now". Each action maps to exactly one
//! mutating endpoint, and the caller re-fetches the list after it succeeds.

#[cfg(test)]
#[path = "workflow_test.rs"]
mod workflow_test;

use crate::donation::{DonationRecord, DonationStatus};
use crate::request::{BloodRequest, RequestStatus};
use crate::user::UserId;

/// The signed-in account looking at a list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewer {
    pub id: UserId,
    /// `false` once the donor profile says they are not available.
    pub available: bool,
}

impl Viewer {
    #[must_use]
    pub fn new(id: UserId) -> Self {
        Self { id, available: true }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestAction {
    Accept,
    Cancel,
}

impl RequestAction {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Accept => "Accept Request",
            Self::Cancel => "Cancel Request",
        }
    }

    /// Endpoint segment appended to `/accounts/blood-requests/{id}/`.
    #[must_use]
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Accept => "accept_request",
            Self::Cancel => "cancel_request",
        }
    }

    #[must_use]
    pub fn success_message(self) -> &'static str {
        match self {
            Self::Accept => "Blood request accepted successfully",
            Self::Cancel => "Request canceled successfully",
        }
    }

    #[must_use]
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Accept => "Failed to accept request",
            Self::Cancel => "Failed to cancel request",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DonationAction {
    Confirm,
    Cancel,
}

impl DonationAction {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Confirm => "Confirm Donation",
            Self::Cancel => "Cancel Donation",
        }
    }

    /// Endpoint segment appended to `/accounts/donation-history/{id}/`.
    #[must_use]
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Confirm => "confirm_donation",
            Self::Cancel => "cancel_donation",
        }
    }

    #[must_use]
    pub fn success_message(self) -> &'static str {
        match self {
            Self::Confirm => "Donation confirmed successfully!",
            Self::Cancel => "Donation canceled",
        }
    }

    #[must_use]
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Confirm => "Failed to confirm donation",
            Self::Cancel => "Failed to cancel donation",
        }
    }
}

/// Actions `viewer` may take on `request`.
#[must_use]
pub fn request_actions(request: &BloodRequest, viewer: &Viewer) -> Vec<RequestAction> {
    let owner = request.is_owned_by(viewer.id);
    match request.status {
        RequestStatus::Pending if owner => vec![RequestAction::Cancel],
        RequestStatus::Pending if viewer.available => vec![RequestAction::Accept],
        RequestStatus::Accepted if owner => vec![RequestAction::Cancel],
        _ => Vec::new(),
    }
}

/// Actions `viewer` may take on `donation`.
///
/// Only the recipient confirms; the server rejects anyone else.
#[must_use]
pub fn donation_actions(donation: &DonationRecord, viewer: &Viewer) -> Vec<DonationAction> {
    if !donation.involves(viewer.id) {
        return Vec::new();
    }
    match donation.status {
        DonationStatus::Pending if donation.recipient == viewer.id => {
            vec![DonationAction::Confirm, DonationAction::Cancel]
        }
        DonationStatus::Pending => vec![DonationAction::Cancel],
        DonationStatus::Confirmed | DonationStatus::Completed | DonationStatus::Canceled => Vec::new(),
    }
}
