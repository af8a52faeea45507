//! Dashboard statistics returned by `GET /accounts/dashboard-stats/`.

use serde::{Deserialize, Serialize};

use crate::donation::DonationRecord;
use crate::request::BloodRequest;

/// Per-user counters plus two global context figures.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardStats {
    pub total_requests: u32,
    pub pending_requests: u32,
    pub completed_requests: u32,
    pub total_donations: u32,
    pub pending_donations: u32,
    pub completed_donations: u32,
    pub available_donors_count: u32,
    pub urgent_requests_count: u32,
}

/// Full dashboard payload: counters and the five most recent items of each kind.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSummary {
    pub stats: DashboardStats,
    pub recent_requests: Vec<BloodRequest>,
    pub recent_donations: Vec<DonationRecord>,
}
