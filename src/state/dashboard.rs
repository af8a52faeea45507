#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use records::DashboardSummary;

use super::{StateCell, load_error};
use crate::net::http::ApiClient;
use crate::net::transport::Transport;
use crate::util::storage::KeyValueStore;

const LOAD_FAILED: &str = "Failed to fetch dashboard data";

/// Dashboard counters and recent activity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardState {
    pub summary: DashboardSummary,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self { summary: DashboardSummary::default(), loading: true, error: None }
    }
}

pub async fn reload_dashboard<C, T, S>(cell: &C, client: &ApiClient<T, S>)
where
    C: StateCell<DashboardState>,
    T: Transport,
    S: KeyValueStore,
{
    cell.modify(|s| {
        s.loading = true;
        s.error = None;
    });
    let result = client.dashboard_summary().await;
    cell.modify(|s| {
        s.loading = false;
        match result {
            Ok(summary) => s.summary = summary,
            Err(err) => {
                log::warn!("dashboard: load failed: {err}");
                s.error = Some(load_error(&err, LOAD_FAILED));
            }
        }
    });
}
