//! Donation history view-model.
//!
//! Same shape as `requests`: a fetched list, a role filter, a busy set and
//! drivers that re-fetch after every successful confirm or cancel.

#[cfg(test)]
#[path = "donations_test.rs"]
mod donations_test;

use std::collections::BTreeSet;

use records::{DonationAction, DonationRecord, DonationRole, Viewer, workflow};

use super::notifications::{NoticeKind, NotificationCenter, notify};
use super::{BusyGuard, BusyRecords, StateCell, action_error, load_error};
use crate::net::http::ApiClient;
use crate::net::transport::Transport;
use crate::util::storage::KeyValueStore;

const LOAD_FAILED: &str = "Failed to fetch donation history";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DonationsState {
    pub items: Vec<DonationRecord>,
    pub loading: bool,
    pub role: DonationRole,
    pub busy: BTreeSet<u64>,
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DonationRow {
    pub donation: DonationRecord,
    pub actions: Vec<DonationAction>,
    pub busy: bool,
    /// Whether the viewer gave (rather than received) this donation.
    pub viewer_is_donor: bool,
}

impl DonationsState {
    #[must_use]
    pub fn rows(&self, viewer: &Viewer) -> Vec<DonationRow> {
        self.items
            .iter()
            .map(|donation| DonationRow {
                actions: workflow::donation_actions(donation, viewer),
                busy: self.busy.contains(&donation.id),
                viewer_is_donor: donation.donor == viewer.id,
                donation: donation.clone(),
            })
            .collect()
    }
}

impl BusyRecords for DonationsState {
    fn busy_mut(&mut self) -> &mut BTreeSet<u64> {
        &mut self.busy
    }
}

pub async fn reload_donations<C, T, S>(cell: &C, client: &ApiClient<T, S>)
where
    C: StateCell<DonationsState>,
    T: Transport,
    S: KeyValueStore,
{
    let Some(role) = cell.peek(|s| s.role) else {
        return;
    };
    cell.modify(|s| {
        s.loading = true;
        s.error = None;
    });
    let result = client.list_donations(role).await;
    cell.modify(|s| {
        s.loading = false;
        match result {
            Ok(items) => s.items = items,
            Err(err) => {
                log::warn!("donations: load failed: {err}");
                s.error = Some(load_error(&err, LOAD_FAILED));
            }
        }
    });
}

pub async fn select_role<C, T, S>(cell: &C, client: &ApiClient<T, S>, role: DonationRole)
where
    C: StateCell<DonationsState>,
    T: Transport,
    S: KeyValueStore,
{
    cell.modify(|s| s.role = role);
    reload_donations(cell, client).await;
}

/// Confirm or cancel donation `id`. Returns whether the server accepted it.
pub async fn run_donation_action<C, N, T, S>(
    cell: &C,
    notices: &N,
    client: &ApiClient<T, S>,
    id: u64,
    action: DonationAction,
) -> bool
where
    C: StateCell<DonationsState> + Clone,
    N: StateCell<NotificationCenter>,
    T: Transport,
    S: KeyValueStore,
{
    let Some(_guard) = BusyGuard::<C, DonationsState>::acquire(cell.clone(), id) else {
        return false;
    };
    let result = match action {
        DonationAction::Confirm => client.confirm_donation(id).await,
        DonationAction::Cancel => client.cancel_donation(id).await,
    };
    match result {
        Ok(_) => {
            notify(notices, NoticeKind::Success, action.success_message());
            reload_donations(cell, client).await;
            true
        }
        Err(err) => {
            log::warn!("donations: {action:?} on {id} failed: {err}");
            let message = action_error(&err, action.failure_message());
            cell.modify(|s| s.error = Some(message.clone()));
            notify(notices, NoticeKind::Error, message);
            false
        }
    }
}
