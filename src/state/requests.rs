//! Blood request list view-model.
//!
//! DESIGN
//! ======
//! The server owns every status. This state holds the last fetched list and
//! which records have an action in flight; `rows` pairs each record with the
//! actions the viewer may take. An action is one mutating call followed by a
//! full re-fetch, never a local patch. Two independent reloads race and the
//! last to resolve wins.

#[cfg(test)]
#[path = "requests_test.rs"]
mod requests_test;

use std::collections::BTreeSet;

use records::{BloodRequest, RequestAction, RequestFilter, Viewer, workflow};

use super::notifications::{NoticeKind, NotificationCenter, notify};
use super::{BusyGuard, BusyRecords, StateCell, action_error, load_error};
use crate::net::http::ApiClient;
use crate::net::transport::Transport;
use crate::util::storage::KeyValueStore;

const LOAD_FAILED: &str = "Failed to fetch blood requests";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestsState {
    pub items: Vec<BloodRequest>,
    pub loading: bool,
    pub filter: RequestFilter,
    pub busy: BTreeSet<u64>,
    pub error: Option<String>,
}

/// One rendered list entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestRow {
    pub request: BloodRequest,
    pub actions: Vec<RequestAction>,
    pub busy: bool,
}

impl RequestsState {
    #[must_use]
    pub fn rows(&self, viewer: &Viewer) -> Vec<RequestRow> {
        self.items
            .iter()
            .map(|request| RequestRow {
                actions: workflow::request_actions(request, viewer),
                busy: self.busy.contains(&request.id),
                request: request.clone(),
            })
            .collect()
    }
}

impl BusyRecords for RequestsState {
    fn busy_mut(&mut self) -> &mut BTreeSet<u64> {
        &mut self.busy
    }
}

/// Fetch the list for the current filter.
pub async fn reload_requests<C, T, S>(cell: &C, client: &ApiClient<T, S>)
where
    C: StateCell<RequestsState>,
    T: Transport,
    S: KeyValueStore,
{
    let Some(filter) = cell.peek(|s| s.filter.clone()) else {
        return;
    };
    cell.modify(|s| {
        s.loading = true;
        s.error = None;
    });
    let result = client.list_blood_requests(&filter).await;
    cell.modify(|s| {
        s.loading = false;
        match result {
            Ok(items) => s.items = items,
            Err(err) => {
                log::warn!("requests: load failed: {err}");
                s.error = Some(load_error(&err, LOAD_FAILED));
            }
        }
    });
}

/// Replace the filter and re-fetch.
pub async fn apply_filter<C, T, S>(cell: &C, client: &ApiClient<T, S>, filter: RequestFilter)
where
    C: StateCell<RequestsState>,
    T: Transport,
    S: KeyValueStore,
{
    cell.modify(|s| s.filter = filter);
    reload_requests(cell, client).await;
}

/// Run one workflow action against request `id`. Returns whether the server
/// accepted it. A second call for a record already in flight is ignored.
pub async fn run_request_action<C, N, T, S>(
    cell: &C,
    notices: &N,
    client: &ApiClient<T, S>,
    id: u64,
    action: RequestAction,
) -> bool
where
    C: StateCell<RequestsState> + Clone,
    N: StateCell<NotificationCenter>,
    T: Transport,
    S: KeyValueStore,
{
    let Some(_guard) = BusyGuard::<C, RequestsState>::acquire(cell.clone(), id) else {
        return false;
    };
    let result = match action {
        RequestAction::Accept => client.accept_request(id).await.map(drop),
        RequestAction::Cancel => client.cancel_request(id).await.map(drop),
    };
    match result {
        Ok(()) => {
            notify(notices, NoticeKind::Success, action.success_message());
            reload_requests(cell, client).await;
            true
        }
        Err(err) => {
            log::warn!("requests: {action:?} on {id} failed: {err}");
            let message = action_error(&err, action.failure_message());
            cell.modify(|s| s.error = Some(message.clone()));
            notify(notices, NoticeKind::Error, message);
            false
        }
    }
}
