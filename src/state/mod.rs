//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by page (`requests`, `donations`, `profile`, ...) so each
//! component depends on one small model. The async drivers in each module
//! mutate state through `StateCell`, which the app backs with a Leptos
//! `RwSignal` and the tests back with `Rc<RefCell<_>>`.

pub mod auth;
pub mod dashboard;
pub mod donations;
pub mod notifications;
pub mod profile;
pub mod request_form;
pub mod requests;

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use leptos::prelude::{RwSignal, Update, WithUntracked};

use crate::net::error::{ApiError, REJECTED_FALLBACK};

/// Somewhere a view-model lives.
pub trait StateCell<T> {
    /// Mutate in place, notifying subscribers.
    fn modify(&self, f: impl FnOnce(&mut T));

    /// Read without subscribing. `None` once the owning scope is disposed.
    fn peek<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R>;
}

impl<T: Send + Sync + 'static> StateCell<T> for RwSignal<T> {
    fn modify(&self, f: impl FnOnce(&mut T)) {
        Update::update(self, f);
    }

    fn peek<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }
}

impl<T> StateCell<T> for Rc<RefCell<T>> {
    fn modify(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.borrow_mut());
    }

    fn peek<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }
}

/// Anything with a per-record busy set.
pub trait BusyRecords {
    fn busy_mut(&mut self) -> &mut BTreeSet<u64>;
}

/// Marks one record busy for its lifetime.
///
/// Dropping the guard clears the flag on every exit path, early returns and
/// errors included.
pub struct BusyGuard<C, T>
where
    C: StateCell<T>,
    T: BusyRecords,
{
    cell: C,
    id: u64,
    _state: std::marker::PhantomData<fn(&mut T)>,
}

impl<C, T> BusyGuard<C, T>
where
    C: StateCell<T>,
    T: BusyRecords,
{
    /// `None` when the record already has an action in flight.
    pub fn acquire(cell: C, id: u64) -> Option<Self> {
        let mut inserted = false;
        cell.modify(|state| inserted = state.busy_mut().insert(id));
        if !inserted {
            return None;
        }
        Some(Self { cell, id, _state: std::marker::PhantomData })
    }
}

impl<C, T> Drop for BusyGuard<C, T>
where
    C: StateCell<T>,
    T: BusyRecords,
{
    fn drop(&mut self) {
        let id = self.id;
        self.cell.modify(|state| {
            state.busy_mut().remove(&id);
        });
    }
}

/// Text for a failed list load: connectivity problems read as the retry
/// prompt, everything else as the page's own message.
pub(crate) fn load_error(err: &ApiError, fallback: &str) -> String {
    match err {
        ApiError::Network(_) | ApiError::Timeout(_) => err.user_message(),
        _ => fallback.to_owned(),
    }
}


/// Text for a failed workflow action: the server's own reason when it gave
/// one, otherwise the action's generic failure text.
pub(crate) fn action_error(err: &ApiError, fallback: &str) -> String {
    match err {
        ApiError::Rejected { message, .. } | ApiError::NotFound { message } if message != REJECTED_FALLBACK => {
            message.clone()
        }
        ApiError::Network(_) | ApiError::Timeout(_) | ApiError::Unauthorized => err.user_message(),
        _ => fallback.to_owned(),
    }
}
