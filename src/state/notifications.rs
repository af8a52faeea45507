//! Transient notifications ("toasts").
//!
//! DESIGN
//! ======
//! Producers publish into `NotificationCenter`; the single tray component
//! renders `visible()` and drives `expire` from a timer. Nothing else touches
//! the DOM for notifications.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use std::collections::VecDeque;

use super::StateCell;
use crate::util::clock;

/// How long a notification stays up without being dismissed.
pub const NOTIFICATION_TTL_MS: u64 = 4_000;

/// Oldest notifications are dropped beyond this.
pub const MAX_VISIBLE: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NoticeKind {
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
    pub expires_at_ms: u64,
}

#[derive(Clone, Debug, Default)]
pub struct NotificationCenter {
    queue: VecDeque<Notice>,
    next_id: u64,
}

impl NotificationCenter {
    pub fn publish(&mut self, kind: NoticeKind, message: impl Into<String>, now_ms: u64) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.queue.push_back(Notice {
            id,
            kind,
            message: message.into(),
            expires_at_ms: now_ms.saturating_add(NOTIFICATION_TTL_MS),
        });
        while self.queue.len() > MAX_VISIBLE {
            self.queue.pop_front();
        }
        id
    }

    /// Remove one notification. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.queue.retain(|n| n.id != id);
    }

    /// Drop everything whose deadline has passed. Returns whether anything
    /// was removed.
    pub fn expire(&mut self, now_ms: u64) -> bool {
        let before = self.queue.len();
        self.queue.retain(|n| n.expires_at_ms > now_ms);
        self.queue.len() != before
    }

    /// Oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notice> {
        self.queue.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Earliest pending deadline, for scheduling the next expiry sweep.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.queue.iter().map(|n| n.expires_at_ms).min()
    }
}

/// Publish through any cell, stamped with the current time.
pub fn notify(cell: &impl StateCell<NotificationCenter>, kind: NoticeKind, message: impl Into<String>) {
    let message = message.into();
    let now = clock::now_ms();
    cell.modify(|center| {
        center.publish(kind, message, now);
    });
}

/// Timer callback for the tray: expire what is due at `now_ms`.
///
/// Returns how much longer to wait when the timer woke before the earliest
/// deadline. `None` when something expired (the queue changed, so the tray
/// re-arms for the next deadline) or when nothing is left.
pub fn sweep_due(cell: &impl StateCell<NotificationCenter>, now_ms: u64) -> Option<u64> {
    let next = cell.peek(NotificationCenter::next_deadline).flatten()?;
    if next > now_ms {
        return Some(next - now_ms);
    }
    cell.modify(|center| {
        center.expire(now_ms);
    });
    None
}
