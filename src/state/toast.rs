//! Transient notification queue rendered as toast overlays

use crate::submit::{Notification, NotificationKind, NotificationSink};
use std::time::{Duration, Instant};
use uuid::Uuid;

/// How long a toast stays on screen
const TOAST_TTL: Duration = Duration::from_secs(3);

/// One on-screen notification
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
    created_at: Instant,
}

impl Toast {
    fn from_notification(notification: Notification) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: notification.kind,
            title: notification.title,
            description: notification.description,
            created_at: Instant::now(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= TOAST_TTL
    }
}

/// FIFO queue of live toasts, pruned every event-loop tick
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    /// Drop toasts past their display time
    pub fn prune_expired(&mut self) {
        self.toasts.retain(|t| !t.is_expired());
    }

    /// Remove a specific toast (user dismissal)
    pub fn dismiss(&mut self, id: Uuid) {
        self.toasts.retain(|t| t.id != id);
    }
}

impl NotificationSink for ToastQueue {
    fn notify(&mut self, notification: Notification) {
        self.toasts.push(Toast::from_notification(notification));
    }
}
