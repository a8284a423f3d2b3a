//! Transient toast notifications, orthogonal to every other store.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use leptos::prelude::{RwSignal, Update};

/// How long a toast stays on screen before auto-dismissal.
pub const AUTO_DISMISS_MS: u64 = 5_000;

/// Visual category of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
    Warning,
}

impl ToastKind {
    /// CSS modifier class for the notification element.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "is-success",
            Self::Error => "is-danger",
            Self::Info => "is-info",
            Self::Warning => "is-warning",
        }
    }
}

/// A single on-screen message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Active toasts, newest last.
#[derive(Clone, Debug, Default)]
pub struct NotificationsState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl NotificationsState {
    /// Append a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, kind, message });
        id
    }

    /// Remove a toast by id; ids of dismissed toasts are never reused.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

/// Show a toast and schedule its auto-dismissal.
pub fn notify(notifications: RwSignal<NotificationsState>, kind: ToastKind, message: impl Into<String>) {
    let message = message.into();
    let mut id = 0;
    notifications.update(|n| id = n.push(kind, message));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(AUTO_DISMISS_MS)).await;
        notifications.update(|n| n.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

/// Show a success toast.
pub fn success(notifications: RwSignal<NotificationsState>, message: impl Into<String>) {
    notify(notifications, ToastKind::Success, message);
}

/// Show an error toast.
pub fn error(notifications: RwSignal<NotificationsState>, message: impl Into<String>) {
    notify(notifications, ToastKind::Error, message);
}
