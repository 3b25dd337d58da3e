//! Transient notification queue.
//!
//! SYSTEM CONTEXT
//! ==============
//! Anything that wants to tell the user something pushes through [`Notify`];
//! the `Toaster` component renders the queue. In the browser each toast is
//! dismissed after [`TOAST_TTL_MS`].

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

/// Lifetime of a toast before automatic dismissal.
pub const TOAST_TTL_MS: u32 = 4_000;

/// Toasts shown at once; older ones wait until newer ones go away.
pub const MAX_VISIBLE_TOASTS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, kind, message: message.into() });
        id
    }

    /// Remove the toast with `id`. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    /// The most recent toasts, oldest first.
    pub fn visible(&self) -> &[Toast] {
        let start = self.toasts.len().saturating_sub(MAX_VISIBLE_TOASTS);
        &self.toasts[start..]
    }
}

/// Capability to surface a transient notification.
pub trait Notify {
    fn notify(&self, kind: ToastKind, message: &str);

    fn success(&self, message: &str) {
        self.notify(ToastKind::Success, message);
    }

    fn error(&self, message: &str) {
        self.notify(ToastKind::Error, message);
    }
}

impl Notify for RwSignal<ToastState> {
    fn notify(&self, kind: ToastKind, message: &str) {
        let mut id = 0;
        self.update(|state| id = state.push(kind, message));

        #[cfg(feature = "hydrate")]
        {
            let toasts = *self;
            gloo_timers::callback::Timeout::new(TOAST_TTL_MS, move || {
                let _ = toasts.try_update(|state| state.dismiss(id));
            })
            .forget();
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    }
}
