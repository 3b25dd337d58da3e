//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login flow writes the session record; this app only reads it and asks
//! for it to be cleared. Components see the store through [`SessionSource`]
//! and [`SessionSink`] so they never touch storage directly.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

pub use crate::net::types::Session;
use crate::util::storage;

/// `localStorage` key holding the persisted session record.
pub const SESSION_STORAGE_KEY: &str = "ipce_session";

/// Authentication state provided via context at the app root.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    /// Load the record persisted by the login flow. Always anonymous
    /// outside the browser.
    pub fn load_persisted() -> Self {
        Self { session: storage::load_json(SESSION_STORAGE_KEY) }
    }
}

/// Read side of the session store.
pub trait SessionSource {
    /// The current session. Reactive sources track the read.
    fn current_session(&self) -> Option<Session>;
}

/// Mutation side of the session store.
pub trait SessionSink {
    /// Forget the current session, both in memory and in storage.
    fn clear_session(&self);
}

impl SessionSource for RwSignal<AuthState> {
    fn current_session(&self) -> Option<Session> {
        self.with(|state| state.session.clone())
    }
}

impl SessionSink for RwSignal<AuthState> {
    fn clear_session(&self) {
        storage::remove(SESSION_STORAGE_KEY);
        self.update(|state| state.session = None);
    }
}

/// Which set of header actions to show. Exactly one variant applies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionView {
    Anonymous,
    Authenticated(Session),
}

impl From<Option<Session>> for SessionView {
    fn from(session: Option<Session>) -> Self {
        session.map_or(Self::Anonymous, Self::Authenticated)
    }
}

impl SessionView {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// Verification badge for an authenticated session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verification {
    Verified,
    Unverified,
}

impl From<bool> for Verification {
    fn from(is_verified: bool) -> Self {
        if is_verified { Self::Verified } else { Self::Unverified }
    }
}

impl Verification {
    pub fn label(self) -> &'static str {
        match self {
            Self::Verified => "Verificado",
            Self::Unverified => "No verificado",
        }
    }

    /// Text color class for the label and its dot.
    pub fn tone_class(self) -> &'static str {
        match self {
            Self::Verified => "text-green-400",
            Self::Unverified => "text-amber-400",
        }
    }

    pub fn dot_class(self) -> &'static str {
        match self {
            Self::Verified => "bg-green-400",
            Self::Unverified => "bg-amber-400",
        }
    }
}

/// Avatar letter: first character of the username, uppercased.
pub fn avatar_initial(username: &str) -> String {
    username
        .chars()
        .next()
        .map_or_else(|| "?".to_owned(), |c| c.to_uppercase().collect())
}
